// In-memory caching primitives.
// Values are scoped to the owning instance and live as long as it does.

pub mod memo;

pub use memo::Memoized;
