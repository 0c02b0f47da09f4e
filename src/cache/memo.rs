// Per-instance memoization slot.
// Holds the result of a zero-argument computation once it has been produced.

use std::future::Future;

/// A lazily filled cache slot owned by a single instance.
///
/// The wrapped computation runs at most once successfully; every later
/// access returns the stored value. Filling the slot needs `&mut self`,
/// so one instance cannot be raced on its first access. Failed
/// computations leave the slot empty.
#[derive(Debug, Clone)]
pub struct Memoized<T> {
    slot: Option<T>,
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memoized<T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Whether the value has been computed.
    pub fn is_cached(&self) -> bool {
        self.slot.is_some()
    }

    /// The cached value, if any, without computing it.
    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Return the cached value, running `compute` on first access.
    pub fn get_or_init<F>(&mut self, compute: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.slot.get_or_insert_with(compute)
    }

    /// Fallible form of [`get_or_init`](Self::get_or_init).
    pub fn get_or_try_init<F, E>(&mut self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self.slot {
            Some(ref value) => Ok(value),
            None => {
                let value: &T = self.slot.insert(compute()?);
                Ok(value)
            }
        }
    }

    /// Async form of [`get_or_try_init`](Self::get_or_try_init).
    pub async fn get_or_try_init_async<F, Fut, E>(&mut self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.slot {
            Some(ref value) => {
                tracing::trace!("memoized value served from cache");
                Ok(value)
            }
            None => {
                let value: &T = self.slot.insert(compute().await?);
                Ok(value)
            }
        }
    }
}
