// orgscope command-line entry point.
// Prints the public repositories of a GitHub organization, one per line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use orgscope::{ClientConfig, OrgClient, logging};

#[derive(Parser, Debug)]
#[command(name = "orgscope", version, about)]
struct Cli {
    /// Organization login, e.g. "google".
    org: String,

    /// Only list repositories with this license key (e.g. "apache-2.0").
    #[arg(short, long)]
    license: Option<String>,

    /// Print the organization's repository listing URL instead of names.
    #[arg(long)]
    url: bool,

    /// Config file to use instead of the default location.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(if cli.verbose { "debug" } else { "warn" });

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> orgscope::Result<()> {
    let config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::load_default()?,
    };
    let mut client = OrgClient::new(cli.org, &config)?;

    if cli.url {
        println!("{}", client.public_repos_url().await?);
        return Ok(());
    }

    for name in client.public_repos(cli.license.as_deref()).await? {
        println!("{}", name);
    }
    Ok(())
}
