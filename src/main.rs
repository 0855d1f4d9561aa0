//! swauth_adduser CLI application
//!
//! Provisions a user against a swauth-compatible admin API: optionally
//! creates the storage account, then creates or updates the user with its
//! key and role headers.

use std::process;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use swauth_adduser::cli::{Cli, handle_provision};
use swauth_adduser::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(&cli);

    info!("swauth_adduser v{} starting", env!("CARGO_PKG_VERSION"));

    handle_provision(cli.provision).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("swauth_adduser={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();
}
