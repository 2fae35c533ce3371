//! Cloudinv - a cloud resource inventory reporter
//!
//! This is the main entry point for the cloudinv CLI.

use clap::Parser;
use cloudinv::cli::Cli;
use cloudinv::orchestrator;
use cloudinv::report::Reporter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose);

    let mut reporter = Reporter::stdout();
    let status = orchestrator::run(
        cli.credentials(),
        cli.region.clone(),
        &cli.families,
        &mut reporter,
    )
    .await;

    std::process::exit(status.code());
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(verbosity >= 3))
        .with(env_filter)
        .init();
}
