//! zs-runtime
//!
//! Entry point for the class runtime. Parses CLI arguments, installs the
//! log subscriber, and delegates to the command implementations.

use clap::Parser;
use runtime_cli::Cli;
use tracing_subscriber::filter::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = runtime_cli::run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
