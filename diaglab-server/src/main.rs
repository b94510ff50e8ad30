//! Diaglab Server Binary
//!
//! Serves the fault-injection scenarios over HTTP so operators can point
//! diagnostic tooling at a process that misbehaves on request.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use diaglab_config::{ConfigLoader, DiaglabConfig};
use diaglab_server::{logging, Server};

#[derive(Parser)]
#[command(author, version, about = "Fault-injection scenario server for diagnostics practice", long_about = None)]
struct Cli {
    /// Configuration file path (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print default configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Print default configuration if requested
    if cli.print_config {
        print!("{}", serde_yaml::to_string(&DiaglabConfig::default())?);
        return Ok(());
    }

    // Load configuration
    let loader = ConfigLoader::new();
    let mut config = match &cli.config {
        Some(path) => loader.from_file(path)?,
        None => loader.from_env()?,
    };

    // Override with CLI arguments
    apply_cli_overrides(&mut config, &cli)?;
    config.validate()?;

    logging::init_tracing(&config.logging)?;

    Server::new(config).start().await
}

/// Override file/env configuration with CLI arguments
fn apply_cli_overrides(config: &mut DiaglabConfig, cli: &Cli) -> Result<()> {
    if let Some(bind) = &cli.bind {
        config.http.bind_address = bind.clone();
    }

    if let Some(level) = &cli.log_level {
        config.logging.level = level.parse()?;
    }

    Ok(())
}
