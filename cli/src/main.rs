//! Vortex CLI - argument parsing, logging setup, and command dispatch.
//!
//! ```text
//! main() -> init_tracing() -> Cli::parse() -> VortexConfig::load() -> install()
//!                                                   |
//!                                                   v
//!                                  commands::run() -> stdout
//! ```
//!
//! Logs go to stderr so stdout carries only command output.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vortex_config::VortexConfig;

use commands::{Command, Format};

#[derive(Debug, Parser)]
#[command(name = "vortex", version)]
#[command(about = "Digit-root arithmetic: reduction, vortex ratios, patterns, and routing")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Constants table to load (overrides VORTEX_CONFIG and ~/.vortex/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Text }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let format = cli.format();

    let loaded = VortexConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let config = match vortex_config::install(loaded) {
        Ok(config) => config,
        Err(_) => {
            tracing::warn!("Configuration already installed; keeping the existing table");
            vortex_config::global()
        }
    };

    let output = commands::run(cli.command, format, config)?;
    println!("{output}");
    Ok(())
}
