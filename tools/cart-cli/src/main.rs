//! Cart CLI - replay and check shopping cart sessions.
//!
//! Commands:
//! - `cart run` - Replay a session script against a fresh cart
//! - `cart check` - Validate a single field value

mod commands;
mod config;
mod output;
mod script;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use commands::{CheckArgs, RunArgs};

/// Cart CLI - Replay and validate shopping cart sessions
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a session script and print the resulting cart
    Run(RunArgs),

    /// Check a single raw field value
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose, cli.json);

    let result = match cli.command {
        Commands::Run(args) => {
            config::CliConfig::resolve(cli.config.as_deref().map(Path::new), &output)
                .and_then(|config| commands::run::run(args, &config, &output))
        }
        Commands::Check(args) => commands::check::run(args, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
