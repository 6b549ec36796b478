//! easyscan-cli: CLI entry point for easyscan.

mod commands_config;
mod commands_scan;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "easyscan",
    about = "Find Go types marked for easyjson code generation"
)]
#[command(version, propagate_version = true)]
struct Cli {
    /// Config file (defaults to ~/.easyscan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a Go file or package directory
    Scan {
        /// File or directory to scan
        path: PathBuf,

        /// Include every struct type, not only those with a directive
        #[arg(short, long)]
        all: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract directive tags from a comment block
    Tags {
        /// Comment text (use \n-separated lines)
        text: String,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries scan results only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("easyscan=info".parse().expect("valid tracing directive")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = commands_config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan { path, all, json } => {
            commands_scan::cmd_scan(&path, all, json, &config)?;
        }
        Commands::Tags { text } => {
            commands_scan::cmd_tags(&text);
        }
        Commands::Config => {
            commands_config::cmd_config(&config)?;
        }
    }

    Ok(())
}
