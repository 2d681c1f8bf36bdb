//! gorm-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use gorm_scaffold::observability;
use gorm_scaffold_cli::{GenerateCommand, TemplatesCommand};

#[derive(Parser)]
#[command(name = "gorm-scaffold")]
#[command(version)]
#[command(about = "Generate Go gorm models and controllers from MySQL tables", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate module, model and controller files for tables
    Generate(GenerateCommand),
    /// Manage template overrides
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    match cli.command {
        Commands::Generate(cmd) => {
            cmd.execute().await?;
        }
        Commands::Templates { command } => {
            command.execute()?;
        }
    }

    Ok(())
}
