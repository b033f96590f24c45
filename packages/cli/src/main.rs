mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{catalog, check, generate, CatalogArgs, CheckArgs, GenerateArgs};

/// Spuig CLI - component tree validation and SPUIG generation
#[derive(Parser, Debug)]
#[command(name = "spuig")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect the built-in component catalog
    Catalog(CatalogArgs),

    /// Validate a tree document against the catalog
    Check(CheckArgs),

    /// Render a tree document to SPUIG text
    Generate(GenerateArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Catalog(args) => catalog::run(args),
        Command::Check(args) => check::run(args),
        Command::Generate(args) => generate::run(args),
    }
}
