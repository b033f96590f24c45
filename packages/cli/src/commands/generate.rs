use crate::commands::load_tree;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use spuig_tree::serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Tree document to render (JSON)
    pub path: PathBuf,

    /// Write the SPUIG text to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let tree = load_tree(&args.path)?;
    let spuig = serialize(&tree);

    match args.out {
        Some(out) => {
            fs::write(&out, &spuig)
                .with_context(|| format!("cannot write output: {}", out.display()))?;
            eprintln!(
                "{} {} → {}",
                "✓".green(),
                args.path.display(),
                out.display()
            );
        }
        None => println!("{}", spuig),
    }

    Ok(())
}
