use crate::commands::load_tree;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use spuig_catalog::Catalog;
use spuig_validator::{validate_tree, Severity, ValidateOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Tree document to validate (JSON)
    pub path: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let tree = load_tree(&args.path)?;
    let catalog = Catalog::builtin()?;

    let diagnostics = validate_tree(&tree, &catalog, ValidateOptions::default());

    if diagnostics.is_empty() {
        println!(
            "{} {} is valid ({} nodes)",
            "✓".green(),
            args.path.display(),
            tree.node_count()
        );
        return Ok(());
    }

    let mut error_count = 0;
    let mut warning_count = 0;

    for diagnostic in &diagnostics {
        match diagnostic.severity {
            Severity::Error => {
                error_count += 1;
                println!(
                    "  {} [{}] {}",
                    "✗".red(),
                    diagnostic.component_id.dimmed(),
                    diagnostic.message.red()
                );
            }
            Severity::Warning => {
                warning_count += 1;
                println!(
                    "  {} [{}] {}",
                    "⚠".yellow(),
                    diagnostic.component_id.dimmed(),
                    diagnostic.message.yellow()
                );
            }
        }
    }

    println!();
    if error_count > 0 {
        bail!("{} errors, {} warnings", error_count, warning_count);
    }

    println!(
        "{} {} warnings (no errors)",
        "⚠".yellow(),
        warning_count
    );
    Ok(())
}
