use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use spuig_catalog::{Catalog, ComponentDefinition};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List components, optionally filtered by category
    List {
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List all categories
    Categories,

    /// Search components by name or description
    Search { query: String },

    /// Show one component's full schema
    Show { name: String },
}

pub fn run(args: CatalogArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;

    match args.command {
        CatalogCommand::List { category } => {
            let components: Vec<&ComponentDefinition> = match &category {
                Some(category) => catalog.by_category(category).collect(),
                None => catalog.components().iter().collect(),
            };

            if components.is_empty() {
                println!("{}", "No components found".yellow());
                return Ok(());
            }

            for component in components {
                println!(
                    "{:<28} {} {}",
                    component.name.bold(),
                    format!("[{}]", component.category).dimmed(),
                    component.description
                );
            }
        }

        CatalogCommand::Categories => {
            for category in catalog.categories() {
                let count = catalog.by_category(category).count();
                println!("{:<16} {}", category.bold(), format!("{} components", count).dimmed());
            }
        }

        CatalogCommand::Search { query } => {
            let hits = catalog.search(&query);
            if hits.is_empty() {
                println!("{}", format!("No components match '{}'", query).yellow());
                return Ok(());
            }
            for component in hits {
                println!(
                    "{:<28} {} {}",
                    component.name.bold(),
                    format!("[{}]", component.category).dimmed(),
                    component.description
                );
            }
        }

        CatalogCommand::Show { name } => match catalog.get(&name) {
            Some(component) => print_component(component),
            None => println!("{}", format!("Unknown component: {}", name).red()),
        },
    }

    Ok(())
}

fn print_component(component: &ComponentDefinition) {
    println!("{} ({})", component.name.bold(), component.display_name);
    println!("  {}", component.description);
    println!("  category: {}", component.category);
    println!(
        "  accepts: {}{}",
        if component.accepts_children { "children " } else { "" },
        if component.accepts_text { "text" } else { "" }
    );

    if let Some(parents) = &component.valid_parents {
        println!("  valid parents: {}", parents.join(", "));
    }
    if let Some(children) = &component.valid_children {
        println!("  valid children: {}", children.join(", "));
    }

    if !component.props.is_empty() {
        println!("  props:");
        for prop in &component.props {
            let mut line = format!("    {} ({})", prop.name.bold(), prop.prop_type);
            if prop.required {
                line.push_str(&format!(" {}", "required".red()));
            }
            if let Some(values) = &prop.enum_values {
                line.push_str(&format!(" [{}]", values.join(", ")));
            }
            if let Some(default) = &prop.default_value {
                line.push_str(&format!(" = {}", default.coerce_string()));
            }
            println!("{}", line);
        }
    }
}
