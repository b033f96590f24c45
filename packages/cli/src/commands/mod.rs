pub mod catalog;
pub mod check;
pub mod generate;

pub use catalog::CatalogArgs;
pub use check::CheckArgs;
pub use generate::GenerateArgs;

use anyhow::{Context, Result};
use spuig_tree::{ComponentNode, ComponentTree};
use std::fs;
use std::path::Path;

/// Load a tree document: either `{ "nodes": [...] }` or a bare node array.
pub(crate) fn load_tree(path: &Path) -> Result<ComponentTree> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read tree document: {}", path.display()))?;

    serde_json::from_str::<ComponentTree>(&source)
        .or_else(|_| {
            serde_json::from_str::<Vec<ComponentNode>>(&source).map(ComponentTree::from_nodes)
        })
        .with_context(|| format!("invalid tree document: {}", path.display()))
}
