use crate::diagnostic::{ErrorKind, ValidationError};
use crate::rules::RuleRegistry;
use spuig_catalog::Catalog;
use spuig_tree::{ComponentNode, ComponentTree};

/// Options for configuring validation
#[derive(Debug, Default)]
pub struct ValidateOptions {
    /// Custom rule registry (uses the built-in rules if None)
    pub registry: Option<RuleRegistry>,
}

/// Validate a component tree against the catalog and return diagnostics.
///
/// Two passes over the same traversal order: node-level checks first, then
/// hierarchy checks with parent context. Root nodes are synthetic
/// containers and are exempt from both. Validation never mutates the tree
/// and never short-circuits, except that an unknown component skips the
/// rest of its own node checks.
pub fn validate_tree(
    tree: &ComponentTree,
    catalog: &Catalog,
    options: ValidateOptions,
) -> Vec<ValidationError> {
    let registry = options.registry.unwrap_or_default();
    let mut errors = Vec::new();

    for node in &tree.nodes {
        validate_node(node, catalog, &registry, &mut errors);
    }
    for node in &tree.nodes {
        validate_hierarchy(node, None, catalog, &mut errors);
    }

    errors
}

/// Per-node pass: unknown component, then the registered rules.
fn validate_node(
    node: &ComponentNode,
    catalog: &Catalog,
    registry: &RuleRegistry,
    errors: &mut Vec<ValidationError>,
) {
    if !node.is_root {
        match catalog.get(&node.component_name) {
            None => {
                errors.push(ValidationError::error(
                    format!("{}-unknown-component", node.id),
                    node.id.clone(),
                    ErrorKind::UnknownComponent,
                    format!("Unknown component: {}", node.component_name),
                ));
            }
            Some(definition) => {
                for rule in registry.rules() {
                    errors.extend(rule.check(node, definition));
                }
            }
        }
    }

    for child in &node.children {
        validate_node(child, catalog, registry, errors);
    }
}

/// Hierarchy pass: walk with parent context and check both placement axes.
///
/// A synthetic root does not count as a parent, so a constrained component
/// sitting directly under the root (or at the top level) violates its
/// `validParents` list. An unknown parent is skipped on both axes; it is
/// already reported by the per-node pass.
fn validate_hierarchy(
    node: &ComponentNode,
    parent: Option<&ComponentNode>,
    catalog: &Catalog,
    errors: &mut Vec<ValidationError>,
) {
    if !node.is_root {
        if let Some(definition) = catalog.get(&node.component_name) {
            let effective_parent = parent.filter(|p| !p.is_root);

            if let Some(valid_parents) = &definition.valid_parents {
                match effective_parent {
                    Some(p) if valid_parents.contains(&p.component_name) => {}
                    Some(p) if catalog.get(&p.component_name).is_none() => {}
                    Some(p) => {
                        errors.push(ValidationError::error(
                            format!("{}-invalid-parent", node.id),
                            node.id.clone(),
                            ErrorKind::InvalidHierarchy,
                            format!(
                                "{} cannot be a child of {}. Valid parents: {}",
                                node.component_name,
                                p.component_name,
                                valid_parents.join(", ")
                            ),
                        ));
                    }
                    None => {
                        errors.push(ValidationError::error(
                            format!("{}-invalid-parent", node.id),
                            node.id.clone(),
                            ErrorKind::InvalidHierarchy,
                            format!(
                                "{} cannot be placed at the top level. Valid parents: {}",
                                node.component_name,
                                valid_parents.join(", ")
                            ),
                        ));
                    }
                }
            }

            if let Some(p) = effective_parent {
                if let Some(parent_definition) = catalog.get(&p.component_name) {
                    if let Some(valid_children) = &parent_definition.valid_children {
                        if !valid_children.contains(&node.component_name) {
                            errors.push(ValidationError::error(
                                format!("{}-invalid-child", node.id),
                                node.id.clone(),
                                ErrorKind::InvalidHierarchy,
                                format!(
                                    "{} cannot have {} as child. Valid children: {}",
                                    p.component_name,
                                    node.component_name,
                                    valid_children.join(", ")
                                ),
                            ));
                        }
                    }
                }
            }
        }
    }

    for child in &node.children {
        validate_hierarchy(child, Some(node), catalog, errors);
    }
}
