use crate::diagnostic::{ErrorKind, ValidationError};
use crate::rules::NodeRule;
use spuig_catalog::ComponentDefinition;
use spuig_tree::ComponentNode;

/// Warns when a node has children but its component does not accept any.
pub struct ChildrenRule;

impl NodeRule for ChildrenRule {
    fn name(&self) -> &'static str {
        "children"
    }

    fn description(&self) -> &'static str {
        "Warn about children under components that do not accept them"
    }

    fn check(
        &self,
        node: &ComponentNode,
        definition: &ComponentDefinition,
    ) -> Vec<ValidationError> {
        if !node.children.is_empty() && !definition.accepts_children {
            vec![ValidationError::warning(
                format!("{}-invalid-children", node.id),
                node.id.clone(),
                ErrorKind::InvalidHierarchy,
                format!("Component {} does not accept children", node.component_name),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    fn childless_definition() -> ComponentDefinition {
        ComponentDefinition {
            name: "Chip".to_string(),
            display_name: "Chip".to_string(),
            description: String::new(),
            category: "dataDisplay".to_string(),
            props: vec![],
            accepts_children: false,
            accepts_text: false,
            valid_parents: None,
            valid_children: None,
        }
    }

    #[test]
    fn test_children_on_childless_component_warns() {
        let mut node = ComponentNode::new("n-1", "Chip");
        node.children.push(ComponentNode::new("n-2", "Icon"));

        let errors = ChildrenRule.check(&node, &childless_definition());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, Severity::Warning);
        assert_eq!(errors[0].id, "n-1-invalid-children");
        assert_eq!(errors[0].message, "Component Chip does not accept children");
    }

    #[test]
    fn test_leaf_node_passes() {
        let node = ComponentNode::new("n-1", "Chip");
        assert!(ChildrenRule.check(&node, &childless_definition()).is_empty());
    }
}
