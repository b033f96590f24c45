use crate::diagnostic::{ErrorKind, ValidationError};
use crate::rules::NodeRule;
use spuig_catalog::ComponentDefinition;
use spuig_tree::ComponentNode;

/// Warns when a node carries text content its component does not accept.
pub struct TextContentRule;

impl NodeRule for TextContentRule {
    fn name(&self) -> &'static str {
        "text-content"
    }

    fn description(&self) -> &'static str {
        "Warn about text on components that do not accept it"
    }

    fn check(
        &self,
        node: &ComponentNode,
        definition: &ComponentDefinition,
    ) -> Vec<ValidationError> {
        if !node.text_content.is_empty() && !definition.accepts_text {
            vec![ValidationError::warning(
                format!("{}-invalid-text", node.id),
                node.id.clone(),
                ErrorKind::InvalidHierarchy,
                format!(
                    "Component {} does not accept text content",
                    node.component_name
                ),
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

    fn textless_definition() -> ComponentDefinition {
        ComponentDefinition {
            name: "Stack".to_string(),
            display_name: "Stack".to_string(),
            description: String::new(),
            category: "layout".to_string(),
            props: vec![],
            accepts_children: true,
            accepts_text: false,
            valid_parents: None,
            valid_children: None,
        }
    }

    #[test]
    fn test_text_on_textless_component_warns() {
        let mut node = ComponentNode::new("n-1", "Stack");
        node.text_content = "hello".to_string();

        let errors = TextContentRule.check(&node, &textless_definition());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].severity, Severity::Warning);
        assert_eq!(errors[0].kind, ErrorKind::InvalidHierarchy);
        assert_eq!(errors[0].id, "n-1-invalid-text");
        assert_eq!(errors[0].message, "Component Stack does not accept text content");
    }

    #[test]
    fn test_empty_text_passes() {
        let node = ComponentNode::new("n-1", "Stack");
        assert!(TextContentRule.check(&node, &textless_definition()).is_empty());
    }
}
