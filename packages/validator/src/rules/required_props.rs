use crate::diagnostic::{ErrorKind, ValidationError};
use crate::rules::NodeRule;
use spuig_catalog::ComponentDefinition;
use spuig_tree::ComponentNode;

/// Reports catalog props marked required that are absent from the node.
///
/// Presence is what counts: a prop set to null or an empty string is still
/// present and does not trigger this rule (the type rule handles values).
pub struct RequiredPropsRule;

impl NodeRule for RequiredPropsRule {
    fn name(&self) -> &'static str {
        "required-props"
    }

    fn description(&self) -> &'static str {
        "Require props the catalog marks as required"
    }

    fn check(
        &self,
        node: &ComponentNode,
        definition: &ComponentDefinition,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for prop_def in &definition.props {
            if prop_def.required && !node.props.contains_key(&prop_def.name) {
                errors.push(ValidationError::error(
                    format!("{}-missing-{}", node.id, prop_def.name),
                    node.id.clone(),
                    ErrorKind::MissingRequiredProp,
                    format!("Missing required prop: {}", prop_def.name),
                ));
            }
        }

        errors
    }
}
