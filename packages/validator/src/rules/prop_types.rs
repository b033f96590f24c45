use crate::diagnostic::{ErrorKind, ValidationError};
use crate::rules::NodeRule;
use spuig_catalog::{ComponentDefinition, PropDefinition, PropType, PropValue};
use spuig_tree::ComponentNode;

/// Checks that prop values conform to their declared catalog type.
///
/// Blank values (null, empty string) are skipped; they are treated as
/// unset, matching the serializer. Props without a catalog definition are
/// ignored here. `function` and `node` props cannot be checked outside a
/// live environment and always pass.
pub struct PropTypesRule;

impl NodeRule for PropTypesRule {
    fn name(&self) -> &'static str {
        "prop-types"
    }

    fn description(&self) -> &'static str {
        "Check prop values against their declared types"
    }

    fn check(
        &self,
        node: &ComponentNode,
        definition: &ComponentDefinition,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (name, value) in &node.props {
            let Some(prop_def) = definition.prop(name) else {
                continue;
            };
            if value.is_blank() {
                continue;
            }
            if !value_conforms(value, prop_def) {
                let expected = match &prop_def.enum_values {
                    Some(values) => {
                        format!("{} ({})", prop_def.prop_type, values.join(", "))
                    }
                    None => prop_def.prop_type.to_string(),
                };
                errors.push(ValidationError::error(
                    format!("{}-invalid-{}", node.id, name),
                    node.id.clone(),
                    ErrorKind::InvalidPropType,
                    format!("Invalid value for prop {}. Expected {}", name, expected),
                ));
            }
        }

        errors
    }
}

fn value_conforms(value: &PropValue, prop_def: &PropDefinition) -> bool {
    match prop_def.prop_type {
        PropType::String => matches!(value, PropValue::String(_)),
        PropType::Number => matches!(value, PropValue::Number(n) if n.is_finite()),
        PropType::Boolean => matches!(value, PropValue::Bool(_)),
        PropType::Enum => prop_def
            .enum_values
            .as_ref()
            .map_or(true, |values| values.contains(&value.coerce_string())),
        PropType::Object => matches!(value, PropValue::Object(_)),
        PropType::Function | PropType::Node => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(props: Vec<PropDefinition>) -> ComponentDefinition {
        ComponentDefinition {
            name: "TextField".to_string(),
            display_name: "Text Field".to_string(),
            description: String::new(),
            category: "inputs".to_string(),
            props,
            accepts_children: false,
            accepts_text: false,
            valid_parents: None,
            valid_children: None,
        }
    }

    fn prop(name: &str, prop_type: PropType) -> PropDefinition {
        PropDefinition {
            name: name.to_string(),
            prop_type,
            required: false,
            default_value: None,
            enum_values: None,
            description: None,
        }
    }

    #[test]
    fn test_string_where_number_expected() {
        let mut node = ComponentNode::new("n-1", "TextField");
        node.set_prop("rows", "abc");

        let errors = PropTypesRule.check(&node, &definition(vec![prop("rows", PropType::Number)]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::InvalidPropType);
        assert_eq!(errors[0].id, "n-1-invalid-rows");
        assert_eq!(
            errors[0].message,
            "Invalid value for prop rows. Expected number"
        );
    }

    #[test]
    fn test_enum_membership_named_in_message() {
        let mut variant = prop("variant", PropType::Enum);
        variant.enum_values = Some(vec![
            "standard".to_string(),
            "outlined".to_string(),
            "filled".to_string(),
        ]);

        let mut node = ComponentNode::new("n-1", "TextField");
        node.set_prop("variant", "fancy");

        let errors = PropTypesRule.check(&node, &definition(vec![variant]));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Invalid value for prop variant. Expected enum (standard, outlined, filled)"
        );
    }

    #[test]
    fn test_blank_values_skipped() {
        let mut node = ComponentNode::new("n-1", "TextField");
        node.set_prop("rows", "");
        node.set_prop("label", PropValue::Null);

        let errors = PropTypesRule.check(
            &node,
            &definition(vec![
                prop("rows", PropType::Number),
                prop("label", PropType::String),
            ]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_undeclared_props_ignored() {
        let mut node = ComponentNode::new("n-1", "TextField");
        node.set_prop("mystery", 4.0);

        assert!(PropTypesRule.check(&node, &definition(vec![])).is_empty());
    }

    #[test]
    fn test_nan_is_not_a_valid_number() {
        let mut node = ComponentNode::new("n-1", "TextField");
        node.set_prop("rows", f64::NAN);

        let errors = PropTypesRule.check(&node, &definition(vec![prop("rows", PropType::Number)]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_function_and_object_props() {
        let mut node = ComponentNode::new("n-1", "TextField");
        node.set_prop("onChange", "handleChange");
        node.set_prop("sx", PropValue::Object(serde_json::json!({ "mt": 1 })));

        let errors = PropTypesRule.check(
            &node,
            &definition(vec![
                prop("onChange", PropType::Function),
                prop("sx", PropType::Object),
            ]),
        );
        assert!(errors.is_empty());
    }
}
