use serde::{Deserialize, Serialize};
use std::fmt;

/// Value attached to a component prop.
///
/// Props are loosely typed at the data level: the catalog declares what a
/// prop *should* hold, but the tree stores whatever the user entered. The
/// validator reports mismatches instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Arbitrary structured value (object or array).
    Object(serde_json::Value),
}

impl PropValue {
    /// True for values the serializer omits and the type checker skips:
    /// null and the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            PropValue::Null => true,
            PropValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// String form of the value, following JavaScript's `String()` coercion
    /// for scalars. Used for enum membership checks and number rendering.
    pub fn coerce_string(&self) -> String {
        match self {
            PropValue::Null => "null".to_string(),
            PropValue::Bool(b) => b.to_string(),
            PropValue::Number(n) => format_number(*n),
            PropValue::String(s) => s.clone(),
            PropValue::Object(v) => v.to_string(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

/// Render a number the way JavaScript template strings do: integral values
/// print without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Declared type of a component prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    String,
    Number,
    Boolean,
    Enum,
    Object,
    Function,
    Node,
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropType::String => "string",
            PropType::Number => "number",
            PropType::Boolean => "boolean",
            PropType::Enum => "enum",
            PropType::Object => "object",
            PropType::Function => "function",
            PropType::Node => "node",
        };
        f.write_str(name)
    }
}

/// Prop schema entry of a catalog component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub prop_type: PropType,

    pub required: bool,

    /// Pre-populated on newly created nodes when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<PropValue>,

    /// Allowed values; must be present when `prop_type` is `enum`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catalog entry describing one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Unique within the catalog.
    pub name: String,

    pub display_name: String,

    pub description: String,

    pub category: String,

    pub props: Vec<PropDefinition>,

    pub accepts_children: bool,

    pub accepts_text: bool,

    /// When present, the component may only appear under these parents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_parents: Option<Vec<String>>,

    /// When present, only these components may appear as direct children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_children: Option<Vec<String>>,
}

impl ComponentDefinition {
    /// Look up the schema entry for a prop by name.
    pub fn prop(&self, name: &str) -> Option<&PropDefinition> {
        self.props.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_value_untagged_roundtrip() {
        let values = vec![
            PropValue::Null,
            PropValue::Bool(true),
            PropValue::Number(2.5),
            PropValue::String("outlined".to_string()),
            PropValue::Object(serde_json::json!({ "sx": { "mt": 2 } })),
        ];

        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: PropValue = serde_json::from_str(&json).unwrap();
            assert_eq!(value, back);
        }
    }

    #[test]
    fn test_blank_values() {
        assert!(PropValue::Null.is_blank());
        assert!(PropValue::String(String::new()).is_blank());
        assert!(!PropValue::String("x".to_string()).is_blank());
        assert!(!PropValue::Bool(false).is_blank());
        assert!(!PropValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_number_coercion_matches_javascript() {
        assert_eq!(PropValue::Number(3.0).coerce_string(), "3");
        assert_eq!(PropValue::Number(3.5).coerce_string(), "3.5");
        assert_eq!(PropValue::Number(-1.0).coerce_string(), "-1");
        assert_eq!(PropValue::Bool(false).coerce_string(), "false");
    }

    #[test]
    fn test_prop_definition_json_shape() {
        let json = r#"{
            "name": "variant",
            "type": "enum",
            "required": false,
            "defaultValue": "text",
            "enumValues": ["text", "outlined", "contained"]
        }"#;

        let def: PropDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.prop_type, PropType::Enum);
        assert_eq!(def.default_value, Some(PropValue::String("text".to_string())));
        assert_eq!(def.enum_values.as_ref().unwrap().len(), 3);
    }
}
