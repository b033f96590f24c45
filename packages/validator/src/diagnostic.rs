use serde::{Deserialize, Serialize};

/// Severity level of a validation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Category of a validation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    MissingRequiredProp,
    InvalidPropType,
    InvalidHierarchy,
    UnknownComponent,
}

/// A diagnostic produced by the validation engine.
///
/// Diagnostics never block edits: the tree and its serialization stay
/// usable while invalid, and this record explains *why* the current
/// configuration is invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Stable id, derived from the node id and the failed check.
    pub id: String,

    /// The node this diagnostic refers to.
    pub component_id: String,

    pub kind: ErrorKind,

    /// Human-readable message.
    pub message: String,

    pub severity: Severity,
}

impl ValidationError {
    pub fn error(
        id: impl Into<String>,
        component_id: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
            kind,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(
        id: impl Into<String>,
        component_id: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
            kind,
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}
