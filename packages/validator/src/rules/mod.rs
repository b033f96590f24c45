mod children;
mod prop_types;
mod required_props;
mod text_content;

pub use children::ChildrenRule;
pub use prop_types::PropTypesRule;
pub use required_props::RequiredPropsRule;
pub use text_content::TextContentRule;

use crate::diagnostic::ValidationError;
use spuig_catalog::ComponentDefinition;
use spuig_tree::ComponentNode;

/// Trait for implementing per-node validation rules.
///
/// Rules only run for nodes whose component name resolves in the catalog;
/// unknown components are reported before any rule fires.
pub trait NodeRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one node against its catalog definition.
    fn check(&self, node: &ComponentNode, definition: &ComponentDefinition)
        -> Vec<ValidationError>;
}

/// Registry of all available node rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn NodeRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(RequiredPropsRule),
                Box::new(PropTypesRule),
                Box::new(TextContentRule),
                Box::new(ChildrenRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn NodeRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn NodeRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
