//! # Spuig Validator
//!
//! Pure validation of a component tree against the catalog.
//!
//! Given a tree and a catalog, [`validate_tree`] produces an ordered list
//! of [`ValidationError`] diagnostics: per-node checks first (unknown
//! component, required props, prop types, text/children acceptance) in
//! traversal order, then whole-tree hierarchy checks (allowed parents and
//! children). Nothing here ever mutates the tree or throws; an invalid
//! tree stays fully usable and serializable.

mod diagnostic;
mod rules;
mod validator;

pub use diagnostic::{ErrorKind, Severity, ValidationError};
pub use rules::{ChildrenRule, NodeRule, PropTypesRule, RequiredPropsRule, RuleRegistry, TextContentRule};
pub use validator::{validate_tree, ValidateOptions};
