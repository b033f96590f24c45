//! # Spuig Catalog
//!
//! The static registry of component types the builder can place in a tree.
//!
//! A catalog is a read-only collection of [`ComponentDefinition`] records,
//! organized by category. Each definition carries the prop schema, whether
//! the component accepts children or text, and optional parent/child
//! placement constraints. The engine consumes the catalog for validation
//! and for default-value assignment when creating nodes; it never mutates
//! it.
//!
//! The built-in registry ships as per-category JSON data files embedded in
//! the crate (see `data/`), mirroring the Material UI component set.

mod catalog;
mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{format_number, ComponentDefinition, PropDefinition, PropType, PropValue};
