//! # Spuig Builder
//!
//! Orchestration layer of the component-tree engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: component definitions (read-only)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ builder: session facade + snapshot history  │
//! │  - add/remove/update/move components        │
//! │  - selection tracking                       │
//! │  - undo/redo over tree snapshots            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ derived views, recomputed on every change:  │
//! │  - validator: diagnostics                   │
//! │  - serializer: SPUIG text                   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The view layer calls [`BuilderSession`] operations and renders the
//! session's derived `(tree, diagnostics, spuig)` triple. All operations
//! run to completion synchronously; a session is owned by one interaction
//! loop and needs no locking.
//!
//! ## Usage
//!
//! ```rust
//! use spuig_builder::BuilderSession;
//! use spuig_catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut session = BuilderSession::new(catalog);
//!
//! let card = session.add_component("Card", None);
//! let content = session.add_component("CardContent", Some(&card));
//! session.add_component("Typography", Some(&content));
//!
//! assert!(session.spuig().starts_with("Card"));
//! session.undo();
//! ```

mod history;
mod session;

pub use history::History;
pub use session::BuilderSession;

// Re-export the engine types the view layer needs alongside the facade.
pub use spuig_catalog::{Catalog, CatalogError, PropValue};
pub use spuig_tree::{ComponentNode, ComponentTree, NodeUpdate};
pub use spuig_validator::{ErrorKind, Severity, ValidationError};
