//! # Builder Session
//!
//! The facade the view layer talks to.
//!
//! A session owns the live tree, the current selection, the id generator
//! and the undo/redo history, and keeps the derived outputs (diagnostics
//! and SPUIG text) in sync after every change. One session corresponds to
//! one editing context; there is no ambient global state.

use crate::history::History;
use spuig_catalog::Catalog;
use spuig_tree::{serialize, ComponentNode, ComponentTree, NodeIdGenerator, NodeUpdate};
use spuig_validator::{validate_tree, ValidateOptions, ValidationError};
use tracing::{debug, info};

/// Owns one editing session: catalog handle, live tree, selection, history
/// and the derived (diagnostics, SPUIG text) pair.
pub struct BuilderSession {
    catalog: Catalog,
    tree: ComponentTree,
    ids: NodeIdGenerator,
    selected_id: Option<String>,
    history: History,
    diagnostics: Vec<ValidationError>,
    spuig: String,
}

impl BuilderSession {
    /// New session over a fresh single-root tree.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_seed(catalog, "session")
    }

    /// New session with an explicit id seed, for deterministic node ids.
    pub fn with_seed(catalog: Catalog, seed: &str) -> Self {
        let mut ids = NodeIdGenerator::new(seed);
        let tree = ComponentTree::new(ComponentNode::root(ids.next_id()));
        let mut session = Self {
            catalog,
            tree,
            ids,
            selected_id: None,
            history: History::new(),
            diagnostics: Vec::new(),
            spuig: String::new(),
        };
        session.refresh();
        session
    }

    /// Create a node of the given component type, pre-populated with the
    /// catalog's default prop values, and insert it under `parent_id` (or
    /// the root when omitted). The new node becomes the selection. Returns
    /// the new node's id.
    pub fn add_component(&mut self, component_name: &str, parent_id: Option<&str>) -> String {
        let mut node = ComponentNode::new(self.ids.next_id(), component_name);
        if let Some(definition) = self.catalog.get(component_name) {
            for prop in &definition.props {
                if let Some(default) = &prop.default_value {
                    node.props.insert(prop.name.clone(), default.clone());
                }
            }
        }

        let id = node.id.clone();
        let target = parent_id.map(str::to_owned).or_else(|| self.root_id());
        let next = match &target {
            Some(parent) => self.tree.insert_child(parent, node),
            None => {
                // no root to fall back to; place at the top level
                let mut next = self.tree.clone();
                next.nodes.push(node);
                next
            }
        };

        debug!(component = component_name, id = %id, "add component");
        self.commit(next);
        self.selected_id = Some(id.clone());
        id
    }

    /// Remove a node and its subtree. Refuses roots and missing ids; clears
    /// the selection when it pointed into the removed subtree.
    pub fn remove_component(&mut self, id: &str) {
        match self.tree.find_by_id(id) {
            Some(node) if !node.is_root => {}
            _ => return,
        }

        let next = self.tree.remove_by_id(id);
        if let Some(selected) = &self.selected_id {
            if next.find_by_id(selected).is_none() {
                self.selected_id = None;
            }
        }

        debug!(id = %id, "remove component");
        self.commit(next);
    }

    /// Shallow-merge fields into a node. No-op on missing ids.
    pub fn update_component(&mut self, id: &str, update: NodeUpdate) {
        if !self.tree.contains(id) {
            return;
        }

        let next = self.tree.update_by_id(id, &update);
        debug!(id = %id, "update component");
        self.commit(next);
    }

    /// Swap a node with its previous sibling; guarded by `can_move_up`.
    pub fn move_component_up(&mut self, id: &str) {
        if !self.tree.can_move_up(id) {
            return;
        }
        let next = self.tree.move_up(id);
        debug!(id = %id, "move component up");
        self.commit(next);
    }

    /// Swap a node with its next sibling; guarded by `can_move_down`.
    pub fn move_component_down(&mut self, id: &str) {
        if !self.tree.can_move_down(id) {
            return;
        }
        let next = self.tree.move_down(id);
        debug!(id = %id, "move component down");
        self.commit(next);
    }

    /// Reparent a node (with its subtree) under a new parent, or under the
    /// root when omitted. Defensive no-op when the move is impossible.
    pub fn move_component(&mut self, id: &str, new_parent_id: Option<&str>) {
        let target = new_parent_id.map(str::to_owned).or_else(|| self.root_id());
        let next = self.tree.move_to_parent(id, target.as_deref());
        if next == self.tree {
            return;
        }
        debug!(id = %id, parent = ?target, "move component");
        self.commit(next);
    }

    pub fn can_move_up(&self, id: &str) -> bool {
        self.tree.can_move_up(id)
    }

    pub fn can_move_down(&self, id: &str) -> bool {
        self.tree.can_move_down(id)
    }

    /// Change the selection. Selection is presentation state and is not
    /// recorded in history.
    pub fn set_selected(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_owned);
    }

    /// The selected node, resolved against the live tree.
    pub fn selected(&self) -> Option<&ComponentNode> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.tree.find_by_id(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Restore the previous snapshot. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.tree);
        if undone {
            info!("undo");
            self.refresh();
        }
        undone
    }

    /// Restore the next snapshot. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.tree);
        if redone {
            info!("redo");
            self.refresh();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Reset to a single fresh root and clear the selection. The previous
    /// tree stays reachable through undo.
    pub fn clear_all(&mut self) {
        let next = ComponentTree::new(ComponentNode::root(self.ids.next_id()));
        info!("clear all");
        self.commit(next);
        self.selected_id = None;
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Diagnostics for the current tree, recomputed after every change.
    pub fn diagnostics(&self) -> &[ValidationError] {
        &self.diagnostics
    }

    /// SPUIG text for the current tree, recomputed after every change.
    pub fn spuig(&self) -> &str {
        &self.spuig
    }

    fn root_id(&self) -> Option<String> {
        self.tree.root().map(|root| root.id.clone())
    }

    /// Swap in the post-mutation tree, saving the pre-mutation snapshot.
    fn commit(&mut self, next: ComponentTree) {
        let previous = std::mem::replace(&mut self.tree, next);
        self.history.save(previous);
        self.refresh();
    }

    /// Recompute the derived outputs from the live tree.
    fn refresh(&mut self) {
        self.diagnostics = validate_tree(&self.tree, &self.catalog, ValidateOptions::default());
        self.spuig = serialize(&self.tree);
    }
}
