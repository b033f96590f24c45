//! # Snapshot History
//!
//! Linear undo/redo over whole-tree snapshots.
//!
//! ## Design
//!
//! - The facade saves the *pre-mutation* snapshot before every change, so
//!   the snapshot at index 0 is always "before the first recorded change"
//! - `undo` parks the live tree on the redo side, then restores the
//!   snapshot one step back
//! - `redo` walks forward again
//! - `save` truncates any snapshots past the index, discarding a "future"
//!   that undo had exposed (linear history with branch discard)

use spuig_tree::ComponentTree;

/// Undo/redo stack of immutable tree snapshots.
///
/// `snapshots[..index]` are past states reachable by undo;
/// `snapshots[index..]` are future states reachable by redo.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<ComponentTree>,
    index: usize,
    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Create a new history with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create a history with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            index: 0,
            max_levels,
        }
    }

    /// Record a snapshot, discarding any redoable future first.
    pub fn save(&mut self, snapshot: ComponentTree) {
        self.snapshots.truncate(self.index);
        self.snapshots.push(snapshot);
        self.index = self.snapshots.len();

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.index > self.max_levels {
            self.snapshots.remove(0);
            self.index -= 1;
        }
    }

    /// Step back one snapshot, restoring it into `tree`. The live tree is
    /// kept on the redo side. No-op at the earliest entry.
    pub fn undo(&mut self, tree: &mut ComponentTree) -> bool {
        if self.index == 0 {
            return false;
        }

        if self.index == self.snapshots.len() {
            self.snapshots.push(tree.clone());
        } else {
            self.snapshots[self.index] = tree.clone();
        }

        self.index -= 1;
        *tree = self.snapshots[self.index].clone();
        true
    }

    /// Step forward one snapshot, restoring it into `tree`. No-op at the
    /// latest entry.
    pub fn redo(&mut self, tree: &mut ComponentTree) -> bool {
        if self.index + 1 >= self.snapshots.len() {
            return false;
        }

        self.snapshots[self.index] = tree.clone();
        self.index += 1;
        *tree = self.snapshots[self.index].clone();
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Number of undo steps available
    pub fn undo_levels(&self) -> usize {
        self.index
    }

    /// Number of redo steps available
    pub fn redo_levels(&self) -> usize {
        self.snapshots.len().saturating_sub(self.index + 1)
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.index = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spuig_tree::{ComponentNode, ComponentTree};

    fn tree_with(names: &[&str]) -> ComponentTree {
        let mut root = ComponentNode::root("r");
        for (i, name) in names.iter().enumerate() {
            root.children.push(ComponentNode::new(format!("n{}", i), *name));
        }
        ComponentTree::new(root)
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        let mut tree = tree_with(&[]);

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo(&mut tree));
        assert!(!history.redo(&mut tree));
        assert_eq!(history.undo_levels(), 0);
    }

    #[test]
    fn test_single_undo_restores_pre_mutation_tree() {
        let before = tree_with(&[]);
        let after = tree_with(&["Button"]);

        let mut history = History::new();
        history.save(before.clone());
        let mut tree = after.clone();

        assert!(history.undo(&mut tree));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_redo_restores_tree_before_undo() {
        let before = tree_with(&[]);
        let after = tree_with(&["Button"]);

        let mut history = History::new();
        history.save(before.clone());
        let mut tree = after.clone();

        history.undo(&mut tree);
        assert!(history.can_redo());
        assert!(history.redo(&mut tree));
        assert_eq!(tree, after);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_sequence_of_undos_walks_back_one_step_at_a_time() {
        let s0 = tree_with(&[]);
        let s1 = tree_with(&["Button"]);
        let s2 = tree_with(&["Button", "Chip"]);

        let mut history = History::new();
        history.save(s0.clone());
        history.save(s1.clone());
        let mut tree = s2.clone();

        assert!(history.undo(&mut tree));
        assert_eq!(tree, s1);
        assert!(history.undo(&mut tree));
        assert_eq!(tree, s0);
        assert!(!history.undo(&mut tree));

        assert!(history.redo(&mut tree));
        assert_eq!(tree, s1);
        assert!(history.redo(&mut tree));
        assert_eq!(tree, s2);
    }

    #[test]
    fn test_save_discards_redo_future() {
        let s0 = tree_with(&[]);
        let s1 = tree_with(&["Button"]);
        let s1b = tree_with(&["Chip"]);

        let mut history = History::new();
        history.save(s0.clone());
        let mut tree = s1.clone();
        history.undo(&mut tree);
        assert!(history.can_redo());

        // diverge: new mutation from the restored state
        history.save(tree.clone());
        tree = s1b.clone();
        assert!(!history.can_redo());

        // undo now returns to s0, and redo reaches the new branch only
        history.undo(&mut tree);
        assert_eq!(tree, s0);
        history.redo(&mut tree);
        assert_eq!(tree, s1b);
    }

    #[test]
    fn test_max_levels_drops_oldest() {
        let mut history = History::with_max_levels(2);
        history.save(tree_with(&["A"]));
        history.save(tree_with(&["B"]));
        history.save(tree_with(&["C"]));

        assert_eq!(history.undo_levels(), 2);

        let mut tree = tree_with(&["D"]);
        assert!(history.undo(&mut tree));
        assert_eq!(tree, tree_with(&["C"]));
        assert!(history.undo(&mut tree));
        assert_eq!(tree, tree_with(&["B"]));
        assert!(!history.undo(&mut tree));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.save(tree_with(&["A"]));
        history.clear();

        assert!(!history.can_undo());
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
    }
}
