use crate::node::{ComponentNode, NodeUpdate};
use serde::{Deserialize, Serialize};

/// Ordered forest of component nodes.
///
/// A normal tree holds a single synthetic root whose children are the
/// user-visible components; `from_nodes` supports the root-less variant
/// where several top-level nodes sit side by side.
///
/// All structural operations are pure: they leave `self` untouched and
/// return a new tree. Mutation-in-place would break the snapshot contract
/// the history manager relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTree {
    pub nodes: Vec<ComponentNode>,
}

impl ComponentTree {
    /// Tree anchored by a single root node.
    pub fn new(root: ComponentNode) -> Self {
        Self { nodes: vec![root] }
    }

    /// Tree over an arbitrary top-level node list.
    pub fn from_nodes(nodes: Vec<ComponentNode>) -> Self {
        Self { nodes }
    }

    /// The designated root node, when one exists.
    pub fn root(&self) -> Option<&ComponentNode> {
        self.nodes.iter().find(|node| node.is_root)
    }

    /// Depth-first search, root to leaf; ids are unique so the first match
    /// is the only match.
    pub fn find_by_id(&self, id: &str) -> Option<&ComponentNode> {
        find_node(&self.nodes, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Total node count across the forest.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(ComponentNode::subtree_size).sum()
    }

    /// Append `child` to the end of the parent's children, stamping the
    /// child's back-reference. Unchanged when the parent is missing.
    pub fn insert_child(&self, parent_id: &str, mut child: ComponentNode) -> ComponentTree {
        let mut next = self.clone();
        if let Some(parent) = find_node_mut(&mut next.nodes, parent_id) {
            child.parent_id = Some(parent.id.clone());
            parent.children.push(child);
        }
        next
    }

    /// Remove the node and its whole subtree wherever it occurs. Root nodes
    /// are never removable; asking to remove one (or a missing id) returns
    /// the tree unchanged.
    pub fn remove_by_id(&self, id: &str) -> ComponentTree {
        match self.find_by_id(id) {
            Some(node) if !node.is_root => {}
            _ => return self.clone(),
        }

        let mut next = self.clone();
        remove_node(&mut next.nodes, id);
        next
    }

    /// Shallow-merge `update` into the matching node; unchanged when the id
    /// is missing.
    pub fn update_by_id(&self, id: &str, update: &NodeUpdate) -> ComponentTree {
        let mut next = self.clone();
        if let Some(node) = find_node_mut(&mut next.nodes, id) {
            if let Some(component_name) = &update.component_name {
                node.component_name = component_name.clone();
            }
            if let Some(props) = &update.props {
                node.props = props.clone();
            }
            if let Some(text_content) = &update.text_content {
                node.text_content = text_content.clone();
            }
        }
        next
    }

    /// Swap the node with its previous sibling. No-op at the first position
    /// or for a root.
    pub fn move_up(&self, id: &str) -> ComponentTree {
        let mut next = self.clone();
        swap_with_sibling(&mut next.nodes, id, SwapDirection::Up);
        next
    }

    /// Swap the node with its next sibling. No-op at the last position or
    /// for a root.
    pub fn move_down(&self, id: &str) -> ComponentTree {
        let mut next = self.clone();
        swap_with_sibling(&mut next.nodes, id, SwapDirection::Down);
        next
    }

    pub fn can_move_up(&self, id: &str) -> bool {
        sibling_position(&self.nodes, id)
            .map(|(position, is_root, _)| position > 0 && !is_root)
            .unwrap_or(false)
    }

    pub fn can_move_down(&self, id: &str) -> bool {
        sibling_position(&self.nodes, id)
            .map(|(position, is_root, sibling_count)| {
                position + 1 < sibling_count && !is_root
            })
            .unwrap_or(false)
    }

    /// Detach the node (with its subtree) and append it under a new parent,
    /// or at the top level when `new_parent_id` is `None`.
    ///
    /// No-op when the node is missing or a root, when the target is the
    /// node itself or inside its own subtree (the move would orphan it), or
    /// when the target parent does not exist.
    pub fn move_to_parent(&self, id: &str, new_parent_id: Option<&str>) -> ComponentTree {
        let Some(node) = self.find_by_id(id) else {
            return self.clone();
        };
        if node.is_root {
            return self.clone();
        }
        if let Some(target) = new_parent_id {
            if node.subtree_contains(target) || !self.contains(target) {
                return self.clone();
            }
        }

        let mut detached = node.clone();
        let mut next = self.clone();
        remove_node(&mut next.nodes, id);

        match new_parent_id {
            Some(parent_id) => next.insert_child(parent_id, detached),
            None => {
                detached.parent_id = None;
                next.nodes.push(detached);
                next
            }
        }
    }
}

fn find_node<'a>(nodes: &'a [ComponentNode], id: &str) -> Option<&'a ComponentNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_node_mut<'a>(nodes: &'a mut [ComponentNode], id: &str) -> Option<&'a mut ComponentNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_node(nodes: &mut Vec<ComponentNode>, id: &str) {
    nodes.retain(|node| node.id != id);
    for node in nodes {
        remove_node(&mut node.children, id);
    }
}

#[derive(Clone, Copy)]
enum SwapDirection {
    Up,
    Down,
}

/// Locate `id` in any sibling list and swap it one position in the given
/// direction. Returns true once the node's sibling list has been found,
/// whether or not a swap happened.
fn swap_with_sibling(nodes: &mut Vec<ComponentNode>, id: &str, direction: SwapDirection) -> bool {
    if let Some(position) = nodes.iter().position(|node| node.id == id) {
        if !nodes[position].is_root {
            match direction {
                SwapDirection::Up if position > 0 => nodes.swap(position, position - 1),
                SwapDirection::Down if position + 1 < nodes.len() => {
                    nodes.swap(position, position + 1)
                }
                _ => {}
            }
        }
        return true;
    }

    nodes
        .iter_mut()
        .any(|node| swap_with_sibling(&mut node.children, id, direction))
}

/// Position of `id` within its sibling list: (index, is_root, sibling count).
fn sibling_position(nodes: &[ComponentNode], id: &str) -> Option<(usize, bool, usize)> {
    if let Some(position) = nodes.iter().position(|node| node.id == id) {
        return Some((position, nodes[position].is_root, nodes.len()));
    }
    nodes
        .iter()
        .find_map(|node| sibling_position(&node.children, id))
}
