use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use spuig_catalog::PropValue;

/// Display name of the synthetic root container.
pub const ROOT_COMPONENT_NAME: &str = "Root";

/// One node of the component tree.
///
/// Prop order is significant: the serializer emits props in map insertion
/// order, so `props` is an `IndexMap` rather than a `HashMap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    /// Unique within one tree; never changes after creation.
    pub id: String,

    /// Catalog component name. May be absent from the catalog, in which
    /// case validation reports it as unknown.
    pub component_name: String,

    #[serde(default)]
    pub props: IndexMap<String, PropValue>,

    /// Inline text content; empty means no text.
    #[serde(default)]
    pub text_content: String,

    #[serde(default)]
    pub children: Vec<ComponentNode>,

    /// Back-reference set by `insert_child`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Synthetic container flag. The root is never serialized, never
    /// validated and never removable.
    #[serde(default)]
    pub is_root: bool,
}

impl ComponentNode {
    /// A fresh node with empty props, text and children.
    pub fn new(id: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_name: component_name.into(),
            props: IndexMap::new(),
            text_content: String::new(),
            children: Vec::new(),
            parent_id: None,
            is_root: false,
        }
    }

    /// The synthetic root container anchoring a tree.
    pub fn root(id: impl Into<String>) -> Self {
        let mut node = Self::new(id, ROOT_COMPONENT_NAME);
        node.is_root = true;
        node
    }

    /// Set a prop, preserving insertion order for new keys.
    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.props.insert(name.into(), value.into());
    }

    /// Number of nodes in this subtree, including this node.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(ComponentNode::subtree_size).sum::<usize>()
    }

    /// True when `id` names this node or any descendant.
    pub fn subtree_contains(&self, id: &str) -> bool {
        self.id == id || self.children.iter().any(|child| child.subtree_contains(id))
    }
}

/// Partial update applied by `ComponentTree::update_by_id`.
///
/// Fields left as `None` are untouched; set fields replace the node's value
/// wholesale (a shallow merge).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<IndexMap<String, PropValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
}

impl NodeUpdate {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text_content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn props(props: IndexMap<String, PropValue>) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = ComponentNode::new("a-1", "Button");
        assert_eq!(node.component_name, "Button");
        assert!(node.props.is_empty());
        assert!(node.children.is_empty());
        assert!(node.text_content.is_empty());
        assert!(!node.is_root);
    }

    #[test]
    fn test_root_node() {
        let root = ComponentNode::root("a-0");
        assert!(root.is_root);
        assert_eq!(root.component_name, ROOT_COMPONENT_NAME);
    }

    #[test]
    fn test_prop_insertion_order_preserved() {
        let mut node = ComponentNode::new("a-1", "Button");
        node.set_prop("variant", "contained");
        node.set_prop("color", "primary");
        node.set_prop("disabled", false);

        let keys: Vec<&str> = node.props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["variant", "color", "disabled"]);
    }

    #[test]
    fn test_subtree_contains() {
        let mut parent = ComponentNode::new("a-1", "Card");
        let mut child = ComponentNode::new("a-2", "CardContent");
        child.children.push(ComponentNode::new("a-3", "Typography"));
        parent.children.push(child);

        assert!(parent.subtree_contains("a-1"));
        assert!(parent.subtree_contains("a-3"));
        assert!(!parent.subtree_contains("a-4"));
        assert_eq!(parent.subtree_size(), 3);
    }

    #[test]
    fn test_node_json_shape() {
        let mut node = ComponentNode::new("a-1", "Button");
        node.set_prop("variant", "text");
        node.text_content = "Go".to_string();

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["componentName"], "Button");
        assert_eq!(json["textContent"], "Go");
        assert_eq!(json["props"]["variant"], "text");

        let back: ComponentNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
