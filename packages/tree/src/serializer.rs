use crate::node::ComponentNode;
use crate::tree::ComponentTree;
use spuig_catalog::PropValue;

/// Serializer renders a component tree to SPUIG text.
///
/// Output is a pure function of the tree: one line per node, props inline
/// in insertion order, children indented two spaces deeper. The synthetic
/// root never appears; its children render at the top level. Identical
/// trees always serialize identically.
pub struct Serializer {
    indent_level: usize,
    indent_string: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            indent_string: "  ".to_string(), // 2 spaces
        }
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_level: 0,
            indent_string: indent.to_string(),
        }
    }

    /// Serialize a tree to SPUIG text.
    pub fn serialize(&mut self, tree: &ComponentTree) -> String {
        let mut output = String::new();
        self.serialize_nodes(&tree.nodes, &mut output);
        output
    }

    fn serialize_nodes(&mut self, nodes: &[ComponentNode], output: &mut String) {
        for node in nodes {
            self.serialize_node(node, output);
        }
    }

    fn serialize_node(&mut self, node: &ComponentNode, output: &mut String) {
        if node.is_root {
            // the root is an invisible container; its children render at
            // the current level
            self.serialize_nodes(&node.children, output);
            return;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        self.write_indent(output);
        output.push_str(&node.component_name);

        for (key, value) in &node.props {
            if value.is_blank() {
                continue;
            }
            match value {
                PropValue::String(s) => {
                    output.push(' ');
                    output.push_str(key);
                    output.push_str("=\"");
                    output.push_str(s);
                    output.push('"');
                }
                PropValue::Number(_) | PropValue::Bool(_) => {
                    output.push(' ');
                    output.push_str(key);
                    output.push_str("={");
                    output.push_str(&value.coerce_string());
                    output.push('}');
                }
                PropValue::Object(v) => {
                    output.push(' ');
                    output.push_str(key);
                    output.push_str("={");
                    output.push_str(&v.to_string());
                    output.push('}');
                }
                PropValue::Null => {}
            }
        }

        if !node.text_content.trim().is_empty() {
            output.push_str(" \"");
            output.push_str(&node.text_content);
            output.push('"');
        }

        self.indent_level += 1;
        self.serialize_nodes(&node.children, output);
        self.indent_level -= 1;
    }

    fn write_indent(&self, output: &mut String) {
        for _ in 0..self.indent_level {
            output.push_str(&self.indent_string);
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to serialize a tree with the default two-space
/// indentation.
pub fn serialize(tree: &ComponentTree) -> String {
    let mut serializer = Serializer::new();
    serializer.serialize(tree)
}
