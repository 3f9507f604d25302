//! Sideways text drawing of a tree.

use std::fmt::Display;

use crate::node::Node;

/// Draws the subtree rooted at `root`, one value per line. Right subtrees go above their parent
/// and left subtrees below, so reading the output turned 90 degrees clockwise shows the tree.
pub(crate) fn render_to_string<T: Display>(root: Option<&Node<T>>) -> String {
    let mut output = String::new();
    if let Some(root) = root {
        render_node(root, &mut output, "", true);
    }
    output
}

fn render_node<T: Display>(node: &Node<T>, output: &mut String, prefix: &str, is_left: bool) {
    if let Some(right) = node.right() {
        let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_node(right, output, &child_prefix, false);
    }

    let connector = if is_left { "└── " } else { "┌── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(&node.value().to_string());
    output.push('\n');

    if let Some(left) = node.left() {
        let child_prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_node(left, output, &child_prefix, true);
    }
}
