//! S-expression printing for trees.
//!
//! The printed form is the same one the reader in `syntax` accepts, so
//! printing then reading gives back a tree with the same shape.

use std::fmt;

use super::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { text, .. } => f.write_str(text),
            Node::Compound { op, args, .. } => {
                write!(f, "({}", op)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Print a list of nodes as a bracketed, comma separated list.
/// Used for address-component paths.
pub fn format_node_list(nodes: &[Node]) -> String {
    let parts: Vec<String> = nodes.iter().map(Node::to_string).collect();
    format!("[{}]", parts.join(", "))
}
