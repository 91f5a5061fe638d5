//! The tree every rewrite pass reads and produces.
//!
//! A `Node` is either a `Leaf` (identifier, numeric literal, or a bare
//! operator token) or a `Compound` (operator name plus ordered children).
//! Nothing else is ever added; every pass matches on exactly these two
//! shapes.

pub mod display;

use crate::metadata::Metadata;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf {
        text: String,
        meta: Metadata,
    },
    Compound {
        op: String,
        args: Vec<Node>,
        meta: Metadata,
    },
}

impl Node {
    pub fn leaf(text: impl Into<String>, meta: Metadata) -> Self {
        Node::Leaf {
            text: text.into(),
            meta,
        }
    }

    pub fn compound(op: impl Into<String>, args: Vec<Node>, meta: Metadata) -> Self {
        Node::Compound {
            op: op.into(),
            args,
            meta,
        }
    }

    /// Leaf text, or the operator name of a compound.
    pub fn text(&self) -> &str {
        match self {
            Node::Leaf { text, .. } => text,
            Node::Compound { op, .. } => op,
        }
    }

    /// Children of a compound; a leaf has none.
    pub fn args(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Compound { args, .. } => args,
        }
    }

    pub fn meta(&self) -> Metadata {
        match self {
            Node::Leaf { meta, .. } | Node::Compound { meta, .. } => *meta,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// True for a compound with the given operator name.
    pub fn is_op(&self, name: &str) -> bool {
        matches!(self, Node::Compound { op, .. } if op == name)
    }

    /// Stamp this node's own location with `fallback` if it is unset.
    /// Children are left alone.
    pub fn with_fallback_meta(mut self, fallback: Metadata) -> Self {
        match &mut self {
            Node::Leaf { meta, .. } | Node::Compound { meta, .. } => *meta = meta.or(fallback),
        }
        self
    }

    /// Structural equality ignoring locations.
    pub fn same_shape(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Leaf { text: a, .. }, Node::Leaf { text: b, .. }) => a == b,
            (
                Node::Compound {
                    op: op_a,
                    args: args_a,
                    ..
                },
                Node::Compound {
                    op: op_b,
                    args: args_b,
                    ..
                },
            ) => {
                op_a == op_b
                    && args_a.len() == args_b.len()
                    && args_a.iter().zip(args_b).all(|(a, b)| a.same_shape(b))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: i32) -> Metadata {
        Metadata::new(0, line, 1)
    }

    #[test]
    fn test_accessors() {
        let n = Node::compound(
            "set",
            vec![Node::leaf("x", at(1)), Node::leaf("1", at(1))],
            at(1),
        );
        assert_eq!(n.text(), "set");
        assert_eq!(n.args().len(), 2);
        assert!(n.is_op("set"));
        assert!(!n.is_leaf());
        assert!(n.args()[0].args().is_empty());
        assert_eq!(n.meta(), at(1));
    }

    #[test]
    fn test_same_shape_ignores_locations() {
        let a = Node::compound("get", vec![Node::leaf("x", at(1))], at(1));
        let b = Node::compound("get", vec![Node::leaf("x", at(7))], Metadata::unset());
        assert!(a.same_shape(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_shape_distinguishes_leaf_from_nullary_compound() {
        let leaf = Node::leaf("seq", at(1));
        let compound = Node::compound("seq", vec![], at(1));
        assert!(!leaf.same_shape(&compound));
    }

    #[test]
    fn test_with_fallback_meta_only_stamps_unset() {
        let unset = Node::leaf("x", Metadata::unset()).with_fallback_meta(at(3));
        assert_eq!(unset.meta(), at(3));
        let real = Node::leaf("x", at(2)).with_fallback_meta(at(3));
        assert_eq!(real.meta(), at(2));
    }
}
