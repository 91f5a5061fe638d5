//! Scope nesting for flat statement sequences.
//!
//! A two-argument `(with name value)` inside a `seq` binds `name` for the
//! rest of the sequence. Nesting rewrites
//!
//! ```text
//! (seq a (with x 1) b c (with y 2) d)
//! ```
//!
//! into
//!
//! ```text
//! (seq a (with x 1 (seq b c (with y 2 (seq d)))))
//! ```

use tracing::debug;

use crate::ast::Node;

pub const SCOPE_OP: &str = "with";
pub const SEQ_OP: &str = "seq";

/// Is `node` a binding statement `(with name value)` with no body yet?
pub fn is_scoped_binding(node: &Node) -> bool {
    matches!(node, Node::Compound { op, args, .. } if op == SCOPE_OP && args.len() == 2)
}

/// Nest every binding statement of `sequence` around the statements that
/// follow it.
///
/// Each binding form scopes exactly the statements after it, in their
/// original order, followed by the scope built from the next binding form.
/// Statements before the first binding stay at the top level. The result is
/// always a `seq`; a leaf is returned unchanged.
pub fn nest_scopes(sequence: &Node) -> Node {
    let Node::Compound { args, meta, .. } = sequence else {
        return sequence.clone();
    };

    // Walk backwards so each binding can close over the scope built after it.
    let mut nested: Option<Node> = None;
    let mut pending: Vec<Node> = Vec::new();
    for stmt in args.iter().rev() {
        match stmt {
            Node::Compound {
                args: binding,
                meta: binding_meta,
                ..
            } if is_scoped_binding(stmt) => {
                let body = Node::compound(SEQ_OP, in_order(&mut pending, nested.take()), *meta);
                nested = Some(Node::compound(
                    SCOPE_OP,
                    vec![binding[0].clone(), binding[1].clone(), body],
                    *binding_meta,
                ));
            }
            _ => pending.push(stmt.clone()),
        }
    }

    let result = Node::compound(SEQ_OP, in_order(&mut pending, nested), *meta);
    debug!(input = %sequence, output = %result, "nested scopes");
    result
}

/// Restore source order of the statements collected backwards, then append
/// the already-built inner scope.
fn in_order(pending: &mut Vec<Node>, nested: Option<Node>) -> Vec<Node> {
    let mut stmts: Vec<Node> = pending.drain(..).rev().collect();
    stmts.extend(nested);
    stmts
}
