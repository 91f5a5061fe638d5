//! Storage access chains.
//!
//! `self.a[6][7].chicken[9]` reaches the parser as nested attribute (`.`)
//! and index (`access`) links whose innermost first child is `self`:
//!
//! ```text
//! (access (. (access (access (. self a) 6) 7) chicken) 9)
//! ```
//!
//! Flattening turns the chain into its address components, outermost
//! first: `[--self, --a, 6, 7, --chicken, 9]`.

use tracing::debug;

use crate::ast::display::format_node_list;
use crate::ast::Node;
use crate::bignum::TT256M1;
use crate::config::StorageConfig;
use crate::diagnostic::Diagnostic;

/// Attribute access: `(. object name)`.
pub const ATTR_OP: &str = ".";
/// Indexing: `(access object index)`.
pub const INDEX_OP: &str = "access";

fn is_link_op(op: &str) -> bool {
    op == ATTR_OP || op == INDEX_OP
}

/// Is `node` a chain of attribute/index links rooted at `self`?
pub fn is_storage_access_root(node: &Node) -> bool {
    is_storage_access_root_with(node, &StorageConfig::default())
}

pub fn is_storage_access_root_with(node: &Node, config: &StorageConfig) -> bool {
    let mut link = node;
    loop {
        let Node::Compound { op, args, .. } = link else {
            return false;
        };
        let Some(object) = args.first() else {
            return false;
        };
        if !is_link_op(op) {
            return false;
        }
        if let Node::Leaf { text, .. } = object {
            return *text == config.self_ident;
        }
        link = object;
    }
}

/// Decompose a storage access chain into address components.
pub fn flatten_storage_access(node: &Node) -> Result<Vec<Node>, Diagnostic> {
    flatten_storage_access_with(node, &StorageConfig::default())
}

/// Decompose a storage access chain into address components, outermost
/// (the tagged root) first.
///
/// Each link contributes its second child; a link without one (`self.x[]`)
/// contributes [`TT256M1`], meaning "no explicit index". Attribute names
/// and the root are tagged with `config.attr_prefix` so later stages can
/// tell namespaced keys from numeric indices. Callers gate this on
/// [`is_storage_access_root_with`]; a link with no children is an error.
pub fn flatten_storage_access_with(
    node: &Node,
    config: &StorageConfig,
) -> Result<Vec<Node>, Diagnostic> {
    let root_meta = node.meta();
    let tag = |text: &str| format!("{}{}", config.attr_prefix, text);

    let mut components = Vec::new();
    let mut link = node;
    loop {
        match link {
            Node::Leaf { text, meta } => {
                components.push(Node::leaf(tag(text), meta.or(root_meta)));
                components.reverse();
                debug!(
                    chain = %node,
                    path = %format_node_list(&components),
                    "flattened storage access"
                );
                return Ok(components);
            }
            Node::Compound { op, args, meta } => {
                let Some((object, rest)) = args.split_first() else {
                    return Err(Diagnostic::error(
                        "Error parsing storage variable statement".to_string(),
                        meta.or(root_meta),
                    )
                    .with_note(format!("'{}' link has no operands", op)));
                };
                let component = match rest.first() {
                    None => Node::leaf(TT256M1, root_meta),
                    Some(Node::Leaf { text, meta }) if op == ATTR_OP => {
                        Node::leaf(tag(text), meta.or(root_meta))
                    }
                    Some(index) => index.clone().with_fallback_meta(root_meta),
                };
                components.push(component);
                link = object;
            }
        }
    }
}
