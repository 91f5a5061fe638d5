//! Pattern matching and template substitution.
//!
//! Patterns are ordinary trees in which a leaf starting with `$` or `@` is a
//! pattern variable. `match_pattern` unifies a pattern with a candidate and
//! collects variable bindings; `substitute` fills a template from those
//! bindings. Together they make one rewrite step.

use std::collections::BTreeMap;

use tracing::trace;

use crate::ast::Node;
use crate::metadata::Metadata;

/// Pattern variable name (without its sigil) -> bound subtree.
pub type Bindings = BTreeMap<String, Node>;

/// `Some(bindings)` when the pattern matched.
pub type MatchResult = Option<Bindings>;

/// Sigils that mark a pattern variable in a pattern. Both behave the same.
pub const PATTERN_SIGILS: [char; 2] = ['$', '@'];

/// Sigil that marks a variable in a substitution template.
pub const TEMPLATE_SIGIL: char = '$';

/// The variable name if `text` is a pattern variable.
pub fn pattern_variable(text: &str) -> Option<&str> {
    text.strip_prefix(PATTERN_SIGILS)
}

/// Match `candidate` against `pattern`.
///
/// Structural recursion without backtracking. A variable that occurs more
/// than once is not checked for consistency: its last occurrence wins.
pub fn match_pattern(pattern: &Node, candidate: &Node) -> MatchResult {
    let mut bindings = Bindings::new();
    if match_into(pattern, candidate, &mut bindings) {
        Some(bindings)
    } else {
        trace!(%pattern, %candidate, "no match");
        None
    }
}

fn match_into(pattern: &Node, candidate: &Node, bindings: &mut Bindings) -> bool {
    match (pattern, candidate) {
        (Node::Leaf { text, .. }, _) => match pattern_variable(text) {
            Some(name) => {
                bindings.insert(name.to_string(), candidate.clone());
                true
            }
            None => matches!(candidate, Node::Leaf { text: c, .. } if c == text),
        },
        (
            Node::Compound {
                op: p_op,
                args: p_args,
                ..
            },
            Node::Compound {
                op: c_op,
                args: c_args,
                ..
            },
        ) if p_op == c_op && p_args.len() == c_args.len() => p_args
            .iter()
            .zip(c_args)
            .all(|(p, c)| match_into(p, c, bindings)),
        _ => false,
    }
}

/// Fill `template` from `bindings`.
///
/// A `$name` leaf becomes a copy of the bound subtree. An unbound `$name`
/// is a binder the template introduces itself and becomes the fresh leaf
/// `hygiene_prefix + name`. Every node of the result whose location is
/// unset gets `fallback`; bound subtrees keep their own locations.
pub fn substitute(
    template: &Node,
    bindings: &Bindings,
    hygiene_prefix: &str,
    fallback: Metadata,
) -> Node {
    match template {
        Node::Leaf { text, meta } => match text.strip_prefix(TEMPLATE_SIGIL) {
            Some(name) => match bindings.get(name) {
                Some(bound) => bound.clone(),
                None => Node::leaf(format!("{}{}", hygiene_prefix, name), meta.or(fallback)),
            },
            None => Node::leaf(text.clone(), meta.or(fallback)),
        },
        Node::Compound { op, args, meta } => Node::compound(
            op.clone(),
            args.iter()
                .map(|arg| substitute(arg, bindings, hygiene_prefix, fallback))
                .collect(),
            meta.or(fallback),
        ),
    }
}

#[cfg(test)]
mod tests;
