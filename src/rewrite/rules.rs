//! Rewrite rules: a pattern and the template that replaces it.
//!
//! Rule files hold `pattern => template` pairs in the s-expression form:
//!
//! ```text
//! ; x * 2 -> x << 1
//! (mul $a 2) => (shl $a 1)
//! ```
//!
//! Applying a rule is a single match + substitute step at one node.
//! Repeating until nothing changes is the caller's business.

use tracing::debug;

use crate::ast::Node;
use crate::diagnostic::Diagnostic;
use crate::syntax::read_forms;

use super::pattern::{match_pattern, substitute};

pub const RULE_ARROW: &str = "=>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Node,
    pub template: Node,
}

impl Rule {
    pub fn new(pattern: Node, template: Node) -> Self {
        Self { pattern, template }
    }

    /// Rewrite `node` if it matches. The replacement takes `node`'s
    /// location wherever the template has none.
    pub fn apply(&self, node: &Node, hygiene_prefix: &str) -> Option<Node> {
        let bindings = match_pattern(&self.pattern, node)?;
        Some(substitute(
            &self.template,
            &bindings,
            hygiene_prefix,
            node.meta(),
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Read `pattern => template` pairs.
    pub fn parse(source: &str, file_id: u16) -> Result<Self, Vec<Diagnostic>> {
        let forms = read_forms(source, file_id)?;
        let mut rules = Vec::new();
        let mut errors = Vec::new();
        let mut forms = forms.into_iter();
        while let Some(pattern) = forms.next() {
            let pattern_meta = pattern.meta();
            match (forms.next(), forms.next()) {
                (Some(Node::Leaf { text, .. }), Some(template)) if text == RULE_ARROW => {
                    rules.push(Rule::new(pattern, template));
                }
                (Some(arrow), _) if arrow.text() != RULE_ARROW || !arrow.is_leaf() => {
                    errors.push(
                        Diagnostic::error(
                            format!("expected '{}' after rule pattern, found {}", RULE_ARROW, arrow),
                            arrow.meta(),
                        )
                        .with_help("write rules as: (pattern) => (template)".to_string()),
                    );
                    break;
                }
                _ => {
                    errors.push(Diagnostic::error(
                        "incomplete rule at end of file".to_string(),
                        pattern_meta,
                    ));
                    break;
                }
            }
        }
        if errors.is_empty() {
            Ok(Self { rules })
        } else {
            Err(errors)
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Try the rules in order at `node`; the first match wins.
    /// Returns the index of the rule that fired and the replacement.
    pub fn apply_first(&self, node: &Node, hygiene_prefix: &str) -> Option<(usize, Node)> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            let replacement = rule.apply(node, hygiene_prefix)?;
            debug!(rule = index, pattern = %rule.pattern, %replacement, "rule fired");
            Some((index, replacement))
        })
    }
}
