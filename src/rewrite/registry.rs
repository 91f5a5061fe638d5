//! Operators legal in the IR and their argument-count bounds.
//!
//! The lookup table is built once, on first query, behind a `OnceLock`
//! and is read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::ast::Node;
use crate::bignum::TT256M1;
use crate::diagnostic::Diagnostic;

/// Upper bound on an operator's argument count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxArgs {
    Bounded(usize),
    /// No real upper bound (2^256 - 1 in the operator table).
    Unbounded,
}

impl fmt::Display for MaxArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxArgs::Bounded(n) => write!(f, "{}", n),
            MaxArgs::Unbounded => f.write_str(TT256M1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: MaxArgs,
}

impl OperatorSpec {
    const fn new(name: &'static str, min_args: usize, max_args: usize) -> Self {
        Self {
            name,
            min_args,
            max_args: MaxArgs::Bounded(max_args),
        }
    }

    const fn variadic(name: &'static str, min_args: usize) -> Self {
        Self {
            name,
            min_args,
            max_args: MaxArgs::Unbounded,
        }
    }

    /// Whether `count` children fall within the bounds.
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_args
            && match self.max_args {
                MaxArgs::Bounded(max) => count <= max,
                MaxArgs::Unbounded => true,
            }
    }
}

const OPERATORS: &[OperatorSpec] = &[
    OperatorSpec::new("if", 2, 3),
    OperatorSpec::new("unless", 2, 2),
    OperatorSpec::new("while", 2, 2),
    OperatorSpec::new("until", 2, 2),
    OperatorSpec::new("alloc", 1, 1),
    OperatorSpec::new("array", 1, 1),
    OperatorSpec::variadic("call", 2),
    OperatorSpec::variadic("callcode", 2),
    OperatorSpec::new("create", 1, 4),
    OperatorSpec::new("getch", 2, 2),
    OperatorSpec::new("setch", 3, 3),
    OperatorSpec::new("sha3", 1, 2),
    OperatorSpec::new("return", 1, 2),
    OperatorSpec::new("inset", 1, 1),
    OperatorSpec::new("min", 2, 2),
    OperatorSpec::new("max", 2, 2),
    OperatorSpec::variadic("array_lit", 0),
    OperatorSpec::variadic("seq", 0),
    OperatorSpec::new("log", 1, 6),
    OperatorSpec::new("outer", 1, 1),
    OperatorSpec::new("set", 2, 2),
    OperatorSpec::new("get", 1, 1),
    OperatorSpec::new("ref", 1, 1),
    OperatorSpec::variadic("declare", 1),
    OperatorSpec::new("with", 3, 3),
    OperatorSpec::new("mcopy", 3, 3),
    OperatorSpec::new("save", 3, 3),
    OperatorSpec::new("load", 2, 2),
];

fn table() -> &'static HashMap<&'static str, &'static OperatorSpec> {
    static TABLE: OnceLock<HashMap<&'static str, &'static OperatorSpec>> = OnceLock::new();
    TABLE.get_or_init(|| OPERATORS.iter().map(|spec| (spec.name, spec)).collect())
}

/// Is `name` one of the operators legal in the IR?
pub fn is_recognized_operator(name: &str) -> bool {
    table().contains_key(name)
}

pub fn lookup_operator(name: &str) -> Option<&'static OperatorSpec> {
    table().get(name).copied()
}

/// The operator table in declaration order.
pub fn operators() -> &'static [OperatorSpec] {
    OPERATORS
}

/// Report every recognized operator whose child count is out of bounds.
///
/// Unrecognized operators are not errors here; other passes decide what
/// they mean.
pub fn check_arity(node: &Node) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    collect_arity_errors(node, &mut diagnostics);
    diagnostics
}

fn collect_arity_errors(node: &Node, out: &mut Vec<Diagnostic>) {
    let Node::Compound { op, args, meta } = node else {
        return;
    };
    if let Some(spec) = lookup_operator(op) {
        if !spec.accepts(args.len()) {
            let expected = match spec.max_args {
                MaxArgs::Bounded(max) if max == spec.min_args => format!("exactly {}", max),
                MaxArgs::Bounded(max) => format!("between {} and {}", spec.min_args, max),
                MaxArgs::Unbounded => format!("at least {}", spec.min_args),
            };
            out.push(
                Diagnostic::error(
                    format!(
                        "'{}' takes {} arguments, found {}",
                        op,
                        expected,
                        args.len()
                    ),
                    *meta,
                )
                .with_note(format!("in {}", node)),
            );
        }
    }
    for arg in args {
        collect_arity_errors(arg, out);
    }
}
