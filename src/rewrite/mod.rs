//! The rewrite core: operator table, pattern matching, template
//! substitution, and the two structural desugaring passes.

pub mod pattern;
pub mod registry;
pub mod rules;
pub mod scope;
pub mod storage;

pub use pattern::{match_pattern, substitute, Bindings, MatchResult};
pub use registry::{check_arity, is_recognized_operator, lookup_operator, OperatorSpec};
pub use rules::{Rule, RuleSet};
pub use scope::nest_scopes;
pub use storage::{flatten_storage_access, is_storage_access_root};
