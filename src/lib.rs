pub mod ast;
pub mod bignum;
pub mod config;
pub mod diagnostic;
pub mod rewrite;
pub mod syntax;

// Re-exports: flat `lll_rewrite::X` paths for the syntax layer
pub use syntax::lexeme;
pub use syntax::metadata;

pub use ast::Node;
pub use metadata::Metadata;
pub use rewrite::*;
