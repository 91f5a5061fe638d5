//! Reader for the LLL-style s-expression text form.

pub mod lexeme;
pub mod lexer;
pub mod metadata;
pub mod parser;

use crate::ast::Node;
use crate::diagnostic::Diagnostic;
use crate::metadata::Metadata;

/// Read every top-level form in `source`.
pub fn read_forms(source: &str, file_id: u16) -> Result<Vec<Node>, Vec<Diagnostic>> {
    let (tokens, lex_errors) = lexer::Lexer::new(source, file_id).tokenize();
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }
    parser::Parser::new(tokens).parse_forms()
}

/// Read a source that must contain exactly one form.
pub fn read_node(source: &str, file_id: u16) -> Result<Node, Vec<Diagnostic>> {
    let mut forms = read_forms(source, file_id)?;
    match forms.len() {
        1 => Ok(forms.remove(0)),
        0 => Err(vec![Diagnostic::error(
            "expected one form, found none".to_string(),
            Metadata::new(file_id, 1, 1),
        )]),
        n => Err(vec![Diagnostic::error(
            format!("expected one form, found {}", n),
            forms[1].meta(),
        )
        .with_help("wrap the statements in (seq ...)".to_string())]),
    }
}
