use crate::metadata::Metadata;

/// Lexemes of the s-expression text form.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    LParen, // (
    RParen, // )
    /// Any other run of non-space characters: identifiers, numbers,
    /// operator symbols, pattern variables, and quoted strings.
    Atom(String),
    Eof,
}

impl Lexeme {
    pub fn description(&self) -> String {
        match self {
            Lexeme::LParen => "'('".to_string(),
            Lexeme::RParen => "')'".to_string(),
            Lexeme::Atom(text) => format!("'{}'", text),
            Lexeme::Eof => "end of file".to_string(),
        }
    }
}

/// A lexeme and where it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub lexeme: Lexeme,
    pub meta: Metadata,
}
