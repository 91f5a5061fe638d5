use crate::ast::Node;
use crate::diagnostic::Diagnostic;
use crate::lexeme::{Lexeme, Token};
use crate::metadata::Metadata;

/// Reader for the s-expression text form: `(op arg ...)` is a compound,
/// any other atom is a leaf.
pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Read every top-level form until end of file.
    pub(crate) fn parse_forms(mut self) -> Result<Vec<Node>, Vec<Diagnostic>> {
        let mut forms = Vec::new();
        while !self.at_eof() {
            forms.push(self.parse_node().map_err(|e| vec![e])?);
        }
        Ok(forms)
    }

    fn parse_node(&mut self) -> Result<Node, Diagnostic> {
        let tok = self.advance();
        match tok.lexeme {
            Lexeme::Atom(text) => Ok(Node::leaf(text, tok.meta)),
            Lexeme::LParen => self.parse_compound(tok.meta),
            Lexeme::RParen => Err(Diagnostic::error("unexpected ')'".to_string(), tok.meta)
                .with_help("remove the extra closing parenthesis".to_string())),
            Lexeme::Eof => Err(Diagnostic::error(
                "unexpected end of file".to_string(),
                tok.meta,
            )),
        }
    }

    fn parse_compound(&mut self, open: Metadata) -> Result<Node, Diagnostic> {
        let head = self.advance();
        let op = match head.lexeme {
            Lexeme::Atom(text) => text,
            other => {
                return Err(Diagnostic::error(
                    format!("expected an operator name after '(', found {}", other.description()),
                    head.meta,
                )
                .with_note("every list starts with the name of its operator".to_string()));
            }
        };

        let mut args = Vec::new();
        loop {
            match self.peek() {
                Lexeme::RParen => {
                    self.advance();
                    return Ok(Node::compound(op, args, open));
                }
                Lexeme::Eof => {
                    return Err(Diagnostic::error(format!("unclosed '({}'", op), open)
                        .with_help("add the missing ')'".to_string()));
                }
                _ => args.push(self.parse_node()?),
            }
        }
    }

    fn peek(&self) -> &Lexeme {
        &self.current().lexeme
    }

    fn at_eof(&self) -> bool {
        *self.peek() == Lexeme::Eof
    }

    fn current(&self) -> &Token {
        // The lexer always ends the stream with Eof and we never step past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if tok.lexeme != Lexeme::Eof {
            self.pos += 1;
        }
        tok
    }
}

#[cfg(test)]
mod tests;
