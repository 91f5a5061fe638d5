use crate::diagnostic::Diagnostic;
use crate::lexeme::{Lexeme, Token};
use crate::metadata::Metadata;

pub(crate) struct Lexer<'src> {
    source: &'src [u8],
    file_id: u16,
    pos: usize,
    line: i32,
    line_start: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    pub(crate) fn new(source: &'src str, file_id: u16) -> Self {
        Self {
            source: source.as_bytes(),
            file_id,
            pos: 0,
            line: 1,
            line_start: 0,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.lexeme == Lexeme::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        let meta = self.here();
        if self.pos >= self.source.len() {
            return Token {
                lexeme: Lexeme::Eof,
                meta,
            };
        }

        let lexeme = match self.source[self.pos] {
            b'(' => {
                self.pos += 1;
                Lexeme::LParen
            }
            b')' => {
                self.pos += 1;
                Lexeme::RParen
            }
            b'"' => self.scan_string(meta),
            _ => self.scan_atom(),
        };
        Token { lexeme, meta }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while self.pos < self.source.len() {
            match self.source[self.pos] {
                b'\n' => {
                    self.pos += 1;
                    self.line += 1;
                    self.line_start = self.pos;
                }
                ch if ch.is_ascii_whitespace() => self.pos += 1,
                // Line comment
                b';' => {
                    while self.pos < self.source.len() && self.source[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_atom(&mut self) -> Lexeme {
        let start = self.pos;
        while self.pos < self.source.len() && !is_delimiter(self.source[self.pos]) {
            self.pos += 1;
        }
        Lexeme::Atom(self.text(start))
    }

    /// Scan a quoted string. The quotes stay part of the atom text.
    fn scan_string(&mut self, meta: Metadata) -> Lexeme {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.pos >= self.source.len() || self.source[self.pos] == b'\n' {
                self.diagnostics.push(
                    Diagnostic::error("unterminated string literal".to_string(), meta)
                        .with_help("close the string with '\"' on the same line".to_string()),
                );
                return Lexeme::Atom(self.text(start));
            }
            match self.source[self.pos] {
                b'\\' => {
                    // An escaped newline still ends the line.
                    self.pos += 1;
                    if self.pos < self.source.len() && self.source[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                b'"' => {
                    self.pos += 1;
                    return Lexeme::Atom(self.text(start));
                }
                _ => self.pos += 1,
            }
        }
    }

    fn text(&self, start: usize) -> String {
        let end = self.pos.min(self.source.len());
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    fn here(&self) -> Metadata {
        Metadata::new(
            self.file_id,
            self.line,
            (self.pos - self.line_start) as u32 + 1,
        )
    }
}

fn is_delimiter(ch: u8) -> bool {
    ch.is_ascii_whitespace() || matches!(ch, b'(' | b')' | b';' | b'"')
}
