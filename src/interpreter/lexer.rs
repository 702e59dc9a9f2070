use crate::interpreter::token::{Span, Token, TokenKind};

/// The hand-written lexer: a single cursor into one source line.
///
/// `next_token` always returns exactly one token and never fails;
/// unrecognized input is reported through [`TokenKind::Error`] and surfaced
/// by the parser. Once the cursor reaches the end of the line, every further
/// call returns [`TokenKind::Eof`] without advancing, so the parser can peek
/// past the end freely.
pub struct Lexer<'src> {
    source: &'src str,
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start,
            len: self.position - start,
        }
    }

    /// Produces the next token.
    ///
    /// Skips whitespace, then classifies on the next character: digits lex a
    /// maximal run with one optional fractional part (`12`, `3.14`, and `1.`,
    /// but not `.5`, and no exponents); a letter or underscore lexes an
    /// identifier; the nine operator characters map to their kinds; anything
    /// else becomes a one-character error token.
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }

        let start = self.position;

        let Some(c) = self.peek() else {
            // Do not advance; end of input repeats forever.
            return Token {
                kind: TokenKind::Eof,
                span: Span { start, len: 0 },
            };
        };

        if c.is_ascii_digit() {
            return self.lex_number(start);
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return self.lex_identifier(start);
        }

        self.bump(c);
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '=' => TokenKind::Equal,
            '!' => TokenKind::Bang,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => TokenKind::Error,
        };

        Token {
            kind,
            span: self.span_from(start),
        }
    }

    fn lex_number(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump(c);
        }

        // One fractional part at most; a dot only belongs to the number when
        // it directly follows the consumed digits.
        if self.peek() == Some('.') {
            self.bump('.');
            while let Some(c) = self.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                self.bump(c);
            }
        }

        Token {
            kind: TokenKind::Number,
            span: self.span_from(start),
        }
    }

    fn lex_identifier(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            self.bump(c);
        }

        Token {
            kind: TokenKind::Identifier,
            span: self.span_from(start),
        }
    }
}
