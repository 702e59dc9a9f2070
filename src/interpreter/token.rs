/// Represents the kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number,
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `=`
    Equal,
    /// `!`
    Bang,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A character that starts no token.
    Error,
    /// The synthetic end-of-input marker.
    Eof,
}

/// A byte range into the source line.
///
/// Spans stand in for borrowed text: tokens and identifier nodes carry a
/// span instead of a string, and resolve it against the session's stored
/// source when the text is needed. Resolution is checked, so a span that no
/// longer fits the current source yields `None` rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Span {
    /// Resolves the span against `source`.
    ///
    /// Returns `None` if the range is out of bounds or does not fall on
    /// character boundaries.
    #[must_use]
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start..self.start + self.len)
    }

    /// 1-based column of the span's first character.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.start + 1
    }
}

/// A lexical token: a kind plus the span of its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Where its text lives in the source line.
    pub span: Span,
}

impl Token {
    /// The token's text, resolved against `source`.
    #[must_use]
    pub fn lexeme<'src>(&self, source: &'src str) -> Option<&'src str> {
        self.span.slice(source)
    }
}
