use crate::error::AllocError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based byte offsets into the input line.
pub enum ParseError {
    /// The lexer found a character that starts no token.
    UnrecognizedCharacter {
        /// The character encountered.
        character: char,
        /// The column where it appeared.
        column: usize,
    },
    /// Found a token that cannot begin an expression.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The column where it appeared.
        column: usize,
    },
    /// Reached the end of input where an operand was expected.
    UnexpectedEndOfInput {
        /// The column where input ended.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column where `)` was expected.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token: String,
        /// The column where it appeared.
        column: usize,
    },
    /// The left-hand side of `=` was not a variable name.
    InvalidAssignmentTarget {
        /// The column of the `=` operator.
        column: usize,
    },
    /// Tried to assign to a reserved identifier (a built-in constant or
    /// function name).
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The column where it appeared.
        column: usize,
    },
    /// Call syntax was applied to something other than a function name.
    InvalidCallTarget {
        /// The column of the opening parenthesis.
        column: usize,
    },
    /// A numeric literal could not be converted to a value.
    InvalidNumber {
        /// The offending literal text.
        literal: String,
        /// The column where it appeared.
        column: usize,
    },
    /// The node arena ran out of space mid-parse.
    Allocation(AllocError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, column } => {
                write!(
                    f,
                    "Error at column {column}: Unrecognized character '{character}'."
                )
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { column } => {
                write!(f, "Error at column {column}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { column } => write!(
                f,
                "Error at column {column}: Expected closing parenthesis ')' but none found."
            ),

            Self::TrailingTokens { token, column } => write!(
                f,
                "Error at column {column}: Extra tokens after expression. Check your input: {token}"
            ),

            Self::InvalidAssignmentTarget { column } => write!(
                f,
                "Error at column {column}: Assignment target must be a variable name."
            ),

            Self::IdentifierReserved { name, column } => {
                write!(f, "Error at column {column}: Identifier {name} is reserved.")
            },

            Self::InvalidCallTarget { column } => write!(
                f,
                "Error at column {column}: Only a function name can be called."
            ),

            Self::InvalidNumber { literal, column } => {
                write!(f, "Error at column {column}: Invalid number: {literal}.")
            },

            Self::Allocation(inner) => inner.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<AllocError> for ParseError {
    fn from(inner: AllocError) -> Self {
        Self::Allocation(inner)
    }
}
