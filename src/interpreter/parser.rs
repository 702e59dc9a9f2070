use crate::{
    arena::Arena,
    ast::{Node, NodeId},
    error::ParseError,
    interpreter::{
        functions,
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Precedence level deciding how aggressively an operator binds its
/// operands relative to its neighbors.
///
/// Levels are ordered from weakest to strongest. Left-associative operators
/// parse their right operand at their own level; right-associative ones
/// (`^`, `=`) parse it one level below, so an equal operator to the right
/// still wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BindingPower {
    /// No binding at all; also the entry level for full expressions.
    None,
    /// `=`
    Assignment,
    /// `+` and `-`
    Term,
    /// `*` and `/`
    Factor,
    /// `^`
    Power,
    /// Unary prefix `+` and `-`
    Prefix,
    /// Postfix `!`
    Postfix,
    /// Function application
    Call,
}

impl BindingPower {
    /// The next-weaker level, used for right-associative operators.
    const fn one_below(self) -> Self {
        match self {
            Self::None | Self::Assignment => Self::None,
            Self::Term => Self::Assignment,
            Self::Factor => Self::Term,
            Self::Power => Self::Factor,
            Self::Prefix => Self::Power,
            Self::Postfix => Self::Prefix,
            Self::Call => Self::Postfix,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PrefixRule {
    Number,
    Variable,
    Unary,
    Grouping,
}

#[derive(Debug, Clone, Copy)]
enum InfixRule {
    Binary,
    Assignment,
    Postfix,
    Call,
}

/// One row of the rule table: how a token behaves in prefix position, in
/// infix position, and how strongly it binds a finished left operand.
#[derive(Debug, Clone, Copy)]
struct Rule {
    prefix: Option<PrefixRule>,
    infix: Option<InfixRule>,
    left_bp: BindingPower,
}

/// The immutable rule table, keyed by token kind. Built into the binary;
/// never mutated at runtime.
const fn rule(kind: TokenKind) -> Rule {
    match kind {
        TokenKind::Number => Rule {
            prefix: Some(PrefixRule::Number),
            infix: None,
            left_bp: BindingPower::None,
        },
        TokenKind::Identifier => Rule {
            prefix: Some(PrefixRule::Variable),
            infix: None,
            left_bp: BindingPower::None,
        },
        TokenKind::Plus | TokenKind::Minus => Rule {
            prefix: Some(PrefixRule::Unary),
            infix: Some(InfixRule::Binary),
            left_bp: BindingPower::Term,
        },
        TokenKind::Star | TokenKind::Slash => Rule {
            prefix: None,
            infix: Some(InfixRule::Binary),
            left_bp: BindingPower::Factor,
        },
        TokenKind::Caret => Rule {
            prefix: None,
            infix: Some(InfixRule::Binary),
            left_bp: BindingPower::Power,
        },
        TokenKind::Equal => Rule {
            prefix: None,
            infix: Some(InfixRule::Assignment),
            left_bp: BindingPower::Assignment,
        },
        TokenKind::Bang => Rule {
            prefix: None,
            infix: Some(InfixRule::Postfix),
            left_bp: BindingPower::Postfix,
        },
        TokenKind::LParen => Rule {
            prefix: Some(PrefixRule::Grouping),
            infix: Some(InfixRule::Call),
            left_bp: BindingPower::Call,
        },
        TokenKind::RParen | TokenKind::Error | TokenKind::Eof => Rule {
            prefix: None,
            infix: None,
            left_bp: BindingPower::None,
        },
    }
}

/// A Pratt parser over one source line.
///
/// The parser drives the lexer one token at a time and allocates nodes from
/// the borrowed arena. It never touches the environment; assignment is
/// parsed like any other binary operator and takes effect only during
/// evaluation, after the whole line has parsed successfully.
pub struct Parser<'src, 'arena> {
    source: &'src str,
    lexer: Lexer<'src>,
    nodes: &'arena mut Arena<Node>,
    current: Token,
}

impl<'src, 'arena> Parser<'src, 'arena> {
    /// Creates a parser for `source`, allocating nodes from `nodes`.
    pub fn new(source: &'src str, nodes: &'arena mut Arena<Node>) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();

        Self {
            source,
            lexer,
            nodes,
            current,
        }
    }

    /// Parses one full expression and requires the line to be exhausted.
    ///
    /// # Errors
    /// Any [`ParseError`]; in particular, leftover tokens after a complete
    /// expression are rejected even though a valid prefix was recognized.
    pub fn parse(mut self) -> ParseResult<NodeId> {
        let root = self.expression(BindingPower::None)?;

        match self.current.kind {
            TokenKind::Eof => Ok(root),
            TokenKind::Error => Err(self.unrecognized(self.current)),
            _ => Err(ParseError::TrailingTokens {
                token: self.text(self.current).to_string(),
                column: self.current.span.column(),
            }),
        }
    }

    /// The Pratt loop: one prefix step, then fold infix operators while the
    /// next token binds tighter than `min_bp`.
    fn expression(&mut self, min_bp: BindingPower) -> ParseResult<NodeId> {
        let token = self.advance();
        let Some(prefix) = rule(token.kind).prefix else {
            return Err(self.unexpected(token));
        };

        let mut left = self.apply_prefix(prefix, token)?;

        while rule(self.current.kind).left_bp > min_bp {
            let token = self.advance();
            let Some(infix) = rule(token.kind).infix else {
                break;
            };

            left = self.apply_infix(infix, token, left)?;
        }

        Ok(left)
    }

    fn apply_prefix(&mut self, prefix: PrefixRule, token: Token) -> ParseResult<NodeId> {
        match prefix {
            PrefixRule::Number => self.number(token),
            PrefixRule::Variable => Ok(self.nodes.alloc(Node::Identifier {
                name: token.span,
            })?),
            PrefixRule::Unary => {
                let operand = self.expression(BindingPower::Prefix)?;
                Ok(self.nodes.alloc(Node::Unary { op: token, operand })?)
            },
            PrefixRule::Grouping => {
                let inner = self.expression(BindingPower::None)?;
                self.expect_closing_paren()?;
                Ok(inner)
            },
        }
    }

    fn apply_infix(&mut self, infix: InfixRule, token: Token, left: NodeId) -> ParseResult<NodeId> {
        match infix {
            InfixRule::Binary => {
                // `^` is right-associative and recurses one level weaker.
                let right_bp = if token.kind == TokenKind::Caret {
                    rule(token.kind).left_bp.one_below()
                } else {
                    rule(token.kind).left_bp
                };

                let right = self.expression(right_bp)?;
                Ok(self.nodes.alloc(Node::Binary {
                    op: token,
                    left,
                    right,
                })?)
            },
            InfixRule::Assignment => self.assignment(token, left),
            InfixRule::Postfix => Ok(self.nodes.alloc(Node::Unary {
                op: token,
                operand: left,
            })?),
            InfixRule::Call => self.call(token, left),
        }
    }

    fn number(&mut self, token: Token) -> ParseResult<NodeId> {
        let literal = self.text(token);
        let value = literal.parse().map_err(|_| ParseError::InvalidNumber {
            literal: literal.to_string(),
            column: token.span.column(),
        })?;

        Ok(self.nodes.alloc(Node::Number { value })?)
    }

    fn assignment(&mut self, token: Token, left: NodeId) -> ParseResult<NodeId> {
        let Some(&Node::Identifier { name }) = self.nodes.get(left) else {
            return Err(ParseError::InvalidAssignmentTarget {
                column: token.span.column(),
            });
        };

        let target = name.slice(self.source).unwrap_or_default();
        if functions::is_reserved(target) {
            return Err(ParseError::IdentifierReserved {
                name: target.to_string(),
                column: name.column(),
            });
        }

        let right = self.expression(BindingPower::Assignment.one_below())?;
        Ok(self.nodes.alloc(Node::Binary {
            op: token,
            left,
            right,
        })?)
    }

    fn call(&mut self, token: Token, left: NodeId) -> ParseResult<NodeId> {
        if !matches!(self.nodes.get(left), Some(Node::Identifier { .. })) {
            return Err(ParseError::InvalidCallTarget {
                column: token.span.column(),
            });
        }

        let argument = self.expression(BindingPower::None)?;
        self.expect_closing_paren()?;

        Ok(self.nodes.alloc(Node::Call {
            callee: left,
            argument,
        })?)
    }

    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        if self.current.kind == TokenKind::RParen {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::ExpectedClosingParen {
                column: self.current.span.column(),
            })
        }
    }

    fn advance(&mut self) -> Token {
        let token = self.current;
        self.current = self.lexer.next_token();
        token
    }

    fn text(&self, token: Token) -> &'src str {
        token.lexeme(self.source).unwrap_or_default()
    }

    fn unexpected(&self, token: Token) -> ParseError {
        match token.kind {
            TokenKind::Eof => ParseError::UnexpectedEndOfInput {
                column: token.span.column(),
            },
            TokenKind::Error => self.unrecognized(token),
            _ => ParseError::UnexpectedToken {
                token: self.text(token).to_string(),
                column: token.span.column(),
            },
        }
    }

    fn unrecognized(&self, token: Token) -> ParseError {
        let character = self.text(token).chars().next().unwrap_or('\u{fffd}');
        ParseError::UnrecognizedCharacter {
            character,
            column: token.span.column(),
        }
    }
}
