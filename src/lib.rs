//! # numera
//!
//! numera is an arithmetic expression evaluator written in Rust.
//! It lexes, parses, and evaluates expressions with support for variables,
//! assignment, postfix factorial, and the usual family of built-in math
//! functions and constants, keeping a persistent variable environment across
//! successive inputs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::session::Session;

/// Fixed-capacity storage with stable, generation-checked handles.
///
/// This module provides the arena that backs the AST node store and the
/// symbol table's persistent name storage. Entries are carved out
/// sequentially and reclaimed all at once; a handle that outlives a clear is
/// detected instead of dereferenced.
///
/// # Responsibilities
/// - Provides `Arena<T>` with a hard capacity fixed at creation.
/// - Hands out `Handle<T>` values checked against a generation counter, so
///   stale handles are caught after the arena has been cleared.
/// - Reports allocation failure through `AllocError` rather than aborting.
pub mod arena;
/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum that represents the syntactic
/// structure of one expression as a tree. Nodes live in the session's arena
/// and reference their children by handle; the tree is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node variants for all supported expression forms.
/// - Keeps identifier text as spans into the source line rather than owned
///   strings.
/// - Renders a tree in parenthesized prefix form for display.
pub mod ast;
/// Provides unified error types for parsing, evaluation, and allocation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression, plus arena allocation failures. It
/// standardizes error reporting and carries the offending lexeme and column
/// where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   arena).
/// - Attaches column positions and detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, parser, environment, evaluator, and
/// the built-in function registry to provide a complete pipeline from a
/// source line to an `f64` result. It exposes the `Session` type consumed by
/// the command-line shell.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment.
/// - Provides entry points for parsing and evaluating user input.
/// - Manages the node arena lifecycle between independent inputs.
pub mod interpreter;

/// Parses and evaluates a single expression in a fresh session.
///
/// This is a convenience wrapper for one-shot evaluation; it creates a new
/// [`Session`], parses `text`, and evaluates the resulting tree. Variables
/// assigned inside `text` do not outlive the call. For a persistent
/// environment, hold a [`Session`] and drive it directly.
///
/// # Errors
/// Returns an error if the session arenas cannot be created, if `text` fails
/// to parse, or if evaluation reports a diagnostic.
///
/// # Examples
/// ```
/// use numera::eval_str;
///
/// assert_eq!(eval_str("2 + 3 * 4").unwrap(), 14.0);
///
/// // 'y' is never defined, so evaluation fails.
/// assert!(eval_str("y + 1").is_err());
/// ```
pub fn eval_str(text: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let mut session = Session::new()?;
    let root = session.parse(text)?;
    Ok(session.evaluate(root)?)
}
