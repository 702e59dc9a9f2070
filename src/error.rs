/// Allocation errors.
///
/// Defines the failures an arena can report: the backing storage could not
/// be reserved at creation, or the fixed capacity is exhausted. Neither is
/// process-fatal; the operation that needed the allocation fails instead.
pub mod alloc_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unrecognized characters, unexpected
/// tokens, unbalanced parentheses, invalid assignment or call targets, and
/// trailing input after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, unknown functions, division by zero, and a symbol
/// table that has reached its capacity.
pub mod runtime_error;

pub use alloc_error::AllocError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
