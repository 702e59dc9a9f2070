/// The environment module stores variables between inputs.
///
/// The environment maps variable names to `f64` values in a bounded table
/// with its own arena for persistent name storage, so names outlive the
/// source line they were first written on. It comes pre-seeded with the
/// named constants `pi` and `e`.
///
/// # Responsibilities
/// - Provides bounded get/set access to named `f64` values.
/// - Copies names into arena-backed storage on first write.
/// - Rejects inserts past capacity without corrupting existing entries.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies operators, resolves identifiers
/// through the environment, and dispatches calls through the built-in
/// function registry. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variable reads and assignment, the only side-effecting path.
/// - Reports runtime errors such as division by zero while still producing
///   a sentinel result.
pub mod evaluator;
/// The functions module is the registry of built-in math functions.
///
/// Built-in functions are ordinary identifiers applied with call syntax,
/// resolved here by name at evaluation time. The module also supplies the
/// gamma function backing postfix factorial and the reserved-name check the
/// parser uses to protect constants and function names from assignment.
///
/// # Responsibilities
/// - Maps function names to their `f64 -> f64` implementations.
/// - Implements the generalized factorial via the gamma function.
/// - Decides which identifiers are reserved.
pub mod functions;
/// The lexer module tokenizes a source line for further parsing.
///
/// The lexer reads the raw expression text and produces one token per call,
/// each carrying its kind and a span into the source. This is the first
/// stage of interpretation. Lexing is total: unrecognized input becomes an
/// error token rather than a failure.
///
/// # Responsibilities
/// - Converts the input character stream into spanned tokens.
/// - Handles numeric literals, identifiers, and single-character operators.
/// - Yields an end-of-input token repeatedly once the line is consumed.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser drives the lexer directly and constructs an AST in the
/// session's node arena using a Pratt (precedence-climbing) algorithm over
/// an immutable rule table. Parsing never touches the environment; any side
/// effect of an expression happens later, during evaluation.
///
/// # Responsibilities
/// - Converts tokens into arena-allocated AST nodes.
/// - Resolves operator precedence and associativity via binding powers.
/// - Validates assignment and call targets, reporting errors with columns.
pub mod parser;
/// The session module owns one parser/environment pair.
///
/// A session holds the current source line, the node arena, and the symbol
/// table, and exposes the parse/evaluate/reset/variables surface consumed by
/// the command-line shell. One session corresponds to one sequential stream
/// of inputs.
///
/// # Responsibilities
/// - Provides entry points for parsing and evaluating one line at a time.
/// - Clears the node arena between independent inputs on request.
/// - Offers read-only access to the variable table for display.
pub mod session;
/// The token module defines the lexical vocabulary.
///
/// Tokens are tagged by kind and borrow their text through byte spans into
/// the source line; they never own text.
pub mod token;
