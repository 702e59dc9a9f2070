#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The evaluator localizes these to the subexpression that triggered them:
/// the failing subtree yields a not-a-number sentinel, sibling subtrees are
/// still evaluated, and the first diagnostic is returned to the caller.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not in the built-in registry.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The symbol table cannot hold another variable; the assignment was
    /// dropped and existing entries are unchanged.
    SymbolTableFull {
        /// The fixed capacity of the table.
        capacity: usize,
    },
    /// Evaluated a node handle from before the last session reset.
    DetachedNode,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Error: Undefined variable '{name}'.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Error: Unknown function '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::SymbolTableFull { capacity } => {
                write!(f, "Error: Symbol table full ({capacity} entries).")
            },
            Self::DetachedNode => write!(
                f,
                "Error: Expression was discarded by a reset and can no longer be evaluated."
            ),
        }
    }
}

impl std::error::Error for RuntimeError {}
