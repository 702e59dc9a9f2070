use crate::{
    arena::Arena,
    ast::{Node, NodeId},
    error::RuntimeError,
    interpreter::{environment::SymbolTable, functions, token::TokenKind},
};

/// A tree-walking evaluator over one session's node arena.
///
/// Evaluation is a pure function of the tree and the symbol table except
/// for assignment, which writes the table; nothing else in the core has a
/// side effect. Errors are localized: the failing subexpression yields NaN,
/// sibling subexpressions are still evaluated (including their
/// assignments), and the first diagnostic is handed back to the caller
/// rather than printed from here.
pub struct Evaluator<'a> {
    source: &'a str,
    nodes: &'a Arena<Node>,
    table: &'a mut SymbolTable,
    diagnostics: Vec<RuntimeError>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `nodes`, resolving spans against `source`
    /// and identifiers against `table`.
    pub fn new(source: &'a str, nodes: &'a Arena<Node>, table: &'a mut SymbolTable) -> Self {
        Self {
            source,
            nodes,
            table,
            diagnostics: Vec::new(),
        }
    }

    /// Evaluates the tree rooted at `root`.
    ///
    /// # Errors
    /// The first [`RuntimeError`] recorded during the walk, if any; the
    /// computed value in that case would have been the NaN sentinel.
    pub fn run(mut self, root: NodeId) -> Result<f64, RuntimeError> {
        let value = self.eval(root);

        match self.diagnostics.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(value),
        }
    }

    fn report(&mut self, error: RuntimeError) -> f64 {
        self.diagnostics.push(error);
        f64::NAN
    }

    fn eval(&mut self, id: NodeId) -> f64 {
        let Some(&node) = self.nodes.get(id) else {
            return self.report(RuntimeError::DetachedNode);
        };

        match node {
            Node::Number { value } => value,

            Node::Identifier { name } => {
                let Some(text) = name.slice(self.source) else {
                    return self.report(RuntimeError::DetachedNode);
                };

                match self.table.get(text) {
                    Some(value) => value,
                    None => self.report(RuntimeError::UnknownVariable {
                        name: text.to_string(),
                    }),
                }
            },

            Node::Unary { op, operand } => {
                let value = self.eval(operand);
                match op.kind {
                    TokenKind::Plus => value,
                    TokenKind::Minus => -value,
                    TokenKind::Bang => functions::factorial(value),
                    _ => f64::NAN,
                }
            },

            Node::Binary { op, left, right } => {
                if op.kind == TokenKind::Equal {
                    return self.eval_assignment(left, right);
                }

                let lhs = self.eval(left);
                let rhs = self.eval(right);

                match op.kind {
                    TokenKind::Plus => lhs + rhs,
                    TokenKind::Minus => lhs - rhs,
                    TokenKind::Star => lhs * rhs,
                    TokenKind::Caret => lhs.powf(rhs),
                    TokenKind::Slash => {
                        if rhs == 0.0 {
                            self.report(RuntimeError::DivisionByZero)
                        } else {
                            lhs / rhs
                        }
                    },
                    _ => f64::NAN,
                }
            },

            Node::Call { callee, argument } => self.eval_call(callee, argument),
        }
    }

    /// Assignment is an expression: the assigned value threads through.
    fn eval_assignment(&mut self, left: NodeId, right: NodeId) -> f64 {
        let Some(&Node::Identifier { name }) = self.nodes.get(left) else {
            // The parser only builds `=` nodes with identifier targets.
            return self.report(RuntimeError::DetachedNode);
        };

        let Some(text) = name.slice(self.source) else {
            return self.report(RuntimeError::DetachedNode);
        };

        let value = self.eval(right);
        if let Err(error) = self.table.set(text, value) {
            return self.report(error);
        }

        value
    }

    fn eval_call(&mut self, callee: NodeId, argument: NodeId) -> f64 {
        let Some(&Node::Identifier { name }) = self.nodes.get(callee) else {
            return self.report(RuntimeError::DetachedNode);
        };

        let Some(text) = name.slice(self.source) else {
            return self.report(RuntimeError::DetachedNode);
        };

        let value = self.eval(argument);
        match functions::lookup(text) {
            Some(function) => function(value),
            None => self.report(RuntimeError::UnknownFunction {
                name: text.to_string(),
            }),
        }
    }
}
