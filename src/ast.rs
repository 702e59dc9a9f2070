use std::fmt::Write;

use crate::arena::{Arena, Handle};
use crate::interpreter::token::{Span, Token};

/// Handle to a [`Node`] in a session's node arena.
pub type NodeId = Handle<Node>;

/// An abstract syntax tree (AST) node representing one expression form.
///
/// Nodes are owned exclusively by the arena that allocated them; children
/// are referenced by [`NodeId`] into the same arena and are never freed
/// individually; the whole arena is cleared at once between inputs.
/// Identifier names are spans into the session's stored source line, not
/// owned strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Span of the name in the source line.
        name: Span,
    },
    /// A unary operation: prefix `+`/`-` or postfix `!`.
    Unary {
        /// The operator token.
        op: Token,
        /// The operand.
        operand: NodeId,
    },
    /// A binary operation, including assignment.
    Binary {
        /// The operator token.
        op: Token,
        /// Left operand.
        left: NodeId,
        /// Right operand.
        right: NodeId,
    },
    /// Function application, e.g. `sin(x)`.
    Call {
        /// The callee; always an [`Node::Identifier`] by construction.
        callee: NodeId,
        /// The single argument.
        argument: NodeId,
    },
}

/// Renders a tree in parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
///
/// Returns `None` if any node handle is stale or a span no longer resolves
/// against `source`.
#[must_use]
pub fn render(nodes: &Arena<Node>, source: &str, root: NodeId) -> Option<String> {
    let mut out = String::new();
    write_node(&mut out, nodes, source, root)?;
    Some(out)
}

fn write_node(out: &mut String, nodes: &Arena<Node>, source: &str, id: NodeId) -> Option<()> {
    match *nodes.get(id)? {
        Node::Number { value } => write!(out, "{value}").ok()?,

        Node::Identifier { name } => out.push_str(name.slice(source)?),

        Node::Unary { op, operand } => {
            out.push('(');
            out.push_str(op.lexeme(source)?);
            out.push(' ');
            write_node(out, nodes, source, operand)?;
            out.push(')');
        },

        Node::Binary { op, left, right } => {
            out.push('(');
            out.push_str(op.lexeme(source)?);
            out.push(' ');
            write_node(out, nodes, source, left)?;
            out.push(' ');
            write_node(out, nodes, source, right)?;
            out.push(')');
        },

        Node::Call { callee, argument } => {
            out.push('(');
            write_node(out, nodes, source, callee)?;
            out.push(' ');
            write_node(out, nodes, source, argument)?;
            out.push(')');
        },
    }

    Some(())
}
