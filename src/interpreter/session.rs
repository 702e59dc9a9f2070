use crate::{
    arena::Arena,
    ast::{self, Node, NodeId},
    error::{AllocError, ParseError, RuntimeError},
    interpreter::{environment::SymbolTable, evaluator::Evaluator, parser::Parser},
};

/// Default node arena capacity: generous for a single line of input.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// One parser/environment pair, used sequentially, one expression at a time.
///
/// A session owns the transient node arena, the stored source line the
/// arena's spans resolve against, and the persistent symbol table. The
/// caller sequences it: parse fully, evaluate, then [`Session::reset`]
/// before the next independent input. Evaluating a tree after a reset (or
/// after a newer parse has replaced the stored line) fails with a
/// detached-node error instead of reading stale state.
///
/// # Examples
/// ```
/// use numera::interpreter::session::Session;
///
/// let mut session = Session::new().unwrap();
///
/// let root = session.parse("x = 5").unwrap();
/// assert_eq!(session.evaluate(root).unwrap(), 5.0);
/// session.reset();
///
/// let root = session.parse("x + 1").unwrap();
/// assert_eq!(session.evaluate(root).unwrap(), 6.0);
/// ```
pub struct Session {
    source: String,
    nodes: Arena<Node>,
    table: SymbolTable,
}

impl Session {
    /// Creates a session with the default node capacity.
    ///
    /// # Errors
    /// `AllocError` if either backing arena cannot be created; the caller
    /// treats this as unrecoverable.
    pub fn new() -> Result<Self, AllocError> {
        Self::with_capacity(DEFAULT_NODE_CAPACITY)
    }

    /// Creates a session whose node arena holds up to `nodes` entries.
    ///
    /// # Errors
    /// `AllocError` if either backing arena cannot be created.
    pub fn with_capacity(nodes: usize) -> Result<Self, AllocError> {
        Ok(Self {
            source: String::new(),
            nodes: Arena::with_capacity(nodes)?,
            table: SymbolTable::new()?,
        })
    }

    /// Parses one line into an AST rooted at the returned node.
    ///
    /// The line is stored in the session so node spans remain resolvable
    /// until the next call. The environment is never touched here; an
    /// assignment only takes effect during [`Session::evaluate`].
    ///
    /// # Errors
    /// A [`ParseError`] describing the first failure; no partial tree is
    /// returned.
    pub fn parse(&mut self, text: &str) -> Result<NodeId, ParseError> {
        // Spans in earlier trees point into the line being replaced; their
        // roots must go stale along with it.
        self.nodes.invalidate();
        self.source.clear();
        self.source.push_str(text);

        Parser::new(&self.source, &mut self.nodes).parse()
    }

    /// Evaluates a tree produced by this session's most recent successful
    /// [`Session::parse`].
    ///
    /// # Errors
    /// The first [`RuntimeError`] the walk records, including
    /// [`RuntimeError::DetachedNode`] if `root` predates the last reset.
    pub fn evaluate(&mut self, root: NodeId) -> Result<f64, RuntimeError> {
        Evaluator::new(&self.source, &self.nodes, &mut self.table).run(root)
    }

    /// Clears the transient node arena between independent inputs.
    ///
    /// Variables persist; every node handle issued so far goes stale.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    /// Read-only snapshot of the variable table for display.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.table.iter()
    }

    /// Renders a tree in parenthesized prefix form, or `None` if any of its
    /// nodes have gone stale.
    #[must_use]
    pub fn render_ast(&self, root: NodeId) -> Option<String> {
        ast::render(&self.nodes, &self.source, root)
    }
}
