//! Abstract syntax tree datastructures.
//!
//! The language has no nested expressions yet, so the tree is flat: a `Program`
//! is the list of nodes, one per statement, in source order.

use std::{fmt, ops::Index, slice};

use super::{operation::Operation, token::Token};

/// The grammar production a statement instantiates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootKind {
    /// `<name> : <value> ;`
    VariableDefinition,
    /// `<keyword> <arguments> ;`
    Operation(&'static Operation),
}

/// One parsed statement. Only the parser can build nodes, and only after all
/// checks on the statement have passed.
#[derive(Debug, Clone, PartialEq)]
pub struct AstNode<'a> {
    root_kind: RootKind,
    root: Token<'a>,
    target: Option<Token<'a>>,
    arguments: Vec<Token<'a>>,
    value: Vec<Token<'a>>,
}

impl<'a> AstNode<'a> {
    pub(crate) fn definition(root: Token<'a>, name: Token<'a>, value: Vec<Token<'a>>) -> Self {
        Self {
            root_kind: RootKind::VariableDefinition,
            root,
            target: Some(name),
            arguments: vec![name],
            value,
        }
    }

    pub(crate) fn operation(
        op: &'static Operation,
        root: Token<'a>,
        target: Option<Token<'a>>,
        arguments: Vec<Token<'a>>,
    ) -> Self {
        Self {
            root_kind: RootKind::Operation(op),
            root,
            target,
            arguments,
            value: Vec::new(),
        }
    }

    pub fn root_kind(&self) -> RootKind {
        self.root_kind
    }

    /// The `:` or keyword token governing the statement.
    pub fn root(&self) -> &Token<'a> {
        &self.root
    }

    /// The identifier being defined or output, if any.
    pub fn target(&self) -> Option<&Token<'a>> {
        self.target.as_ref()
    }

    /// Positional arguments followed by flag arguments. For a definition this
    /// is the defined name.
    pub fn arguments(&self) -> &[Token<'a>] {
        &self.arguments
    }

    /// Tokens after the `:` of a definition. Empty for operations.
    pub fn value(&self) -> &[Token<'a>] {
        &self.value
    }
}

impl<'a> fmt::Display for AstNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root_kind {
            RootKind::VariableDefinition => {
                write!(f, "Def({}", self.arguments[0].lexeme())?;
                for token in &self.value {
                    write!(f, " {}", token.lexeme())?;
                }
                write!(f, ")")
            }
            RootKind::Operation(op) => {
                write!(f, "{}(", op.name)?;
                for (i, token) in self.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", token.lexeme())?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The parse result handed to the code generator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program<'a> {
    nodes: Vec<AstNode<'a>>,
}

impl<'a> Program<'a> {
    pub(crate) fn new(nodes: Vec<AstNode<'a>>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[AstNode<'a>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, AstNode<'a>> {
        self.nodes.iter()
    }
}

impl<'a> Index<usize> for Program<'a> {
    type Output = AstNode<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<'p, 'a> IntoIterator for &'p Program<'a> {
    type Item = &'p AstNode<'a>;
    type IntoIter = slice::Iter<'p, AstNode<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<'a> fmt::Display for Program<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}
