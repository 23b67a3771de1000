use std::fmt;

use super::{ast::RootKind, operation::Operation, position::Position};

/// A single lexeme of a `.cl` source. Tokens are `Copy`: they only borrow
/// from the source text and the operation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub typ: Type<'a>,
    pub pos: Position,
    lexeme: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(typ: Type<'a>, pos: Position, lexeme: &'a str) -> Self {
        Self { typ, pos, lexeme }
    }

    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    /// The keyword entry, if this token is a keyword.
    pub fn operation(&self) -> Option<&'static Operation> {
        match self.typ {
            Type::Keyword(op) => Some(op),
            _ => None,
        }
    }

    /// The production this token governs if it is a statement root: a
    /// definition marker or a keyword flagged as a statement root.
    pub fn root_kind(&self) -> Option<RootKind> {
        match self.typ {
            Type::VarDefMarker => Some(RootKind::VariableDefinition),
            Type::Keyword(op) if op.statement_root => Some(RootKind::Operation(op)),
            _ => None,
        }
    }

    /// Whether the token can be used as an operand.
    pub fn is_operand(&self) -> bool {
        matches!(self.typ, Type::Identifier(_) | Type::Boolean(_))
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {} @ {}>", self.typ, self.lexeme, self.pos)
    }
}

/// Token kind. The payload each kind carries is fixed by the variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Type<'a> {
    /// `:`
    VarDefMarker,
    /// `;`
    EndOfStatement,
    /// `0` or `1`
    Boolean(bool),
    Identifier(&'a str),
    Keyword(&'static Operation),
}

impl<'a> fmt::Display for Type<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::VarDefMarker => write!(f, "VarDefMarker"),
            Type::EndOfStatement => write!(f, "EndOfStatement"),
            Type::Boolean(b) => write!(f, "Boolean({})", b),
            Type::Identifier(name) => write!(f, "Identifier({})", name),
            Type::Keyword(op) => write!(f, "Keyword({})", op.name),
        }
    }
}
