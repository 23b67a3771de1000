//! Diagnostics produced by the compiler. Every message has the form
//! `ERROR: <message> (<a>:<b>)`.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::frontend::position::Position;

/// An unrecognized character outside of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR: unrecognized character '{character}' ({pos})")]
pub struct LexError {
    pub character: char,
    pub pos: Position,
}

/// Structural grammar violations. `statement` is the 1-based ordinal of the
/// statement, `index` the 1-based position of the offending token in it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("ERROR: no root in statement {statement}")]
    NoRoot { statement: usize },
    #[error("ERROR: multiple roots in same statement ({statement}:{index})")]
    MultipleRoots { statement: usize, index: usize },
    #[error("ERROR: expected name before definition ({statement}:{index})")]
    ExpectedNameBeforeDefinition { statement: usize, index: usize },
    #[error("ERROR: {operation} expects {expected} argument(s), found {found} ({statement}:{index})")]
    ArityMismatch {
        statement: usize,
        index: usize,
        operation: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("ERROR: expected {expected} as argument of {operation} ({statement}:{index})")]
    InvalidArgument {
        statement: usize,
        index: usize,
        operation: &'static str,
        expected: &'static str,
    },
    /// A token in front of the root other than the defined name. The original
    /// `clc` tool ignored these; here a statement must start with its name or
    /// its keyword.
    #[error("ERROR: unexpected token before root ({statement}:{index})")]
    UnexpectedToken { statement: usize, index: usize },
    /// `index` is the last token of the statement, where the `;` is missing.
    #[error("ERROR: missing ';' after statement {statement} on line {line} ({statement}:{index})")]
    UnterminatedStatement {
        statement: usize,
        index: usize,
        line: u32,
    },
}

/// Invalid command line configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No source path was given.
    #[error("ERROR: source file not specified")]
    MissingSource,
    #[error("ERROR: wrong source file extension, expected '.cl': {}", .0.display())]
    WrongSourceExtension(PathBuf),
    #[error("ERROR: wrong output file extension, expected '.asm': {}", .0.display())]
    WrongOutputExtension(PathBuf),
}

/// Every error the compiler can terminate with.
#[derive(Debug, Error)]
pub enum ClcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("{}", Diagnostics(.0))]
    Multiple(Vec<SyntaxError>),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("ERROR: could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One diagnostic per line.
struct Diagnostics<'e>(&'e [SyntaxError]);

impl<'e> fmt::Display for Diagnostics<'e> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LexError {
            character: '$',
            pos: Position::at(1, 3),
        };
        assert_eq!(err.to_string(), "ERROR: unrecognized character '$' (1:3)");
        let err = SyntaxError::MultipleRoots {
            statement: 1,
            index: 4,
        };
        assert_eq!(
            err.to_string(),
            "ERROR: multiple roots in same statement (1:4)"
        );
        assert_eq!(
            SyntaxError::NoRoot { statement: 2 }.to_string(),
            "ERROR: no root in statement 2"
        );
        assert_eq!(
            SyntaxError::ArityMismatch {
                statement: 3,
                index: 1,
                operation: "OUT",
                expected: 1,
                found: 0
            }
            .to_string(),
            "ERROR: OUT expects 1 argument(s), found 0 (3:1)"
        );
        let err = SyntaxError::UnterminatedStatement {
            statement: 2,
            index: 2,
            line: 5,
        };
        assert_eq!(
            err.to_string(),
            "ERROR: missing ';' after statement 2 on line 5 (2:2)"
        );
    }

    #[test]
    fn test_multiple() {
        let err = ClcError::Multiple(vec![
            SyntaxError::NoRoot { statement: 1 },
            SyntaxError::ExpectedNameBeforeDefinition {
                statement: 3,
                index: 1,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "ERROR: no root in statement 1\nERROR: expected name before definition (3:1)"
        );
    }
}
