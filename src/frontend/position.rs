//! Source positions attached to every token for diagnostics.

use std::fmt::{Display, Formatter, Result};

/// Position of a `Token` in the source code. Lines and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.line, self.start_column)
    }
}

impl Position {
    pub fn new(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            line,
            start_column,
            end_column,
        }
    }

    /// Position of a single character.
    pub fn at(line: u32, column: u32) -> Self {
        Self::new(line, column, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7, 9).to_string(), "3:7");
        assert_eq!(Position::at(1, 1), Position::new(1, 1, 1));
    }
}
