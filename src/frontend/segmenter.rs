//! Splits a token sequence into statements at `;` tokens.

use log::{debug, warn};

use super::token::{Token, Type};
use crate::{config::SegmentMode, error::SyntaxError};

/// A non-empty run of tokens between two `;`. The terminating `;` is not part of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statement<'t, 'a> {
    /// 1-based number of the statement in the source.
    pub ordinal: usize,
    pub tokens: &'t [Token<'a>],
}

impl<'t, 'a> Statement<'t, 'a> {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Statements split off a token sequence, plus the tokens after the last `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments<'t, 'a> {
    pub statements: Vec<Statement<'t, 'a>>,
    pub unterminated: Option<Statement<'t, 'a>>,
}

impl<'t, 'a> Segments<'t, 'a> {
    /// Fails on an unterminated trailing statement in strict mode. In lenient
    /// mode the trailing tokens are ignored.
    pub fn check(&self, mode: SegmentMode) -> Result<(), SyntaxError> {
        let trailing = match &self.unterminated {
            Some(trailing) => trailing,
            None => return Ok(()),
        };
        let first = &trailing.tokens[0];
        match mode {
            SegmentMode::Strict => Err(SyntaxError::UnterminatedStatement {
                statement: trailing.ordinal,
                index: trailing.len(),
                line: first.pos.line,
            }),
            SegmentMode::Lenient => {
                warn!(
                    "dropping unterminated statement {} starting at {}",
                    trailing.ordinal, first.pos
                );
                Ok(())
            }
        }
    }
}

/// Split `tokens` at every `;`. Empty statements (two `;` in a row or a
/// comment-only line) are skipped and do not count towards the ordinals.
pub fn split<'t, 'a>(tokens: &'t [Token<'a>]) -> Segments<'t, 'a> {
    let mut statements = Vec::new();
    let mut start = 0;
    for (idx, token) in tokens.iter().enumerate() {
        if token.typ != Type::EndOfStatement {
            continue;
        }
        if idx > start {
            statements.push(Statement {
                ordinal: statements.len() + 1,
                tokens: &tokens[start..idx],
            });
        }
        start = idx + 1;
    }

    let unterminated = if start < tokens.len() {
        Some(Statement {
            ordinal: statements.len() + 1,
            tokens: &tokens[start..],
        })
    } else {
        None
    };
    debug!("segmented {} statements", statements.len());
    Segments {
        statements,
        unterminated,
    }
}

/// Split `tokens` into statements, handling a trailing unterminated statement
/// according to `mode`.
pub fn segment<'t, 'a>(
    tokens: &'t [Token<'a>],
    mode: SegmentMode,
) -> Result<Vec<Statement<'t, 'a>>, SyntaxError> {
    let segments = split(tokens);
    segments.check(mode)?;
    Ok(segments.statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::lexer::Lexer;

    fn lex(src: &'static str) -> Vec<Token<'static>> {
        Lexer::new(src).tokenize().unwrap()
    }

    fn lexemes(statement: &Statement<'_, 'static>) -> Vec<&'static str> {
        statement.tokens.iter().map(|t| t.lexeme()).collect()
    }

    #[test]
    fn test_boundaries() {
        let tokens = lex("a : 1; first\nb : 0;\n\nOUT a;");
        let statements = segment(&tokens, SegmentMode::Strict).unwrap();
        assert_eq!(statements.len(), 3);
        assert_eq!(lexemes(&statements[0]), vec!["a", ":", "1"]);
        assert_eq!(lexemes(&statements[1]), vec!["b", ":", "0"]);
        assert_eq!(lexemes(&statements[2]), vec!["OUT", "a"]);
        assert_eq!(
            statements.iter().map(|s| s.ordinal).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_statements_span_lines() {
        let tokens = lex("a\n:\n1;");
        let statements = segment(&tokens, SegmentMode::Strict).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].len(), 3);
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let tokens = lex("; header comment\na : 1;\n;;\nOUT a;");
        let statements = segment(&tokens, SegmentMode::Strict).unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].ordinal, 2);
        assert_eq!(lexemes(&statements[1]), vec!["OUT", "a"]);
    }

    #[test]
    fn test_unterminated() {
        let tokens = lex("a : 1;\nOUT a");
        assert_eq!(
            segment(&tokens, SegmentMode::Strict),
            Err(SyntaxError::UnterminatedStatement {
                statement: 2,
                index: 2,
                line: 2,
            })
        );
        let statements = segment(&tokens, SegmentMode::Lenient).unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(lexemes(&statements[0]), vec!["a", ":", "1"]);

        let segments = split(&tokens);
        let trailing = segments.unterminated.unwrap();
        assert_eq!(trailing.ordinal, 2);
        assert_eq!(lexemes(&trailing), vec!["OUT", "a"]);
    }

    #[test]
    fn test_empty() {
        assert!(segment(&[], SegmentMode::Strict).unwrap().is_empty());
    }
}
