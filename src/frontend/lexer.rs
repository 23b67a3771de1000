//! The lexer turns the source code into a sequence of tokens for the statement segmenter.
//!
//! Whitespace is discarded and line breaks carry no meaning. A `;` ends a statement and at
//! the same time starts a comment: everything after it up to and including the next line
//! break is skipped. The lexer stops at the first character it does not recognize.
//!
//! Example:
//! ```rust
//! use clc::frontend::lexer::Lexer;
//! let tokens_or_err = Lexer::new("a : 1; the rest of the line is ignored").tokenize();
//! assert_eq!(tokens_or_err.unwrap().len(), 4);
//! ```

use std::{iter::Peekable, str::CharIndices};

use log::{debug, trace};

use super::{
    operation::OperationTable,
    position::Position,
    token::{Token, Type},
};
use crate::error::LexError;

/// The lexer struct is responsible for the tokenization of the source code.
///
/// It can be driven lazily as an iterator or all at once with `tokenize`.
pub struct Lexer<'a> {
    /// Contains the source code. Used for 'cutting' out lexemes for the tokens.
    source: &'a str,
    /// Peekable iterator over all characters of the source string and their byte offsets.
    chars: Peekable<CharIndices<'a>>,
    /// Keywords recognized by this lexer.
    table: OperationTable,
    /// Current line, starting at 1.
    line: u32,
    /// Column of the last consumed character. 0 right after a line break.
    column: u32,
    /// Set once an error was returned; the iterator is fused afterwards.
    failed: bool,
}

type LexerResult<'a> = Result<Token<'a>, LexError>;

impl<'a> Lexer<'a> {
    /// Create a lexer for the standard keyword set.
    pub fn new(source: &'a str) -> Self {
        Self::with_table(source, OperationTable::standard())
    }

    /// Create a lexer that recognizes the keywords of `table`.
    pub fn with_table(source: &'a str, table: OperationTable) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            table,
            line: 1,
            column: 0,
            failed: false,
        }
    }

    /// Tokenize the whole source string, failing at the first unrecognized character.
    pub fn tokenize(self) -> Result<Vec<Token<'a>>, LexError> {
        let tokens = self.collect::<Result<Vec<_>, _>>()?;
        debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Return the next token, or `None` at the end of the source.
    fn next_token(&mut self) -> Option<LexerResult<'a>> {
        loop {
            let (start, c) = self.advance()?;
            let pos = Position::at(self.line, self.column);
            let token = match c {
                ' ' | '\t' | '\r' => continue,
                '\n' => {
                    self.next_line();
                    continue;
                }
                ':' => self.new_token(Type::VarDefMarker, pos, start, c),
                ';' => {
                    let token = self.new_token(Type::EndOfStatement, pos, start, c);
                    self.skip_comment();
                    token
                }
                '0' => self.new_token(Type::Boolean(false), pos, start, c),
                '1' => self.new_token(Type::Boolean(true), pos, start, c),
                c if c.is_alphabetic() => self.word(start, pos),
                character => return Some(Err(LexError { character, pos })),
            };
            trace!("token {}", token);
            return Some(Ok(token));
        }
    }

    //-------
    // HELPER
    //-------

    /// Convenience function for tokens consisting of the single character `c`.
    fn new_token(&self, typ: Type<'a>, pos: Position, start: usize, c: char) -> Token<'a> {
        Token::new(typ, pos, &self.source[start..start + c.len_utf8()])
    }

    /// Consume the next character and return it with its byte offset.
    fn advance(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next()?;
        self.column += 1;
        Some(next)
    }

    /// Consume characters while the predicate holds. Line breaks are not counted here.
    fn advance_while(&mut self, predicate: &dyn Fn(&char) -> bool) {
        while let Some((_, c)) = self.chars.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    fn next_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    /// Byte offset of the next unconsumed character.
    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some((idx, _)) => *idx,
            None => self.source.len(),
        }
    }

    /// Skip the rest of the line including its line break.
    fn skip_comment(&mut self) {
        self.advance_while(&|c| c != &'\n');
        if self.advance().is_some() {
            self.next_line();
        }
    }

    //----------------------
    // Identifier & keywords
    //----------------------

    /// Scans a name and checks whether it is a known keyword. If not it has to be an identifier.
    fn word(&mut self, start: usize, mut pos: Position) -> Token<'a> {
        self.advance_while(&|c| c.is_alphanumeric());
        let end = self.offset();
        pos.end_column = self.column;
        let lexeme = &self.source[start..end];
        let typ = match self.table.get(lexeme) {
            Some(op) => Type::Keyword(op),
            None => Type::Identifier(lexeme),
        };
        Token::new(typ, pos, lexeme)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexerResult<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.next_token();
        if let Some(Err(_)) = next {
            self.failed = true;
        }
        next
    }
}
