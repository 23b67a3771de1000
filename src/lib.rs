//! Front end of the `clc` compiler for `.cl` boolean circuit descriptions.
//!
//! ```rust
//! use clc::{compile, config::ParseOptions};
//! let program = compile("a : 1; a is high\nOUT a;", ParseOptions::default()).unwrap();
//! assert_eq!(program.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod frontend;

use config::ParseOptions;
use error::ClcError;
use frontend::{ast::Program, lexer::Lexer, parser::Parser};

/// Lex and parse a whole source buffer.
pub fn compile(source: &str, options: ParseOptions) -> Result<Program<'_>, ClcError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::with_options(tokens, options).parse()
}
