//! The frontend module contains everything that is concerned with tokenizing and parsing the input string.
//!
//! # Lexer
//! Firstly the lexer converts the input string into a vector of tokens which are defined in the
//! token module. Keywords are recognized with the help of the operation table.
//! ### Example
//! ```rust
//! use clc::frontend::lexer::Lexer;
//! let tokens_or_err = Lexer::new("a : 1;").tokenize();
//! ```
//! `tokenize` either returns an error or a vector containing all tokens.
//!
//! # Parser
//! The parser splits the tokens into statements at every `;`, finds the root of each statement
//! and builds one AST node per statement.
//! ### Example
//! ```rust
//! use clc::frontend::{lexer::Lexer, parser::Parser};
//! let tokens_or_err = Lexer::new("a : 1;\nOUT a;").tokenize();
//! let program = Parser::new(tokens_or_err.unwrap()).parse().unwrap();
//! assert_eq!(program.len(), 2);
//! ```
//! The resulting `frontend::ast::Program` is what a code generator consumes.

pub mod ast;
pub mod lexer;
pub mod operation;
pub mod parser;
pub mod position;
pub mod segmenter;
pub mod token;
