//! Monkey source code front end
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds, keyword table and source locations
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, lookahead and error types (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Grammar
//!
//! - Tokens: identifiers, integers, strings, `= + - ! * / < > == !=`, `, ; ( ) { }`
//!   and the keywords `fn let true false if else return`
//! - Statements: `let <name> = ...;` and `return ...;`
//! - Expressions are not parsed yet; statement values are skipped up to `;`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;
