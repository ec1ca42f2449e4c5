//! # Introduction
//!
//! `monkey-front` is the front end of a small toolchain for the Monkey
//! language: a hand-written lexer, an error-tolerant statement parser, and a
//! terminal inspector that shows the token stream and syntax tree side by side
//! with the source.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program + diagnostics → TUI
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds the AST, collecting
//!    diagnostics instead of stopping at the first error.
//! 2. [`object`] — the value model an evaluator produces.
//! 3. [`ui`] — ratatui-based inspector; not part of the stable library API.
//!
//! ```
//! let (program, errors) = monkey_front::parse("let x = 5;\nreturn x;");
//! assert_eq!(program.len(), 2);
//! assert!(errors.is_empty());
//! ```

pub mod object;
pub mod parser;
pub mod ui;

use parser::ast::Program;
use parser::parse::{ParseError, Parser};

/// Parse `source` into a program plus every diagnostic recorded on the way.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
