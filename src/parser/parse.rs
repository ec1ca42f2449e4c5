//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type, the
//! lookahead helpers and the [`Parser::parse_program`] entry point.
//!
//! # Parser Architecture
//!
//! The parser pulls tokens from its own [`Lexer`] and keeps exactly two of
//! them in view: `current` and `peek`. Statement rules live in the
//! `statements` module as a separate `impl Parser` block.
//!
//! Parsing is error tolerant. A rule that hits an unexpected token records a
//! [`ParseError`] and gives up on its statement; `parse_program` then moves on
//! one token and keeps going, so the caller always gets a (possibly partial)
//! [`Program`] together with every diagnostic.

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. } => *location,
        }
    }
}

/// Recursive descent statement parser with one token of lookahead
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::default(),
            peek: Token::default(),
            errors: Vec::new(),
        };

        // Fill both current and peek
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse the entire program
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::EndOfInput) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Rendered diagnostic messages, in the order they were recorded.
    pub fn diagnostics(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if `peek` has the expected kind; otherwise record an error and stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError::UnexpectedToken {
            expected,
            actual: self.peek.kind,
            location: self.peek.location,
        });
    }
}
