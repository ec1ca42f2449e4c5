//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement  ::= let_stmt | return_stmt
//! let_stmt   ::= 'let' IDENT '=' <tokens> ';'
//! return_stmt ::= 'return' <tokens> ';'
//! ```
//!
//! Values are not parsed into expressions yet. Both rules skip forward to the
//! next `;` (or end of input) and leave `value` empty. Any token that does not
//! start a statement is skipped by [`Parser::parse_program`].
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse a statement starting at `current`
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => None,
        }
    }

    /// Parse let statement
    pub(crate) fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }

        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.skip_to_semicolon();

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Parse return statement
    pub(crate) fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.current.clone();

        self.next_token();
        self.skip_to_semicolon();

        Some(ReturnStatement { token, value: None })
    }

    /// Leave `current` on the next `;`, or on end of input if there is none.
    fn skip_to_semicolon(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::EndOfInput) {
            self.next_token();
        }
    }
}
