//! AST (Abstract Syntax Tree) definitions
//!
//! Statements and expressions are closed sum types. Every node keeps the
//! [`Token`] that introduced it, so [`Node::token_literal`] and the token's
//! location are always available to diagnostics and to later stages.
//!
//! The statement grammar currently produces only [`LetStatement`] and
//! [`ReturnStatement`], and neither carries a parsed value yet: the parser
//! skips the value tokens up to the terminating `;`. `value` is therefore
//! always `None` coming out of the parser; it is an `Option` so that later
//! stages and hand-built trees can fill it.

use super::token::{SourceLocation, Token};
use std::fmt;

/// Common surface of every syntax node.
pub trait Node: fmt::Display {
    /// Literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;
}

/// Root node: statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => &stmt.token,
            Statement::Return(stmt) => &stmt.token,
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.token().location
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => fmt::Display::fmt(stmt, f),
            Statement::Return(stmt) => fmt::Display::fmt(stmt, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
}

impl Expression {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expression::Identifier(ident) => ident.token.location,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => fmt::Display::fmt(ident, f),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token, // 'let'
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token, // 'return'
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Self { token, name }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::new(
            TokenKind::Identifier,
            name,
            SourceLocation::default(),
        ))
    }

    #[test]
    fn test_program_display() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: Token::new(TokenKind::Let, "let", SourceLocation::new(1, 1)),
                name: ident("myVar"),
                value: Some(Expression::Identifier(ident("anotherVar"))),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_missing_values_display_empty() {
        let let_stmt = LetStatement {
            token: Token::new(TokenKind::Let, "let", SourceLocation::new(1, 1)),
            name: ident("x"),
            value: None,
        };
        let ret_stmt = ReturnStatement {
            token: Token::new(TokenKind::Return, "return", SourceLocation::new(2, 1)),
            value: None,
        };

        assert_eq!(let_stmt.to_string(), "let x = ;");
        assert_eq!(ret_stmt.to_string(), "return ;");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();

        assert!(program.is_empty());
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}
