//! Lexer (tokenizer) for Monkey source code
//!
//! Produces [`Token`]s on demand from a borrowed source string. The lexer never
//! fails: bytes it cannot classify come back as [`TokenKind::Illegal`] tokens
//! and the parser decides what to do with them.
//!
//! Input is scanned byte by byte. Only ASCII letters start identifiers and
//! only ASCII digits start integers; anything else outside the operator set
//! is illegal, one token per byte.
//!
//! A string literal runs from `"` to the next `"`. There are no escape
//! sequences, and an unterminated string simply ends at end of input with
//! whatever text was captured.

use super::token::{lookup_identifier, SourceLocation, Token, TokenKind};

/// Pull-based lexer over a borrowed source string
pub struct Lexer<'a> {
    input: &'a [u8],
    /// Index of the byte in `ch`
    position: usize,
    /// Index of the next byte to read
    read_position: usize,
    /// Byte under examination, `0` once the input is exhausted
    ch: u8,
    line: usize,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input: input.as_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
            line: 1,
            line_start: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Scan the next token. Returns `EndOfInput` forever once the input is used up.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();

        if self.is_at_end() {
            return Token::new(TokenKind::EndOfInput, "", loc);
        }

        match self.ch {
            b'=' => self.one_or_two(TokenKind::Assign, TokenKind::Equal, loc),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEqual, loc),
            b'"' => self.string_literal(loc),
            ch if ch.is_ascii_alphabetic() => {
                let ident = self.read_while(|c| c.is_ascii_alphabetic());
                Token::new(lookup_identifier(&ident), ident, loc)
            }
            ch if ch.is_ascii_digit() => {
                let digits = self.read_while(|c| c.is_ascii_digit());
                Token::new(TokenKind::Integer, digits, loc)
            }
            ch => {
                let kind = TokenKind::from_punct(ch).unwrap_or(TokenKind::Illegal);
                let literal = self.slice(self.position, self.read_position);
                self.read_char();
                Token::new(kind, literal, loc)
            }
        }
    }

    /// Tokenize the remaining input, ending with exactly one `EndOfInput`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::EndOfInput);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// `=`/`==` and `!`/`!=`: the two-byte form wins when the next byte is `=`.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind, loc: SourceLocation) -> Token {
        let start = self.position;
        let kind = if self.peek_char() == b'=' {
            self.read_char();
            double
        } else {
            single
        };
        self.read_char();
        Token::new(kind, self.slice(start, self.position), loc)
    }

    fn string_literal(&mut self, loc: SourceLocation) -> Token {
        let start = self.position + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.is_at_end() {
                break;
            }
        }

        let literal = self.slice(start, self.position);

        // consume closing quote
        if !self.is_at_end() {
            self.read_char();
        }

        Token::new(TokenKind::StringLiteral, literal, loc)
    }

    /// Consume a maximal run of bytes matching `pred`, starting at the current byte.
    fn read_while(&mut self, pred: impl Fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.is_at_end() && pred(self.ch) {
            self.read_char();
        }
        self.slice(start, self.position)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Advance to next byte
    fn read_char(&mut self) {
        if self.position < self.input.len() && self.ch == b'\n' {
            self.line += 1;
            self.line_start = self.read_position;
        }

        if self.read_position >= self.input.len() {
            self.ch = 0;
            self.position = self.input.len();
        } else {
            self.ch = self.input[self.read_position];
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.input.get(self.read_position).copied().unwrap_or(0)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn slice(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.position - self.line_start + 1)
    }
}
