//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct and the parsing entry points.
//! The parser is a cursor over the token stream plus a shared, read-only
//! set of lookup tables:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, MK_TOKEN,
};

use super::{
    lookups::{Lookups, LOOKUPS},
    stmt::parse_stmt,
};

/// The parsing state for a single parse.
///
/// This struct holds the token stream and the position of the cursor in it.
/// The cursor never moves past the final `EOF` token, so reading the current
/// token is always in bounds.
pub struct Parser<'a> {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    lookups: &'a Lookups,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse; an `EOF` token is appended if missing
    /// * `lookups` - The handler tables to parse with
    pub fn new(mut tokens: Vec<Token>, lookups: &'a Lookups) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF")));
        }

        Parser {
            tokens,
            pos: 0,
            lookups,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// At `EOF` the cursor stays put and `EOF` is returned again.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        let kind = self.current_token_kind();

        if kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind,
                        found: kind,
                    },
                    self.get_position(),
                )
            }));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn lookups(&self) -> &'a Lookups {
        self.lookups
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> Position {
        Position::Token(self.pos)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It parses statements until
/// `EOF` using the process-wide [`LOOKUPS`] tables.
///
/// # Returns
///
/// The root BlockStmt, holding one entry per top-level statement, or the
/// first Error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<BlockStmt, Error> {
    parse_with_lookups(tokens, &LOOKUPS)
}

/// Like [`parse`], but with caller-provided tables.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_lookups(tokens: Vec<Token>, lookups: &Lookups) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens, lookups);
    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;
        tracing::trace!(statement = stmt.variant_name(), "parsed statement");
        body.push(stmt);
    }

    tracing::debug!(statements = body.len(), "parsed program");
    Ok(BlockStmt { body })
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    parse(tokenize(source)?)
}
