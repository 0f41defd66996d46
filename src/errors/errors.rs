use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The two stages that can reject a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "LexError"),
            ErrorKind::Parse => write!(f, "ParseError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human readable message, without location.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    /// Line the error was raised on. Only lex errors know it.
    pub fn line(&self) -> Option<u32> {
        match self.position {
            Position::Source { line, .. } => Some(line),
            Position::Token(_) => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::MalformedNumber { .. } => ErrorKind::Lex,
            _ => ErrorKind::Parse,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedType { .. } => "ExpectedType",
            ErrorImpl::MissingInfixHandler { .. } => "MissingInfixHandler",
            ErrorImpl::MissingTypeOrInitializer { .. } => "MissingTypeOrInitializer",
            ErrorImpl::MissingInitializer { .. } => "MissingInitializer",
            ErrorImpl::ExpectedCallAfterNew { .. } => "ExpectedCallAfterNew",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found,
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                found
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to the string literal"))
            }
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, identifiers cannot start with a digit",
                token
            )),
            ErrorImpl::MissingTypeOrInitializer { identifier } => ErrorTip::Suggestion(format!(
                "Give `{}` an explicit type (`: type`) or an initial value (`= value`)",
                identifier
            )),
            ErrorImpl::MissingInitializer { identifier } => ErrorTip::Suggestion(format!(
                "Constant `{}` must be given a value when it is declared",
                identifier
            )),
            ErrorImpl::MissingInfixHandler { .. } => ErrorTip::Suggestion(String::from(
                "A binding power is registered without an infix handler; this is a bug in the parser tables",
            )),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.kind(), self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },

    // Parsing
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("expected type, found {found}")]
    ExpectedType { found: TokenKind },
    #[error("no infix handler registered for {kind}")]
    MissingInfixHandler { kind: TokenKind },
    #[error("missing type or initializer for {identifier:?}")]
    MissingTypeOrInitializer { identifier: String },
    #[error("missing initializer for constant {identifier:?}")]
    MissingInitializer { identifier: String },
    #[error("expected call expression after new, found {found}")]
    ExpectedCallAfterNew { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
