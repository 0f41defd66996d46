//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered list of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line counting for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
