//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while lexing and parsing. It includes:
//!
//! - Error structures with the position the error was raised at
//! - Specific error variants for the lexing and parsing stages
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
