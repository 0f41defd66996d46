#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Where an error was raised.
///
/// The lexer knows where it is in the source text; the parser only knows
/// which token it was looking at, since tokens carry no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Source { offset: usize, line: u32 },
    Token(usize),
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Source { line, .. } => write!(f, "line {}", line),
            Position::Token(index) => write!(f, "token {}", index),
        }
    }
}

/// Finds the line containing the byte `offset`.
///
/// Returns the 1-based line number, the text of the line (without its line
/// terminator) and the offset of `offset` within that line.
pub fn get_line_at_offset(source: &str, offset: usize) -> Option<(usize, &str, usize)> {
    if offset > source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return Some((index + 1, line.trim_end_matches(&['\n', '\r'][..]), offset - start));
        }

        start = end;
    }

    // Offset sits at the very end of the input
    let line_number = source.matches('\n').count() + 1;
    let last_line = source.rsplit('\n').next().unwrap_or("");
    Some((line_number, last_line, last_line.len()))
}


/// Renders an error the way the command line shows it.
///
/// Lex errors point at the offending character:
///
/// ```text
/// Error: UnrecognisedToken (unrecognised token: "#")
/// -> main.lang
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = match error.get_tip() {
        ErrorTip::None => format!("Error: {} ({})", error.get_error_name(), error.message()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };
    output.push_str(&format!("\n-> {}", file));

    let Position::Source { offset, .. } = *error.get_position() else {
        output.push_str(&format!(" (at {})", error.get_position()));
        return output;
    };

    let Some((line, line_text, line_pos)) = get_line_at_offset(source, offset) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("\n{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("\n{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("\n{:>padding$} {:->arrows$}", "|", "^"));

    output
}

/// Prints [`render_error`] to standard error.
pub fn display_error(error: &Error, source: &str, file: &str) {
    eprintln!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();
    (&string[start..], start)
}
