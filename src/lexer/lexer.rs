use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    /// Recognizers tried in order against the unconsumed input; the first match wins,
    /// so longer operators must come before their single character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", skip_handler),
        pattern(r"^//[^\n]*\n?", comment_handler),
        pattern(r#"^"[^"]*""#, string_handler),
        pattern(r#"^""#, unterminated_string_handler),
        pattern(r"^[0-9]+(\.[0-9]+)?", number_handler),
        pattern(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern(r"^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern(r"^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern(r"^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern(r"^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(r"^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern(r"^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern(r"^\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern(r"^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern(r"^\.\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..")),
        pattern(r"^\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(r"^\?\?=", MK_DEFAULT_HANDLER!(TokenKind::NullishAssignment, "??=")),
        pattern(r"^\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(r"^\+\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        pattern(r"^--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        pattern(r"^\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        pattern(r"^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        pattern(r"^\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=")),
        pattern(r"^/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=")),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern(r"^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern(r"^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position::Source {
            offset: self.pos,
            line: self.line,
        }
    }

    fn matched(&self, regex: &Regex) -> &'a str {
        regex.find(self.remainder()).map_or("", |found| found.as_str())
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());
    Ok(())
}

fn comment_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    if matched.ends_with('\n') {
        lexer.line += 1;
    }
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let string_literal = &matched[1..matched.len() - 1];

    lexer.push(MK_TOKEN!(TokenKind::String, String::from(string_literal)));
    // Strings may span lines
    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.get_position()))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let rest = &lexer.remainder()[matched.len()..];

    if rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        let tail_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());

        return Err(Error::new(
            ErrorImpl::MalformedNumber {
                token: format!("{}{}", matched, &rest[..tail_len]),
            },
            lexer.get_position(),
        ));
    }

    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched)));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);

    if let Some(kind) = RESERVED_LOOKUP.get(value) {
        lexer.push(MK_TOKEN!(*kind, String::from(value)));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(value)));
    }

    lexer.advance_n(value.len());
    Ok(())
}

/// Converts source text into a token stream terminated by a single `EOF` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().map(String::from).unwrap_or_default(),
                    },
                    lex.get_position(),
                ))
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF")));
    tracing::debug!(tokens = lex.tokens.len(), lines = lex.line, "tokenized source");

    Ok(lex.tokens)
}
