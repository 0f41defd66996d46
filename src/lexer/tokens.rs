use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("class", TokenKind::Class);
        map.insert("new", TokenKind::New);
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("foreach", TokenKind::Foreach);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("export", TokenKind::Export);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("in", TokenKind::In);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    DotDot,
    Semicolon,
    Colon,
    Question,
    NullishAssignment, // ??=
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Let,
    Const,
    Class,
    New,
    Import,
    From,
    Fn,
    Return,
    If,
    Else,
    Foreach,
    While,
    For,
    Export,
    Typeof,
    In,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_value() {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{} ()", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Literals and identifiers are the only tokens whose text is not implied by their kind.
    pub fn carries_value(&self) -> bool {
        self.is_one_of_many(&[TokenKind::String, TokenKind::Identifier, TokenKind::Number])
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
