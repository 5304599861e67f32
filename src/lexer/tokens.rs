use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("extern", TokenKind::Extern);
        map.insert("static", TokenKind::Static);
        map.insert("auto", TokenKind::Auto);
        map.insert("return", TokenKind::Return);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("loop", TokenKind::Loop);
        map
    };
}

lazy_static! {
    /// The language's fixed base type names. Checked after the reserved
    /// words and before falling back to a generic identifier.
    pub static ref BASE_TYPES: HashSet<&'static str> = {
        let mut set = HashSet::new();
        // unsigned integers
        set.insert("u8");
        set.insert("u16");
        set.insert("u32");
        set.insert("u64");
        // signed integers
        set.insert("i8");
        set.insert("i16");
        set.insert("i32");
        set.insert("i64");
        // floating points
        set.insert("f32");
        set.insert("f64");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    BaseType,

    /// Produced for characters no rule matches; never matches any
    /// grammar production.
    Error,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Semicolon,

    Assignment, // =
    Equals,     // ==
    Not,        // ~
    NotEquals,  // ~=

    Greater,
    Less,
    // Accepted by the comparison level but never produced by the lexer:
    // only `==` and `~=` get two-character lookahead.
    GreaterEquals,
    LessEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    // Reserved
    Extern,
    Static,
    Auto,
    Return,
    Fun,
    If,
    Else,
    Loop,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::BaseType,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
