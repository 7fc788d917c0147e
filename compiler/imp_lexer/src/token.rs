//! Public token types.

use std::fmt;

use imp_ir::Span;

/// A lexed token with its source span.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Token kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TokenKind {
    // Keywords
    If,
    Else,
    Return,
    True,
    False,
    IntType,
    BoolType,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Assign,

    // Operators
    Bang,
    Amp,
    Pipe,
    Less,
    Greater,
    Plus,
    Minus,

    // Literals and identifiers
    Int(i64),
    Ident(String),

    /// End of input; always the last token of a lexed stream.
    Eof,
}

impl TokenKind {
    /// Human-readable description, used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::If => "`if`".to_owned(),
            TokenKind::Else => "`else`".to_owned(),
            TokenKind::Return => "`return`".to_owned(),
            TokenKind::True => "`true`".to_owned(),
            TokenKind::False => "`false`".to_owned(),
            TokenKind::IntType => "`int`".to_owned(),
            TokenKind::BoolType => "`bool`".to_owned(),
            TokenKind::LParen => "`(`".to_owned(),
            TokenKind::RParen => "`)`".to_owned(),
            TokenKind::LBrace => "`{`".to_owned(),
            TokenKind::RBrace => "`}`".to_owned(),
            TokenKind::Comma => "`,`".to_owned(),
            TokenKind::Colon => "`:`".to_owned(),
            TokenKind::Assign => "`=`".to_owned(),
            TokenKind::Bang => "`!`".to_owned(),
            TokenKind::Amp => "`&`".to_owned(),
            TokenKind::Pipe => "`|`".to_owned(),
            TokenKind::Less => "`<`".to_owned(),
            TokenKind::Greater => "`>`".to_owned(),
            TokenKind::Plus => "`+`".to_owned(),
            TokenKind::Minus => "`-`".to_owned(),
            TokenKind::Int(value) => format!("integer `{value}`"),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Eof => "end of input".to_owned(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
