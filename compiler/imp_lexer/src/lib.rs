//! Lexer for Imp using logos.
//!
//! Whitespace (including newlines) is insignificant in Imp, so the token
//! stream carries no trivia; `//` line comments are skipped as well. The
//! returned stream always ends with a single [`TokenKind::Eof`] token so
//! the parser never has to special-case running off the end.

mod token;

pub use token::{Token, TokenKind};

use imp_ir::Span;
use logos::Logos;
use thiserror::Error;

/// Raw token from logos, converted to [`TokenKind`] before leaving the crate.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // === Keywords ===
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Type keywords ===
    #[token("int")]
    IntType,
    #[token("bool")]
    BoolType,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("=")]
    Assign,

    // === Operators ===
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // === Literals and identifiers ===
    // A parse failure here (overflow past i64) surfaces as a logos error
    // token and is reported as `IntegerOverflow`.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),
}

/// Lexical error, fatal to the run.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LexError {
    #[error("unrecognized character `{found}`")]
    UnrecognizedCharacter { found: String, span: Span },

    #[error("integer literal `{literal}` does not fit in 64 bits")]
    IntegerOverflow { literal: String, span: Span },
}

impl LexError {
    /// Span of the offending source text.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. } => *span,
            LexError::IntegerOverflow { span, .. } => *span,
        }
    }
}

/// Tokenize `source`, appending a trailing [`TokenKind::Eof`].
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = Span::from(lexer.span());
        let kind = match raw {
            Ok(raw) => convert(raw),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(LexError::IntegerOverflow {
                        literal: slice.to_owned(),
                        span,
                    });
                }
                return Err(LexError::UnrecognizedCharacter {
                    found: slice.to_owned(),
                    span,
                });
            }
        };
        tokens.push(Token { kind, span });
    }

    let end = source.len() as u32;
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(end, end),
    });
    Ok(tokens)
}

fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::IntType => TokenKind::IntType,
        RawToken::BoolType => TokenKind::BoolType,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Less => TokenKind::Less,
        RawToken::Greater => TokenKind::Greater,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Int(value) => TokenKind::Int(value),
        RawToken::Ident(name) => TokenKind::Ident(name),
    }
}
