//! Parser for Imp.
//!
//! Builds an [`imp_ir::Function`] from a lexed token stream. One source
//! file is one function; the body is a flat sequence of assignments and
//! `if`/`else` conditionals terminated by a single `return`.
//!
//! # Grammar
//!
//! ```text
//! function := ident "(" params? ")" ":" type "{" stmt* "return" expr "}"
//! params   := type ident ("," type ident)*
//! type     := "int" | "bool"
//! stmt     := ident "=" expr
//!           | "if" "(" expr ")" block ("else" block)?
//! block    := "{" stmt* "}"
//! expr     := or
//! or       := and ("|" or)?
//! and      := cmp ("&" and)?
//! cmp      := add (("<" | ">") add)*
//! add      := unary (("+" | "-") add)?
//! unary    := "!" unary | primary
//! primary  := int | "true" | "false" | ident | "(" expr ")"
//! ```
//!
//! Binary chains associate to the RIGHT (`or`, `and`, and `add` recurse on
//! their own level): `x + y + x - 42` parses as `x + (y + (x - 42))`. The
//! rendered output of symbolic execution exposes this shape verbatim, so
//! it is part of the compatibility surface, not a private parsing detail.

mod cursor;
mod error;
mod grammar;

pub use error::ParseError;

use imp_ir::Function;
use imp_lexer::Token;

use cursor::Cursor;

/// Parse a lexed token stream into a function.
///
/// The stream must end with [`imp_lexer::TokenKind::Eof`], as produced by
/// [`imp_lexer::lex`]. No semantic validation happens here; names and
/// sorts are checked downstream by `imp_typeck`.
pub fn parse(tokens: &[Token]) -> Result<Function, ParseError> {
    let mut cursor = Cursor::new(tokens);
    let function = grammar::function(&mut cursor)?;
    cursor.expect_eof()?;
    Ok(function)
}
