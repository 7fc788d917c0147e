//! Token cursor for navigating the token stream.

use imp_ir::Span;
use imp_lexer::{Token, TokenKind};

use crate::ParseError;

/// Cursor over a lexed token stream.
///
/// Invariant: the stream ends with `Eof` and the position never moves past
/// it, so `current()` is always valid.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current token.
    pub(crate) fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Kind of the current token.
    pub(crate) fn peek(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// Span of the current token.
    pub(crate) fn span(&self) -> Span {
        self.current().span
    }

    /// Consume and return the current token.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token, failing unless it matches `kind`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.peek() == &kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Consume an identifier, returning its name.
    pub(crate) fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        match self.peek() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.span();
                self.advance();
                Ok((name, span))
            }
            _ => Err(self.unexpected("an identifier".to_owned())),
        }
    }

    /// Fail unless the whole stream has been consumed.
    pub(crate) fn expect_eof(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("end of input".to_owned())),
        }
    }

    /// Build an "expected X, found Y" error at the current token.
    pub(crate) fn unexpected(&self, expected: String) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.peek().describe(),
            span: self.span(),
        }
    }
}
