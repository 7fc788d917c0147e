//! Parse error types.

use imp_ir::Span;
use thiserror::Error;

/// Parse error, fatal to the run.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },
}

impl ParseError {
    /// Span of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
        }
    }
}
