//! The lex → parse → check → execute pipeline.

use thiserror::Error;
use tracing::debug;

use imp_ir::Span;
use imp_symex::ExecutionResult;

/// Any stage failure, in pipeline order.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lex(#[from] imp_lexer::LexError),

    #[error(transparent)]
    Parse(#[from] imp_parse::ParseError),

    #[error(transparent)]
    Check(#[from] imp_typeck::TypeError),

    /// Interpreter contract violation. Cannot be reached through this
    /// pipeline (the checker runs first); kept because `execute` is also
    /// a public API over hand-built trees.
    #[error(transparent)]
    Exec(#[from] imp_symex::ExecError),
}

impl PipelineError {
    /// Source span of the failure, where one exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            PipelineError::Lex(err) => Some(err.span()),
            PipelineError::Parse(err) => Some(err.span()),
            PipelineError::Check(err) => Some(err.span()),
            PipelineError::Exec(_) => None,
        }
    }
}

/// Run the whole pipeline over one Imp source text.
pub fn run_source(source: &str) -> Result<Vec<ExecutionResult>, PipelineError> {
    let tokens = imp_lexer::lex(source)?;
    debug!(tokens = tokens.len(), "lexed");
    let function = imp_parse::parse(&tokens)?;
    imp_typeck::check(&function)?;
    debug!(function = %function.name, params = function.params.len(), "validated");
    Ok(imp_symex::execute(&function)?)
}
