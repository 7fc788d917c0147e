//! Execution errors.
//!
//! Both variants signal a contract violation by whatever built the input
//! tree, never bad user input: the tree reaching the interpreter is
//! supposed to have passed `imp_typeck`. Either error aborts the whole
//! run; no partial result sequence is valid after one.
//!
//! The third failure the original design guarded against - a statement of
//! unrecognized kind - is unrepresentable here because `imp_ir::StmtKind`
//! is a closed sum matched exhaustively.

use thiserror::Error;

use imp_ir::Ty;

/// Fatal interpreter error.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ExecError {
    /// Lookup failure: a read or assignment named something outside the
    /// function's declared parameter set.
    #[error("`{name}` is not bound in symbolic memory")]
    UnknownVariable { name: String },

    /// Structural failure: an operand's sort does not match what its
    /// operator requires.
    #[error("operator `{op}` expects a {expected} operand, found {found}")]
    SortMismatch {
        op: &'static str,
        expected: Ty,
        found: Ty,
    },
}
