//! Imp driver - front end plumbing around the symbolic executor.
//!
//! Chains the collaborators: lex, parse, validate, execute, encode.
//!
//! ```text
//! source text
//!     │
//!     ▼
//! imp_lexer::lex ──► tokens
//!     │
//!     ▼
//! imp_parse::parse ──► Function
//!     │
//!     ▼
//! imp_typeck::check (validation only)
//!     │
//!     ▼
//! imp_symex::execute ──► Vec<ExecutionResult>
//!     │
//!     ▼
//! report::render_json ──► one JSON document on stdout
//! ```

pub mod pipeline;
pub mod report;

pub use pipeline::{run_source, PipelineError};
pub use report::{render_json, Binding, PathReport};
