//! Imp Symex - exhaustive symbolic execution of a single Imp function.
//!
//! For every control-flow path through the function this crate produces
//! one [`ExecutionResult`]: the final symbolic value of every parameter,
//! the path condition (the conjunction of the branch decisions taken),
//! and the symbolic return value. Nothing here ever judges the truth or
//! feasibility of a path condition - contradictory paths are emitted like
//! any other, and interpretation is left to downstream consumers.
//!
//! # Architecture
//!
//! - [`expr`]: the two-sorted symbolic expression model. `BoolExpr` and
//!   `IntExpr` are separate sum types, so building a node over a
//!   wrongly-sorted operand is a compile error rather than a runtime
//!   assertion. Nodes are immutable and structurally shared via `Rc`.
//! - [`memory`]: per-path binding of the declared parameters to their
//!   current symbolic values. Cloned at every fork; the name layout is
//!   shared, only the slot vector is copied.
//! - [`interpreter`]: the depth-first path-forking worklist loop.
//!
//! The input tree is assumed already validated by `imp_typeck`; any
//! violation the interpreter still detects is an [`ExecError`] that
//! aborts the whole run with no partial results.

pub mod errors;
pub mod expr;
pub mod interpreter;
pub mod memory;

pub use errors::ExecError;
pub use expr::{conjunction, BoolExpr, IntExpr, SymValue};
pub use interpreter::{execute, ExecutionResult};
pub use memory::SymbolicMemory;

#[cfg(test)]
mod tests;
