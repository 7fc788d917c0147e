//! Imp IR - AST and common types for the Imp symbolic executor.
//!
//! An Imp source file is a single function over `int`/`bool` parameters,
//! with assignments, `if`/`else`, and one trailing `return`. This crate
//! defines the tree produced by `imp_parse`, validated by `imp_typeck`,
//! and walked by `imp_symex`.

mod ast;
mod span;

pub use ast::{BinaryOp, Expr, ExprKind, Function, Param, Stmt, StmtKind, Ty, UnaryOp};
pub use span::Span;
