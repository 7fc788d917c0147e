//! Symbolic execution tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod memory;
mod render;

use imp_ir::Function;

use crate::{execute, ExecutionResult};

/// Lex, parse, and validate a fixture function.
fn function(source: &str) -> Function {
    let tokens = imp_lexer::lex(source).expect("fixture should lex");
    let function = imp_parse::parse(&tokens).expect("fixture should parse");
    imp_typeck::check(&function).expect("fixture should type-check");
    function
}

/// Execute a source fixture end to end.
fn run(source: &str) -> Vec<ExecutionResult> {
    execute(&function(source)).expect("fixture should execute")
}

/// Rendered `(name, value)` bindings of one result, in declaration order.
fn bindings(result: &ExecutionResult) -> Vec<(String, String)> {
    result
        .memory
        .bindings()
        .map(|(name, value)| (name.to_owned(), value.to_string()))
        .collect()
}
