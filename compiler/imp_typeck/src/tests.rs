//! Type checker tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use imp_ir::Ty;

use crate::{check, TypeError};

fn check_source(source: &str) -> Result<(), TypeError> {
    let tokens = imp_lexer::lex(source).expect("lex should succeed");
    let function = imp_parse::parse(&tokens).expect("parse should succeed");
    check(&function)
}

#[test]
fn well_typed_function_passes() {
    check_source(
        "f(int x, int y, bool c): int {
            c = x < y
            if (c & !c) {
                x = x + y - 1
            } else {
                x = y
            }
            return x
        }",
    )
    .expect("function should type-check");
}

#[test]
fn duplicate_parameter_is_rejected() {
    let err = check_source("f(int x, bool x): int { return x }").unwrap_err();
    assert!(matches!(err, TypeError::DuplicateParam { name, .. } if name == "x"));
}

#[test]
fn read_of_undeclared_variable_is_rejected() {
    let err = check_source("f(int x): int { return y }").unwrap_err();
    assert!(matches!(err, TypeError::UndeclaredVariable { name, .. } if name == "y"));
}

#[test]
fn assignment_to_undeclared_variable_is_rejected() {
    let err = check_source("f(int x): int { y = x return x }").unwrap_err();
    assert!(matches!(err, TypeError::UndeclaredVariable { name, .. } if name == "y"));
}

#[test]
fn assignment_sort_mismatch_is_rejected() {
    let err = check_source("f(int x, bool c): int { x = c return x }").unwrap_err();
    match err {
        TypeError::AssignMismatch {
            name,
            declared,
            found,
            ..
        } => {
            assert_eq!(name, "x");
            assert_eq!(declared, Ty::Int);
            assert_eq!(found, Ty::Bool);
        }
        other => panic!("expected AssignMismatch, got {other:?}"),
    }
}

#[test]
fn bool_assignment_from_comparison_passes() {
    check_source("f(int a, int b, bool c): bool { c = a < b return !c }")
        .expect("function should type-check");
}

#[test]
fn non_bool_condition_is_rejected() {
    let err = check_source(
        "f(int x): int {
            if (x + 1) {
                x = 0
            }
            return x
        }",
    )
    .unwrap_err();
    assert!(matches!(err, TypeError::ConditionNotBool { found: Ty::Int, .. }));
}

#[test]
fn condition_inside_else_block_is_checked() {
    let err = check_source(
        "f(bool c, int x): int {
            if (c) {
                x = 0
            } else {
                if (x) {
                    x = 1
                }
            }
            return x
        }",
    )
    .unwrap_err();
    assert!(matches!(err, TypeError::ConditionNotBool { .. }));
}

#[test]
fn return_sort_mismatch_is_rejected() {
    let err = check_source("f(bool c): int { return c }").unwrap_err();
    assert!(matches!(
        err,
        TypeError::ReturnMismatch {
            declared: Ty::Int,
            found: Ty::Bool,
            ..
        }
    ));
}

#[test]
fn arithmetic_on_bool_is_rejected() {
    let err = check_source("f(bool c): int { return c + 1 }").unwrap_err();
    assert!(matches!(
        err,
        TypeError::OperandMismatch {
            op: "+",
            expected: Ty::Int,
            found: Ty::Bool,
            ..
        }
    ));
}

#[test]
fn logic_on_int_is_rejected() {
    let err = check_source("f(int x, bool c): bool { return c & x }").unwrap_err();
    assert!(matches!(
        err,
        TypeError::OperandMismatch {
            op: "&",
            expected: Ty::Bool,
            found: Ty::Int,
            ..
        }
    ));
}

#[test]
fn negation_of_int_is_rejected() {
    let err = check_source("f(int x): bool { return !x }").unwrap_err();
    assert!(matches!(
        err,
        TypeError::OperandMismatch {
            op: "!",
            expected: Ty::Bool,
            found: Ty::Int,
            ..
        }
    ));
}

#[test]
fn chained_comparison_is_ill_sorted() {
    // `a < b < c` parses as `(a < b) < c`; the bool on the left of the
    // second `<` is the sort error.
    let err = check_source("f(int a, int b, int c): bool { return a < b < c }").unwrap_err();
    assert!(matches!(
        err,
        TypeError::OperandMismatch {
            op: "<",
            expected: Ty::Int,
            found: Ty::Bool,
            ..
        }
    ));
}
