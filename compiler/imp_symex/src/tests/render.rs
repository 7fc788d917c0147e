//! Rendering and conjunction tests.
//!
//! The exact output text is a compatibility surface; these fixtures pin
//! it byte for byte.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::expr::{conjunction, BoolExpr, IntExpr};

fn bsym(name: &str) -> Rc<BoolExpr> {
    Rc::new(BoolExpr::Symbol(name.to_owned()))
}

fn isym(name: &str) -> Rc<IntExpr> {
    Rc::new(IntExpr::Symbol(name.to_owned()))
}

#[test]
fn bool_constants() {
    assert_eq!(BoolExpr::Const(true).to_string(), "true");
    assert_eq!(BoolExpr::Const(false).to_string(), "false");
}

#[test]
fn bool_symbol() {
    assert_eq!(bsym("b").to_string(), "b");
}

#[test]
fn negation_adds_no_parentheses() {
    assert_eq!(BoolExpr::Not(Rc::new(BoolExpr::Const(true))).to_string(), "!true");
    assert_eq!(BoolExpr::Not(Rc::new(BoolExpr::Const(false))).to_string(), "!false");
    assert_eq!(BoolExpr::Not(bsym("b")).to_string(), "!b");
}

#[test]
fn double_negation() {
    let expr = BoolExpr::Not(Rc::new(BoolExpr::Not(bsym("b"))));
    assert_eq!(expr.to_string(), "!!b");
}

#[test]
fn conjunction_node() {
    assert_eq!(BoolExpr::And(bsym("p"), bsym("q")).to_string(), "(p & q)");
}

#[test]
fn conjunction_of_negation() {
    let expr = BoolExpr::And(Rc::new(BoolExpr::Not(bsym("b"))), bsym("q"));
    assert_eq!(expr.to_string(), "(!b & q)");
}

#[test]
fn disjunction_node() {
    assert_eq!(BoolExpr::Or(bsym("p"), bsym("q")).to_string(), "(p | q)");
}

#[test]
fn disjunction_of_negation() {
    let expr = BoolExpr::Or(bsym("p"), Rc::new(BoolExpr::Not(bsym("d"))));
    assert_eq!(expr.to_string(), "(p | !d)");
}

#[test]
fn nested_logic() {
    let expr = BoolExpr::Or(
        bsym("p"),
        Rc::new(BoolExpr::And(bsym("a"), bsym("b"))),
    );
    assert_eq!(expr.to_string(), "(p | (a & b))");

    let expr = BoolExpr::And(
        Rc::new(BoolExpr::Or(Rc::new(BoolExpr::Const(true)), bsym("f"))),
        Rc::new(BoolExpr::Or(bsym("g"), Rc::new(BoolExpr::Not(bsym("h"))))),
    );
    assert_eq!(expr.to_string(), "((true | f) & (g | !h))");
}

#[test]
fn int_constants_render_in_decimal() {
    assert_eq!(IntExpr::Const(10).to_string(), "10");
    assert_eq!(IntExpr::Const(0).to_string(), "0");
    assert_eq!(IntExpr::Const(-7).to_string(), "-7");
    assert_eq!(IntExpr::Const(i64::MIN).to_string(), "-9223372036854775808");
}

#[test]
fn int_symbol() {
    assert_eq!(isym("z").to_string(), "z");
}

#[test]
fn arithmetic_nodes() {
    assert_eq!(
        IntExpr::Add(isym("a"), Rc::new(IntExpr::Const(1))).to_string(),
        "(a + 1)"
    );
    assert_eq!(
        IntExpr::Sub(isym("a"), Rc::new(IntExpr::Const(1))).to_string(),
        "(a - 1)"
    );
}

#[test]
fn nested_arithmetic() {
    let expr = IntExpr::Add(
        isym("a"),
        Rc::new(IntExpr::Add(isym("t"), Rc::new(IntExpr::Const(5)))),
    );
    assert_eq!(expr.to_string(), "(a + (t + 5))");
}

#[test]
fn comparisons_are_bool_sorted_over_int_operands() {
    assert_eq!(BoolExpr::Less(isym("a"), isym("b")).to_string(), "(a < b)");
    assert_eq!(BoolExpr::Greater(isym("a"), isym("b")).to_string(), "(a > b)");

    let expr = BoolExpr::And(
        Rc::new(BoolExpr::Less(isym("a"), isym("b"))),
        Rc::new(BoolExpr::Greater(isym("z"), Rc::new(IntExpr::Const(10)))),
    );
    assert_eq!(expr.to_string(), "((a < b) & (z > 10))");
}

#[test]
fn parenthesis_count_equals_binary_node_count() {
    // Three binary nodes, one negation, two symbols and two constants.
    let expr = BoolExpr::And(
        Rc::new(BoolExpr::Or(
            Rc::new(BoolExpr::Not(bsym("p"))),
            Rc::new(BoolExpr::Const(false)),
        )),
        Rc::new(BoolExpr::Less(isym("x"), Rc::new(IntExpr::Const(3)))),
    );
    let text = expr.to_string();
    assert_eq!(text.matches('(').count(), 3);
    assert_eq!(text.matches('(').count(), text.matches(')').count());
}

#[test]
fn rendering_is_deterministic() {
    let expr = BoolExpr::And(bsym("p"), Rc::new(BoolExpr::Not(bsym("q"))));
    assert_eq!(expr.to_string(), expr.to_string());
}

#[test]
fn conjunction_of_nothing_is_true() {
    assert_eq!(conjunction(&[]).to_string(), "true");
}

#[test]
fn conjunction_of_one_returns_it_unwrapped() {
    let only = bsym("p");
    let folded = conjunction(&[Rc::clone(&only)]);
    assert!(Rc::ptr_eq(&only, &folded));
    assert_eq!(folded.to_string(), "p");
}

#[test]
fn conjunction_of_two() {
    let folded = conjunction(&[bsym("p"), Rc::new(BoolExpr::Not(bsym("q")))]);
    assert_eq!(folded.to_string(), "(p & !q)");
}

#[test]
fn conjunction_folds_left_in_input_order() {
    let folded = conjunction(&[bsym("a"), bsym("b"), bsym("c"), bsym("d")]);
    assert_eq!(folded.to_string(), "(((a & b) & c) & d)");
}
