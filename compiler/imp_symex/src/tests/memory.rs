//! Symbolic memory tests.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use imp_ir::{Param, Span, Ty};

use crate::expr::{IntExpr, SymValue};
use crate::{ExecError, SymbolicMemory};

fn params(decls: &[(&str, Ty)]) -> Vec<Param> {
    decls
        .iter()
        .map(|(name, ty)| Param {
            name: (*name).to_owned(),
            ty: *ty,
            span: Span::default(),
        })
        .collect()
}

fn rendered(memory: &SymbolicMemory) -> Vec<(String, String)> {
    memory
        .bindings()
        .map(|(name, value)| (name.to_owned(), value.to_string()))
        .collect()
}

#[test]
fn parameters_start_as_symbols_of_their_own_name() {
    let memory = SymbolicMemory::from_params(&params(&[
        ("x", Ty::Int),
        ("c", Ty::Bool),
    ]));
    assert_eq!(
        rendered(&memory),
        vec![
            ("x".to_owned(), "x".to_owned()),
            ("c".to_owned(), "c".to_owned()),
        ]
    );
    assert_eq!(memory.get("x").unwrap().sort(), Ty::Int);
    assert_eq!(memory.get("c").unwrap().sort(), Ty::Bool);
}

#[test]
fn empty_parameter_list() {
    let memory = SymbolicMemory::from_params(&[]);
    assert!(memory.is_empty());
    assert_eq!(memory.bindings().count(), 0);
}

#[test]
fn bindings_keep_declaration_order_across_updates() {
    let mut memory = SymbolicMemory::from_params(&params(&[
        ("a", Ty::Int),
        ("b", Ty::Int),
        ("c", Ty::Int),
    ]));
    // Updating a later slot must not disturb the reporting order.
    memory
        .set("c", SymValue::Int(Rc::new(IntExpr::Const(0))))
        .unwrap();
    let names: Vec<String> = rendered(&memory).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn set_replaces_the_binding() {
    let mut memory = SymbolicMemory::from_params(&params(&[("x", Ty::Int)]));
    memory
        .set("x", SymValue::Int(Rc::new(IntExpr::Const(42))))
        .unwrap();
    assert_eq!(memory.get("x").unwrap().to_string(), "42");
}

#[test]
fn get_of_undeclared_name_fails() {
    let memory = SymbolicMemory::from_params(&params(&[("x", Ty::Int)]));
    let err = memory.get("y").unwrap_err();
    assert_eq!(
        err,
        ExecError::UnknownVariable {
            name: "y".to_owned()
        }
    );
}

#[test]
fn set_of_undeclared_name_fails() {
    let mut memory = SymbolicMemory::from_params(&params(&[("x", Ty::Int)]));
    let err = memory
        .set("y", SymValue::Int(Rc::new(IntExpr::Const(1))))
        .unwrap_err();
    assert_eq!(
        err,
        ExecError::UnknownVariable {
            name: "y".to_owned()
        }
    );
}

#[test]
fn clones_have_value_semantics() {
    let mut original = SymbolicMemory::from_params(&params(&[("x", Ty::Int)]));
    let mut copy = original.clone();

    original
        .set("x", SymValue::Int(Rc::new(IntExpr::Const(1))))
        .unwrap();
    assert_eq!(copy.get("x").unwrap().to_string(), "x");

    copy.set("x", SymValue::Int(Rc::new(IntExpr::Const(2))))
        .unwrap();
    assert_eq!(original.get("x").unwrap().to_string(), "1");
}

#[test]
fn clones_share_expression_nodes() {
    let mut memory = SymbolicMemory::from_params(&params(&[("x", Ty::Int)]));
    let shared = Rc::new(IntExpr::Add(
        Rc::new(IntExpr::Symbol("x".to_owned())),
        Rc::new(IntExpr::Const(1)),
    ));
    memory.set("x", SymValue::Int(Rc::clone(&shared))).unwrap();

    let copy = memory.clone();
    let SymValue::Int(in_copy) = copy.get("x").unwrap() else {
        panic!("expected an int binding");
    };
    assert!(Rc::ptr_eq(in_copy, &shared));
}
