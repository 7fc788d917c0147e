//! The two-sorted symbolic expression model.
//!
//! Expressions are pure data: immutable, no back-references, no cycles.
//! Operands are `Rc`-shared, so a node built once may be referenced from
//! any number of forked execution states without copying - the negation
//! of a branch condition shares the condition node with the sibling path.
//!
//! The Boolean and Integer sorts are separate types. `BoolExpr::And`
//! takes `Rc<BoolExpr>` operands and `IntExpr::Add` takes `Rc<IntExpr>`
//! ones, so an ill-sorted node cannot be constructed at all; the only
//! sort check left at runtime is the [`SymValue`] narrowing used when an
//! evaluated value of either sort must feed a specific operator.
//!
//! # Rendering
//!
//! The `Display` impls are a compatibility contract, byte for byte:
//! `true`/`false`, decimal integers, bare symbol names, `(lhs OP rhs)`
//! for every binary node with OP one of `& | < > + -`, and `!` prefixed
//! directly to its operand with no added parentheses (a binary operand
//! parenthesizes itself). Consumers compare results as strings.

use std::fmt;
use std::rc::Rc;

use imp_ir::Ty;

use crate::ExecError;

/// A Boolean-sorted symbolic expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum BoolExpr {
    /// Literal truth value.
    Const(bool),
    /// Named unconstrained Boolean input.
    Symbol(String),
    /// Logical negation.
    Not(Rc<BoolExpr>),
    /// Logical conjunction.
    And(Rc<BoolExpr>, Rc<BoolExpr>),
    /// Logical disjunction.
    Or(Rc<BoolExpr>, Rc<BoolExpr>),
    /// Integer comparison `<`; Boolean-sorted over Integer operands.
    Less(Rc<IntExpr>, Rc<IntExpr>),
    /// Integer comparison `>`; Boolean-sorted over Integer operands.
    Greater(Rc<IntExpr>, Rc<IntExpr>),
}

/// An Integer-sorted symbolic expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum IntExpr {
    /// 64-bit signed constant.
    Const(i64),
    /// Named unconstrained Integer input.
    Symbol(String),
    /// Addition.
    Add(Rc<IntExpr>, Rc<IntExpr>),
    /// Subtraction.
    Sub(Rc<IntExpr>, Rc<IntExpr>),
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::Const(true) => f.write_str("true"),
            BoolExpr::Const(false) => f.write_str("false"),
            BoolExpr::Symbol(name) => f.write_str(name),
            BoolExpr::Not(operand) => write!(f, "!{operand}"),
            BoolExpr::And(lhs, rhs) => write!(f, "({lhs} & {rhs})"),
            BoolExpr::Or(lhs, rhs) => write!(f, "({lhs} | {rhs})"),
            BoolExpr::Less(lhs, rhs) => write!(f, "({lhs} < {rhs})"),
            BoolExpr::Greater(lhs, rhs) => write!(f, "({lhs} > {rhs})"),
        }
    }
}

impl fmt::Display for IntExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntExpr::Const(value) => write!(f, "{value}"),
            IntExpr::Symbol(name) => f.write_str(name),
            IntExpr::Add(lhs, rhs) => write!(f, "({lhs} + {rhs})"),
            IntExpr::Sub(lhs, rhs) => write!(f, "({lhs} - {rhs})"),
        }
    }
}

/// A symbolic value of either sort, as stored in memory and produced by
/// evaluation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SymValue {
    Bool(Rc<BoolExpr>),
    Int(Rc<IntExpr>),
}

impl SymValue {
    /// Fresh symbol named `name` of sort `sort`.
    pub fn symbol(name: &str, sort: Ty) -> Self {
        match sort {
            Ty::Bool => SymValue::Bool(Rc::new(BoolExpr::Symbol(name.to_owned()))),
            Ty::Int => SymValue::Int(Rc::new(IntExpr::Symbol(name.to_owned()))),
        }
    }

    /// Sort of this value.
    pub fn sort(&self) -> Ty {
        match self {
            SymValue::Bool(_) => Ty::Bool,
            SymValue::Int(_) => Ty::Int,
        }
    }

    /// Narrow to the Boolean sort for operator `op`.
    pub fn into_bool(self, op: &'static str) -> Result<Rc<BoolExpr>, ExecError> {
        match self {
            SymValue::Bool(expr) => Ok(expr),
            SymValue::Int(_) => Err(ExecError::SortMismatch {
                op,
                expected: Ty::Bool,
                found: Ty::Int,
            }),
        }
    }

    /// Narrow to the Integer sort for operator `op`.
    pub fn into_int(self, op: &'static str) -> Result<Rc<IntExpr>, ExecError> {
        match self {
            SymValue::Int(expr) => Ok(expr),
            SymValue::Bool(_) => Err(ExecError::SortMismatch {
                op,
                expected: Ty::Int,
                found: Ty::Bool,
            }),
        }
    }
}

impl fmt::Display for SymValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymValue::Bool(expr) => expr.fmt(f),
            SymValue::Int(expr) => expr.fmt(f),
        }
    }
}

/// Left-fold a path-condition list into one conjunction.
///
/// Empty input yields the constant `true`; a single condition is returned
/// unchanged (no wrapping); anything longer becomes a left-associative
/// `And` chain in input order: `((e0 & e1) & e2) & ...`.
pub fn conjunction(conditions: &[Rc<BoolExpr>]) -> Rc<BoolExpr> {
    let Some(first) = conditions.first() else {
        return Rc::new(BoolExpr::Const(true));
    };
    conditions[1..]
        .iter()
        .fold(Rc::clone(first), |acc, cond| {
            Rc::new(BoolExpr::And(acc, Rc::clone(cond)))
        })
}
