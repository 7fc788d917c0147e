//! Semantic validation for parsed Imp functions.
//!
//! Checks names and sorts so that everything downstream can trust the tree
//! completely: the symbolic interpreter performs no validation of its own
//! and treats any violation it does hit as a contract bug, not user input.
//!
//! Checked here:
//! - parameter names are pairwise distinct;
//! - every variable read or assigned is a declared parameter;
//! - operands match their operator's sort (`+ -` and `< >` take `int`,
//!   `& |` and `!` take `bool`);
//! - an assignment's value sort equals the target's declared sort;
//! - every `if` condition is `bool`;
//! - the return expression's sort equals the declared return type.

use rustc_hash::FxHashMap;
use thiserror::Error;

use imp_ir::{BinaryOp, Expr, ExprKind, Function, Span, Stmt, StmtKind, Ty, UnaryOp};

/// Semantic error, fatal to the run.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TypeError {
    #[error("duplicate parameter `{name}`")]
    DuplicateParam { name: String, span: Span },

    #[error("`{name}` is not a declared parameter")]
    UndeclaredVariable { name: String, span: Span },

    #[error("cannot assign a {found} value to `{name}` declared as {declared}")]
    AssignMismatch {
        name: String,
        declared: Ty,
        found: Ty,
        span: Span,
    },

    #[error("`if` condition must be bool, found {found}")]
    ConditionNotBool { found: Ty, span: Span },

    #[error("return value must be {declared}, found {found}")]
    ReturnMismatch {
        declared: Ty,
        found: Ty,
        span: Span,
    },

    #[error("operator `{op}` expects {expected} operands, found {found}")]
    OperandMismatch {
        op: &'static str,
        expected: Ty,
        found: Ty,
        span: Span,
    },
}

impl TypeError {
    /// Span of the offending source text.
    pub fn span(&self) -> Span {
        match self {
            TypeError::DuplicateParam { span, .. }
            | TypeError::UndeclaredVariable { span, .. }
            | TypeError::AssignMismatch { span, .. }
            | TypeError::ConditionNotBool { span, .. }
            | TypeError::ReturnMismatch { span, .. }
            | TypeError::OperandMismatch { span, .. } => *span,
        }
    }
}

/// Validate `function`; on success the tree may be executed symbolically
/// without further checks.
pub fn check(function: &Function) -> Result<(), TypeError> {
    let mut scope: FxHashMap<&str, Ty> = FxHashMap::default();
    for param in &function.params {
        if scope.insert(param.name.as_str(), param.ty).is_some() {
            return Err(TypeError::DuplicateParam {
                name: param.name.clone(),
                span: param.span,
            });
        }
    }

    check_block(&function.body, &scope)?;

    let found = type_of(&function.ret, &scope)?;
    if found != function.ret_ty {
        return Err(TypeError::ReturnMismatch {
            declared: function.ret_ty,
            found,
            span: function.ret.span,
        });
    }
    Ok(())
}

fn check_block(block: &[Stmt], scope: &FxHashMap<&str, Ty>) -> Result<(), TypeError> {
    for stmt in block {
        check_stmt(stmt, scope)?;
    }
    Ok(())
}

fn check_stmt(stmt: &Stmt, scope: &FxHashMap<&str, Ty>) -> Result<(), TypeError> {
    match &stmt.kind {
        StmtKind::Assign { name, value } => {
            let declared =
                *scope
                    .get(name.as_str())
                    .ok_or_else(|| TypeError::UndeclaredVariable {
                        name: name.clone(),
                        span: stmt.span,
                    })?;
            let found = type_of(value, scope)?;
            if found != declared {
                return Err(TypeError::AssignMismatch {
                    name: name.clone(),
                    declared,
                    found,
                    span: value.span,
                });
            }
            Ok(())
        }
        StmtKind::If {
            cond,
            then_block,
            else_block,
        } => {
            let found = type_of(cond, scope)?;
            if found != Ty::Bool {
                return Err(TypeError::ConditionNotBool {
                    found,
                    span: cond.span,
                });
            }
            check_block(then_block, scope)?;
            check_block(else_block, scope)
        }
    }
}

/// Sort of `expr` under `scope`.
fn type_of(expr: &Expr, scope: &FxHashMap<&str, Ty>) -> Result<Ty, TypeError> {
    match &expr.kind {
        ExprKind::Int(_) => Ok(Ty::Int),
        ExprKind::Bool(_) => Ok(Ty::Bool),
        ExprKind::Var(name) => {
            scope
                .get(name.as_str())
                .copied()
                .ok_or_else(|| TypeError::UndeclaredVariable {
                    name: name.clone(),
                    span: expr.span,
                })
        }
        ExprKind::Unary { op, operand } => {
            let UnaryOp::Not = op;
            expect_sort(operand, Ty::Bool, op.as_symbol(), scope)?;
            Ok(Ty::Bool)
        }
        ExprKind::Binary { op, lhs, rhs } => {
            let (operand_ty, result_ty) = match op {
                BinaryOp::Add | BinaryOp::Sub => (Ty::Int, Ty::Int),
                BinaryOp::Lt | BinaryOp::Gt => (Ty::Int, Ty::Bool),
                BinaryOp::And | BinaryOp::Or => (Ty::Bool, Ty::Bool),
            };
            expect_sort(lhs, operand_ty, op.as_symbol(), scope)?;
            expect_sort(rhs, operand_ty, op.as_symbol(), scope)?;
            Ok(result_ty)
        }
    }
}

fn expect_sort(
    expr: &Expr,
    expected: Ty,
    op: &'static str,
    scope: &FxHashMap<&str, Ty>,
) -> Result<(), TypeError> {
    let found = type_of(expr, scope)?;
    if found != expected {
        return Err(TypeError::OperandMismatch {
            op,
            expected,
            found,
            span: expr.span,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
