//! The path-forking symbolic interpreter.
//!
//! A single worklist of pending execution states drives exploration.
//! Each state is driven to completion before the next pending state is
//! taken, and forks are taken most-recently-created-first, so exploration
//! is depth-first and the emission order is deterministic: for a single
//! conditional the then-branch result precedes the else-branch result.
//!
//! Termination needs no bound: Imp has no loops and no recursion, so a
//! function body is a finite statement tree and every fork strictly
//! descends into it. Path count is not limited here; a caller that wants
//! a budget wraps this interpreter.

use std::rc::Rc;

use tracing::{debug, trace};

use imp_ir::{BinaryOp, Expr, ExprKind, Function, Stmt, StmtKind, UnaryOp};

use crate::expr::{conjunction, BoolExpr, IntExpr, SymValue};
use crate::{ExecError, SymbolicMemory};

/// One completed execution path.
#[derive(Clone, Debug)]
pub struct ExecutionResult {
    /// Final bindings of every declared parameter.
    pub memory: SymbolicMemory,
    /// Conjunction of the branch decisions taken, in order; the constant
    /// `true` when the path crossed no conditionals.
    pub path_condition: Rc<BoolExpr>,
    /// Symbolic value of the function's return expression.
    pub return_value: SymValue,
}

/// One in-flight execution path.
///
/// After a fork, sibling states share no mutable data: each owns its
/// memory clone, its path-condition list, and its statement worklist.
struct ExecState<'a> {
    memory: SymbolicMemory,
    path: Vec<Rc<BoolExpr>>,
    /// Pending statements; the next one to execute is on top.
    work: Vec<&'a Stmt>,
}

impl<'a> ExecState<'a> {
    fn root(function: &'a Function) -> Self {
        let mut state = ExecState {
            memory: SymbolicMemory::from_params(&function.params),
            path: Vec::new(),
            work: Vec::new(),
        };
        state.push_block(&function.body);
        state
    }

    fn fork(&self) -> Self {
        ExecState {
            memory: self.memory.clone(),
            path: self.path.clone(),
            work: self.work.clone(),
        }
    }

    /// Push a block so its first statement ends up on top.
    fn push_block(&mut self, block: &'a [Stmt]) {
        for stmt in block.iter().rev() {
            self.work.push(stmt);
        }
    }
}

/// Symbolically execute `function`, yielding one result per control-flow
/// path.
///
/// The function is trusted to be validated; an [`ExecError`] means the
/// upstream builder broke that contract and voids the entire run.
pub fn execute(function: &Function) -> Result<Vec<ExecutionResult>, ExecError> {
    let mut pending = vec![ExecState::root(function)];
    let mut results = Vec::new();

    while let Some(mut state) = pending.pop() {
        while let Some(stmt) = state.work.pop() {
            step(stmt, &mut state, &mut pending)?;
        }
        let return_value = eval(&function.ret, &state.memory)?;
        let path_condition = conjunction(&state.path);
        trace!(path = %path_condition, "path completed");
        results.push(ExecutionResult {
            path_condition,
            memory: state.memory,
            return_value,
        });
    }

    debug!(function = %function.name, paths = results.len(), "symbolic execution finished");
    Ok(results)
}

/// Execute one statement of `state`, possibly forking into `pending`.
fn step<'a>(
    stmt: &'a Stmt,
    state: &mut ExecState<'a>,
    pending: &mut Vec<ExecState<'a>>,
) -> Result<(), ExecError> {
    match &stmt.kind {
        StmtKind::Assign { name, value } => {
            let value = eval(value, &state.memory)?;
            state.memory.set(name, value)
        }
        StmtKind::If {
            cond,
            then_block,
            else_block,
        } => {
            let cond = eval(cond, &state.memory)?.into_bool("if")?;
            // The negation is a fresh node over the same shared condition,
            // never a re-evaluation.
            let mut fork = state.fork();
            state.path.push(Rc::clone(&cond));
            state.push_block(then_block);
            fork.path.push(Rc::new(BoolExpr::Not(cond)));
            fork.push_block(else_block);
            pending.push(fork);
            Ok(())
        }
    }
}

/// Evaluate an AST expression to a symbolic value against `memory`.
///
/// Both operands of a binary node are always evaluated, left to right:
/// the operands are symbolic values, not booleans, so short-circuiting
/// has no meaning here. The path condition is never consulted.
fn eval(expr: &Expr, memory: &SymbolicMemory) -> Result<SymValue, ExecError> {
    match &expr.kind {
        ExprKind::Int(value) => Ok(SymValue::Int(Rc::new(IntExpr::Const(*value)))),
        ExprKind::Bool(value) => Ok(SymValue::Bool(Rc::new(BoolExpr::Const(*value)))),
        ExprKind::Var(name) => memory.get(name).cloned(),
        ExprKind::Unary { op: UnaryOp::Not, operand } => {
            let operand = eval(operand, memory)?.into_bool(UnaryOp::Not.as_symbol())?;
            Ok(SymValue::Bool(Rc::new(BoolExpr::Not(operand))))
        }
        ExprKind::Binary { op, lhs, rhs } => {
            let lhs = eval(lhs, memory)?;
            let rhs = eval(rhs, memory)?;
            let symbol = op.as_symbol();
            Ok(match op {
                BinaryOp::Add => SymValue::Int(Rc::new(IntExpr::Add(
                    lhs.into_int(symbol)?,
                    rhs.into_int(symbol)?,
                ))),
                BinaryOp::Sub => SymValue::Int(Rc::new(IntExpr::Sub(
                    lhs.into_int(symbol)?,
                    rhs.into_int(symbol)?,
                ))),
                BinaryOp::Lt => SymValue::Bool(Rc::new(BoolExpr::Less(
                    lhs.into_int(symbol)?,
                    rhs.into_int(symbol)?,
                ))),
                BinaryOp::Gt => SymValue::Bool(Rc::new(BoolExpr::Greater(
                    lhs.into_int(symbol)?,
                    rhs.into_int(symbol)?,
                ))),
                BinaryOp::And => SymValue::Bool(Rc::new(BoolExpr::And(
                    lhs.into_bool(symbol)?,
                    rhs.into_bool(symbol)?,
                ))),
                BinaryOp::Or => SymValue::Bool(Rc::new(BoolExpr::Or(
                    lhs.into_bool(symbol)?,
                    rhs.into_bool(symbol)?,
                ))),
            })
        }
    }
}
