//! AST for a single Imp function.
//!
//! The statement and expression alphabets are closed sums: the symbolic
//! interpreter matches them exhaustively, so an unhandled node kind is a
//! compile error rather than a runtime surprise.

use std::fmt;

use crate::Span;

/// The two value sorts of Imp.
///
/// Classifies both surface types (`int x`, `: bool`) and symbolic
/// expressions downstream; which operators accept a value is decided
/// entirely by its sort.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    Int,
    Bool,
}

impl Ty {
    /// Source-level keyword for this type.
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Ty::Int => "int",
            Ty::Bool => "bool",
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// Binary operators.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,

    // Comparison
    Lt,
    Gt,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages and rendering.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::And => "&",
            Self::Or => "|",
        }
    }
}

/// Unary operators.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation `!`.
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),
    /// Boolean literal.
    Bool(bool),
    /// Variable reference; always a declared parameter after validation.
    Var(String),
    /// Unary operation.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Assignment to a declared parameter.
    Assign { name: String, value: Expr },
    /// Conditional; a missing `else` parses as an empty block.
    If {
        cond: Expr,
        then_block: Vec<Stmt>,
        else_block: Vec<Stmt>,
    },
}

/// A function parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: String,
    pub ty: Ty,
    pub span: Span,
}

/// A complete Imp function: ordered parameters, ordered body statements,
/// and one return expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Function {
    pub name: String,
    pub params: Vec<Param>,
    pub ret_ty: Ty,
    pub body: Vec<Stmt>,
    pub ret: Expr,
}

impl Function {
    /// Declared type of `name`, if it is a parameter.
    pub fn param_ty(&self, name: &str) -> Option<Ty> {
        self.params.iter().find(|p| p.name == name).map(|p| p.ty)
    }
}
