//! Grammar productions.
//!
//! Plain recursive descent. Nesting depth is bounded by the source the
//! driver accepts (single hand-written functions), so no explicit stack
//! growth is needed here.

use imp_ir::{BinaryOp, Expr, ExprKind, Function, Param, Span, Stmt, StmtKind, Ty, UnaryOp};
use imp_lexer::TokenKind;

use crate::cursor::Cursor;
use crate::ParseError;

/// `function := ident "(" params? ")" ":" type "{" stmt* "return" expr "}"`
pub(crate) fn function(cursor: &mut Cursor) -> Result<Function, ParseError> {
    let (name, _) = cursor.expect_ident()?;
    cursor.expect(TokenKind::LParen)?;
    let params = params(cursor)?;
    cursor.expect(TokenKind::RParen)?;
    cursor.expect(TokenKind::Colon)?;
    let (ret_ty, _) = ty(cursor)?;
    cursor.expect(TokenKind::LBrace)?;

    let mut body = Vec::new();
    while !matches!(cursor.peek(), TokenKind::Return) {
        body.push(stmt(cursor)?);
    }
    cursor.expect(TokenKind::Return)?;
    let ret = expr(cursor)?;
    cursor.expect(TokenKind::RBrace)?;

    Ok(Function {
        name,
        params,
        ret_ty,
        body,
        ret,
    })
}

/// `params := type ident ("," type ident)*` — possibly empty.
fn params(cursor: &mut Cursor) -> Result<Vec<Param>, ParseError> {
    let mut params = Vec::new();
    if matches!(cursor.peek(), TokenKind::RParen) {
        return Ok(params);
    }
    loop {
        let (param_ty, ty_span) = ty(cursor)?;
        let (name, name_span) = cursor.expect_ident()?;
        params.push(Param {
            name,
            ty: param_ty,
            span: ty_span.merge(name_span),
        });
        if !cursor.eat(&TokenKind::Comma) {
            break;
        }
    }
    Ok(params)
}

/// `type := "int" | "bool"`
fn ty(cursor: &mut Cursor) -> Result<(Ty, Span), ParseError> {
    let span = cursor.span();
    match cursor.peek() {
        TokenKind::IntType => {
            cursor.advance();
            Ok((Ty::Int, span))
        }
        TokenKind::BoolType => {
            cursor.advance();
            Ok((Ty::Bool, span))
        }
        _ => Err(cursor.unexpected("a type (`int` or `bool`)".to_owned())),
    }
}

/// `block := "{" stmt* "}"`
fn block(cursor: &mut Cursor) -> Result<Vec<Stmt>, ParseError> {
    cursor.expect(TokenKind::LBrace)?;
    let mut stmts = Vec::new();
    while !matches!(cursor.peek(), TokenKind::RBrace) {
        stmts.push(stmt(cursor)?);
    }
    cursor.expect(TokenKind::RBrace)?;
    Ok(stmts)
}

/// `stmt := ident "=" expr | "if" "(" expr ")" block ("else" block)?`
fn stmt(cursor: &mut Cursor) -> Result<Stmt, ParseError> {
    match cursor.peek() {
        TokenKind::If => {
            let start = cursor.span();
            cursor.advance();
            cursor.expect(TokenKind::LParen)?;
            let cond = expr(cursor)?;
            cursor.expect(TokenKind::RParen)?;
            let then_block = block(cursor)?;
            // An absent `else` is an empty else block: the interpreter
            // still forks, and the negated path falls straight through.
            let else_block = if cursor.eat(&TokenKind::Else) {
                block(cursor)?
            } else {
                Vec::new()
            };
            let end = else_block
                .last()
                .or_else(|| then_block.last())
                .map_or(cond.span, |s| s.span);
            Ok(Stmt::new(
                StmtKind::If {
                    cond,
                    then_block,
                    else_block,
                },
                start.merge(end),
            ))
        }
        TokenKind::Ident(_) => {
            let (name, name_span) = cursor.expect_ident()?;
            cursor.expect(TokenKind::Assign)?;
            let value = expr(cursor)?;
            let span = name_span.merge(value.span);
            Ok(Stmt::new(StmtKind::Assign { name, value }, span))
        }
        _ => Err(cursor.unexpected("a statement (assignment or `if`)".to_owned())),
    }
}

/// `expr := or`
pub(crate) fn expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    or_expr(cursor)
}

/// `or := and ("|" or)?` — right-associative.
fn or_expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    let lhs = and_expr(cursor)?;
    if cursor.eat(&TokenKind::Pipe) {
        let rhs = or_expr(cursor)?;
        Ok(binary(BinaryOp::Or, lhs, rhs))
    } else {
        Ok(lhs)
    }
}

/// `and := cmp ("&" and)?` — right-associative.
fn and_expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    let lhs = cmp_expr(cursor)?;
    if cursor.eat(&TokenKind::Amp) {
        let rhs = and_expr(cursor)?;
        Ok(binary(BinaryOp::And, lhs, rhs))
    } else {
        Ok(lhs)
    }
}

/// `cmp := add (("<" | ">") add)*` — chains like `a < b < c` parse
/// left-associatively and are rejected downstream by the type checker
/// (the inner comparison is bool where `<` wants int), never here.
fn cmp_expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    let mut lhs = add_expr(cursor)?;
    loop {
        let op = match cursor.peek() {
            TokenKind::Less => BinaryOp::Lt,
            TokenKind::Greater => BinaryOp::Gt,
            _ => return Ok(lhs),
        };
        cursor.advance();
        let rhs = add_expr(cursor)?;
        lhs = binary(op, lhs, rhs);
    }
}

/// `add := unary (("+" | "-") add)?` — right-associative.
///
/// Right associativity here is load-bearing: `x + y + x - 42` must render
/// as `(x + (y + (x - 42)))` in symbolic output.
fn add_expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    let lhs = unary_expr(cursor)?;
    let op = match cursor.peek() {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        _ => return Ok(lhs),
    };
    cursor.advance();
    let rhs = add_expr(cursor)?;
    Ok(binary(op, lhs, rhs))
}

/// `unary := "!" unary | primary`
fn unary_expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    if matches!(cursor.peek(), TokenKind::Bang) {
        let start = cursor.span();
        cursor.advance();
        let operand = unary_expr(cursor)?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand: Box::new(operand),
            },
            span,
        ))
    } else {
        primary_expr(cursor)
    }
}

/// `primary := int | "true" | "false" | ident | "(" expr ")"`
fn primary_expr(cursor: &mut Cursor) -> Result<Expr, ParseError> {
    let span = cursor.span();
    match cursor.peek() {
        TokenKind::Int(value) => {
            let value = *value;
            cursor.advance();
            Ok(Expr::new(ExprKind::Int(value), span))
        }
        TokenKind::True => {
            cursor.advance();
            Ok(Expr::new(ExprKind::Bool(true), span))
        }
        TokenKind::False => {
            cursor.advance();
            Ok(Expr::new(ExprKind::Bool(false), span))
        }
        TokenKind::Ident(name) => {
            let name = name.clone();
            cursor.advance();
            Ok(Expr::new(ExprKind::Var(name), span))
        }
        TokenKind::LParen => {
            cursor.advance();
            let inner = expr(cursor)?;
            let close = cursor.expect(TokenKind::RParen)?;
            Ok(Expr::new(inner.kind, span.merge(close.span)))
        }
        _ => Err(cursor.unexpected("an expression".to_owned())),
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    let span = lhs.span.merge(rhs.span);
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        span,
    )
}
