//! Two-stack operator-precedence evaluation.
//!
//! Operands are pushed as they are scanned; operators wait on a second
//! stack until an operator of lower precedence, a `)`, or the end of the
//! input forces them to be applied. Equal precedence is applied before the
//! incoming operator is pushed, which makes every operator left-associative.

use crate::bindings::Bindings;
use crate::errors::{
    division_by_zero, integer_overflow, invalid_expression, unmatched_parenthesis,
    undefined_variable, ExprError, ExprErrorKind, ExprResult,
};
use crate::token::{BinaryOp, Token, Tokens};

/// Entry on the operator stack.
#[derive(Clone, Copy, Debug)]
enum Pending {
    /// An operator and its byte offset.
    Op(BinaryOp, usize),
    /// An open `(` and its byte offset.
    Open(usize),
}

/// Evaluate `expression` against `bindings`.
///
/// Pure: `bindings` is only read, and the same inputs always give the same
/// result. Fails with the first error encountered; nothing is partially
/// returned.
pub fn evaluate<B: Bindings + ?Sized>(expression: &str, bindings: &B) -> ExprResult {
    let mut values: Vec<i64> = Vec::new();
    let mut ops: Vec<Pending> = Vec::new();

    for scanned in Tokens::new(expression) {
        let (token, offset) = scanned?;
        match token {
            Token::Integer(value) => values.push(value),
            Token::Ident(name) => {
                let value = bindings
                    .lookup(name)
                    .ok_or_else(|| undefined_variable(name, offset))?;
                values.push(value);
            }
            Token::LParen => ops.push(Pending::Open(offset)),
            Token::RParen => loop {
                match ops.pop() {
                    Some(Pending::Open(_)) => break,
                    Some(Pending::Op(op, at)) => reduce(&mut values, op, at)?,
                    None => return Err(unmatched_parenthesis(offset)),
                }
            },
            Token::Op(op) => {
                if values.is_empty() {
                    return Err(invalid_expression(Some(offset)));
                }
                while let Some(&Pending::Op(top, at)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    reduce(&mut values, top, at)?;
                }
                ops.push(Pending::Op(op, offset));
            }
        }
    }

    while let Some(pending) = ops.pop() {
        match pending {
            Pending::Op(op, at) => reduce(&mut values, op, at)?,
            Pending::Open(offset) => return Err(unmatched_parenthesis(offset)),
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(invalid_expression(None)),
    }
}

/// Pop two operands, apply `op`, push the result.
///
/// The operand pushed earlier is the left-hand side. `offset` is where the
/// operator appeared in the source.
fn reduce(values: &mut Vec<i64>, op: BinaryOp, offset: usize) -> ExprResult<()> {
    let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
        return Err(invalid_expression(Some(offset)));
    };
    let result = apply(op, lhs, rhs).map_err(|kind| ExprError::new(kind, Some(offset)))?;
    values.push(result);
    Ok(())
}

/// Checked integer arithmetic; division truncates toward zero.
fn apply(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, ExprErrorKind> {
    match op {
        BinaryOp::Add => lhs.checked_add(rhs).ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Sub => lhs
            .checked_sub(rhs)
            .ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Mul => lhs
            .checked_mul(rhs)
            .ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Div => {
            if rhs == 0 {
                return Err(division_by_zero());
            }
            lhs.checked_div(rhs)
                .ok_or_else(|| integer_overflow("division"))
        }
    }
}
