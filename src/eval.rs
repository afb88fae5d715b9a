
//! Evaluation of postfix token sequences.

use crate::error::CalcError;
use crate::parsing::Token;

use num::integer::{div_floor, mod_floor};

/// Evaluates a postfix token sequence left to right with an operand
/// stack. Numbers are pushed; an operator pops its right operand and
/// then its left, applies, and pushes the result. Success requires
/// exactly one residual value at the end.
///
/// This is a pure read of its input, so evaluating the same sequence
/// twice always yields the same value. All arithmetic is checked: a
/// result outside the `i64` range is [`CalcError::Overflow`], never
/// a wraparound or a panic.
pub fn eval_postfix(postfix: &[Token]) -> Result<i64, CalcError> {
  let mut operands: Vec<i64> = Vec::new();
  for &token in postfix {
    match token {
      Token::Number(n) => {
        operands.push(n);
      }
      Token::Symbol(op) => {
        let rhs = operands.pop().ok_or(CalcError::InsufficientOperands)?;
        let lhs = operands.pop().ok_or(CalcError::InsufficientOperands)?;
        operands.push(apply_operator(lhs, rhs, op)?);
      }
    }
  }
  let result = operands.pop().ok_or(CalcError::MalformedExpression)?;
  if !operands.is_empty() {
    return Err(CalcError::MalformedExpression);
  }
  Ok(result)
}

fn apply_operator(lhs: i64, rhs: i64, op: char) -> Result<i64, CalcError> {
  match op {
    '+' => lhs.checked_add(rhs).ok_or(CalcError::Overflow),
    '-' => lhs.checked_sub(rhs).ok_or(CalcError::Overflow),
    '*' => lhs.checked_mul(rhs).ok_or(CalcError::Overflow),
    '/' => {
      if rhs == 0 {
        Err(CalcError::DivisionByZero)
      } else if lhs == i64::MIN && rhs == -1 {
        // The one quotient that does not fit in i64.
        Err(CalcError::Overflow)
      } else {
        // Division rounding toward negative infinity, so
        // (2-8)/5 == -2 where native `/` would truncate to -1.
        Ok(div_floor(lhs, rhs))
      }
    }
    '%' => {
      if rhs == 0 {
        Err(CalcError::DivisionByZero)
      } else if lhs == i64::MIN && rhs == -1 {
        Err(CalcError::Overflow)
      } else {
        // Remainder matching div_floor, so the identity
        // lhs == rhs * div_floor(lhs, rhs) + mod_floor(lhs, rhs)
        // always holds and the result takes the sign of the divisor.
        Ok(mod_floor(lhs, rhs))
      }
    }
    _ => Err(CalcError::InvalidExpression),
  }
}
