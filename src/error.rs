
use thiserror::Error;

/// The errors produced by parsing and evaluating expressions. All of
/// these are deterministic: the same input always produces the same
/// error, synchronously, with no partial result left behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalcError {
  /// The source string was empty or blank, or postfix conversion
  /// found a structural defect (unmatched parenthesis, unrecognized
  /// symbol).
  #[error("invalid expression")]
  InvalidExpression,
  /// Postfix evaluation hit an operator with fewer than two operands
  /// on the stack.
  #[error("not enough operands")]
  InsufficientOperands,
  /// The right operand of a division (or remainder) was zero.
  #[error("division by zero")]
  DivisionByZero,
  /// Postfix evaluation finished with other than exactly one
  /// residual value.
  #[error("malformed postfix expression")]
  MalformedExpression,
  /// An arithmetic operation produced a value outside the `i64`
  /// range.
  #[error("arithmetic overflow")]
  Overflow,
  /// A projection or evaluation was requested from a calculator that
  /// holds no successfully converted expression.
  #[error("infix is not converted to postfix yet")]
  NotYetConverted,
}
