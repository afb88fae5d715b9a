
//! Parsed infix expressions.

use crate::error::CalcError;
use crate::eval::eval_postfix;
use crate::parsing::shunting_yard::to_postfix;
use crate::parsing::{tokenize, Token};

use itertools::Itertools;

/// A successfully parsed infix expression: the source text, its
/// token sequence, and the postfix sequence derived from it. The
/// three always describe the same expression, since a value of this
/// type can only be produced whole by [`parse`]. Evaluation never
/// mutates it, so one parse can back any number of evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
  infix: String,
  tokens: Vec<Token>,
  postfix: Vec<Token>,
}

/// Tokenizes and converts an infix expression, producing a
/// [`ParsedExpression`] ready to evaluate.
///
/// Fails with [`CalcError::InvalidExpression`] if the input is empty
/// or blank, or if postfix conversion finds a structural defect. On
/// failure no partial state exists at all.
pub fn parse(infix: &str) -> Result<ParsedExpression, CalcError> {
  if infix.trim().is_empty() {
    return Err(CalcError::InvalidExpression);
  }
  let tokens = tokenize(infix)?;
  let postfix = to_postfix(&tokens)?;
  Ok(ParsedExpression {
    infix: infix.to_owned(),
    tokens,
    postfix,
  })
}

impl ParsedExpression {
  /// The source text this expression was parsed from.
  pub fn infix(&self) -> &str {
    &self.infix
  }

  /// The token sequence, in source order.
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  /// The postfix (Reverse Polish) token sequence.
  pub fn postfix(&self) -> &[Token] {
    &self.postfix
  }

  /// Space-joined rendering of the postfix sequence, e.g.
  /// `"3 5 2 8 - * +"`.
  pub fn postfix_string(&self) -> String {
    self.postfix.iter().join(" ")
  }

  /// Evaluates the postfix sequence to a single integer.
  pub fn evaluate(&self) -> Result<i64, CalcError> {
    eval_postfix(&self.postfix)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_simple_binary_expression() {
    let expr = parse("3+2").unwrap();
    assert_eq!(expr.evaluate(), Ok(5));
  }

  #[test]
  fn test_parenthesized_expression() {
    let expr = parse("(13+5)*2").unwrap();
    assert_eq!(expr.evaluate(), Ok(36));
  }

  #[test]
  fn test_tokens_are_preserved() {
    let expr = parse("3 + 5 * (2 - 8)").unwrap();
    assert_eq!(expr.tokens(), &[
      Token::Number(3),
      Token::Symbol('+'),
      Token::Number(5),
      Token::Symbol('*'),
      Token::Symbol('('),
      Token::Number(2),
      Token::Symbol('-'),
      Token::Number(8),
      Token::Symbol(')'),
    ]);
    assert_eq!(expr.infix(), "3 + 5 * (2 - 8)");
  }

  #[test]
  fn test_postfix_string() {
    let expr = parse("3 + 5 * (2 - 8)").unwrap();
    assert_eq!(expr.postfix_string(), "3 5 2 8 - * +");
    assert_eq!(expr.evaluate(), Ok(-27));
  }

  #[test]
  fn test_complex_expression() {
    let expr = parse("10 + (6 / 3) * (2 + 3)").unwrap();
    assert_eq!(expr.postfix_string(), "10 6 3 / 2 3 + * +");
    assert_eq!(expr.evaluate(), Ok(20));
  }

  #[test]
  fn test_single_number() {
    let expr = parse("42").unwrap();
    assert_eq!(expr.evaluate(), Ok(42));
  }

  #[test]
  fn test_division_by_zero() {
    let expr = parse("10 / (5 - 5)").unwrap();
    assert_eq!(expr.evaluate(), Err(CalcError::DivisionByZero));
  }

  #[test]
  fn test_parens_only_expression() {
    let expr = parse("(((3)))").unwrap();
    assert_eq!(expr.evaluate(), Ok(3));
  }

  #[test]
  fn test_negative_intermediate_result() {
    let expr = parse("5 - (10 - 7)").unwrap();
    assert_eq!(expr.evaluate(), Ok(2));
  }

  #[test]
  fn test_empty_and_blank_input() {
    assert_eq!(parse("").unwrap_err(), CalcError::InvalidExpression);
    assert_eq!(parse("   ").unwrap_err(), CalcError::InvalidExpression);
  }

  #[test]
  fn test_unrecognized_character() {
    assert_eq!(parse("3 + 5 & 2").unwrap_err(), CalcError::InvalidExpression);
  }

  #[test]
  fn test_unbalanced_parens() {
    assert_eq!(parse("(3 + 5").unwrap_err(), CalcError::InvalidExpression);
    assert_eq!(parse("3 + 5)").unwrap_err(), CalcError::InvalidExpression);
  }

  #[test]
  fn test_evaluation_is_repeatable() {
    let expr = parse("3 + 5 * (2 - 8)").unwrap();
    assert_eq!(expr.evaluate(), Ok(-27));
    assert_eq!(expr.evaluate(), Ok(-27));
    assert_eq!(expr.postfix_string(), "3 5 2 8 - * +");
  }

  #[test]
  fn test_evaluation_overflow_is_an_error() {
    // i64::MAX parses fine; the addition pushes past the range and
    // must report overflow rather than wrap or panic.
    let expr = parse("9223372036854775807+1").unwrap();
    assert_eq!(expr.evaluate(), Err(CalcError::Overflow));
  }

  #[test]
  fn test_oversized_literal_is_rejected_at_parse() {
    assert_eq!(parse("9223372036854775808").unwrap_err(), CalcError::InvalidExpression);
  }

  #[test]
  fn test_minus_plus_chain_grouping() {
    // '-' sits below '+' in the priority table, so 9-3+2 groups as
    // 9-(3+2).
    let expr = parse("9-3+2").unwrap();
    assert_eq!(expr.postfix_string(), "9 3 2 + -");
    assert_eq!(expr.evaluate(), Ok(4));
  }
}
