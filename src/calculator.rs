
//! Re-settable calculator over the pure expression core.

use crate::error::CalcError;
use crate::expr::{parse, ParsedExpression};

/// A calculator holding at most one prepared expression at a time.
///
/// This is a convenience wrapper for callers that feed successive
/// inputs into one long-lived instance (a UI input box, typically).
/// Each [`set_infix`](Calculator::set_infix) replaces the prepared
/// expression as a whole; a failed replacement leaves the calculator
/// empty rather than holding a half-built expression. An empty
/// calculator answers every query with
/// [`CalcError::NotYetConverted`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
  expression: Option<ParsedExpression>,
}

impl Calculator {
  /// A calculator prepared with the given infix expression. Fails
  /// with [`CalcError::InvalidExpression`] exactly when
  /// [`parse`] does.
  pub fn new(infix: &str) -> Result<Self, CalcError> {
    Ok(Self {
      expression: Some(parse(infix)?),
    })
  }

  /// Replaces the prepared expression. The old expression is
  /// discarded first, so a parse failure leaves the calculator
  /// empty, never mixing old and new state.
  pub fn set_infix(&mut self, infix: &str) -> Result<(), CalcError> {
    self.expression = None;
    self.expression = Some(parse(infix)?);
    Ok(())
  }

  /// The currently prepared expression, if any.
  pub fn expression(&self) -> Option<&ParsedExpression> {
    self.expression.as_ref()
  }

  fn prepared(&self) -> Result<&ParsedExpression, CalcError> {
    self.expression.as_ref().ok_or(CalcError::NotYetConverted)
  }

  /// Evaluates the prepared expression. Repeatable: the prepared
  /// state is never consumed or mutated.
  pub fn evaluate(&self) -> Result<i64, CalcError> {
    self.prepared()?.evaluate()
  }

  /// Space-joined postfix rendering of the prepared expression.
  pub fn postfix_string(&self) -> Result<String, CalcError> {
    Ok(self.prepared()?.postfix_string())
  }

  /// One-line report of the form `"<infix> : <postfix> = <value>"`.
  pub fn summary(&self) -> Result<String, CalcError> {
    let expr = self.prepared()?;
    Ok(format!("{} : {} = {}", expr.infix(), expr.postfix_string(), expr.evaluate()?))
  }
}
