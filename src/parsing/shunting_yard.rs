
use super::operator;
use super::token::Token;
use crate::error::CalcError;

/// Converts a token sequence in infix order to Reverse Polish order,
/// using an operator stack and a parenthesis depth counter.
///
/// The pop rule is left-associative: an incoming operator pops every
/// stacked operator whose priority is greater than or equal to its
/// own, stopping at an open parenthesis. Structural defects (a close
/// parenthesis with no matching open, an open parenthesis never
/// closed, a symbol outside the expression alphabet) fail the
/// conversion with [`CalcError::InvalidExpression`].
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
  let mut operator_stack: Vec<char> = Vec::new();
  let mut postfix: Vec<Token> = Vec::with_capacity(tokens.len());
  let mut open_paren_count: i64 = 0;

  for &token in tokens {
    match token {
      Token::Number(_) => {
        postfix.push(token);
      }
      Token::Symbol('(') => {
        open_paren_count += 1;
        operator_stack.push('(');
      }
      Token::Symbol(')') => {
        open_paren_count -= 1;
        if open_paren_count < 0 {
          // More closing parentheses than opening.
          return Err(CalcError::InvalidExpression);
        }
        while let Some(&top) = operator_stack.last() {
          if top == '(' {
            break;
          }
          operator_stack.pop();
          postfix.push(Token::Symbol(top));
        }
        // Discard the '(' itself.
        operator_stack.pop();
      }
      Token::Symbol(op) if operator::is_operator(op) => {
        while let Some(&top) = operator_stack.last() {
          if top == '(' || operator::priority(top) < operator::priority(op) {
            break;
          }
          operator_stack.pop();
          postfix.push(Token::Symbol(top));
        }
        operator_stack.push(op);
      }
      Token::Symbol(_) => {
        return Err(CalcError::InvalidExpression);
      }
    }
  }

  if open_paren_count != 0 {
    // Unmatched open parenthesis.
    return Err(CalcError::InvalidExpression);
  }
  while let Some(op) = operator_stack.pop() {
    postfix.push(Token::Symbol(op));
  }
  Ok(postfix)
}
