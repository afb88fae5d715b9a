
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A single lexeme of an infix expression: either a non-negative
/// integer literal or a one-character symbol. Tokens are produced in
/// left-to-right source order, and that order is preserved through
/// every later stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Token {
  Number(i64),
  Symbol(char),
}

impl Token {
  /// True for tokens that carry a numeric value.
  pub fn is_number(&self) -> bool {
    matches!(self, Token::Number(_))
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Token::Number(n) => n.fmt(f),
      Token::Symbol(c) => c.fmt(f),
    }
  }
}

impl From<i64> for Token {
  fn from(n: i64) -> Self {
    Token::Number(n)
  }
}

impl From<char> for Token {
  fn from(c: char) -> Self {
    Token::Symbol(c)
  }
}
