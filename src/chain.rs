
//! The running-expression splitter.
//!
//! A running expression is what a calculator display accumulates
//! under equals-chaining: pressing `=` commits the expression built
//! so far, and its value becomes the leading operand of the next
//! one. `"2+1=/3"` therefore means "compute `2+1`, then divide that
//! by 3", and splits into the steps `"2+1"`, `"3/3"`, `1`.

use crate::error::CalcError;
use crate::expr::parse;
use crate::parsing::{tokenize, Token};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// One element of a split running expression: a committed
/// sub-expression's text, or a computed value. Serializes untagged,
/// so a step list round-trips as a plain mixed string/number array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalcStep {
  Value(i64),
  Expression(String),
}

impl Display for CalcStep {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      CalcStep::Value(n) => n.fmt(f),
      CalcStep::Expression(s) => s.fmt(f),
    }
  }
}

/// The text being accumulated for the next `=` boundary. Right after
/// a `=` it is the committed numeric value (the seed); as soon as
/// another token arrives, the seed's decimal form becomes the start
/// of ordinary text again.
#[derive(Debug, Clone)]
enum Buffer {
  Text(String),
  Seed(i64),
}

impl Buffer {
  fn append(self, token: Token) -> Buffer {
    let mut text = match self {
      Buffer::Text(s) => s,
      Buffer::Seed(n) => n.to_string(),
    };
    match token {
      Token::Number(n) => text.push_str(&n.to_string()),
      Token::Symbol(c) => text.push(c),
    }
    Buffer::Text(text)
  }

  fn text(&self) -> String {
    match self {
      Buffer::Text(s) => s.clone(),
      Buffer::Seed(n) => n.to_string(),
    }
  }
}

/// Splits a running expression into its committed sub-expressions
/// and values, evaluating each sub-expression with the given
/// function. The evaluator is a parameter so the splitting control
/// flow can be tested in isolation with a stub.
///
/// Walking the tokens: `=` evaluates the current buffer, emits its
/// text, and reseeds the buffer with the value; any other token
/// appends its literal text to the buffer. Afterwards the final
/// buffer is always emitted, and a trailing buffer that is still
/// text (the input did not end in `=`) is additionally evaluated so
/// the step list ends with the chain's final value either way.
///
/// Evaluation errors propagate unchanged and no steps are returned.
pub fn split_chain_with<E>(input: &str, mut evaluate: E) -> Result<Vec<CalcStep>, CalcError>
where E: FnMut(&str) -> Result<i64, CalcError> {
  let mut steps: Vec<CalcStep> = Vec::new();
  let mut buffer = Buffer::Text(String::new());
  for token in tokenize(input)? {
    if token == Token::Symbol('=') {
      let text = buffer.text();
      let value = evaluate(&text)?;
      steps.push(CalcStep::Expression(text));
      buffer = Buffer::Seed(value);
    } else {
      buffer = buffer.append(token);
    }
  }
  // A Seed buffer can only exist while the last token seen was `=`,
  // so matching on the buffer also decides the trailing evaluation.
  match buffer {
    Buffer::Seed(value) => {
      steps.push(CalcStep::Value(value));
    }
    Buffer::Text(text) => {
      let value = evaluate(&text)?;
      steps.push(CalcStep::Expression(text));
      steps.push(CalcStep::Value(value));
    }
  }
  Ok(steps)
}

/// [`split_chain_with`] bound to the real expression evaluator.
pub fn split_chain(input: &str) -> Result<Vec<CalcStep>, CalcError> {
  split_chain_with(input, |text| parse(text)?.evaluate())
}
