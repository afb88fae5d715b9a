
use super::token::Token;
use crate::error::CalcError;

use regex::Regex;
use once_cell::sync::Lazy;

/// Scanner over a source string. Keeps the not-yet-consumed suffix
/// and the absolute position, so lexing functions can peek and
/// advance without re-slicing by hand.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: usize,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: 0 }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> usize {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, up to the end
  /// of the input, and returns the skipped substring.
  pub fn advance(&mut self, mut amount: usize) -> &'a str {
    amount = amount.min(self.input.len());
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    prefix
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<&'a str> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");
    Some(self.advance(m.len()))
  }

  pub fn consume_spaces(&mut self) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());
    self.read_regex(&RE).expect("regex should not fail");
  }
}

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Splits a source string into tokens. A run of decimal digits
/// accumulates left to right into a single non-negative [`Token::Number`]
/// (each digit `d` takes the running value to `value * 10 + d`);
/// whitespace separates tokens and is dropped; every other character
/// becomes its own one-character [`Token::Symbol`].
///
/// No legality check happens here. Symbols outside the expression
/// alphabet pass through untouched and are rejected, if at all, by
/// the postfix conversion. The running-expression splitter relies on
/// that to receive `=` (and anything else) as an ordinary token. The
/// one way tokenization itself can fail is a digit run whose value
/// does not fit in `i64`, which is [`CalcError::InvalidExpression`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
  let mut state = TokenizerState::new(input);
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    if state.is_eof() {
      break;
    }
    if let Some(digits) = state.read_regex(&DIGITS_RE) {
      let mut value: i64 = 0;
      for d in digits.chars() {
        let d = i64::from(d.to_digit(10).expect("digit regex matched a non-digit"));
        value = value.checked_mul(10)
          .and_then(|v| v.checked_add(d))
          .ok_or(CalcError::InvalidExpression)?;
      }
      tokens.push(Token::Number(value));
    } else {
      // consume_spaces ran and we are not at EOF, so a char exists.
      let c = state.peek().expect("scanner is not at EOF");
      state.advance(c.len_utf8());
      tokens.push(Token::Symbol(c));
    }
  }
  Ok(tokens)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sym(c: char) -> Token {
    Token::Symbol(c)
  }

  fn num(n: i64) -> Token {
    Token::Number(n)
  }

  #[test]
  fn test_tokenize_simple_expression() {
    assert_eq!(tokenize("4+23").unwrap(), vec![num(4), sym('+'), num(23)]);
  }

  #[test]
  fn test_tokenize_with_spaces() {
    assert_eq!(
      tokenize("3 + 5 * (2 - 8)").unwrap(),
      vec![
        num(3), sym('+'), num(5), sym('*'),
        sym('('), num(2), sym('-'), num(8), sym(')'),
      ],
    );
  }

  #[test]
  fn test_tokenize_multi_digit_accumulation() {
    assert_eq!(tokenize("332+4+435)4").unwrap(), vec![
      num(332), sym('+'), num(4), sym('+'), num(435), sym(')'), num(4),
    ]);
  }

  #[test]
  fn test_tokenize_flushes_trailing_digits() {
    assert_eq!(tokenize("1+200").unwrap(), vec![num(1), sym('+'), num(200)]);
    assert_eq!(tokenize("42").unwrap(), vec![num(42)]);
  }

  #[test]
  fn test_tokenize_passes_unknown_symbols_through() {
    assert_eq!(tokenize("3 & 5").unwrap(), vec![num(3), sym('&'), num(5)]);
    assert_eq!(tokenize("2+1=/3").unwrap(), vec![
      num(2), sym('+'), num(1), sym('='), sym('/'), num(3),
    ]);
  }

  #[test]
  fn test_tokenize_empty_and_blank() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize("   \t ").unwrap(), vec![]);
  }

  #[test]
  fn test_tokenize_rejects_literal_too_large_for_i64() {
    // i64::MAX itself still fits...
    assert_eq!(tokenize("9223372036854775807").unwrap(), vec![num(i64::MAX)]);
    // ...one more does not, nor does an absurdly long digit run.
    assert_eq!(tokenize("9223372036854775808"), Err(CalcError::InvalidExpression));
    assert_eq!(tokenize("99999999999999999999999"), Err(CalcError::InvalidExpression));
  }

  #[test]
  fn test_scanner_advance_and_peek() {
    let mut state = TokenizerState::new("abcd");
    assert_eq!(state.peek(), Some('a'));
    assert_eq!(state.advance(2), "ab");
    assert_eq!(state.current_pos(), 2);
    assert_eq!(state.peek(), Some('c'));
    assert_eq!(state.advance(99), "cd");
    assert!(state.is_eof());
  }

  #[test]
  fn test_scanner_consume_spaces() {
    let mut state = TokenizerState::new("  abc");
    state.consume_spaces();
    assert_eq!(state.current_pos(), 2);
    // Second one has no effect, since there are no spaces to consume.
    state.consume_spaces();
    assert_eq!(state.current_pos(), 2);
  }
}
