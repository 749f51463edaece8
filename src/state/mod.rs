
//! Calculator session state and the edit operations that mutate it.

pub mod events;

use crate::error::Error;
use crate::eval;
use crate::eval::shunting_yard::ShuntingYardError;
use crate::expr::{BinaryOp, NumberEntry, Token};

use itertools::Itertools;

/// The state of one calculator session: the expression being built,
/// the reset flag, and the record of the last evaluation.
///
/// The token sequence strictly alternates numbers and operators,
/// starting with a number, and is never empty; clearing or emptying
/// the buffer restores the single canonical zero token. A sequence
/// ending on an operator is input still in progress and will not
/// evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
  tokens: Vec<Token>,
  pending_reset: bool,
  last_result: Option<f64>,
  previous_operand: String,
}

impl CalculatorState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Handles one typed digit or decimal point. Any other character
  /// is ignored.
  ///
  /// Right after an evaluation the buffer holds the result; the first
  /// digit or point entered then starts a fresh expression instead of
  /// extending the result. A digit entered while the buffer is the
  /// untouched zero replaces it, so `01` cannot arise from the start
  /// of input.
  pub fn append_digit_or_point(&mut self, ch: char) {
    if !ch.is_ascii_digit() && ch != '.' {
      return;
    }
    if self.pending_reset {
      self.reset_tokens();
    }
    if self.is_untouched_zero() && ch != '.' {
      self.tokens[0] = Token::Number(NumberEntry::from_first_char(ch));
      return;
    }
    match self.tokens.last_mut() {
      Some(Token::Number(entry)) => {
        if ch == '.' {
          entry.push_point();
        } else {
          entry.push_digit(ch);
        }
      }
      Some(Token::Operator(_)) | None => {
        self.tokens.push(Token::Number(NumberEntry::from_first_char(ch)));
      }
    }
  }

  /// Appends `op` after the trailing number, or replaces the trailing
  /// operator if there already is one. The replacement rule lets the
  /// user change their mind about an operator without retyping the
  /// number before it.
  ///
  /// Choosing an operator right after an evaluation chains onto the
  /// result rather than starting fresh.
  pub fn choose_operator(&mut self, op: BinaryOp) {
    match self.tokens.last_mut() {
      Some(Token::Operator(last)) => {
        *last = op;
      }
      Some(Token::Number(_)) => {
        self.tokens.push(Token::Operator(op));
      }
      None => {}
    }
    self.pending_reset = false;
  }

  /// Deletes the most recent piece of input: a trailing operator is
  /// removed whole, a trailing number loses its last character.
  /// Right after an evaluation this clears the whole session instead.
  pub fn delete_last(&mut self) {
    if self.pending_reset {
      self.clear();
      return;
    }
    match self.tokens.pop() {
      Some(Token::Operator(_)) => {}
      Some(Token::Number(entry)) => {
        if let Some(entry) = entry.pop_char() {
          self.tokens.push(Token::Number(entry));
        }
      }
      None => {}
    }
    if self.tokens.is_empty() {
      self.tokens.push(Token::Number(NumberEntry::zero()));
    }
  }

  /// Negates the trailing number. No-op when the buffer ends on an
  /// operator. Leaves the reset flag alone, so a negated result still
  /// resets on the next digit.
  pub fn toggle_sign(&mut self) {
    if let Some(Token::Number(entry)) = self.tokens.last_mut() {
      entry.toggle_sign();
    }
  }

  /// Evaluates the current expression. When the buffer ends on an
  /// operator the input is incomplete and nothing happens.
  ///
  /// On success the whole buffer collapses to the single result
  /// token, the evaluated expression text is kept as the previous
  /// operand, and the reset flag is set. On failure the state is left
  /// exactly as it was, so the user can correct the expression.
  pub fn evaluate_now(&mut self) -> Result<(), Error> {
    if !matches!(self.tokens.last(), Some(Token::Number(_))) {
      return Ok(());
    }
    let value = eval::evaluate(&self.tokens).map_err(|err| match err {
      ShuntingYardError::Custom(err) => Error::EvalError(err),
      err => Error::ShuntingYardError(err),
    })?;
    self.previous_operand = self.expression_text();
    self.last_result = Some(value);
    self.tokens.clear();
    self.tokens.push(Token::Number(NumberEntry::from_value(value)));
    self.pending_reset = true;
    Ok(())
  }

  /// Restores the canonical zero state and forgets the last
  /// evaluation.
  pub fn clear(&mut self) {
    *self = CalculatorState::default();
  }

  /// The expression as displayed: tokens joined with single spaces,
  /// e.g. `5 + 2`.
  pub fn expression_text(&self) -> String {
    self.tokens.iter().join(" ")
  }

  /// The text of the most recently evaluated expression, or `""` if
  /// nothing has been evaluated since the last clear.
  pub fn previous_operand(&self) -> &str {
    &self.previous_operand
  }

  pub fn last_result(&self) -> Option<f64> {
    self.last_result
  }

  pub fn pending_reset(&self) -> bool {
    self.pending_reset
  }

  fn reset_tokens(&mut self) {
    self.tokens.clear();
    self.tokens.push(Token::Number(NumberEntry::zero()));
    self.pending_reset = false;
  }

  fn is_untouched_zero(&self) -> bool {
    match self.tokens.as_slice() {
      [Token::Number(entry)] => entry.is_zero_text(),
      _ => false,
    }
  }
}

impl Default for CalculatorState {
  fn default() -> Self {
    Self {
      tokens: vec![Token::Number(NumberEntry::zero())],
      pending_reset: false,
      last_result: None,
      previous_operand: String::new(),
    }
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;

  /// Produces a state by replaying keystrokes. Digits and `.` go
  /// through `append_digit_or_point`; operator symbols (including the
  /// ASCII aliases) go through `choose_operator`.
  pub fn state_of(input: &str) -> CalculatorState {
    let mut state = CalculatorState::new();
    for ch in input.chars() {
      match BinaryOp::from_symbol(ch) {
        Some(op) => state.choose_operator(op),
        None => state.append_digit_or_point(ch),
      }
    }
    state
  }
}
