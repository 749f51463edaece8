
//! Translation of keyboard input into edit commands.

use super::EditCommand;
use crate::expr::BinaryOp;

/// Maps a key name, as delivered by a browser-style `keydown` event,
/// to the command it triggers. Unbound keys map to `None`.
///
/// Digits, `.`, and the operator symbols act as their keypad
/// counterparts; `*` and `/` are the keyboard spellings of `×` and
/// `÷`. `Enter` or `=` evaluates, `Backspace` deletes, `Escape` or
/// `c` clears, and `n` toggles the sign.
pub fn command_for_key(key: &str) -> Option<EditCommand> {
  if let Some(ch) = single_char(key) {
    if ch.is_ascii_digit() {
      return Some(EditCommand::Digit(ch));
    }
    if ch == '.' {
      return Some(EditCommand::DecimalPoint);
    }
    if let Some(op) = BinaryOp::from_symbol(ch) {
      return Some(EditCommand::Operator(op));
    }
  }
  match key {
    "Enter" | "=" => Some(EditCommand::Evaluate),
    "Backspace" => Some(EditCommand::DeleteLast),
    "Escape" | "c" | "C" => Some(EditCommand::Clear),
    "n" | "N" => Some(EditCommand::ToggleSign),
    _ => None,
  }
}

fn single_char(key: &str) -> Option<char> {
  let mut chars = key.chars();
  let ch = chars.next()?;
  if chars.next().is_none() {
    Some(ch)
  } else {
    None
  }
}
