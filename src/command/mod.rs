
//! The edit commands a presentation shell can deliver, and their
//! dispatch onto the calculator state.

pub mod keymap;

use crate::expr::BinaryOp;
use crate::state::CalculatorState;

use serde::{Serialize, Deserialize};

/// A single edit delivered by the presentation shell. Commands are
/// plain data so a shell can ship them across a process or event-bus
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCommand {
  /// Types one digit (`'0'` through `'9'`).
  Digit(char),
  /// Types the decimal point.
  DecimalPoint,
  /// Chooses, or overwrites, the pending operator.
  Operator(BinaryOp),
  /// Deletes the most recent piece of input.
  DeleteLast,
  /// Negates the trailing number.
  ToggleSign,
  /// Reduces the expression to its result.
  Evaluate,
  /// Resets the session.
  Clear,
}

/// Applies one command to the state. Only evaluation can fail; the
/// error carries the user-facing message for the shell to show, and
/// the state is untouched when it occurs.
pub fn run_edit_command(state: &mut CalculatorState, command: EditCommand) -> anyhow::Result<()> {
  match command {
    EditCommand::Digit(ch) => state.append_digit_or_point(ch),
    EditCommand::DecimalPoint => state.append_digit_or_point('.'),
    EditCommand::Operator(op) => state.choose_operator(op),
    EditCommand::DeleteLast => state.delete_last(),
    EditCommand::ToggleSign => state.toggle_sign(),
    EditCommand::Evaluate => state.evaluate_now()?,
    EditCommand::Clear => state.clear(),
  }
  Ok(())
}
