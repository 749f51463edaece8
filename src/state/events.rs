
//! Serializable events the engine can send to the presentation
//! shell.

use super::CalculatorState;

use serde::Serialize;

/// Instructs the shell to re-render the two display lines with the
/// given values.
#[derive(Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshDisplayPayload {
  /// The expression currently being edited.
  pub current_expression: String,
  /// The most recently evaluated expression, shown above the current
  /// one.
  pub previous_operand: String,
}

/// Instructs the shell to render an error message to the user.
#[derive(Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShowErrorPayload {
  /// The error message to display.
  pub error_message: String,
}

impl RefreshDisplayPayload {
  pub const EVENT_NAME: &'static str = "refresh-display";

  pub fn from_state(state: &CalculatorState) -> Self {
    Self {
      current_expression: state.expression_text(),
      previous_operand: state.previous_operand().to_owned(),
    }
  }
}

impl ShowErrorPayload {
  pub const EVENT_NAME: &'static str = "show-error";
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::state::test_utils::state_of;

  use serde_json::json;

  #[test]
  fn test_refresh_display_payload_from_state() {
    let mut state = state_of("5+2");
    state.evaluate_now().unwrap();
    state.append_digit_or_point('9');
    let payload = RefreshDisplayPayload::from_state(&state);
    assert_eq!(payload.current_expression, "9");
    assert_eq!(payload.previous_operand, "5 + 2");
  }

  #[test]
  fn test_refresh_display_payload_serializes_camel_case() {
    let payload = RefreshDisplayPayload {
      current_expression: "5 + 2".to_owned(),
      previous_operand: "1 + 1".to_owned(),
    };
    assert_eq!(
      serde_json::to_value(payload).unwrap(),
      json!({
        "currentExpression": "5 + 2",
        "previousOperand": "1 + 1",
      }),
    );
  }

  #[test]
  fn test_show_error_payload_serializes_camel_case() {
    let payload = ShowErrorPayload {
      error_message: "Division by zero".to_owned(),
    };
    assert_eq!(
      serde_json::to_value(payload).unwrap(),
      json!({ "errorMessage": "Division by zero" }),
    );
  }
}
