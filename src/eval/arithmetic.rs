
use crate::expr::operator::BinaryOp;

use thiserror::Error;

/// A failure during arithmetic reduction. Both variants arise from a
/// zero right-hand operand; every other operation on finite floats
/// produces a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Modulo by zero is undefined")]
  ModuloByZero,
}

/// Applies one binary operator to fully evaluated operands.
pub fn apply_binary_op(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalError> {
  match op {
    BinaryOp::Add => Ok(left + right),
    BinaryOp::Sub => Ok(left - right),
    BinaryOp::Mul => Ok(left * right),
    BinaryOp::Div => divide(left, right),
    BinaryOp::Rem => modulo(left, right),
  }
}

/// Division with the calculator's display rounding: an integral
/// quotient is returned exactly, anything else is rounded to six
/// decimal places. The rounding loses precision for non-terminating
/// decimals; that is the intended display behavior, not an accident.
fn divide(left: f64, right: f64) -> Result<f64, EvalError> {
  if right == 0.0 {
    return Err(EvalError::DivisionByZero);
  }
  let quotient = left / right;
  if quotient.fract() == 0.0 {
    Ok(quotient)
  } else {
    Ok((quotient * 1e6).round() / 1e6)
  }
}

fn modulo(left: f64, right: f64) -> Result<f64, EvalError> {
  if right == 0.0 {
    return Err(EvalError::ModuloByZero);
  }
  // f64's % truncates toward zero, so the sign follows the dividend.
  Ok(left % right)
}
