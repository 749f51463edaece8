
//! Pure evaluation of a finished token sequence.

pub mod arithmetic;
pub mod shunting_yard;

pub use arithmetic::EvalError;

use arithmetic::apply_binary_op;
use shunting_yard::{ShuntingYardDriver, ShuntingYardError};
use crate::expr::Token;
use crate::expr::operator::BinaryOp;

/// Driver which computes the numeric result directly as the
/// expression reduces, with no intermediate tree.
#[derive(Debug, Clone, Default)]
pub struct ArithmeticDriver;

impl ShuntingYardDriver<f64> for ArithmeticDriver {
  type Output = f64;
  type Error = EvalError;

  fn compile_scalar(&mut self, scalar: f64) -> Result<f64, EvalError> {
    Ok(scalar)
  }

  fn compile_infix_op(&mut self, left: f64, op: BinaryOp, right: f64) -> Result<f64, EvalError> {
    apply_binary_op(op, left, right)
  }
}

/// Evaluates a token sequence to a single value. A failure at any
/// reduction step aborts the whole evaluation; no partial result is
/// ever returned.
pub fn evaluate(tokens: &[Token]) -> Result<f64, ShuntingYardError<EvalError>> {
  let input = tokens.iter().map(|token| match token {
    Token::Number(entry) => shunting_yard::Token::Scalar(entry.value()),
    Token::Operator(op) => shunting_yard::Token::Operator(*op),
  });
  shunting_yard::reduce(&mut ArithmeticDriver, input)
}
