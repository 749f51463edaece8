
use crate::expr::operator::BinaryOp;

use std::error::{Error as StdError};
use std::fmt::{self, Display, Formatter};

/// A token, for the purposes of the two-stack reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<T> {
  /// A value in the target language.
  Scalar(T),
  /// An infix, binary operator.
  Operator(BinaryOp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuntingYardError<E: StdError> {
  Custom(E),
  /// An operator was reduced with fewer than two values available,
  /// or the input produced no value at all.
  MissingOperand,
  /// More than one value remained after all operators were reduced.
  DanglingOperand,
}

/// A type implementing this trait is capable of driving the two-stack
/// reduction and compiling tokens to a given target language.
pub trait ShuntingYardDriver<T> {
  type Output;
  type Error: StdError;

  fn compile_scalar(&mut self, scalar: T) -> Result<Self::Output, Self::Error>;
  fn compile_infix_op(
    &mut self,
    left: Self::Output,
    op: BinaryOp,
    right: Self::Output,
  ) -> Result<Self::Output, Self::Error>;
}

impl<E: StdError> Display for ShuntingYardError<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      ShuntingYardError::Custom(e) =>
        write!(f, "{}", e),
      ShuntingYardError::MissingOperand =>
        write!(f, "operator is missing an operand"),
      ShuntingYardError::DanglingOperand =>
        write!(f, "expression left more than one value"),
    }
  }
}

impl<E> StdError for ShuntingYardError<E>
where E: StdError + 'static {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    match self {
      ShuntingYardError::Custom(e) => Some(e),
      ShuntingYardError::MissingOperand => None,
      ShuntingYardError::DanglingOperand => None,
    }
  }
}

impl<E: StdError> From<E> for ShuntingYardError<E> {
  fn from(e: E) -> Self {
    Self::Custom(e)
  }
}

/// Reduces a token stream to a single output value, respecting
/// operator precedence and associativity.
pub fn reduce<T, D, I>(
  driver: &mut D,
  input: I,
) -> Result<D::Output, ShuntingYardError<D::Error>>
where D: ShuntingYardDriver<T>,
      I: IntoIterator<Item = Token<T>> {
  let mut operator_stack: Vec<BinaryOp> = Vec::new();
  let mut output_stack: Vec<D::Output> = Vec::new();
  for token in input {
    match token {
      Token::Scalar(t) => {
        let output = driver.compile_scalar(t)?;
        output_stack.push(output);
      }
      Token::Operator(op) => {
        // Reduce while the stacked operator binds at least as tightly.
        while let Some(stack_op) = operator_stack.pop() {
          if binds_before(stack_op, op) {
            simplify_operator::<T, D>(driver, &mut output_stack, stack_op)?;
          } else {
            operator_stack.push(stack_op);
            break;
          }
        }
        operator_stack.push(op);
      }
    }
  }

  // Pop and resolve remaining operators.
  while let Some(stack_op) = operator_stack.pop() {
    simplify_operator::<T, D>(driver, &mut output_stack, stack_op)?;
  }

  let final_result = output_stack.pop().ok_or(ShuntingYardError::MissingOperand)?;
  if output_stack.pop().is_some() {
    return Err(ShuntingYardError::DanglingOperand);
  }
  Ok(final_result)
}

fn binds_before(stack_op: BinaryOp, current_op: BinaryOp) -> bool {
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity().is_left_assoc())
}

fn simplify_operator<T, D>(
  driver: &mut D,
  output_stack: &mut Vec<D::Output>,
  op: BinaryOp,
) -> Result<(), ShuntingYardError<D::Error>>
where D: ShuntingYardDriver<T> {
  let (left, right) = output_stack.pop()
    .and_then(|right| output_stack.pop().map(|left| (left, right)))
    .ok_or(ShuntingYardError::MissingOperand)?;
  let output = driver.compile_infix_op(left, op, right)?;
  output_stack.push(output);
  Ok(())
}
