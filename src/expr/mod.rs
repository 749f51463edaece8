
pub mod number;
pub mod operator;

pub use number::NumberEntry;
pub use operator::BinaryOp;

use std::fmt::{self, Display, Formatter};

/// An atomic element of the expression buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
  Number(NumberEntry),
  Operator(BinaryOp),
}

impl From<NumberEntry> for Token {
  fn from(entry: NumberEntry) -> Self {
    Self::Number(entry)
  }
}

impl From<BinaryOp> for Token {
  fn from(op: BinaryOp) -> Self {
    Self::Operator(op)
  }
}

impl From<f64> for Token {
  fn from(value: f64) -> Self {
    Self::Number(NumberEntry::from_value(value))
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Token::Number(entry) => write!(f, "{entry}"),
      Token::Operator(op) => write!(f, "{op}"),
    }
  }
}
