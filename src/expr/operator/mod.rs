
mod associativity;
mod precedence;

pub use associativity::Associativity;
pub use precedence::Precedence;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// One of the five binary operators on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  Rem,
}

impl BinaryOp {
  /// All five operators, in keypad order.
  pub const ALL: [BinaryOp; 5] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Rem,
  ];

  /// The symbol shown on the keypad and in the expression display.
  pub const fn display_symbol(self) -> char {
    match self {
      BinaryOp::Add => '+',
      BinaryOp::Sub => '-',
      BinaryOp::Mul => '×',
      BinaryOp::Div => '÷',
      BinaryOp::Rem => '%',
    }
  }

  /// Recognizes an operator symbol. The ASCII spellings `*` and `/`
  /// are accepted as aliases for `×` and `÷`, since those are the
  /// keys a physical keyboard produces.
  pub fn from_symbol(ch: char) -> Option<BinaryOp> {
    match ch {
      '+' => Some(BinaryOp::Add),
      '-' => Some(BinaryOp::Sub),
      '×' | '*' => Some(BinaryOp::Mul),
      '÷' | '/' => Some(BinaryOp::Div),
      '%' => Some(BinaryOp::Rem),
      _ => None,
    }
  }

  pub const fn precedence(self) -> Precedence {
    match self {
      BinaryOp::Add | BinaryOp::Sub => Precedence::new(1),
      BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => Precedence::new(2),
    }
  }

  /// All five operators associate to the left, so equal-precedence
  /// chains reduce earliest pair first.
  pub const fn associativity(self) -> Associativity {
    Associativity::LEFT
  }
}

impl Display for BinaryOp {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_symbol())
  }
}
