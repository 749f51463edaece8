
/// The precedence of an operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u64);

impl Precedence {
  pub const fn new(n: u64) -> Precedence {
    Precedence(n)
  }
}
