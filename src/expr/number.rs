
use std::fmt::{self, Display, Formatter};

/// A number literal as the user typed it, one keystroke at a time.
///
/// The entry keeps the raw typed text, so `0.10` stays `0.10` on
/// screen until an operation canonicalizes it. Invariant: the text
/// always parses as an `f64`. For a hand-typed entry that means an
/// optional leading `-`, at least one digit, and at most one `.` (a
/// trailing `.` is permitted while typing, and denotes the integer
/// part alone). An entry built from a computed value uses the
/// canonical text form instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberEntry {
  text: String,
}

impl NumberEntry {
  /// The canonical zero entry, with text `"0"`.
  pub fn zero() -> NumberEntry {
    NumberEntry { text: "0".to_string() }
  }

  /// Starts a new entry from the first typed character. A digit
  /// begins the entry as itself; a `.` begins it as `0.`. Panics on
  /// any other character.
  pub fn from_first_char(ch: char) -> NumberEntry {
    match ch {
      '.' => NumberEntry { text: "0.".to_string() },
      ch if ch.is_ascii_digit() => NumberEntry { text: ch.to_string() },
      ch => panic!("NumberEntry::from_first_char requires a digit or point, got {:?}", ch),
    }
  }

  /// Constructs an entry holding the canonical text for `value`.
  ///
  /// The canonical form is Rust's shortest round-trip formatting,
  /// with negative zero written as `"0"`.
  pub fn from_value(value: f64) -> NumberEntry {
    if value == 0.0 {
      NumberEntry::zero()
    } else {
      NumberEntry { text: value.to_string() }
    }
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  /// Appends a digit to the entry. Panics if `digit` is not an ASCII
  /// digit.
  pub fn push_digit(&mut self, digit: char) {
    if !digit.is_ascii_digit() {
      panic!("NumberEntry::push_digit requires a digit, got {:?}", digit);
    }
    self.text.push(digit);
  }

  /// Appends a decimal point. No-op if the entry already contains
  /// one; a number gets at most one point.
  pub fn push_point(&mut self) {
    if !self.text.contains('.') {
      self.text.push('.');
    }
  }

  /// Removes the last typed character. Returns `None` when the
  /// remaining text no longer parses as a number (emptied, a bare
  /// `-`, or a partially deleted non-finite form like `inf`), in
  /// which case the caller should drop the entry entirely.
  pub fn pop_char(mut self) -> Option<NumberEntry> {
    self.text.pop();
    if self.text.parse::<f64>().is_ok() {
      Some(self)
    } else {
      None
    }
  }

  /// Negates the entry in place. The text is re-canonicalized by
  /// round-tripping through the value, so `0.10` becomes `-0.1` and
  /// a trailing point is dropped.
  pub fn toggle_sign(&mut self) {
    *self = NumberEntry::from_value(-self.value());
  }

  /// The value this entry denotes.
  pub fn value(&self) -> f64 {
    self.text.parse().expect("NumberEntry text should always parse as f64")
  }

  /// True if the entry is the untouched text `"0"`, as opposed to a
  /// partially typed zero such as `0.` or `-0`.
  pub fn is_zero_text(&self) -> bool {
    self.text == "0"
  }
}

impl Display for NumberEntry {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.text)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zero_entry() {
    let entry = NumberEntry::zero();
    assert_eq!(entry.text(), "0");
    assert_eq!(entry.value(), 0.0);
    assert!(entry.is_zero_text());
  }

  #[test]
  fn test_from_first_char() {
    assert_eq!(NumberEntry::from_first_char('7').text(), "7");
    assert_eq!(NumberEntry::from_first_char('0').text(), "0");
    assert_eq!(NumberEntry::from_first_char('.').text(), "0.");
  }

  #[test]
  #[should_panic]
  fn test_from_first_char_rejects_non_digit() {
    NumberEntry::from_first_char('x');
  }

  #[test]
  fn test_push_digit_accumulates() {
    let mut entry = NumberEntry::from_first_char('1');
    entry.push_digit('2');
    entry.push_digit('0');
    assert_eq!(entry.text(), "120");
    assert_eq!(entry.value(), 120.0);
  }

  #[test]
  fn test_push_point_at_most_once() {
    let mut entry = NumberEntry::from_first_char('1');
    entry.push_point();
    entry.push_digit('5');
    entry.push_point();
    assert_eq!(entry.text(), "1.5");
  }

  #[test]
  fn test_trailing_point_denotes_integer_part() {
    let mut entry = NumberEntry::from_first_char('3');
    entry.push_point();
    assert_eq!(entry.text(), "3.");
    assert_eq!(entry.value(), 3.0);
  }

  #[test]
  fn test_pop_char_keeps_valid_entry() {
    let mut entry = NumberEntry::from_first_char('1');
    entry.push_digit('2');
    let entry = entry.pop_char().unwrap();
    assert_eq!(entry.text(), "1");
  }

  #[test]
  fn test_pop_char_exhausts_single_digit() {
    let entry = NumberEntry::from_first_char('7');
    assert_eq!(entry.pop_char(), None);
  }

  #[test]
  fn test_pop_char_exhausts_bare_minus() {
    let mut entry = NumberEntry::from_first_char('3');
    entry.toggle_sign();
    assert_eq!(entry.text(), "-3");
    assert_eq!(entry.pop_char(), None);
  }

  #[test]
  fn test_pop_char_drops_non_finite_remnant() {
    let entry = NumberEntry::from_value(f64::INFINITY);
    assert_eq!(entry.text(), "inf");
    assert_eq!(entry.pop_char(), None);

    let entry = NumberEntry::from_value(f64::NAN);
    assert_eq!(entry.text(), "NaN");
    assert_eq!(entry.pop_char(), None);
  }

  #[test]
  fn test_toggle_sign_is_self_inverse_on_canonical_text() {
    let mut entry = NumberEntry::from_first_char('5');
    entry.toggle_sign();
    assert_eq!(entry.text(), "-5");
    entry.toggle_sign();
    assert_eq!(entry.text(), "5");
  }

  #[test]
  fn test_toggle_sign_canonicalizes_text() {
    let mut entry = NumberEntry::from_first_char('0');
    entry.push_point();
    entry.push_digit('1');
    entry.push_digit('0');
    assert_eq!(entry.text(), "0.10");
    entry.toggle_sign();
    assert_eq!(entry.text(), "-0.1");
  }

  #[test]
  fn test_toggle_sign_on_zero_stays_zero() {
    let mut entry = NumberEntry::zero();
    entry.toggle_sign();
    assert_eq!(entry.text(), "0");
  }

  #[test]
  fn test_from_value_integral_has_no_decimals() {
    assert_eq!(NumberEntry::from_value(2.0).text(), "2");
    assert_eq!(NumberEntry::from_value(-11.0).text(), "-11");
  }

  #[test]
  fn test_from_value_negative_zero_is_zero() {
    assert_eq!(NumberEntry::from_value(-0.0).text(), "0");
  }

  #[test]
  fn test_from_value_fractional() {
    assert_eq!(NumberEntry::from_value(3.5).text(), "3.5");
    assert_eq!(NumberEntry::from_value(0.333333).text(), "0.333333");
  }

  #[test]
  fn test_from_value_carries_non_finite() {
    assert_eq!(NumberEntry::from_value(f64::INFINITY).text(), "inf");
    assert_eq!(NumberEntry::from_value(f64::NEG_INFINITY).text(), "-inf");
  }
}
