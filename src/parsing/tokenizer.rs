
use super::source::{Fragment, SourceOffset};

use regex::Regex;

/// A cursor over a [`Fragment`] of the original input. Positions
/// reported by the state are absolute offsets into the original
/// input, not relative to the fragment.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(fragment: Fragment<'a>) -> Self {
    Self {
      input: fragment.as_str(),
      position: fragment.start(),
    }
  }

  pub fn remaining_len(&self) -> usize {
    self.input.len()
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// The unread remainder of the input, as a fragment.
  pub fn rest(&self) -> Fragment<'a> {
    Fragment::at(self.input, self.position)
  }

  /// Advances the position of `self` by `amount`. Returns the
  /// skipped portion of the input. This method will never advance
  /// beyond one-past-the-end of the input. If `amount` is too large,
  /// the method will advance to the end of the string and then stop.
  pub fn advance(&mut self, mut amount: usize) -> Fragment<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    Fragment::at(prefix, match_pos)
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<Fragment<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<Fragment<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }
}
