
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign};

/// Thin wrapper around `usize` that represents a byte position in
/// the original input string. Usually used for error reporting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceOffset(pub usize);

/// A span of source offsets. Spans should be considered half-open
/// intervals, with `start` being included and `end` being excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

/// A borrowed piece of the original input, together with the offset
/// at which it begins. The reader and splitter hand these around
/// instead of bare `&str` so that errors deep in the recursion can
/// still point at the right place in the caller's string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
  text: &'a str,
  start: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }
}

impl<'a> Fragment<'a> {
  /// A fragment covering the whole of `text`, starting at offset 0.
  pub fn new(text: &'a str) -> Self {
    Self::at(text, SourceOffset(0))
  }

  pub fn at(text: &'a str, start: SourceOffset) -> Self {
    Self { text, start }
  }

  pub fn as_str(&self) -> &'a str {
    self.text
  }

  pub fn start(&self) -> SourceOffset {
    self.start
  }

  pub fn end(&self) -> SourceOffset {
    self.start + self.text.len()
  }

  pub fn span(&self) -> Span {
    Span::new(self.start(), self.end())
  }

  pub fn len(&self) -> usize {
    self.text.len()
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Splits the fragment at the given byte index, keeping track of
  /// the offset of the second half.
  pub fn split_at(&self, mid: usize) -> (Fragment<'a>, Fragment<'a>) {
    let (left, right) = self.text.split_at(mid);
    (Fragment::at(left, self.start), Fragment::at(right, self.start + mid))
  }

  /// The sub-fragment between byte indices `from` (inclusive) and
  /// `to` (exclusive).
  pub fn slice(&self, from: usize, to: usize) -> Fragment<'a> {
    Fragment::at(&self.text[from..to], self.start + from)
  }
}

impl From<usize> for SourceOffset {
  fn from(i: usize) -> Self {
    SourceOffset(i)
  }
}

impl From<SourceOffset> for usize {
  fn from(i: SourceOffset) -> Self {
    i.0
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl AddAssign<usize> for SourceOffset {
  fn add_assign(&mut self, rhs: usize) {
    self.0 += rhs
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start, self.end)
  }
}

impl Display for Fragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.text)
  }
}
