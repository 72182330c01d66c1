
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The differentiator's current calculation mode, which controls how
/// constant folding treats results that do not fit in an `i64`.
///
/// This structure is designed to be cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculationMode {
  overflow_policy: OverflowPolicy,
}

/// What to do when folding two constants produces a value outside
/// the range of `i64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
  /// Report an arithmetic overflow error.
  #[default]
  Fail,
  /// Two's complement wraparound.
  Wrapping,
  /// Clamp to `i64::MIN` or `i64::MAX`.
  Saturating,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown overflow policy '{0}' (expected one of: fail, wrap, saturate)")]
pub struct ParseOverflowPolicyError(String);

impl CalculationMode {
  pub fn new() -> Self {
    Self::default()
  }

  /// The overflow policy is [`OverflowPolicy::Fail`] by default. If
  /// it is changed, constant folding will silently produce a
  /// wrapped or clamped value instead of an error.
  pub fn overflow_policy(&self) -> OverflowPolicy {
    self.overflow_policy
  }

  /// Sets the overflow policy. See
  /// [`CalculationMode::overflow_policy`].
  pub fn set_overflow_policy(&mut self, policy: OverflowPolicy) {
    self.overflow_policy = policy;
  }

  pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
    self.set_overflow_policy(policy);
    self
  }
}

impl Display for OverflowPolicy {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      OverflowPolicy::Fail => write!(f, "fail"),
      OverflowPolicy::Wrapping => write!(f, "wrap"),
      OverflowPolicy::Saturating => write!(f, "saturate"),
    }
  }
}

impl FromStr for OverflowPolicy {
  type Err = ParseOverflowPolicyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "fail" => Ok(OverflowPolicy::Fail),
      "wrap" => Ok(OverflowPolicy::Wrapping),
      "saturate" => Ok(OverflowPolicy::Saturating),
      _ => Err(ParseOverflowPolicyError(s.to_owned())),
    }
  }
}
