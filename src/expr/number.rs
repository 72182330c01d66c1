
//! Fixed-width integer folding under an [`OverflowPolicy`].
//!
//! Every function returns `None` exactly when the result does not
//! fit in an `i64` and the policy is [`OverflowPolicy::Fail`].

use crate::mode::calculation::OverflowPolicy;

use num::Integer;

pub fn add(policy: OverflowPolicy, lhs: i64, rhs: i64) -> Option<i64> {
  match policy {
    OverflowPolicy::Fail => lhs.checked_add(rhs),
    OverflowPolicy::Wrapping => Some(lhs.wrapping_add(rhs)),
    OverflowPolicy::Saturating => Some(lhs.saturating_add(rhs)),
  }
}

pub fn sub(policy: OverflowPolicy, lhs: i64, rhs: i64) -> Option<i64> {
  match policy {
    OverflowPolicy::Fail => lhs.checked_sub(rhs),
    OverflowPolicy::Wrapping => Some(lhs.wrapping_sub(rhs)),
    OverflowPolicy::Saturating => Some(lhs.saturating_sub(rhs)),
  }
}

pub fn mul(policy: OverflowPolicy, lhs: i64, rhs: i64) -> Option<i64> {
  match policy {
    OverflowPolicy::Fail => lhs.checked_mul(rhs),
    OverflowPolicy::Wrapping => Some(lhs.wrapping_mul(rhs)),
    OverflowPolicy::Saturating => Some(lhs.saturating_mul(rhs)),
  }
}

pub fn neg(policy: OverflowPolicy, n: i64) -> Option<i64> {
  match policy {
    OverflowPolicy::Fail => n.checked_neg(),
    OverflowPolicy::Wrapping => Some(n.wrapping_neg()),
    OverflowPolicy::Saturating => Some(n.saturating_neg()),
  }
}

/// Division truncating toward zero. The divisor must be nonzero; the
/// only overflowing case is `i64::MIN / -1`.
pub fn div(policy: OverflowPolicy, lhs: i64, rhs: i64) -> Option<i64> {
  assert_ne!(rhs, 0, "division by zero must be handled by the caller");
  match policy {
    OverflowPolicy::Fail => lhs.checked_div(rhs),
    OverflowPolicy::Wrapping => Some(lhs.wrapping_div(rhs)),
    OverflowPolicy::Saturating => Some(lhs.saturating_div(rhs)),
  }
}

/// `base ^ exponent`, rounded to the nearest integer (ties to even).
///
/// A negative exponent on a base of magnitude two or more has a
/// magnitude of at most one half, which always rounds to zero.
pub fn pow(policy: OverflowPolicy, base: i64, exponent: i64) -> Option<i64> {
  match base {
    1 => return Some(1),
    -1 => return Some(if exponent.is_even() { 1 } else { -1 }),
    _ if exponent < 0 => return Some(0),
    0 => return Some(if exponent == 0 { 1 } else { 0 }),
    _ => {}
  }
  let exact = usize::try_from(exponent).ok().and_then(|e| num::checked_pow(base, e));
  match (exact, policy) {
    (Some(n), _) => Some(n),
    (None, OverflowPolicy::Fail) => None,
    (None, OverflowPolicy::Wrapping) => Some(wrapping_pow(base, exponent.unsigned_abs())),
    (None, OverflowPolicy::Saturating) => {
      if base < 0 && exponent.is_odd() {
        Some(i64::MIN)
      } else {
        Some(i64::MAX)
      }
    }
  }
}

fn wrapping_pow(mut base: i64, mut exponent: u64) -> i64 {
  let mut acc: i64 = 1;
  while exponent > 0 {
    if exponent & 1 == 1 {
      acc = acc.wrapping_mul(base);
    }
    base = base.wrapping_mul(base);
    exponent >>= 1;
  }
  acc
}
