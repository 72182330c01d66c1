
use super::Expr;
use super::number;
use super::symbol::{BinaryOperator, ElementaryFunction};
use crate::mode::calculation::CalculationMode;
use crate::util::Sign;

use thiserror::Error;
use tracing::{debug, trace};

/// Arithmetic on [`Expr`] values which simplifies as it goes.
///
/// Operations on two constants are folded immediately, and the
/// additive and multiplicative identities are eliminated. Anything
/// else is left as an operator node; in particular, no attempt is
/// made to look inside non-constant operands.
///
/// Every operation checks its rules in a fixed order, and the order
/// matters. For instance, `power(0, 0)` is `1` because the zero
/// exponent rule is checked before the zero base rule.
#[derive(Debug, Clone, Default)]
pub struct SymbolicArithmetic {
  mode: CalculationMode,
}

/// An error that occurred while folding two constants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
  #[error("Integer overflow while folding ({operator} {lhs} {rhs})")]
  Overflow { operator: BinaryOperator, lhs: i64, rhs: i64 },
  #[error("Division by zero while folding (/ {numerator} 0)")]
  DivisionByZero { numerator: i64 },
}

impl SymbolicArithmetic {
  pub fn new(mode: CalculationMode) -> Self {
    Self { mode }
  }

  pub fn mode(&self) -> &CalculationMode {
    &self.mode
  }

  /// Adds (or, with a negative sign, subtracts) two expressions.
  pub fn add_signed(&self, a: Expr, b: Expr, sign: Sign) -> Result<Expr, ArithmeticError> {
    if a.is_zero() {
      return match sign {
        Sign::Positive => Ok(b),
        Sign::Negative => self.negate(b),
      };
    }
    if b.is_zero() {
      return Ok(a);
    }
    let operator = match sign {
      Sign::Positive => BinaryOperator::Add,
      Sign::Negative => BinaryOperator::Subtract,
    };
    if let (Some(lhs), Some(rhs)) = (a.as_constant(), b.as_constant()) {
      let policy = self.mode.overflow_policy();
      let result = match sign {
        Sign::Positive => number::add(policy, lhs, rhs),
        Sign::Negative => number::sub(policy, lhs, rhs),
      };
      return fold(operator, lhs, rhs, result);
    }
    Ok(Expr::operator(operator, a, b))
  }

  pub fn add(&self, a: Expr, b: Expr) -> Result<Expr, ArithmeticError> {
    self.add_signed(a, b, Sign::Positive)
  }

  pub fn subtract(&self, a: Expr, b: Expr) -> Result<Expr, ArithmeticError> {
    self.add_signed(a, b, Sign::Negative)
  }

  pub fn multiply(&self, a: Expr, b: Expr) -> Result<Expr, ArithmeticError> {
    if a.is_zero() || b.is_zero() {
      return Ok(Expr::zero());
    }
    if a.is_one() {
      return Ok(b);
    }
    if b.is_one() {
      return Ok(a);
    }
    if let (Some(lhs), Some(rhs)) = (a.as_constant(), b.as_constant()) {
      let result = number::mul(self.mode.overflow_policy(), lhs, rhs);
      return fold(BinaryOperator::Multiply, lhs, rhs, result);
    }
    Ok(Expr::operator(BinaryOperator::Multiply, a, b))
  }

  pub fn divide(&self, a: Expr, b: Expr) -> Result<Expr, ArithmeticError> {
    if a.is_zero() {
      return Ok(Expr::zero());
    }
    if b.is_one() {
      return Ok(a);
    }
    if let (Some(lhs), Some(rhs)) = (a.as_constant(), b.as_constant()) {
      if rhs == 0 {
        debug!("refusing to fold division of {lhs} by zero");
        return Err(ArithmeticError::DivisionByZero { numerator: lhs });
      }
      let result = number::div(self.mode.overflow_policy(), lhs, rhs);
      return fold(BinaryOperator::Divide, lhs, rhs, result);
    }
    Ok(Expr::operator(BinaryOperator::Divide, a, b))
  }

  pub fn power(&self, a: Expr, b: Expr) -> Result<Expr, ArithmeticError> {
    if b.is_zero() {
      return Ok(Expr::one());
    }
    if b.is_one() {
      return Ok(a);
    }
    if a.is_zero() {
      return Ok(Expr::zero());
    }
    if let (Some(lhs), Some(rhs)) = (a.as_constant(), b.as_constant()) {
      let result = number::pow(self.mode.overflow_policy(), lhs, rhs);
      return fold(BinaryOperator::Power, lhs, rhs, result);
    }
    Ok(Expr::operator(BinaryOperator::Power, a, b))
  }

  /// Flips the sign of a constant. A non-constant expression `e`
  /// becomes `(* -1 e)`, the same shape the derivative of `cos` uses.
  pub fn negate(&self, expr: Expr) -> Result<Expr, ArithmeticError> {
    match expr {
      Expr::Constant(n) => {
        let result = number::neg(self.mode.overflow_policy(), n);
        fold(BinaryOperator::Subtract, 0, n, result)
      }
      expr => self.multiply(Expr::Constant(-1), expr),
    }
  }

  pub fn ln(&self, expr: Expr) -> Expr {
    self.apply(ElementaryFunction::Ln, expr)
  }

  /// Wraps the expression in a function call. Function applications
  /// are never evaluated, even on constants.
  pub fn apply(&self, function: ElementaryFunction, expr: Expr) -> Expr {
    Expr::function(function, expr)
  }
}

fn fold(operator: BinaryOperator, lhs: i64, rhs: i64, result: Option<i64>) -> Result<Expr, ArithmeticError> {
  match result {
    Some(n) => {
      trace!("folded ({operator} {lhs} {rhs}) to {n}");
      Ok(Expr::Constant(n))
    }
    None => {
      debug!("overflow while folding ({operator} {lhs} {rhs})");
      Err(ArithmeticError::Overflow { operator, lhs, rhs })
    }
  }
}
