
use crate::expr::Expr;
use crate::expr::arithmetic::{SymbolicArithmetic, ArithmeticError};
use crate::expr::symbol::{BinaryOperator, ElementaryFunction};
use crate::mode::calculation::CalculationMode;
use crate::util::Sign;

use thiserror::Error;
use tracing::instrument;

/// Differentiates expressions with respect to `x`, simplifying each
/// intermediate result with [`SymbolicArithmetic`].
#[derive(Debug, Clone, Default)]
pub struct DerivativeEngine {
  arithmetic: SymbolicArithmetic,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to differentiate {original_expr}: {error}")]
pub struct DifferentiationFailure {
  pub original_expr: Expr,
  pub error: ArithmeticError,
  _priv: (), // Prevent construction outside of this module
}

impl DerivativeEngine {
  pub fn new(mode: CalculationMode) -> Self {
    Self { arithmetic: SymbolicArithmetic::new(mode) }
  }

  pub fn arithmetic(&self) -> &SymbolicArithmetic {
    &self.arithmetic
  }

  pub fn differentiate(&self, expr: &Expr) -> Result<Expr, DifferentiationFailure> {
    self.differentiate_impl(expr).map_err(|error| self.error(expr, error))
  }

  #[instrument(level = "trace", skip_all, fields(%expr))]
  fn differentiate_impl(&self, expr: &Expr) -> Result<Expr, ArithmeticError> {
    match expr {
      Expr::Variable => Ok(Expr::one()),
      Expr::Constant(_) => Ok(Expr::zero()),
      Expr::Operator(op, a, b) => self.differentiate_operator(*op, a, b),
      Expr::Function(function, arg) => self.differentiate_function(*function, arg),
    }
  }

  fn differentiate_operator(&self, op: BinaryOperator, a: &Expr, b: &Expr) -> Result<Expr, ArithmeticError> {
    let arith = &self.arithmetic;
    let da = self.differentiate_impl(a)?;
    let db = self.differentiate_impl(b)?;
    match op {
      BinaryOperator::Add => arith.add_signed(da, db, Sign::Positive),
      BinaryOperator::Subtract => arith.add_signed(da, db, Sign::Negative),
      BinaryOperator::Multiply => {
        // Product Rule
        arith.add(
          arith.multiply(da, b.clone())?,
          arith.multiply(db, a.clone())?,
        )
      }
      BinaryOperator::Divide => {
        // Quotient Rule
        let numerator = arith.subtract(
          arith.multiply(da, b.clone())?,
          arith.multiply(db, a.clone())?,
        )?;
        if numerator.is_zero() {
          return Ok(Expr::zero());
        }
        arith.divide(numerator, arith.power(b.clone(), Expr::from(2))?)
      }
      BinaryOperator::Power => {
        // d(a^b) = da * b * a^(b-1) + db * ln(a) * a^b. This is only
        // exact when at most one of a and b depends on x.
        let power_term = self.scaled_by(arith.multiply(da, b.clone())?, || {
          arith.power(a.clone(), arith.subtract(b.clone(), Expr::one())?)
        })?;
        let exponential_term = self.scaled_by(arith.multiply(db, arith.ln(a.clone()))?, || {
          arith.power(a.clone(), b.clone())
        })?;
        arith.add(power_term, exponential_term)
      }
    }
  }

  /// Chain rule: the derivative of the argument times the outer
  /// derivative, evaluated at the argument. The outer derivative is
  /// skipped entirely for constant arguments, so `(ln 0)` has
  /// derivative `0` rather than failing on `1 / 0`.
  fn differentiate_function(&self, function: ElementaryFunction, arg: &Expr) -> Result<Expr, ArithmeticError> {
    let arith = &self.arithmetic;
    let inner = self.differentiate_impl(arg)?;
    self.scaled_by(inner, || {
      match function {
        ElementaryFunction::Sin => {
          Ok(arith.apply(ElementaryFunction::Cos, arg.clone()))
        }
        ElementaryFunction::Cos => {
          arith.multiply(Expr::from(-1), arith.apply(ElementaryFunction::Sin, arg.clone()))
        }
        ElementaryFunction::Tan => {
          let cos = arith.apply(ElementaryFunction::Cos, arg.clone());
          arith.divide(Expr::one(), arith.power(cos, Expr::from(2))?)
        }
        ElementaryFunction::Ln => {
          arith.divide(Expr::one(), arg.clone())
        }
        ElementaryFunction::Exp => {
          Ok(arith.apply(ElementaryFunction::Exp, arg.clone()))
        }
      }
    })
  }

  /// Multiplies `factor` by the result of `rest`. If `factor` is zero,
  /// `rest` is never evaluated, so a term which is discarded anyway
  /// cannot fail to fold.
  fn scaled_by<F>(&self, factor: Expr, rest: F) -> Result<Expr, ArithmeticError>
  where F: FnOnce() -> Result<Expr, ArithmeticError> {
    if factor.is_zero() {
      return Ok(Expr::zero());
    }
    self.arithmetic.multiply(factor, rest()?)
  }

  pub fn error(&self, original_expr: &Expr, error: ArithmeticError) -> DifferentiationFailure {
    DifferentiationFailure {
      original_expr: original_expr.clone(),
      error,
      _priv: (),
    }
  }
}

pub fn differentiate(mode: CalculationMode, expr: &Expr) -> Result<Expr, DifferentiationFailure> {
  let engine = DerivativeEngine::new(mode);
  engine.differentiate(expr)
}
