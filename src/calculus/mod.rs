
//! Symbolic differentiation of prefix expressions with respect to
//! `x`.

mod derivative;
#[cfg(test)]
mod proptests;

pub use derivative::{DerivativeEngine, DifferentiationFailure, differentiate};

use crate::error::Error;
use crate::mode::calculation::CalculationMode;
use crate::parsing::parse_expr;

use tracing::debug;

/// Differentiates a prefix expression and returns the simplified
/// derivative in the same notation, using the default
/// [`CalculationMode`].
pub fn differentiate_text(expression: &str) -> Result<String, Error> {
  differentiate_text_with_mode(expression, &CalculationMode::default())
}

/// As [`differentiate_text`], but with an explicit calculation mode.
pub fn differentiate_text_with_mode(expression: &str, mode: &CalculationMode) -> Result<String, Error> {
  let expr = parse_expr(expression)?;
  let derivative = differentiate(mode.clone(), &expr)?;
  debug!("d/dx {expr} = {derivative}");
  Ok(derivative.to_string())
}
