
use crate::calculus::DifferentiationFailure;
use crate::expr::arithmetic::ArithmeticError;
use crate::parsing::ParseError;

use thiserror::Error;

/// Any error which can come out of [`differentiate_text`](crate::differentiate_text).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ParseError(#[from] ParseError),
  #[error("{0}")]
  DifferentiationFailure(#[from] DifferentiationFailure),
}

/// Coarse classification of an [`Error`], for callers which only
/// care about what went wrong and not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  MalformedExpression,
  UnbalancedParentheses,
  UnknownSymbol,
  ArithmeticOverflow,
  DivisionByZero,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::ParseError(err) => match err {
        ParseError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
        ParseError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
        ParseError::UnknownSymbol { .. } => ErrorKind::UnknownSymbol,
        ParseError::ConstantOutOfRange { .. } => ErrorKind::ArithmeticOverflow,
      },
      Error::DifferentiationFailure(failure) => match failure.error {
        ArithmeticError::Overflow { .. } => ErrorKind::ArithmeticOverflow,
        ArithmeticError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
      },
    }
  }
}

impl ErrorKind {
  pub fn name(self) -> &'static str {
    match self {
      ErrorKind::MalformedExpression => "malformed_expression",
      ErrorKind::UnbalancedParentheses => "unbalanced_parentheses",
      ErrorKind::UnknownSymbol => "unknown_symbol",
      ErrorKind::ArithmeticOverflow => "arithmetic_overflow",
      ErrorKind::DivisionByZero => "division_by_zero",
    }
  }
}
