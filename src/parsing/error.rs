
use super::source::SourceOffset;

use thiserror::Error;

/// An error produced while reading prefix-expression text. Every
/// variant carries the offending text and its byte offset in the
/// original input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
  #[error("Malformed expression '{text}' at {position}")]
  MalformedExpression { text: String, position: SourceOffset },
  #[error("Unbalanced parentheses in '{text}' at {position}")]
  UnbalancedParentheses { text: String, position: SourceOffset },
  #[error("Unknown operator or function '{symbol}' at {position}")]
  UnknownSymbol { symbol: String, position: SourceOffset },
  #[error("Constant '{literal}' at {position} does not fit in a 64-bit integer")]
  ConstantOutOfRange { literal: String, position: SourceOffset },
}

impl ParseError {
  pub fn malformed(text: impl Into<String>, position: SourceOffset) -> Self {
    Self::MalformedExpression { text: text.into(), position }
  }
}
