
//! Classifies the outermost node of a prefix expression.
//!
//! The reader looks at exactly one level of the expression. It
//! reports which of the four node shapes the text has and hands back
//! the sub-fragments, leaving any recursion to the caller.

use super::error::ParseError;
use super::source::Fragment;
use super::splitter::find_closing_paren;
use super::tokenizer::TokenizerState;
use crate::expr::symbol::{BinaryOperator, ElementaryFunction};

use regex::Regex;
use once_cell::sync::Lazy;

/// The top-level shape of a prefix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
  /// `(<op> <left> <right>)`. The arguments are still joined, as
  /// `<left> <right>`; see [`split_arguments`](super::splitter::split_arguments).
  Operator { operator: BinaryOperator, arguments: Fragment<'a> },
  /// `(<name> <argument>)`.
  Function { function: ElementaryFunction, argument: Fragment<'a> },
  /// An optionally-negative run of decimal digits.
  Constant { literal: Fragment<'a> },
  /// The variable `x`.
  Variable,
}

// Operator symbols and function names alike are whatever sits
// between the opening parenthesis and the first space.
static HEAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^ ()]+").unwrap());
static ATOM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:-?[0-9]+|x)").unwrap());

/// Classifies the whole of `fragment` as one of the four shapes. The
/// fragment must be exactly one expression, with nothing before or
/// after it.
pub fn read_shape(fragment: Fragment<'_>) -> Result<Shape<'_>, ParseError> {
  if fragment.as_str().starts_with('(') {
    read_call(fragment)
  } else {
    let mut state = TokenizerState::new(fragment);
    match read_atom_token(&mut state) {
      Some(shape) if state.is_eof() => Ok(shape),
      _ => Err(ParseError::malformed(fragment.as_str(), fragment.start())),
    }
  }
}

/// Reads a single constant or variable token at the current position
/// of `state`, without requiring that it be followed by end of input.
/// Returns `None`, and leaves `state` untouched, if there is no such
/// token.
pub fn read_atom_token<'a>(state: &mut TokenizerState<'a>) -> Option<Shape<'a>> {
  let token = state.read_regex(&ATOM_RE)?;
  if token.as_str() == "x" {
    Some(Shape::Variable)
  } else {
    Some(Shape::Constant { literal: token })
  }
}

fn read_call(fragment: Fragment<'_>) -> Result<Shape<'_>, ParseError> {
  let close = find_closing_paren(fragment)?;
  if close + 1 != fragment.len() {
    let (_, trailing) = fragment.split_at(close + 1);
    return Err(ParseError::malformed(trailing.as_str(), trailing.start()));
  }

  let mut state = TokenizerState::new(fragment.slice(1, close));
  let head = state.read_regex(&HEAD_RE);
  let separator = state.read_literal(" ");
  let (Some(head), Some(_)) = (head, separator) else {
    return Err(ParseError::malformed(fragment.as_str(), fragment.start()));
  };
  if state.is_eof() {
    return Err(ParseError::malformed(fragment.as_str(), fragment.start()));
  }
  let body = state.rest();

  if let Some(operator) = BinaryOperator::from_symbol(head.as_str()) {
    Ok(Shape::Operator { operator, arguments: body })
  } else if let Some(function) = ElementaryFunction::from_name(head.as_str()) {
    Ok(Shape::Function { function, argument: body })
  } else {
    Err(ParseError::UnknownSymbol { symbol: head.as_str().to_owned(), position: head.start() })
  }
}
