
//! Splitting the argument text of a binary operator into its two
//! operands.

use super::error::ParseError;
use super::reader::read_atom_token;
use super::source::Fragment;
use super::tokenizer::TokenizerState;

/// Given a fragment beginning with `(`, returns the byte index of the
/// parenthesis which closes it.
///
/// Scans forward keeping a depth counter, which goes up on `(` and
/// down on `)`. The closing parenthesis is the one at which the
/// counter first returns to zero.
pub fn find_closing_paren(fragment: Fragment<'_>) -> Result<usize, ParseError> {
  if !fragment.as_str().starts_with('(') {
    return Err(ParseError::malformed(fragment.as_str(), fragment.start()));
  }
  let mut depth: usize = 0;
  for (index, byte) in fragment.as_str().bytes().enumerate() {
    match byte {
      b'(' => {
        depth += 1;
      }
      b')' => {
        depth -= 1;
        if depth == 0 {
          return Ok(index);
        }
      }
      _ => {}
    }
  }
  Err(ParseError::UnbalancedParentheses {
    text: fragment.as_str().to_owned(),
    position: fragment.start(),
  })
}

/// Splits `<left> <right>` into `<left>` and `<right>`.
///
/// A parenthesized first operand extends to its matching closing
/// parenthesis. Otherwise the first operand is a single constant or
/// variable token. Exactly one space must separate the two operands,
/// and the second operand is everything after that space. Neither
/// operand is validated beyond locating its boundary.
pub fn split_arguments(arguments: Fragment<'_>) -> Result<(Fragment<'_>, Fragment<'_>), ParseError> {
  let first_len = if arguments.as_str().starts_with('(') {
    find_closing_paren(arguments)? + 1
  } else {
    let mut state = TokenizerState::new(arguments);
    if read_atom_token(&mut state).is_none() {
      return Err(ParseError::malformed(arguments.as_str(), arguments.start()));
    }
    arguments.len() - state.remaining_len()
  };

  let (first, rest) = arguments.split_at(first_len);
  let mut state = TokenizerState::new(rest);
  if state.read_literal(" ").is_none() || state.is_eof() {
    return Err(ParseError::malformed(arguments.as_str(), arguments.start()));
  }
  Ok((first, state.rest()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::SourceOffset;

  fn split(s: &str) -> Result<(&str, &str), ParseError> {
    split_arguments(Fragment::new(s)).map(|(a, b)| (a.as_str(), b.as_str()))
  }

  #[test]
  fn test_find_closing_paren() {
    assert_eq!(find_closing_paren(Fragment::new("(+ 1 x)")), Ok(6));
    assert_eq!(find_closing_paren(Fragment::new("(+ (* 2 x) 1) (sin x)")), Ok(12));
    assert_eq!(find_closing_paren(Fragment::new("()")), Ok(1));
  }

  #[test]
  fn test_find_closing_paren_unbalanced() {
    let err = find_closing_paren(Fragment::at("(+ (* 2 x) 1", SourceOffset(5))).unwrap_err();
    assert_eq!(
      err,
      ParseError::UnbalancedParentheses { text: "(+ (* 2 x) 1".to_owned(), position: SourceOffset(5) },
    );
  }

  #[test]
  fn test_split_atoms() {
    assert_eq!(split("12 x"), Ok(("12", "x")));
    assert_eq!(split("x -3"), Ok(("x", "-3")));
    assert_eq!(split("x (sin x)"), Ok(("x", "(sin x)")));
  }

  #[test]
  fn test_split_nested() {
    assert_eq!(split("(+ 12 x) 12"), Ok(("(+ 12 x)", "12")));
    assert_eq!(split("(* (+ x 1) x) (cos (sin x))"), Ok(("(* (+ x 1) x)", "(cos (sin x))")));
  }

  #[test]
  fn test_split_tracks_offsets() {
    let (first, second) = split_arguments(Fragment::at("(+ 12 x) 12", SourceOffset(3))).unwrap();
    assert_eq!(first.start(), SourceOffset(3));
    assert_eq!(second.start(), SourceOffset(12));
  }

  #[test]
  fn test_split_malformed() {
    assert!(matches!(split("x"), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(split("x "), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(split("(sin x)"), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(split("(sin x)x"), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(split("y x"), Err(ParseError::MalformedExpression { .. })));
  }

  #[test]
  fn test_split_unbalanced() {
    assert!(matches!(split("(+ 1 x x"), Err(ParseError::UnbalancedParentheses { .. })));
  }
}
