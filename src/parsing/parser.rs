
use super::error::ParseError;
use super::reader::{read_shape, Shape};
use super::source::Fragment;
use super::splitter::split_arguments;
use crate::expr::Expr;

use tracing::debug;

/// Parses a complete prefix expression into an [`Expr`] tree.
///
/// This is a recursive descent over the grammar: the reader
/// classifies the outermost node, the splitter separates the
/// operands of binary operators, and each operand is parsed in turn.
pub fn parse_expr(text: &str) -> Result<Expr, ParseError> {
  parse_fragment(Fragment::new(text)).map_err(|err| {
    debug!("failed to parse {text:?}: {err}");
    err
  })
}

fn parse_fragment(fragment: Fragment<'_>) -> Result<Expr, ParseError> {
  match read_shape(fragment)? {
    Shape::Operator { operator, arguments } => {
      let (left, right) = split_arguments(arguments)?;
      Ok(Expr::operator(operator, parse_fragment(left)?, parse_fragment(right)?))
    }
    Shape::Function { function, argument } => {
      Ok(Expr::function(function, parse_fragment(argument)?))
    }
    Shape::Constant { literal } => {
      literal.as_str().parse().map(Expr::Constant).map_err(|_| {
        ParseError::ConstantOutOfRange { literal: literal.as_str().to_owned(), position: literal.start() }
      })
    }
    Shape::Variable => {
      Ok(Expr::Variable)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::symbol::{BinaryOperator, ElementaryFunction};
  use crate::parsing::source::SourceOffset;

  #[test]
  fn test_parse_atoms() {
    assert_eq!(parse_expr("17"), Ok(Expr::Constant(17)));
    assert_eq!(parse_expr("-4"), Ok(Expr::Constant(-4)));
    assert_eq!(parse_expr("x"), Ok(Expr::Variable));
  }

  #[test]
  fn test_parse_nested() {
    let expected = Expr::operator(
      BinaryOperator::Divide,
      Expr::function(ElementaryFunction::Tan, Expr::operator(BinaryOperator::Power, Expr::Variable, Expr::Constant(2))),
      Expr::operator(BinaryOperator::Subtract, Expr::Constant(1), Expr::Variable),
    );
    assert_eq!(parse_expr("(/ (tan (^ x 2)) (- 1 x))"), Ok(expected));
  }

  #[test]
  fn test_parse_prints_back_identically() {
    let inputs = [
      "(+ (* 2 x) (sin x))",
      "(exp (- x (* x 2)))",
      "(^ (cos (/ 1 x)) 2)",
      "(ln (ln (ln x)))",
      "(+ x (+ x (+ x (+ x x))))",
    ];
    for input in inputs {
      assert_eq!(parse_expr(input).unwrap().to_string(), input);
    }
  }

  #[test]
  fn test_parse_errors_point_into_the_original_input() {
    assert_eq!(
      parse_expr("(+ x (sin y))"),
      Err(ParseError::malformed("y", SourceOffset(10))),
    );
    assert_eq!(
      parse_expr("(* 2 (cot x))"),
      Err(ParseError::UnknownSymbol { symbol: "cot".to_owned(), position: SourceOffset(6) }),
    );
  }

  #[test]
  fn test_parse_rejects_extra_whitespace() {
    assert!(matches!(parse_expr("(+  x 1)"), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(parse_expr("(+ x  1)"), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(parse_expr("(+ x 1) "), Err(ParseError::MalformedExpression { .. })));
  }

  #[test]
  fn test_parse_too_many_operands() {
    assert!(matches!(parse_expr("(+ x 1 2)"), Err(ParseError::MalformedExpression { .. })));
    assert!(matches!(parse_expr("(sin x x)"), Err(ParseError::MalformedExpression { .. })));
  }

  #[test]
  fn test_parse_constant_out_of_range() {
    assert_eq!(
      parse_expr("(+ x 99999999999999999999)"),
      Err(ParseError::ConstantOutOfRange { literal: "99999999999999999999".to_owned(), position: SourceOffset(5) }),
    );
  }
}
