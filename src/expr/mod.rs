
pub mod arithmetic;
pub mod number;
pub mod symbol;

use symbol::{BinaryOperator, ElementaryFunction};
use crate::parsing::{self, ParseError};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// An expression tree in the single variable `x`.
///
/// The `Display` impl writes the canonical fully-parenthesized prefix
/// form, and the `FromStr` impl accepts exactly that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
  Operator(BinaryOperator, Box<Expr>, Box<Expr>),
  Function(ElementaryFunction, Box<Expr>),
  Constant(i64),
  Variable,
}

impl Expr {
  pub fn zero() -> Expr {
    Expr::Constant(0)
  }

  pub fn one() -> Expr {
    Expr::Constant(1)
  }

  /// Convenience constructor for [`Expr::Operator`].
  pub fn operator(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::Operator(op, Box::new(left), Box::new(right))
  }

  /// Convenience constructor for [`Expr::Function`].
  pub fn function(function: ElementaryFunction, argument: Expr) -> Expr {
    Expr::Function(function, Box::new(argument))
  }

  pub fn as_constant(&self) -> Option<i64> {
    match self {
      Expr::Constant(n) => Some(*n),
      _ => None,
    }
  }

  pub fn is_constant(&self) -> bool {
    matches!(self, Expr::Constant(_))
  }

  pub fn is_zero(&self) -> bool {
    self.as_constant() == Some(0)
  }

  pub fn is_one(&self) -> bool {
    self.as_constant() == Some(1)
  }
}

impl From<i64> for Expr {
  fn from(n: i64) -> Self {
    Expr::Constant(n)
  }
}

impl FromStr for Expr {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parsing::parse_expr(s)
  }
}

impl Display for Expr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Operator(op, left, right) => write!(f, "({op} {left} {right})"),
      Expr::Function(function, arg) => write!(f, "({function} {arg})"),
      Expr::Constant(n) => write!(f, "{n}"),
      Expr::Variable => write!(f, "x"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    assert_eq!(Expr::Variable.to_string(), "x");
    assert_eq!(Expr::from(-17).to_string(), "-17");
    let expr = Expr::operator(
      BinaryOperator::Add,
      Expr::operator(BinaryOperator::Multiply, Expr::from(2), Expr::Variable),
      Expr::function(ElementaryFunction::Sin, Expr::Variable),
    );
    assert_eq!(expr.to_string(), "(+ (* 2 x) (sin x))");
  }

  #[test]
  fn test_from_str() {
    let expr: Expr = "(^ (cos x) -2)".parse().unwrap();
    assert_eq!(
      expr,
      Expr::operator(
        BinaryOperator::Power,
        Expr::function(ElementaryFunction::Cos, Expr::Variable),
        Expr::from(-2),
      ),
    );
  }

  #[test]
  fn test_constant_predicates() {
    assert!(Expr::zero().is_zero());
    assert!(Expr::one().is_one());
    assert!(!Expr::Variable.is_constant());
    assert_eq!(Expr::from(12).as_constant(), Some(12));
    assert_eq!(Expr::Variable.as_constant(), None);
  }

  #[test]
  fn test_serde_json_shape() {
    let expr = Expr::function(ElementaryFunction::Ln, Expr::from(5));
    let json = serde_json::to_string(&expr).unwrap();
    assert_eq!(json, r#"{"Function":["Ln",{"Constant":5}]}"#);
    let back: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
  }
}
