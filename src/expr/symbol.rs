
//! The operator symbols and function names understood by the prefix
//! grammar.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A binary arithmetic operator, written `(<symbol> <left> <right>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
  Power,
}

/// A single-argument function, written `(<name> <argument>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementaryFunction {
  Sin,
  Cos,
  Tan,
  Ln,
  Exp,
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 5] = [
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Power,
  ];

  pub fn symbol(self) -> char {
    match self {
      BinaryOperator::Add => '+',
      BinaryOperator::Subtract => '-',
      BinaryOperator::Multiply => '*',
      BinaryOperator::Divide => '/',
      BinaryOperator::Power => '^',
    }
  }

  pub fn from_symbol(symbol: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|op| {
      let mut buf = [0; 4];
      op.symbol().encode_utf8(&mut buf) == symbol
    })
  }
}

impl ElementaryFunction {
  pub const ALL: [ElementaryFunction; 5] = [
    ElementaryFunction::Sin,
    ElementaryFunction::Cos,
    ElementaryFunction::Tan,
    ElementaryFunction::Ln,
    ElementaryFunction::Exp,
  ];

  pub fn name(self) -> &'static str {
    match self {
      ElementaryFunction::Sin => "sin",
      ElementaryFunction::Cos => "cos",
      ElementaryFunction::Tan => "tan",
      ElementaryFunction::Ln => "ln",
      ElementaryFunction::Exp => "exp",
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|f| f.name() == name)
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl Display for ElementaryFunction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
