
//! Property-based tests for differentiation and simplification.

use super::DerivativeEngine;
use crate::expr::Expr;
use crate::expr::arithmetic::SymbolicArithmetic;
use crate::expr::symbol::{BinaryOperator, ElementaryFunction};
use crate::mode::calculation::{CalculationMode, OverflowPolicy};
use crate::parsing::parse_expr;

use proptest::prelude::*;

fn small_int() -> impl Strategy<Value = i64> {
  -1000i64..1000i64
}

fn expr_over(leaf: BoxedStrategy<Expr>) -> impl Strategy<Value = Expr> {
  leaf.prop_recursive(4, 32, 2, |inner| {
    prop_oneof![
      (prop::sample::select(BinaryOperator::ALL.to_vec()), inner.clone(), inner.clone())
        .prop_map(|(op, a, b)| Expr::operator(op, a, b)),
      (prop::sample::select(ElementaryFunction::ALL.to_vec()), inner)
        .prop_map(|(f, a)| Expr::function(f, a)),
    ]
  })
}

fn arb_expr() -> impl Strategy<Value = Expr> {
  let leaf = prop_oneof![
    small_int().prop_map(Expr::Constant),
    Just(Expr::Variable),
  ];
  expr_over(leaf.boxed())
}

fn arb_constant_expr() -> impl Strategy<Value = Expr> {
  expr_over(small_int().prop_map(Expr::Constant).boxed())
}

proptest! {
  #[test]
  fn constant_has_zero_derivative(c in any::<i64>()) {
    let engine = DerivativeEngine::default();
    prop_assert_eq!(engine.differentiate(&Expr::Constant(c)), Ok(Expr::zero()));
  }

  #[test]
  fn expression_without_variable_has_zero_derivative(e in arb_constant_expr()) {
    let engine = DerivativeEngine::default();
    prop_assert_eq!(engine.differentiate(&e), Ok(Expr::zero()));
  }

  #[test]
  fn printed_expression_parses_back(e in arb_expr()) {
    prop_assert_eq!(parse_expr(&e.to_string()), Ok(e));
  }

  #[test]
  fn derivative_is_in_the_prefix_grammar(e in arb_expr()) {
    let mode = CalculationMode::new().with_overflow_policy(OverflowPolicy::Wrapping);
    let derivative = DerivativeEngine::new(mode).differentiate(&e).unwrap();
    prop_assert_eq!(parse_expr(&derivative.to_string()), Ok(derivative));
  }

  #[test]
  fn identity_laws(e in arb_expr()) {
    let arith = SymbolicArithmetic::default();
    prop_assert_eq!(arith.add(Expr::zero(), e.clone()), Ok(e.clone()));
    prop_assert_eq!(arith.add(e.clone(), Expr::zero()), Ok(e.clone()));
    prop_assert_eq!(arith.multiply(Expr::one(), e.clone()), Ok(e.clone()));
    prop_assert_eq!(arith.multiply(e.clone(), Expr::one()), Ok(e.clone()));
    prop_assert_eq!(arith.multiply(Expr::zero(), e.clone()), Ok(Expr::zero()));
    prop_assert_eq!(arith.power(e.clone(), Expr::zero()), Ok(Expr::one()));
    prop_assert_eq!(arith.power(e.clone(), Expr::one()), Ok(e));
  }

  #[test]
  fn constant_folding_is_exact(a in small_int(), b in small_int()) {
    let arith = SymbolicArithmetic::default();
    prop_assert_eq!(arith.add(Expr::Constant(a), Expr::Constant(b)), Ok(Expr::Constant(a + b)));
    prop_assert_eq!(arith.subtract(Expr::Constant(a), Expr::Constant(b)), Ok(Expr::Constant(a - b)));
    prop_assert_eq!(arith.multiply(Expr::Constant(a), Expr::Constant(b)), Ok(Expr::Constant(a * b)));
  }
}
