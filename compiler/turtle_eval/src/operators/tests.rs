#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(clippy::float_cmp, reason = "results are exact")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_binary_arithmetic() {
    assert_eq!(evaluate_binary(BinaryOp::Add, 2.0, 3.0).unwrap(), 5.0);
    assert_eq!(evaluate_binary(BinaryOp::Sub, 2.0, 3.0).unwrap(), -1.0);
    assert_eq!(evaluate_binary(BinaryOp::Mul, 2.0, 3.0).unwrap(), 6.0);
    assert_eq!(evaluate_binary(BinaryOp::Div, 3.0, 2.0).unwrap(), 1.5);
    assert_eq!(evaluate_binary(BinaryOp::Pow, 2.0, 10.0).unwrap(), 1024.0);
}

#[test]
fn test_binary_non_finite_is_an_error() {
    assert_eq!(
        evaluate_binary(BinaryOp::Div, 1.0, 0.0),
        Err(EvalError::NonFinite {
            op: '/',
            lhs: 1.0,
            rhs: 0.0,
            result: f64::INFINITY,
        })
    );
    assert_eq!(evaluate_binary(BinaryOp::Pow, 10.0, 400.0).unwrap_err().code(), 4);
    // 0/0 is NaN
    assert!(evaluate_binary(BinaryOp::Div, 0.0, 0.0).is_err());
}

#[test]
fn test_unary_negation_of_zero() {
    let zero = evaluate_unary(UnaryOp::Neg, 0.0);
    assert_eq!(zero, 0.0);
    assert!(zero.is_sign_positive());
    assert_eq!(evaluate_unary(UnaryOp::Neg, 4.0), -4.0);
    assert_eq!(evaluate_unary(UnaryOp::Pos, -4.0), -4.0);
}

#[test]
fn test_trigonometry_uses_degrees() {
    assert!((evaluate_func(MathFunc::Cos, 60.0).unwrap() - 0.5).abs() < 1e-12);
    assert!((evaluate_func(MathFunc::Sin, 90.0).unwrap() - 1.0).abs() < 1e-12);
    assert!((evaluate_func(MathFunc::Tan, 45.0).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_sqrt_domain() {
    assert_eq!(evaluate_func(MathFunc::Sqrt, 9.0).unwrap(), 3.0);
    assert_eq!(evaluate_func(MathFunc::Sqrt, 0.0).unwrap(), 0.0);
    assert_eq!(
        evaluate_func(MathFunc::Sqrt, -1.0),
        Err(EvalError::SqrtDomain { arg: -1.0 })
    );
}
