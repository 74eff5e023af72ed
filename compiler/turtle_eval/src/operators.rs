//! Arithmetic for expression evaluation.
//!
//! Direct enum-based dispatch; the operator set is closed.

use turtle_ir::{BinaryOp, MathFunc, UnaryOp};

use crate::{EvalError, EvalResult};

/// Apply a binary operator. Any non-finite result is an error.
pub(crate) fn evaluate_binary(op: BinaryOp, lhs: f64, rhs: f64) -> EvalResult<f64> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / rhs,
        BinaryOp::Pow => lhs.powf(rhs),
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(EvalError::NonFinite {
            op: op.as_symbol(),
            lhs,
            rhs,
            result,
        })
    }
}

/// Apply a unary operator.
///
/// Negating zero yields the operand unchanged, so `-0` evaluates to `0`.
pub(crate) fn evaluate_unary(op: UnaryOp, operand: f64) -> f64 {
    match op {
        UnaryOp::Neg if operand != 0.0 => -operand,
        UnaryOp::Neg | UnaryOp::Pos => operand,
    }
}

/// Apply a math function. Trigonometry takes degrees.
pub(crate) fn evaluate_func(func: MathFunc, arg: f64) -> EvalResult<f64> {
    match func {
        MathFunc::Cos => Ok(arg.to_radians().cos()),
        MathFunc::Sin => Ok(arg.to_radians().sin()),
        MathFunc::Tan => Ok(arg.to_radians().tan()),
        MathFunc::Sqrt if arg < 0.0 => Err(EvalError::SqrtDomain { arg }),
        MathFunc::Sqrt => Ok(arg.sqrt()),
    }
}

#[cfg(test)]
mod tests;
