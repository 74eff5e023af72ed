//! Expression evaluation.

use rand::Rng;
use turtle_ir::{NodeId, NodeKind};

use super::Evaluator;
use crate::operators::{evaluate_binary, evaluate_func, evaluate_unary};
use crate::{EvalError, EvalResult};

impl Evaluator<'_> {
    /// Evaluate the expression rooted at `id`.
    pub(super) fn expr(&mut self, id: NodeId) -> EvalResult<f64> {
        self.nested(|this| this.eval_expr(id))
    }

    fn eval_expr(&mut self, id: NodeId) -> EvalResult<f64> {
        match self.kind(id, "an expression")? {
            NodeKind::Value(value) => Ok(value),
            NodeKind::Name(name) => {
                let name = self.program.name_of(name);
                self.ctx
                    .variable(name)
                    .ok_or_else(|| EvalError::UnknownVariable {
                        name: name.to_owned(),
                    })
            }
            NodeKind::Unary { op, operand } => Ok(evaluate_unary(op, self.expr(operand)?)),
            NodeKind::Binary { op, lhs, rhs } => {
                let lhs = self.expr(lhs)?;
                let rhs = self.expr(rhs)?;
                evaluate_binary(op, lhs, rhs)
            }
            NodeKind::Func { func, arg } => evaluate_func(func, self.expr(arg)?),
            NodeKind::Random { low, high } => {
                let low = self.expr(low)?;
                let high = self.expr(high)?;
                self.random(low, high)
            }
            NodeKind::ExprBlock(inner) => self.expr(inner),
            command => Err(EvalError::UnknownNode {
                expected: "an expression",
                found: command.keyword(),
            }),
        }
    }

    /// Uniform value in `[low, high]`. Equal bounds return `low` without
    /// drawing.
    #[allow(clippy::float_cmp, reason = "equal bounds are an exact case")]
    fn random(&mut self, low: f64, high: f64) -> EvalResult<f64> {
        if low == high {
            return Ok(low);
        }
        if low > high {
            return Err(EvalError::UnorderedRandom { low, high });
        }
        let unit: f64 = self.ctx.rng.gen_range(0.0..=1.0);
        Ok(low + unit * (high - low))
    }
}
