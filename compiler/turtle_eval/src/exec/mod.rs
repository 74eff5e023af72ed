//! Program evaluation.
//!
//! Sequences are walked iteratively along `next` links. Everything that
//! nests (block and repeat bodies, procedure calls, expression operands)
//! goes through [`Evaluator::nested`], which enforces the configured depth
//! ceiling and grows the host stack when needed.

mod command;
mod expr;

use std::f64::consts::{PI, SQRT_2};

use turtle_ir::{NodeId, NodeKind, Program};
use turtle_stack::ensure_sufficient_stack;

use crate::{Context, EvalError, EvalResult};

/// `f64::consts::SQRT_3` is not stable yet.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Variables every program starts with. Programs may reassign them.
const CONSTANTS: [(&str, f64); 3] = [("PI", PI), ("SQRT2", SQRT_2), ("SQRT3", SQRT_3)];

/// Evaluate `program` against `ctx`.
///
/// Seeds the built-in constants, then runs the top-level sequence. Variables
/// carry over from earlier programs run on the same context; procedures do
/// not. The first failure is latched on the context, written to its
/// diagnostics sink and returned; a context that is already latched does
/// nothing and returns its error again.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = program.arena().len()))]
pub fn eval_program(program: &Program, ctx: &mut Context) -> EvalResult {
    if let Some(error) = ctx.error() {
        return Err(error.clone());
    }
    let result = run(program, ctx);
    if let Err(error) = &result {
        ctx.latch(error.clone());
    }
    result
}

fn run(program: &Program, ctx: &mut Context) -> EvalResult {
    if !program.is_well_formed() {
        return Err(EvalError::MalformedProgram);
    }
    // Bodies are ids into the program that declared them.
    ctx.procedures.clear();
    for (name, value) in CONSTANTS {
        let slot = ctx.variables.insert(name).map_err(EvalError::OutOfMemory)?;
        *ctx.variables.value_mut(slot.id()) = value;
    }
    Evaluator { program, ctx }.sequence(program.root())
}

/// Walks one program against one context.
struct Evaluator<'a> {
    program: &'a Program,
    ctx: &'a mut Context,
}

impl Evaluator<'_> {
    /// Run a command sequence starting at `first`.
    fn sequence(&mut self, first: Option<NodeId>) -> EvalResult {
        let arena = self.program.arena();
        let mut cur = first;
        while let Some(id) = cur {
            let node = arena.get(id).ok_or(EvalError::UnknownNode {
                expected: "a command",
                found: "a dangling node id",
            })?;
            self.command(node.kind)?;
            cur = node.next;
        }
        Ok(())
    }

    /// Kind of an operand node.
    fn kind(&self, id: NodeId, expected: &'static str) -> EvalResult<NodeKind> {
        self.program
            .arena()
            .get(id)
            .map(|node| node.kind)
            .ok_or(EvalError::UnknownNode {
                expected,
                found: "a dangling node id",
            })
    }

    /// Run `f` one nesting level deeper.
    fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> EvalResult<R>) -> EvalResult<R> {
        let limit = self.ctx.config.max_depth;
        if self.ctx.depth >= limit {
            return Err(EvalError::RecursionLimit { limit });
        }
        self.ctx.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.ctx.depth -= 1;
        result
    }
}
