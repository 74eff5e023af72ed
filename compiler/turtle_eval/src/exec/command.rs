//! Command evaluation.

use tracing::{debug, warn};
use turtle_ir::{EntryId, NodeId, NodeKind};

use super::Evaluator;
use crate::context::{Pen, Rgb};
use crate::errors::Channel;
use crate::output::format_general;
use crate::{EvalError, EvalResult, RedeclarationPolicy};

impl Evaluator<'_> {
    pub(super) fn command(&mut self, kind: NodeKind) -> EvalResult {
        match kind {
            NodeKind::Forward(distance) => {
                let distance = self.expr(distance)?;
                self.advance(-distance);
            }
            NodeKind::Backward(distance) => {
                let distance = self.expr(distance)?;
                self.advance(distance);
            }
            NodeKind::Up => self.ctx.pen_up = true,
            NodeKind::Down => self.ctx.pen_up = false,
            NodeKind::Left(angle) => {
                let angle = self.expr(angle)?;
                self.ctx.angle += angle;
            }
            NodeKind::Right(angle) => {
                let angle = self.expr(angle)?;
                self.ctx.angle -= angle;
            }
            NodeKind::Heading(angle) => {
                let angle = self.expr(angle)?;
                self.ctx.angle = -angle;
            }
            NodeKind::Position { x, y } => {
                let x = self.expr(x)?;
                let y = self.expr(y)?;
                self.ctx.pending.x = x;
                self.ctx.pending.y = y;
                self.ctx.flush();
            }
            NodeKind::Home => {
                self.ctx.angle = 0.0;
                self.ctx.pen_up = false;
                self.ctx.pending = Pen::default();
                self.ctx.flush();
            }
            NodeKind::Color { r, g, b } => self.color(r, g, b)?,
            NodeKind::Print(value) => {
                let value = self.expr(value)?;
                self.ctx.diagnose(&format_general(value));
            }
            NodeKind::Repeat { count, body } => self.repeat(count, body)?,
            NodeKind::Block(first) => self.nested(|this| this.sequence(first))?,
            NodeKind::Call(name) => self.call(name)?,
            NodeKind::Set { name, value } => self.set(name, value)?,
            NodeKind::Proc { name, body } => self.declare(name, body)?,
            expr => {
                return Err(EvalError::UnknownNode {
                    expected: "a command",
                    found: expr.keyword(),
                })
            }
        }
        Ok(())
    }

    /// Move along the heading; positive `distance` moves backward.
    ///
    /// A zero distance neither moves nor flushes.
    fn advance(&mut self, distance: f64) {
        if distance == 0.0 {
            return;
        }
        let heading = self.ctx.angle.to_radians();
        self.ctx.pending.x += distance * heading.sin();
        self.ctx.pending.y += distance * heading.cos();
        self.ctx.flush();
    }

    /// Stage a colour; it reaches the output with the next move.
    fn color(&mut self, r: NodeId, g: NodeId, b: NodeId) -> EvalResult {
        let color = Rgb {
            r: self.expr(r)?,
            g: self.expr(g)?,
            b: self.expr(b)?,
        };
        let channels = [
            (Channel::Red, color.r),
            (Channel::Green, color.g),
            (Channel::Blue, color.b),
        ];
        if let Some((channel, _)) = channels.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(EvalError::ColorChannel { channel: *channel });
        }
        self.ctx.pending.color = color;
        Ok(())
    }

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the count is compared against the ceiling first; `as` truncates toward zero and maps negatives to 0"
    )]
    fn repeat(&mut self, count: NodeId, body: NodeId) -> EvalResult {
        let count = self.expr(count)?;
        let limit = self.ctx.config.repeat_limit;
        if count > limit as f64 {
            return Err(EvalError::RepeatLimit { count, limit });
        }
        for _ in 0..count as u64 {
            self.nested(|this| this.sequence(Some(body)))?;
        }
        Ok(())
    }

    fn call(&mut self, name: EntryId) -> EvalResult {
        let name = self.program.name_of(name);
        let Some(id) = self.ctx.procedures.get(name) else {
            return Err(EvalError::UnknownProcedure {
                name: name.to_owned(),
            });
        };
        let body = *self.ctx.procedures.value(id);
        debug!(procedure = name, depth = self.ctx.nested_calls, "call");
        self.ctx.nested_calls += 1;
        let result = self.nested(|this| this.sequence(body));
        self.ctx.nested_calls -= 1;
        result
    }

    /// `set`: the slot exists before the value is evaluated, so `set x x`
    /// reads a fresh `x` as 0.
    fn set(&mut self, name: EntryId, value: NodeId) -> EvalResult {
        let name = self.program.name_of(name);
        let slot = self
            .ctx
            .variables
            .insert(name)
            .map_err(|source| EvalError::VariableAlloc {
                name: name.to_owned(),
                source,
            })?;
        let value = self.expr(value)?;
        *self.ctx.variables.value_mut(slot.id()) = value;
        Ok(())
    }

    fn declare(&mut self, name: EntryId, body: NodeId) -> EvalResult {
        let name = self.program.name_of(name);
        if self.ctx.nested_calls > 0 {
            return Err(EvalError::NestedProcedure {
                name: name.to_owned(),
            });
        }
        let slot = self
            .ctx
            .procedures
            .insert(name)
            .map_err(|source| EvalError::ProcedureAlloc {
                name: name.to_owned(),
                source,
            })?;
        if slot.is_inserted() {
            debug!(procedure = name, "procedure declared");
            *self.ctx.procedures.value_mut(slot.id()) = Some(body);
            return Ok(());
        }
        let error = EvalError::ProcedureExists {
            name: name.to_owned(),
        };
        match self.ctx.config.redeclaration {
            RedeclarationPolicy::Report => {
                warn!(procedure = name, "procedure redeclared; keeping the first body");
                self.ctx.diagnose(&error.to_string());
                Ok(())
            }
            RedeclarationPolicy::Error => Err(error),
        }
    }
}
