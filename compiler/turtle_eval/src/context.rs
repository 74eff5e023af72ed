//! Execution context: the turtle's state between commands.
//!
//! Commands never write output directly. They update the *pending* pen and
//! call [`Context::flush`], which compares it with the *committed* pen (what
//! the results sink last saw) and emits only what changed.

mod builder;

use rand::rngs::StdRng;
use tracing::{debug, trace};
use turtle_ir::NodeId;
use turtle_symtab::SymbolTable;

pub use builder::ContextBuilder;

use crate::{EvalConfig, EvalError, Primitive, SharedOutput};

/// Pen colour, each channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Position and colour as seen by the output.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Pen {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

/// Mutable state of one program run.
///
/// Starts at the origin, heading 0, pen down, black. Build one with
/// [`ContextBuilder`] (or [`Context::new`] for stdout/stderr and defaults),
/// evaluate with [`eval_program`](crate::eval_program) and end the run with
/// [`Context::finish`].
pub struct Context {
    pub(crate) config: EvalConfig,
    /// Heading in degrees.
    pub(crate) angle: f64,
    pub(crate) pen_up: bool,
    committed: Pen,
    pub(crate) pending: Pen,
    lines_printed: u64,
    /// Procedure calls in progress; `proc` is only legal at zero.
    pub(crate) nested_calls: u32,
    /// Current evaluation nesting, checked against `config.max_depth`.
    pub(crate) depth: usize,
    pub(crate) variables: SymbolTable<f64>,
    pub(crate) procedures: SymbolTable<Option<NodeId>>,
    error: Option<EvalError>,
    results: SharedOutput,
    diagnostics: SharedOutput,
    pub(crate) rng: StdRng,
}

impl Context {
    /// Context with default configuration writing to stdout and stderr.
    pub fn new() -> Self {
        ContextBuilder::new().build()
    }

    /// Heading in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_pen_up(&self) -> bool {
        self.pen_up
    }

    /// Last position written to the results sink.
    pub fn position(&self) -> (f64, f64) {
        (self.committed.x, self.committed.y)
    }

    /// Number of primitives written so far.
    pub fn lines_printed(&self) -> u64 {
        self.lines_printed
    }

    /// Current value of a variable.
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).map(|id| *self.variables.value(id))
    }

    /// Returns `true` if a procedure of that name has been declared.
    pub fn has_procedure(&self, name: &str) -> bool {
        self.procedures.get(name).is_some()
    }

    /// The latched error, if any.
    pub fn error(&self) -> Option<&EvalError> {
        self.error.as_ref()
    }

    /// Exit code of the run so far: 0, or the latched error's code.
    pub fn error_code(&self) -> i32 {
        self.error.as_ref().map_or(0, EvalError::code)
    }

    /// End the run, releasing both tables, and return the exit code.
    pub fn finish(mut self) -> i32 {
        self.variables.clear();
        self.procedures.clear();
        self.error_code()
    }

    pub(crate) fn is_latched(&self) -> bool {
        self.error.is_some()
    }

    /// Record the first error of the run and report it.
    pub(crate) fn latch(&mut self, error: EvalError) {
        if self.error.is_some() {
            return;
        }
        debug!(code = error.code(), %error, "evaluation failed");
        self.diagnostics.println(&error.to_string());
        self.error = Some(error);
    }

    /// Write a line to the diagnostics sink.
    pub(crate) fn diagnose(&self, msg: &str) {
        self.diagnostics.println(msg);
    }

    /// Emit whatever differs between the pending and committed pen.
    ///
    /// Colour first, then position; nothing when both match.
    pub(crate) fn flush(&mut self) {
        if self.is_latched() {
            return;
        }
        if self.pending.color != self.committed.color {
            self.committed.color = self.pending.color;
            let Rgb { r, g, b } = self.committed.color;
            self.emit(Primitive::Color { r, g, b });
        }
        let moved = (self.pending.x, self.pending.y) != (self.committed.x, self.committed.y);
        if moved {
            self.committed.x = self.pending.x;
            self.committed.y = self.pending.y;
            let (x, y) = (self.committed.x, self.committed.y);
            self.emit(if self.pen_up {
                Primitive::MoveTo { x, y }
            } else {
                Primitive::LineTo { x, y }
            });
        }
    }

    fn emit(&mut self, primitive: Primitive) {
        trace!(%primitive, "emit");
        self.lines_printed += 1;
        self.results.println(&primitive.to_string());
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
