//! Output sinks and drawing primitives.
//!
//! A context writes to two sinks: results (the `Color` / `MoveTo` /
//! `LineTo` lines) and diagnostics (error messages and `print` values).
//! Each sink can be:
//! - stdout or stderr (the driver's defaults)
//! - a buffer, for tests and embedders that inspect the output
//! - silent
//!
//! Uses enum dispatch instead of trait objects; the set of sinks is closed.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes lines to stdout.
#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn println(&self, msg: &str) {
        // A closed pipe ends the output, not the run.
        let _ = writeln!(std::io::stdout().lock(), "{msg}");
    }
}

/// Writes lines to stderr.
#[derive(Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn println(&self, msg: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{msg}");
    }
}

/// Captures lines in memory.
#[derive(Default)]
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything captured so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// A line-oriented output destination.
pub enum OutputSink {
    Stdout(StdoutSink),
    Stderr(StderrSink),
    Buffer(BufferSink),
    /// Discards everything.
    Silent,
}

impl OutputSink {
    /// Write one line.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(s) => s.println(msg),
            Self::Stderr(s) => s.println(msg),
            Self::Buffer(s) => s.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for sinks that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(s) => s.output(),
            Self::Stdout(_) | Self::Stderr(_) | Self::Silent => String::new(),
        }
    }

    /// Drop captured output. No-op for sinks that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(s) = self {
            s.clear();
        }
    }
}

/// Sink shared between a context and whoever reads the output.
pub type SharedOutput = Arc<OutputSink>;

pub fn stdout_sink() -> SharedOutput {
    Arc::new(OutputSink::Stdout(StdoutSink))
}

pub fn stderr_sink() -> SharedOutput {
    Arc::new(OutputSink::Stderr(StderrSink))
}

/// Create a capturing sink; read it back with [`OutputSink::output`].
pub fn buffer_sink() -> SharedOutput {
    Arc::new(OutputSink::Buffer(BufferSink::new()))
}

pub fn silent_sink() -> SharedOutput {
    Arc::new(OutputSink::Silent)
}

/// One line of drawing output.
///
/// Displays as a tab-separated line with every field printed as `{:7.4}`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Pen colour changed.
    Color { r: f64, g: f64, b: f64 },
    /// Pen moved while up.
    MoveTo { x: f64, y: f64 },
    /// Pen moved while down.
    LineTo { x: f64, y: f64 },
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Color { r, g, b } => write!(f, "Color\t{r:7.4} {g:7.4} {b:7.4}"),
            Self::MoveTo { x, y } => write!(f, "MoveTo\t{x:7.4} {y:7.4}"),
            Self::LineTo { x, y } => write!(f, "LineTo\t{x:7.4} {y:7.4}"),
        }
    }
}

/// Significant digits written by [`format_general`].
const GENERAL_PRECISION: i32 = 6;

/// Format a number like C's `%g`.
///
/// Six significant digits with trailing zeros dropped; exponent notation
/// when the decimal exponent is below -4 or at least 6.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }
    // The exponent is taken after rounding, so 999999.5 becomes 1e+06.
    let scientific = format!("{value:.5e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(GENERAL_PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests;
