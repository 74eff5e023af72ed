//! Turtle Eval - tree-walking evaluator for turtle programs.
//!
//! Walks a [`Program`](turtle_ir::Program) against a mutable [`Context`] and
//! writes drawing primitives to the context's results sink.
//!
//! # Architecture
//!
//! - `Context`: turtle state, the variable and procedure tables, the sinks
//!   and the sticky error
//! - `eval_program`: entry point; seeds the built-in constants and runs the
//!   top-level sequence
//! - `exec`: command and expression evaluation, one `match` over `NodeKind`
//! - `Primitive`: the `Color` / `MoveTo` / `LineTo` lines of the output
//!
//! # Errors
//!
//! Evaluation returns `EvalResult` internally and bails out with `?`. The
//! first error reaching the entry point is latched on the context and its
//! message written to the diagnostics sink once; a latched context ignores
//! every later program.

mod config;
mod context;
pub mod errors;
mod exec;
mod operators;
mod output;

use std::sync::Once;

pub use config::{EvalConfig, RedeclarationPolicy, DEFAULT_MAX_DEPTH, DEFAULT_REPEAT_LIMIT};
pub use context::{Context, ContextBuilder};
pub use errors::{Channel, EvalError, EvalResult};
pub use exec::eval_program;
pub use output::{
    buffer_sink, format_general, silent_sink, stderr_sink, stdout_sink, BufferSink, OutputSink,
    Primitive, SharedOutput, StderrSink, StdoutSink,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this at the start of the driver to enable tracing output.
/// Set `RUST_LOG=turtle_eval=debug` to see procedure and latch events,
/// `RUST_LOG=turtle_eval=trace` to also see every emitted primitive.
///
/// Safe to call multiple times - only initializes once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
