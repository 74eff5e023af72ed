#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(clippy::float_cmp, reason = "positions are exact")]

use super::*;
use crate::{buffer_sink, SharedOutput};
use pretty_assertions::assert_eq;

fn capture() -> (Context, SharedOutput, SharedOutput) {
    let results = buffer_sink();
    let diagnostics = buffer_sink();
    let ctx = ContextBuilder::new()
        .seed(1)
        .results(SharedOutput::clone(&results))
        .diagnostics(SharedOutput::clone(&diagnostics))
        .build();
    (ctx, results, diagnostics)
}

#[test]
fn test_fresh_context() {
    let (ctx, results, _) = capture();
    assert_eq!(ctx.position(), (0.0, 0.0));
    assert!(!ctx.is_pen_up());
    assert_eq!(ctx.lines_printed(), 0);
    assert_eq!(ctx.error_code(), 0);
    assert!(ctx.variables.is_empty());
    assert!(ctx.procedures.is_empty());
    assert_eq!(results.output(), "");
}

#[test]
fn test_flush_without_changes_is_silent() {
    let (mut ctx, results, _) = capture();
    ctx.flush();
    ctx.flush();
    assert_eq!(results.output(), "");
    assert_eq!(ctx.lines_printed(), 0);
}

#[test]
fn test_flush_emits_colour_before_position() {
    let (mut ctx, results, _) = capture();
    ctx.pending.color = Rgb {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    ctx.pending.x = 3.0;
    ctx.pending.y = 4.0;
    ctx.flush();
    assert_eq!(
        results.output(),
        "Color\t 1.0000  0.0000  0.0000\nLineTo\t 3.0000  4.0000\n"
    );
    assert_eq!(ctx.lines_printed(), 2);
    assert_eq!(ctx.position(), (3.0, 4.0));

    ctx.flush();
    assert_eq!(ctx.lines_printed(), 2);
}

#[test]
fn test_pen_up_moves_without_drawing() {
    let (mut ctx, results, _) = capture();
    ctx.pen_up = true;
    ctx.pending.x = 1.0;
    ctx.flush();
    assert_eq!(results.output(), "MoveTo\t 1.0000  0.0000\n");
}

#[test]
fn test_latch_keeps_first_error_and_reports_once() {
    let (mut ctx, results, diagnostics) = capture();
    ctx.latch(EvalError::UnknownVariable { name: "a".into() });
    ctx.latch(EvalError::UnknownProcedure { name: "b".into() });
    assert_eq!(ctx.error_code(), 3);
    assert_eq!(diagnostics.output(), "Unknown variable 'a'.\n");

    ctx.pending.x = 10.0;
    ctx.flush();
    assert_eq!(results.output(), "");
    assert_eq!(ctx.finish(), 3);
}

#[test]
fn test_finish_reports_success() {
    let (mut ctx, _, _) = capture();
    let slot = ctx.variables.insert("x").unwrap();
    *ctx.variables.value_mut(slot.id()) = 2.0;
    assert_eq!(ctx.variable("x"), Some(2.0));
    assert_eq!(ctx.variable("y"), None);
    assert_eq!(ctx.finish(), 0);
}
