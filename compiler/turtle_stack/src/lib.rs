//! Stack safety for deep recursion.
//!
//! Turtle programs nest without a fixed bound: blocks inside repeats inside
//! procedure bodies, and expressions like `((((1 + 2) * 3) ...))`. The
//! evaluator and the debug printer both recurse on that nesting, so every
//! recursive step goes through [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call (WASM manages its own stack).
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - if less than this remains, the stack is grown
//! - **Growth size**: 1MB - each growth allocates this much
//!
//! Stack growth only keeps the host alive; the evaluator still enforces its
//! own nesting ceiling so a self-recursive procedure fails instead of
//! consuming memory forever.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone, a new segment is allocated
/// before calling `f`.
///
/// ```text
/// fn eval_expr(&mut self, id: NodeId) -> Result<f64, EvalError> {
///     ensure_sufficient_stack(|| {
///         // ... recursive evaluation ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
