//! Evaluation limits and policies.

/// Default ceiling on evaluation nesting (blocks, repeat bodies, calls and
/// expression operands combined).
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

/// Default safety ceiling on a single `repeat` count (2^47).
pub const DEFAULT_REPEAT_LIMIT: u64 = 1 << 47;

/// What `proc` does when the name is already declared.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RedeclarationPolicy {
    /// Report on the diagnostics sink and keep going; the error latch is not
    /// set and the first declaration stays bound.
    #[default]
    Report,
    /// Fail like every other declaration error.
    Error,
}

/// Configuration of a [`Context`](crate::Context).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Nesting ceiling; exceeding it fails with a recursion error.
    pub max_depth: usize,
    /// `repeat` counts above this fail.
    pub repeat_limit: u64,
    /// Seed for `random`; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub redeclaration: RedeclarationPolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            repeat_limit: DEFAULT_REPEAT_LIMIT,
            seed: None,
            redeclaration: RedeclarationPolicy::default(),
        }
    }
}
