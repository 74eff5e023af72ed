//! `ContextBuilder` for creating contexts with custom sinks and limits.

use rand::rngs::StdRng;
use rand::SeedableRng;
use turtle_symtab::SymbolTable;

use super::{Context, Pen};
use crate::{stderr_sink, stdout_sink, EvalConfig, RedeclarationPolicy, SharedOutput};

/// Builder for [`Context`].
///
/// Defaults: [`EvalConfig::default`], results to stdout, diagnostics to
/// stderr.
#[derive(Default)]
pub struct ContextBuilder {
    config: EvalConfig,
    results: Option<SharedOutput>,
    diagnostics: Option<SharedOutput>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the nesting ceiling.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set the `repeat` safety ceiling.
    #[must_use]
    pub fn repeat_limit(mut self, limit: u64) -> Self {
        self.config.repeat_limit = limit;
        self
    }

    /// Seed `random` for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn redeclaration(mut self, policy: RedeclarationPolicy) -> Self {
        self.config.redeclaration = policy;
        self
    }

    /// Set where drawing primitives go.
    #[must_use]
    pub fn results(mut self, sink: SharedOutput) -> Self {
        self.results = Some(sink);
        self
    }

    /// Set where errors and `print` values go.
    #[must_use]
    pub fn diagnostics(mut self, sink: SharedOutput) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn build(self) -> Context {
        let rng = self
            .config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Context {
            config: self.config,
            angle: 0.0,
            pen_up: false,
            committed: Pen::default(),
            pending: Pen::default(),
            lines_printed: 0,
            nested_calls: 0,
            depth: 0,
            variables: SymbolTable::new(),
            procedures: SymbolTable::new(),
            error: None,
            results: self.results.unwrap_or_else(stdout_sink),
            diagnostics: self.diagnostics.unwrap_or_else(stderr_sink),
            rng,
        }
    }
}
