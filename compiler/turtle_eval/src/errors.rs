//! Evaluation errors.
//!
//! Every variant maps to a stable process exit code through
//! [`EvalError::code`]; 0 is reserved for success.

use std::fmt;

use turtle_symtab::SymbolError;

/// Result type for evaluation.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Colour channel named by a range error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
        })
    }
}

/// Why evaluation stopped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Memory allocation failed.")]
    OutOfMemory(#[source] SymbolError),

    #[error("Unknown node to eval: expected {expected}, found {found}.")]
    UnknownNode {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown node to eval: the program is not a tree.")]
    MalformedProgram,

    #[error("Unknown variable '{name}'.")]
    UnknownVariable { name: String },

    #[error("Operator '{op}' failed because {lhs}{op}{rhs} = {result} isn't finite.")]
    NonFinite {
        op: char,
        lhs: f64,
        rhs: f64,
        result: f64,
    },

    #[error("Function random({low:.1}, {high:.1}) failed the 'ordered arguments' check.")]
    UnorderedRandom { low: f64, high: f64 },

    #[error("Function sqrt({arg}) failed the 'argument greater or equal than zero' check.")]
    SqrtDomain { arg: f64 },

    #[error("Color in red/green/blue format is out of range on channel {channel}.\nUse 3 numbers in [0, 1].")]
    ColorChannel { channel: Channel },

    #[error("Command repeat {count} ... failed : argument is greater than a safety limit of {limit} iterations.")]
    RepeatLimit { count: f64, limit: u64 },

    #[error("Procedure '{name}' does not exist.")]
    UnknownProcedure { name: String },

    #[error("Variable '{name}' could not be stored.")]
    VariableAlloc {
        name: String,
        #[source]
        source: SymbolError,
    },

    #[error("Procedure '{name}' declaration failed : nested procedures are not allowed.")]
    NestedProcedure { name: String },

    #[error("Procedure '{name}' could not be stored.")]
    ProcedureAlloc {
        name: String,
        #[source]
        source: SymbolError,
    },

    #[error("Evaluation nested deeper than {limit} levels.")]
    RecursionLimit { limit: usize },

    #[error("Procedure '{name}' declaration failed : the procedure already exists.")]
    ProcedureExists { name: String },
}

impl EvalError {
    /// Process exit code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::OutOfMemory(_) => 1,
            Self::UnknownNode { .. } | Self::MalformedProgram => 2,
            Self::UnknownVariable { .. } => 3,
            Self::NonFinite { .. } => 4,
            Self::UnorderedRandom { .. } => 5,
            Self::SqrtDomain { .. } => 6,
            Self::ColorChannel { .. } => 7,
            Self::RepeatLimit { .. } => 8,
            Self::UnknownProcedure { .. } => 9,
            Self::VariableAlloc { .. } => 10,
            Self::NestedProcedure { .. } => 11,
            Self::ProcedureAlloc { .. } => 12,
            Self::RecursionLimit { .. } => 13,
            Self::ProcedureExists { .. } => 14,
        }
    }
}

#[cfg(test)]
mod tests;
