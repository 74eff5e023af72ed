use std::collections::TryReserveError;

/// Failure to grow a symbol table.
///
/// Lookups never fail; only inserting a fresh key can.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("out of memory while growing the symbol table")]
    OutOfMemory(#[from] TryReserveError),

    #[error("symbol table is full ({0} entries)")]
    Full(usize),
}
