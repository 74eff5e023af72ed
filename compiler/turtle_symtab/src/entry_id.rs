//! Stable handles into a [`SymbolTable`](crate::SymbolTable).

use std::fmt;

/// Index of an entry in a symbol table.
///
/// Entries are never removed individually, so an id handed out by a table
/// resolves to the same entry for the table's whole lifetime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Create a new `EntryId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        EntryId(index)
    }

    /// Get the index into the table's node storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}
