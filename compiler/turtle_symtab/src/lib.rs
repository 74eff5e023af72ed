//! Turtle Symtab - ordered symbol table.
//!
//! One table type serves three roles: the parse-time name table the front
//! end interns identifiers into, the variable table (`f64` payloads) and the
//! procedure table (procedure body payloads) of an execution context.
//!
//! # Design
//!
//! - **AVL balanced**: every node keeps `|height(left) - height(right)| <= 1`
//! - **Index arena**: nodes live in a `Vec` and link to each other by
//!   [`EntryId`], so references into the table are plain indices
//! - **Grow only**: the language never undeclares a name, so there is no
//!   removal; an `EntryId` stays valid until the table is cleared or dropped
//! - **Fallible growth**: allocation failure is reported as
//!   [`SymbolError::OutOfMemory`] and leaves the table unchanged

mod entry_id;
mod error;
mod table;

pub use entry_id::EntryId;
pub use error::SymbolError;
pub use table::{FindMode, Iter, Slot, SymbolTable};
