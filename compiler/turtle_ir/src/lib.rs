//! Turtle IR - the abstract syntax tree of turtle programs.
//!
//! This crate contains the data the external front end hands to the
//! evaluator:
//! - `NodeArena` holding every node, addressed by `NodeId`
//! - One constructor per node variant (`forward`, `repeat`, `binop`, ...)
//! - `Program`: the arena, the root sequence and the parse-time name table
//! - A debug printer rendering a program back to source-like text
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>`; children and sibling links are
//!   `NodeId` indices into one arena, so dropping a program is O(n) and
//!   never recursive
//! - **Names are entries**: identifier nodes hold an `EntryId` into the
//!   parse-time `SymbolTable`, never a pointer
//! - **Closed kinds**: `NodeKind` is an exhaustive enum carrying its operands

mod arena;
pub mod ast;
mod node_id;
mod printer;
mod program;

pub use arena::NodeArena;
pub use ast::{BinaryOp, MathFunc, NameRole, NameUse, Node, NodeKind, UnaryOp};
pub use node_id::NodeId;
pub use printer::Pretty;
pub use program::Program;

// The evaluator and front end both speak in these.
pub use turtle_symtab::{EntryId, SymbolTable};
