//! AST node kinds.
//!
//! Every node is a [`Node`]: a [`NodeKind`] carrying its operands, plus the
//! sibling link that chains commands into a sequence. Operands (children) and
//! the sibling chain are separate: a `repeat` node's body is a child, the
//! command after the `repeat` is its `next`.

mod operators;

use smallvec::{smallvec, SmallVec};
use turtle_symtab::EntryId;

use crate::NodeId;

pub use operators::{BinaryOp, MathFunc, UnaryOp};

/// Maximum number of children any node kind carries (`color r g b`).
pub const MAX_CHILDREN: usize = 3;

/// Kind of a node, with its operands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeKind {
    // Simple commands
    Forward(NodeId),
    Backward(NodeId),
    Up,
    Down,
    Left(NodeId),
    Right(NodeId),
    Heading(NodeId),
    Position { x: NodeId, y: NodeId },
    Home,
    Color { r: NodeId, g: NodeId, b: NodeId },
    Print(NodeId),

    // Compound commands
    Repeat { count: NodeId, body: NodeId },
    /// `{ ... }`; `None` for an empty block.
    Block(Option<NodeId>),
    Call(EntryId),
    Set { name: EntryId, value: NodeId },
    Proc { name: EntryId, body: NodeId },

    // Expressions
    Value(f64),
    Name(EntryId),
    Unary { op: UnaryOp, operand: NodeId },
    Binary { op: BinaryOp, lhs: NodeId, rhs: NodeId },
    Func { func: MathFunc, arg: NodeId },
    Random { low: NodeId, high: NodeId },
    /// Parenthesised expression.
    ExprBlock(NodeId),
}

impl NodeKind {
    /// Operands in evaluation order.
    pub fn children(&self) -> SmallVec<[NodeId; MAX_CHILDREN]> {
        match *self {
            Self::Forward(e)
            | Self::Backward(e)
            | Self::Left(e)
            | Self::Right(e)
            | Self::Heading(e)
            | Self::Print(e)
            | Self::Set { value: e, .. }
            | Self::Proc { body: e, .. }
            | Self::Unary { operand: e, .. }
            | Self::Func { arg: e, .. }
            | Self::ExprBlock(e)
            | Self::Block(Some(e)) => smallvec![e],
            Self::Position { x, y } => smallvec![x, y],
            Self::Repeat { count, body } => smallvec![count, body],
            Self::Binary { lhs, rhs, .. } => smallvec![lhs, rhs],
            Self::Random { low, high } => smallvec![low, high],
            Self::Color { r, g, b } => smallvec![r, g, b],
            Self::Up
            | Self::Down
            | Self::Home
            | Self::Block(None)
            | Self::Call(_)
            | Self::Value(_)
            | Self::Name(_) => SmallVec::new(),
        }
    }

    /// Returns `true` for kinds that produce a number.
    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            Self::Value(_)
                | Self::Name(_)
                | Self::Unary { .. }
                | Self::Binary { .. }
                | Self::Func { .. }
                | Self::Random { .. }
                | Self::ExprBlock(_)
        )
    }

    /// Returns `true` for kinds that may appear in a command sequence.
    #[inline]
    pub fn is_command(&self) -> bool {
        !self.is_expr()
    }

    /// Short name used in diagnostics and the debug printer.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Forward(_) => "fw",
            Self::Backward(_) => "bw",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left(_) => "left",
            Self::Right(_) => "right",
            Self::Heading(_) => "heading",
            Self::Position { .. } => "pos",
            Self::Home => "home",
            Self::Color { .. } => "color",
            Self::Print(_) => "print",
            Self::Repeat { .. } => "repeat",
            Self::Block(_) => "block",
            Self::Call(_) => "call",
            Self::Set { .. } => "set",
            Self::Proc { .. } => "proc",
            Self::Value(_) => "value",
            Self::Name(_) => "name",
            Self::Unary { .. } => "unary operator",
            Self::Binary { .. } => "binary operator",
            Self::Func { func, .. } => func.name(),
            Self::Random { .. } => "random",
            Self::ExprBlock(_) => "parenthesised expression",
        }
    }
}

/// A node of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Next command of the enclosing sequence.
    pub next: Option<NodeId>,
}

/// How the front end used an identifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NameUse {
    pub is_proc: bool,
    pub is_var: bool,
}

/// Role an identifier is interned under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameRole {
    Procedure,
    Variable,
}
