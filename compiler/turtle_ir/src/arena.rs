//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for every node of a program
//! - Children and sibling links are `NodeId` indices
//! - Bulk deallocation: dropping the arena frees the whole tree
//!
//! Constructors mirror the front end's grammar actions. Each returns `None`
//! when the node cannot be allocated, and the name-carrying constructors
//! (`call`, `set`, `proc`, `name`) also return `None` when handed the absent
//! result of a failed name lookup, so upstream failures propagate with `?`.

use turtle_symtab::EntryId;

use crate::ast::{BinaryOp, MathFunc, Node, NodeKind, UnaryOp};
use crate::NodeId;

/// Scale of one 16-bit channel of a hex colour literal.
const CHANNEL_MAX: f64 = 65535.0;

/// Contiguous storage for all nodes of a program.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with no successor.
    pub fn alloc(&mut self, kind: NodeKind) -> Option<NodeId> {
        let raw = u32::try_from(self.nodes.len()).ok()?;
        self.nodes.try_reserve(1).ok()?;
        self.nodes.push(Node { kind, next: None });
        Some(NodeId::new(raw))
    }

    /// Get a node by id, `None` if the id is not from this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Make `next` the successor of `prev` in its command sequence.
    ///
    /// # Panics
    /// Panics if `prev` is not from this arena.
    #[track_caller]
    pub fn link(&mut self, prev: NodeId, next: NodeId) {
        self.nodes[prev.index()].next = Some(next);
    }

    /// Chain `ids` into a sequence, returning its first command.
    ///
    /// # Panics
    /// Panics if an id is not from this arena.
    #[track_caller]
    pub fn sequence(&mut self, ids: impl IntoIterator<Item = NodeId>) -> Option<NodeId> {
        let mut ids = ids.into_iter();
        let first = ids.next()?;
        let mut prev = first;
        for id in ids {
            self.link(prev, id);
            prev = id;
        }
        Some(first)
    }

    // ===== Simple commands =====

    pub fn forward(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Forward(expr))
    }

    pub fn backward(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Backward(expr))
    }

    pub fn up(&mut self) -> Option<NodeId> {
        self.alloc(NodeKind::Up)
    }

    pub fn down(&mut self) -> Option<NodeId> {
        self.alloc(NodeKind::Down)
    }

    pub fn left(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Left(expr))
    }

    pub fn right(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Right(expr))
    }

    pub fn heading(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Heading(expr))
    }

    pub fn position(&mut self, x: NodeId, y: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Position { x, y })
    }

    pub fn home(&mut self) -> Option<NodeId> {
        self.alloc(NodeKind::Home)
    }

    pub fn print(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Print(expr))
    }

    /// `color` from three channel expressions.
    pub fn raw_color(&mut self, r: NodeId, g: NodeId, b: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Color { r, g, b })
    }

    /// `color` from a hex literal with 16 bits per channel (`0xRRRRGGGGBBBB`).
    ///
    /// Each channel becomes a literal in `[0, 1]`. Bits above the red channel
    /// are not masked, so oversized literals yield an out-of-range red.
    pub fn color_hex(&mut self, number: u64) -> Option<NodeId> {
        let r = self.value(channel(number >> 32))?;
        let g = self.value(channel((number >> 16) & 0xFFFF))?;
        let b = self.value(channel(number & 0xFFFF))?;
        self.raw_color(r, g, b)
    }

    // ===== Compound commands =====

    pub fn repeat(&mut self, count: NodeId, body: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Repeat { count, body })
    }

    /// `{ ... }` around a command sequence; `None` for an empty block.
    pub fn block(&mut self, first: Option<NodeId>) -> Option<NodeId> {
        self.alloc(NodeKind::Block(first))
    }

    pub fn call(&mut self, entry: Option<EntryId>) -> Option<NodeId> {
        let entry = entry?;
        self.alloc(NodeKind::Call(entry))
    }

    pub fn set(&mut self, entry: Option<EntryId>, value: NodeId) -> Option<NodeId> {
        let name = entry?;
        self.alloc(NodeKind::Set { name, value })
    }

    pub fn proc(&mut self, entry: Option<EntryId>, body: NodeId) -> Option<NodeId> {
        let name = entry?;
        self.alloc(NodeKind::Proc { name, body })
    }

    // ===== Expressions =====

    pub fn value(&mut self, value: f64) -> Option<NodeId> {
        self.alloc(NodeKind::Value(value))
    }

    pub fn name(&mut self, entry: Option<EntryId>) -> Option<NodeId> {
        let entry = entry?;
        self.alloc(NodeKind::Name(entry))
    }

    pub fn unop(&mut self, op: UnaryOp, operand: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Unary { op, operand })
    }

    pub fn binop(&mut self, op: BinaryOp, lhs: NodeId, rhs: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Binary { op, lhs, rhs })
    }

    pub fn math_func(&mut self, func: MathFunc, arg: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Func { func, arg })
    }

    pub fn random(&mut self, low: NodeId, high: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::Random { low, high })
    }

    /// Parenthesised expression.
    pub fn expr_block(&mut self, expr: NodeId) -> Option<NodeId> {
        self.alloc(NodeKind::ExprBlock(expr))
    }
}

#[expect(clippy::cast_precision_loss, reason = "channels are at most 32 bits wide")]
fn channel(bits: u64) -> f64 {
    bits as f64 / CHANNEL_MAX
}

#[cfg(test)]
mod tests;
