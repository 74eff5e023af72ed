//! Debug printer.
//!
//! Renders a program back to turtle source, one command per line, blocks
//! indented by two spaces. Not part of evaluation.

use std::fmt::{self, Write};

use turtle_stack::ensure_sufficient_stack;
use turtle_symtab::EntryId;

use crate::{NodeId, NodeKind, Program};

/// `Display` adapter returned by [`Program::pretty`].
pub struct Pretty<'a> {
    program: &'a Program,
}

impl<'a> Pretty<'a> {
    pub(crate) fn new(program: &'a Program) -> Self {
        Self { program }
    }

    fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.program.arena().get(id).map(|node| node.kind)
    }

    fn name(&self, entry: EntryId) -> &'a str {
        if entry.index() < self.program.names().len() {
            self.program.name_of(entry)
        } else {
            "<unknown>"
        }
    }

    fn sequence(&self, f: &mut fmt::Formatter<'_>, first: Option<NodeId>, depth: usize) -> fmt::Result {
        // A cyclic chain would never end; no sequence is longer than the arena.
        let mut budget = self.program.arena().len();
        let mut cur = first;
        while let Some(id) = cur {
            if budget == 0 {
                break;
            }
            budget -= 1;
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            self.command(f, id, depth)?;
            f.write_char('\n')?;
            cur = self.program.arena().get(id).and_then(|node| node.next);
        }
        Ok(())
    }

    fn command(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let Some(kind) = self.kind(id) else {
                return f.write_str("<missing>");
            };
            match kind {
                NodeKind::Forward(e)
                | NodeKind::Backward(e)
                | NodeKind::Left(e)
                | NodeKind::Right(e)
                | NodeKind::Heading(e)
                | NodeKind::Print(e) => {
                    write!(f, "{} ", kind.keyword())?;
                    self.expr(f, e)
                }
                NodeKind::Up | NodeKind::Down | NodeKind::Home => f.write_str(kind.keyword()),
                NodeKind::Position { x, y } => {
                    f.write_str("pos ")?;
                    self.expr(f, x)?;
                    f.write_str(", ")?;
                    self.expr(f, y)
                }
                NodeKind::Color { r, g, b } => {
                    f.write_str("color ")?;
                    self.expr(f, r)?;
                    f.write_str(", ")?;
                    self.expr(f, g)?;
                    f.write_str(", ")?;
                    self.expr(f, b)
                }
                NodeKind::Repeat { count, body } => {
                    f.write_str("repeat ")?;
                    self.expr(f, count)?;
                    f.write_char(' ')?;
                    self.command(f, body, depth)
                }
                NodeKind::Block(first) => {
                    f.write_str("{\n")?;
                    self.sequence(f, first, depth + 1)?;
                    for _ in 0..depth {
                        f.write_str("  ")?;
                    }
                    f.write_char('}')
                }
                NodeKind::Call(entry) => write!(f, "call {}", self.name(entry)),
                NodeKind::Set { name, value } => {
                    write!(f, "set {} ", self.name(name))?;
                    self.expr(f, value)
                }
                NodeKind::Proc { name, body } => {
                    write!(f, "proc {} ", self.name(name))?;
                    self.command(f, body, depth)
                }
                _ => self.expr(f, id),
            }
        })
    }

    fn expr(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let Some(kind) = self.kind(id) else {
                return f.write_str("<missing>");
            };
            match kind {
                NodeKind::Value(v) => write!(f, "{v}"),
                NodeKind::Name(entry) => f.write_str(self.name(entry)),
                NodeKind::Unary { op, operand } => {
                    f.write_char(op.as_symbol())?;
                    self.expr(f, operand)
                }
                NodeKind::Binary { op, lhs, rhs } => {
                    self.expr(f, lhs)?;
                    write!(f, " {} ", op.as_symbol())?;
                    self.expr(f, rhs)
                }
                NodeKind::Func { func, arg } => {
                    write!(f, "{}(", func.name())?;
                    self.expr(f, arg)?;
                    f.write_char(')')
                }
                NodeKind::Random { low, high } => {
                    f.write_str("random(")?;
                    self.expr(f, low)?;
                    f.write_str(", ")?;
                    self.expr(f, high)?;
                    f.write_char(')')
                }
                NodeKind::ExprBlock(inner) => {
                    f.write_char('(')?;
                    self.expr(f, inner)?;
                    f.write_char(')')
                }
                command => write!(f, "<{}>", command.keyword()),
            }
        })
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sequence(f, self.program.root(), 0)
    }
}
