//! A parsed program as handed from the front end to the evaluator.

use turtle_symtab::{EntryId, SymbolTable};

use crate::ast::{NameRole, NameUse, NodeKind};
use crate::{NodeArena, NodeId, Pretty};

/// Root of a parsed program.
///
/// Owns every node and the parse-time name table. Identifier nodes refer to
/// entries of that table, which therefore lives exactly as long as the tree.
#[derive(Default)]
pub struct Program {
    arena: NodeArena,
    root: Option<NodeId>,
    names: SymbolTable<NameUse>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    /// First command of the top-level sequence.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// The parse-time name table.
    #[inline]
    pub fn names(&self) -> &SymbolTable<NameUse> {
        &self.names
    }

    /// Intern `key`, recording the role it was used in.
    ///
    /// Returns `None` if the name table cannot grow; the result feeds
    /// straight into the name-carrying node constructors.
    pub fn intern(&mut self, key: &str, role: NameRole) -> Option<EntryId> {
        let id = self.names.insert(key).ok()?.id();
        let usage = self.names.value_mut(id);
        match role {
            NameRole::Procedure => usage.is_proc = true,
            NameRole::Variable => usage.is_var = true,
        }
        Some(id)
    }

    /// Find an already interned name.
    pub fn resolve(&self, key: &str) -> Option<EntryId> {
        self.names.get(key)
    }

    /// Identifier text of an entry.
    ///
    /// # Panics
    /// Panics if `entry` did not come from this program's name table.
    #[track_caller]
    pub fn name_of(&self, entry: EntryId) -> &str {
        self.names.key(entry)
    }

    /// Returns `true` if `entry` is in the name table and was interned in
    /// `role`.
    pub fn interned_as(&self, entry: EntryId, role: NameRole) -> bool {
        if entry.index() >= self.names.len() {
            return false;
        }
        let usage = self.names.value(entry);
        match role {
            NameRole::Procedure => usage.is_proc,
            NameRole::Variable => usage.is_var,
        }
    }

    /// Check that the nodes reachable from the root form a tree.
    ///
    /// Every reachable id must be allocated and reached exactly once (no
    /// shared operands, no cycles through `next` links). Every identifier
    /// must resolve in the name table, interned in the role its node uses it
    /// in: `call` and `proc` name procedures, `set` and name references name
    /// variables. Iterative; O(n).
    pub fn is_well_formed(&self) -> bool {
        let mut seen = vec![false; self.arena.len()];
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                return false;
            };
            if std::mem::replace(&mut seen[id.index()], true) {
                return false;
            }
            let name = match node.kind {
                NodeKind::Call(entry) | NodeKind::Proc { name: entry, .. } => {
                    Some((entry, NameRole::Procedure))
                }
                NodeKind::Name(entry) | NodeKind::Set { name: entry, .. } => {
                    Some((entry, NameRole::Variable))
                }
                _ => None,
            };
            if let Some((entry, role)) = name {
                if !self.interned_as(entry, role) {
                    return false;
                }
            }
            stack.extend(node.kind.children());
            stack.extend(node.next);
        }
        true
    }

    /// Render the program as source-like text, for debugging.
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty::new(self)
    }
}
