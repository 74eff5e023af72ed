//! AVL tree keyed by name.
//!
//! Nodes are stored in insertion order in a flat `Vec`; the tree shape lives
//! in the `links`/`parent` indices. Insertion retraces from the new leaf's
//! parent toward the root and performs at most one single or double
//! rotation, after which the subtree is back to its pre-insertion height and
//! retracing stops.

use std::cmp::Ordering;

use crate::{EntryId, SymbolError};

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// How [`SymbolTable::find_or_insert`] treats a missing key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FindMode {
    /// Report a missing key as `None`; never mutate the table.
    LookupOnly,
    /// Insert a missing key with a default payload.
    InsertIfAbsent,
}

/// Outcome of an insertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The key was already present.
    Existing(EntryId),
    /// The key was freshly inserted with a default payload.
    Inserted(EntryId),
}

impl Slot {
    /// The entry the key resolves to.
    #[inline]
    pub fn id(self) -> EntryId {
        match self {
            Slot::Existing(id) | Slot::Inserted(id) => id,
        }
    }

    /// Returns `true` if the entry did not exist before.
    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, Slot::Inserted(_))
    }
}

struct AvlNode<V> {
    key: Box<str>,
    value: V,
    /// `[left, right]`
    links: [Option<EntryId>; 2],
    parent: Option<EntryId>,
    height: i32,
}

/// Ordered map from name to payload, balanced as an AVL tree.
pub struct SymbolTable<V> {
    nodes: Vec<AvlNode<V>>,
    root: Option<EntryId>,
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<V> SymbolTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of the tree; an empty table has height 0.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// Look `key` up without touching the table.
    pub fn get(&self, key: &str) -> Option<EntryId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            cur = match key.cmp(&*node.key) {
                Ordering::Less => node.links[LEFT],
                Ordering::Greater => node.links[RIGHT],
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// The key stored for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not handed out by this table.
    #[inline]
    #[track_caller]
    pub fn key(&self, id: EntryId) -> &str {
        &self.node(id).key
    }

    /// The payload stored for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not handed out by this table.
    #[inline]
    #[track_caller]
    pub fn value(&self, id: EntryId) -> &V {
        &self.node(id).value
    }

    /// Mutable payload for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not handed out by this table.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self, id: EntryId) -> &mut V {
        &mut self.nodes[id.index()].value
    }

    /// Release every entry and reset to empty.
    ///
    /// Ids handed out before the call must not be used afterwards.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// In-order (sorted by key) iteration.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            table: self,
            stack: Vec::new(),
            cur: self.root,
        }
    }

    /// Check every structural invariant of the tree.
    ///
    /// Heights are consistent, every node is balanced, parent links mirror
    /// child links and keys are strictly increasing in order. Runs in O(n).
    pub fn check_invariants(&self) -> bool {
        if let Some(root) = self.root {
            if self.node(root).parent.is_some() {
                return false;
            }
        }
        for (index, node) in self.nodes.iter().enumerate() {
            let Ok(raw) = u32::try_from(index) else {
                return false;
            };
            let id = EntryId::new(raw);
            if node.height != self.fresh_height(id) || self.balance(id).abs() > 1 {
                return false;
            }
            let children_point_back = node
                .links
                .iter()
                .flatten()
                .all(|&child| self.node(child).parent == Some(id));
            if !children_point_back {
                return false;
            }
        }
        let mut count = 0;
        let mut previous: Option<&str> = None;
        for (_, key, _) in self.iter() {
            if previous.is_some_and(|prev| prev >= key) {
                return false;
            }
            previous = Some(key);
            count += 1;
        }
        count == self.nodes.len()
    }

    #[inline]
    fn node(&self, id: EntryId) -> &AvlNode<V> {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: EntryId) -> &mut AvlNode<V> {
        &mut self.nodes[id.index()]
    }

    #[inline]
    fn height_of(&self, id: Option<EntryId>) -> i32 {
        id.map_or(0, |id| self.node(id).height)
    }

    fn fresh_height(&self, id: EntryId) -> i32 {
        let [left, right] = self.node(id).links;
        1 + self.height_of(left).max(self.height_of(right))
    }

    fn balance(&self, id: EntryId) -> i32 {
        let [left, right] = self.node(id).links;
        self.height_of(left) - self.height_of(right)
    }

    /// Walk from `start` toward the root fixing heights.
    fn retrace(&mut self, start: Option<EntryId>) {
        let mut cur = start;
        while let Some(top) = cur {
            let before = self.node(top).height;
            let after = self.fresh_height(top);
            if before == after {
                // Nobody above can notice.
                break;
            }
            self.node_mut(top).height = after;
            let balance = self.balance(top);
            if balance.abs() == 2 {
                self.rebalance(top, if balance > 0 { LEFT } else { RIGHT });
                // The rotated subtree is back to its old height.
                break;
            }
            cur = self.node(top).parent;
        }
    }

    /// Restore balance at `top`, whose `heavy` side is two levels taller.
    fn rebalance(&mut self, top: EntryId, heavy: usize) {
        let light = 1 - heavy;
        if let Some(child) = self.node(top).links[heavy] {
            let [inner, outer] = {
                let links = self.node(child).links;
                [links[light], links[heavy]]
            };
            if self.height_of(inner) > self.height_of(outer) {
                // LR / RL: straighten the child first.
                self.rotate(child, heavy);
            }
        }
        self.rotate(top, light);
    }

    /// Move `top` down toward `down`, lifting its child on the other side.
    fn rotate(&mut self, top: EntryId, down: usize) {
        let up = 1 - down;
        let Some(pivot) = self.node(top).links[up] else {
            return;
        };
        let inner = self.node(pivot).links[down];
        self.node_mut(top).links[up] = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(top);
        }

        let parent = self.node(top).parent;
        self.node_mut(pivot).parent = parent;
        match parent {
            Some(parent) => {
                let side = usize::from(self.node(parent).links[RIGHT] == Some(top));
                self.node_mut(parent).links[side] = Some(pivot);
            }
            None => self.root = Some(pivot),
        }

        self.node_mut(pivot).links[down] = Some(top);
        self.node_mut(top).parent = Some(pivot);

        let height = self.fresh_height(top);
        self.node_mut(top).height = height;
        let height = self.fresh_height(pivot);
        self.node_mut(pivot).height = height;
    }
}

impl<V: Default> SymbolTable<V> {
    /// Find `key`, inserting it with a default payload when `mode` allows.
    ///
    /// Returns `Ok(None)` only in [`FindMode::LookupOnly`] when the key is
    /// absent. On allocation failure the table is left unchanged.
    pub fn find_or_insert(&mut self, key: &str, mode: FindMode) -> Result<Option<Slot>, SymbolError> {
        match mode {
            FindMode::LookupOnly => Ok(self.get(key).map(Slot::Existing)),
            FindMode::InsertIfAbsent => self.insert(key).map(Some),
        }
    }

    /// Find `key`, inserting it with a default payload if absent.
    pub fn insert(&mut self, key: &str) -> Result<Slot, SymbolError> {
        let mut parent = None;
        let mut side = LEFT;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            side = match key.cmp(&*node.key) {
                Ordering::Less => LEFT,
                Ordering::Greater => RIGHT,
                Ordering::Equal => return Ok(Slot::Existing(id)),
            };
            parent = Some(id);
            cur = node.links[side];
        }

        let raw = u32::try_from(self.nodes.len()).map_err(|_| SymbolError::Full(self.nodes.len()))?;
        self.nodes.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(key.len())?;
        owned.push_str(key);

        let id = EntryId::new(raw);
        self.nodes.push(AvlNode {
            key: owned.into_boxed_str(),
            value: V::default(),
            links: [None, None],
            parent,
            height: 1,
        });
        match parent {
            Some(parent) => self.node_mut(parent).links[side] = Some(id),
            None => self.root = Some(id),
        }
        self.retrace(parent);
        Ok(Slot::Inserted(id))
    }
}

/// In-order iterator over `(id, key, value)`.
///
/// Uses an explicit stack bounded by the tree height.
pub struct Iter<'a, V> {
    table: &'a SymbolTable<V>,
    stack: Vec<EntryId>,
    cur: Option<EntryId>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (EntryId, &'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cur {
            self.stack.push(id);
            self.cur = self.table.node(id).links[LEFT];
        }
        let id = self.stack.pop()?;
        let node = self.table.node(id);
        self.cur = node.links[RIGHT];
        Some((id, &node.key, &node.value))
    }
}
