//! Set of already used endpoint pairs for rejection sampling without repeated edges.

use fxhash::FxHashSet;

use crate::Node;

/// Tracks which `(u, v)` pairs have been generated.
///
/// In undirected mode inserting `(u, v)` also marks `(v, u)` as used.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    used: FxHashSet<(Node, Node)>,
    undirected: bool,
}

impl EdgeSet {
    /// Creates an empty set for directed or undirected pairs
    pub fn new(directed: bool) -> Self {
        Self {
            used: FxHashSet::default(),
            undirected: !directed,
        }
    }

    /// Creates an empty set with room for `capacity` pairs
    pub fn with_capacity(directed: bool, capacity: usize) -> Self {
        let capacity = if directed { capacity } else { 2 * capacity };
        Self {
            used: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            undirected: !directed,
        }
    }

    /// Marks `(u, v)` as used.
    /// Returns *true* if the pair was already present.
    pub fn insert(&mut self, u: Node, v: Node) -> bool {
        let known = !self.used.insert((u, v));
        if self.undirected {
            self.used.insert((v, u));
        }
        known
    }

    /// Returns *true* if `(u, v)` was used before
    pub fn contains(&self, u: Node, v: Node) -> bool {
        self.used.contains(&(u, v))
    }
}
