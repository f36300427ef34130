//! Read-only graph traits shared by [`Graph`](crate::graph::Graph) and the views derived from it.

use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::*;

/// Provides whether a graph is directed
pub trait GraphType {
    /// Returns *true* if edges are oriented
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges are unoriented
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range of vertex ids, ie. `1..=n`.
    ///
    /// In contrast to borrowing iterators, the range may be used where mutable references of
    /// the graph are needed.
    fn vertices_range(&self) -> RangeInclusive<Node> {
        node_range(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (logical) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the stored adjacency lists of a graph
pub trait AdjacencyList<W>: GraphNodeOrder + GraphType {
    /// Returns all edges stored in the slot of `u` in insertion order.
    /// For undirected graphs this includes the mirrored copies.
    /// ** Panics if `u > n` **
    fn edges_of(&self, u: Node) -> &[Edge<W>];

    /// Returns the number of stored edges at `u` (self-loops count once)
    /// ** Panics if `u > n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges_of(u).len() as NumNodes
    }

    /// Returns an iterator over the neighbors of `u` (with multiplicity)
    /// ** Panics if `u > n` **
    fn neighbors_of<'a>(&'a self, u: Node) -> impl Iterator<Item = Node> + 'a
    where
        W: 'a,
    {
        self.edges_of(u).iter().map(|e| e.end)
    }

    /// Returns the degrees of all vertices `1..=n` in order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices_range().map(|u| self.degree_of(u))
    }

    /// Returns the sorted degree sequence of the graph
    fn degree_sequence(&self) -> Vec<NumNodes> {
        self.degrees().sorted_unstable().collect_vec()
    }

    /// Returns every edge exactly once in slot order.
    ///
    /// For undirected graphs only the canonical copy (`end >= start`) is returned; for directed
    /// graphs every stored edge is.
    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a Edge<W>> + 'a
    where
        W: 'a,
    {
        let directed = self.is_directed();
        (0..=self.number_of_nodes())
            .flat_map(move |u| self.edges_of(u).iter())
            .filter(move |e| directed || e.end >= e.start)
    }
}
