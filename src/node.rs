/*!
# Node Representation

We choose `Node = u32` as generated test inputs practically never exceed `2^32` vertices.
Vertices are **1-indexed**: a graph with `n` nodes uses ids `1..=n`, and `0` never names a
vertex (it is the unused adjacency slot in [`Graph`](crate::graph::Graph)).
*/

use std::ops::RangeInclusive;

/// Vertex ids are any unsigned integer from `1` to `n`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Number of edges; `u64` as `n * n` quickly exceeds `u32` for moderate `n`
pub type NumEdges = u64;

/// Returns the range of valid vertex ids of a graph with `n` nodes, ie. `1..=n`
pub const fn node_range(n: NumNodes) -> RangeInclusive<Node> {
    1..=n
}

/// Maps a vertex id onto its adjacency slot
#[inline]
pub(crate) const fn slot(u: Node) -> usize {
    u as usize
}
