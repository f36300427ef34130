/*!
# Adjacency-List Graph

[`Graph`] is the container every generator fills. It owns one adjacency list per vertex
(`n + 1` slots, slot `0` stays empty as vertices are 1-indexed) and all [`Edge`] values.

For undirected graphs, `add_edge(u, v, w)` stores `Edge(u, v, w)` in slot `u` **and**
`Edge(v, u, w)` in slot `v`, except for self-loops which are stored once. Iteration via
[`Graph::iterate_edges`] yields every logical edge exactly once by only reporting the
canonical copy (`end >= start`).

# Example
```
use fabgraph::prelude::*;

let mut g = Graph::new(3, false);
g.add_edge(1, 2, 5);
g.add_edge(3, 2, 1);
g.add_edge(1, 3, 4);

assert_eq!(g.edge_count(), 3);
assert_eq!(g.to_str(Edge::to_string), "1 2 5\n1 3 4\n2 3 1");
```
*/

use std::fmt::Display;

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::{matrix::GraphMatrix, node::slot, prelude::*};

/// A (directed or undirected) multigraph over the vertices `1..=n`
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<W = i64> {
    directed: bool,
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> Graph<W> {
    /// Creates an empty graph with `n` vertices
    pub fn new(n: NumNodes, directed: bool) -> Self {
        let mut adjacency = Vec::with_capacity(n as usize + 1);
        adjacency.resize_with(n as usize + 1, Vec::new);
        Self {
            directed,
            adjacency,
        }
    }

    /// Creates an empty undirected graph with `n` vertices
    pub fn new_undirected(n: NumNodes) -> Self {
        Self::new(n, false)
    }

    /// Creates an empty directed graph with `n` vertices
    pub fn new_directed(n: NumNodes) -> Self {
        Self::new(n, true)
    }

    /// Returns the number of logical edges.
    ///
    /// This is the total length of all adjacency lists, halved for undirected graphs. Note that
    /// self-loops in undirected graphs are stored once and hence count as half an edge here.
    pub fn edge_count(&self) -> NumEdges {
        let stored: NumEdges = self.adjacency.iter().map(|l| l.len() as NumEdges).sum();
        if self.directed { stored } else { stored / 2 }
    }

    /// Returns a lazy iterator over all edges, ordered by the slot they are stored in.
    ///
    /// Each undirected edge is reported once. The iterator can be recreated at any time.
    pub fn iterate_edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges()
    }

    /// Renders all edges (in iteration order) with `output` and joins them with `"\n"`
    pub fn to_str<F>(&self, mut output: F) -> String
    where
        F: FnMut(&Edge<W>) -> String,
    {
        self.iterate_edges().map(|e| output(e)).join("\n")
    }
}

impl<W: Clone> Graph<W> {
    /// Adds the edge `u -> v`.
    ///
    /// For undirected graphs the mirrored edge `v -> u` is stored as well unless `u == v`.
    /// ** Panics if `u > n` or `v > n` **
    pub fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        if !self.directed && u != v {
            self.adjacency[slot(v)].push(Edge::new(v, u, weight.clone()));
        }
        self.adjacency[slot(u)].push(Edge::new(u, v, weight));
    }

    /// Adds all edges of the iterator in order
    pub fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        for e in edges {
            let Edge { start, end, weight } = e.into();
            self.add_edge(start, end, weight);
        }
    }

    /// Returns the edges anonymized in three steps, each consuming randomness in this order:
    /// 1. vertex ids are relabeled through a uniformly random permutation of `1..=n`,
    /// 2. the edge list is uniformly permuted,
    /// 3. for undirected graphs, each edge independently has its endpoints swapped with
    ///    probability `1/2`.
    ///
    /// The result is isomorphic to the original graph.
    pub fn shuffled_edges<R: Rng>(&self, rng: &mut R) -> Vec<Edge<W>> {
        let mut relabel = (0..=self.number_of_nodes()).collect_vec();
        relabel[1..].shuffle(rng);

        let mut edges = self
            .iterate_edges()
            .map(|e| Edge::new(relabel[slot(e.start)], relabel[slot(e.end)], e.weight.clone()))
            .collect_vec();
        edges.shuffle(rng);

        if !self.directed {
            for e in edges.iter_mut() {
                if rng.random_bool(0.5) {
                    std::mem::swap(&mut e.start, &mut e.end);
                }
            }
        }

        edges
    }

    /// Renders the anonymized edges of [`Graph::shuffled_edges`] with `output`
    pub fn to_str_shuffled<R, F>(&self, rng: &mut R, output: F) -> String
    where
        R: Rng,
        F: FnMut(&Edge<W>) -> String,
    {
        self.shuffled_edges(rng).iter().map(output).join("\n")
    }

    /// Builds a dense adjacency matrix, see [`GraphMatrix::build`]
    pub fn to_matrix<T, M>(&self, default: T, merge: M) -> GraphMatrix<T>
    where
        T: Clone,
        M: FnMut(&T, &Edge<W>) -> T,
    {
        GraphMatrix::build(self, default, merge)
    }

    /// Builds a dense adjacency matrix in which later edges overwrite earlier ones
    pub fn to_weight_matrix(&self, default: W) -> GraphMatrix<W> {
        GraphMatrix::build(self, default, |_, e| e.weight.clone())
    }
}

impl<W> GraphType for Graph<W> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<W> GraphNodeOrder for Graph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        (self.adjacency.len() - 1) as NumNodes
    }
}

impl<W> GraphEdgeOrder for Graph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.edge_count()
    }
}

impl<W> AdjacencyList<W> for Graph<W> {
    fn edges_of(&self, u: Node) -> &[Edge<W>] {
        &self.adjacency[slot(u)]
    }
}

impl<W: Display> Display for Graph<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_str(Edge::to_string))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn new_graph() {
        for n in 0..20 {
            let g: Graph = Graph::new(n, false);
            assert_eq!(g.number_of_nodes(), n);
            assert_eq!(g.edge_count(), 0);
            assert_eq!(g.iterate_edges().count(), 0);
            assert_eq!(g.to_str(Edge::to_string), "");
        }
    }

    #[test]
    fn undirected_mirroring() {
        let mut g = Graph::new_undirected(4);
        g.add_edge(3, 1, 2);
        g.add_edge(2, 2, 7);
        g.add_edge(1, 4, 1);

        assert_eq!(g.edges_of(1), &[Edge::new(1, 3, 2), Edge::new(1, 4, 1)]);
        assert_eq!(g.edges_of(2), &[Edge::new(2, 2, 7)]);
        assert_eq!(g.edges_of(3), &[Edge::new(3, 1, 2)]);
        assert_eq!(g.edges_of(4), &[Edge::new(4, 1, 1)]);

        assert_eq!(
            g.iterate_edges().copied().collect_vec(),
            vec![Edge::new(1, 3, 2), Edge::new(1, 4, 1), Edge::new(2, 2, 7)]
        );

        // the self-loop is stored once; 5 stored copies halve to 2
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn directed_no_mirroring() {
        let mut g = Graph::new_directed(3);
        g.add_edges([(3, 1, 1), (1, 3, 1), (2, 2, 1)]);

        assert_eq!(g.edge_count(), 3);
        assert_eq!(
            g.iterate_edges().map(|e| e.endpoints()).collect_vec(),
            vec![(1, 3), (2, 2), (3, 1)]
        );
    }

    #[test]
    fn iteration_is_restartable() {
        let mut g = Graph::new_undirected(5);
        g.add_edges([(1, 2, 1), (2, 3, 1), (5, 4, 1)]);

        let first = g.iterate_edges().collect_vec();
        let second = g.iterate_edges().collect_vec();
        assert_eq!(first, second);
        assert_eq!(g.to_str(Edge::unweighted), "1 2\n2 3\n4 5");
        assert_eq!(g.to_string(), "1 2 1\n2 3 1\n4 5 1");
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let mut g = Graph::new_undirected(3);
        g.add_edge(1, 4, 1);
    }

    fn parse(s: &str) -> Vec<Edge> {
        s.lines()
            .map(|l| {
                let (u, v, w) = l
                    .split(' ')
                    .map(|t| t.parse::<i64>().unwrap())
                    .collect_tuple()
                    .unwrap();
                Edge::new(u as Node, v as Node, w)
            })
            .collect_vec()
    }

    fn degree_and_weights(n: NumNodes, edges: &[Edge]) -> (Vec<usize>, Vec<i64>) {
        let mut degrees = vec![0usize; n as usize + 1];
        for e in edges {
            degrees[slot(e.start)] += 1;
            degrees[slot(e.end)] += 1;
        }
        degrees.sort_unstable();
        let weights = edges.iter().map(|e| e.weight).sorted().collect_vec();
        (degrees, weights)
    }

    #[test]
    fn shuffle_preserves_isomorphism_class() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [1 as NumNodes, 2, 10, 50] {
                let mut g = Graph::new(n, directed);
                for w in 0..(3 * n as i64) {
                    g.add_edge(rng.random_range(1..=n), rng.random_range(1..=n), w);
                }

                let plain = parse(&g.to_str(Edge::to_string));
                let shuffled = parse(&g.to_str_shuffled(rng, Edge::to_string));

                assert_eq!(plain.len(), shuffled.len());
                assert_eq!(
                    degree_and_weights(n, &plain),
                    degree_and_weights(n, &shuffled)
                );
                assert_eq!(
                    plain.iter().filter(|e| e.is_loop()).count(),
                    shuffled.iter().filter(|e| e.is_loop()).count()
                );
                assert!(shuffled.iter().all(|e| (1..=n).contains(&e.start)));
            }
        }
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut g = Graph::new_undirected(30);
        for u in 2..=30 {
            g.add_edge(u - 1, u, u as i64);
        }

        let a = g.to_str_shuffled(&mut Pcg64Mcg::seed_from_u64(7), Edge::to_string);
        let b = g.to_str_shuffled(&mut Pcg64Mcg::seed_from_u64(7), Edge::to_string);
        assert_eq!(a, b);
        assert_ne!(a, g.to_string());
    }

    #[test]
    fn shuffled_directed_keeps_orientation() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let mut g = Graph::new_directed(2);
        g.add_edge(1, 2, 1);
        g.add_edge(1, 2, 2);
        g.add_edge(1, 2, 3);

        // relabeling either keeps or flips all edges together
        let shuffled = g.shuffled_edges(rng);
        assert!(shuffled.iter().map(|e| e.endpoints()).all_equal());
    }
}
