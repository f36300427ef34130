/*!
# Adjacency Matrix View

[`GraphMatrix`] is a dense `(n + 1) x (n + 1)` snapshot of a graph. Row and column `0` are
never written by edges (vertices are 1-indexed) and keep the default value.

The matrix is built by visiting every *stored* edge copy slot by slot and setting
`cell[start][end] = merge(cell[start][end], edge)`. For directed graphs this is exactly the
order of [`Graph::iterate_edges`](crate::graph::Graph::iterate_edges). For undirected graphs
`cell[u][v]` and `cell[v][u]` are updated independently from their own copies, so a `merge`
that looks at the orientation of the edge may produce an asymmetric matrix. Callers that need
symmetric results should supply a merge that only depends on the weight.

Undirected edges deliberately fill both triangles: an edge `(1, 3)` sets `cell[1][3]` and
`cell[3][1]`, rather than only the upper-triangle cell of its reported copy.
*/

use std::{fmt::Display, ops::Index};

use itertools::Itertools;

use crate::{node::slot, prelude::*};

/// Dense adjacency matrix with cells of type `T`
#[derive(Clone, Debug, PartialEq)]
pub struct GraphMatrix<T> {
    n: NumNodes,
    cells: Vec<T>,
}

impl<T: Clone> GraphMatrix<T> {
    /// Builds the matrix of `graph`, starting from `default` in every cell and folding each
    /// stored edge into its cell with `merge`
    pub fn build<W, G, M>(graph: &G, default: T, mut merge: M) -> Self
    where
        G: AdjacencyList<W>,
        M: FnMut(&T, &Edge<W>) -> T,
    {
        let n = graph.number_of_nodes();
        let dim = n as usize + 1;
        let mut cells = vec![default; dim * dim];

        for u in 0..=n {
            for e in graph.edges_of(u) {
                let cell = &mut cells[slot(e.start) * dim + slot(e.end)];
                *cell = merge(cell, e);
            }
        }

        Self { n, cells }
    }
}

impl<T> GraphMatrix<T> {
    /// Returns the number of vertices `n` of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the cell `(u, v)`
    /// ** Panics if `u > n` or `v > n` **
    pub fn get(&self, u: Node, v: Node) -> &T {
        assert!(u <= self.n && v <= self.n);
        &self.cells[slot(u) * self.dim() + slot(v)]
    }

    /// Returns all `n + 1` rows including the unused row `0`
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.dim())
    }

    fn dim(&self) -> usize {
        self.n as usize + 1
    }
}

impl<T> Index<(Node, Node)> for GraphMatrix<T> {
    type Output = T;

    fn index(&self, (u, v): (Node, Node)) -> &Self::Output {
        self.get(u, v)
    }
}

impl<T: Display> Display for GraphMatrix<T> {
    /// Renders rows `1..=n` with columns `1..=n` separated by spaces
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .rows()
            .skip(1)
            .map(|row| row[1..].iter().join(" "))
            .join("\n");
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_edge_wins() {
        let mut g = Graph::new_directed(3);
        g.add_edge(2, 3, 3);
        g.add_edge(3, 3, 1);
        g.add_edge(2, 3, 7);

        let m = g.to_weight_matrix(-1);
        assert_eq!(m[(2, 3)], 7);
        assert_eq!(m[(3, 3)], 1);
        assert_eq!(m[(3, 2)], -1);
        assert_eq!(m[(0, 0)], -1);
        assert_eq!(m.to_string(), "-1 -1 -1\n-1 -1 7\n-1 -1 1");
    }

    #[test]
    fn custom_merge() {
        let mut g = Graph::new_directed(2);
        g.add_edges([(1, 2, 4), (1, 2, 5), (2, 1, 1)]);

        let counts = g.to_matrix(0usize, |c, _| c + 1);
        assert_eq!(*counts.get(1, 2), 2);
        assert_eq!(*counts.get(2, 1), 1);

        let sums = g.to_matrix(0, |s, e| s + e.weight);
        assert_eq!(sums[(1, 2)], 9);
        assert_eq!(sums.rows().count(), 3);
    }

    #[test]
    fn undirected_cells_are_updated_per_copy() {
        let mut g = Graph::new_undirected(3);
        g.add_edges([(1, 2, 4), (2, 1, 9)]);

        let m = g.to_weight_matrix(0);
        // slot 1 holds (1,2,4),(1,2,9); slot 2 holds (2,1,4),(2,1,9)
        assert_eq!(m[(1, 2)], 9);
        assert_eq!(m[(2, 1)], 9);

        // keep-first merge is order sensitive but both slots store copies in insertion order
        let first = g.to_matrix(None, |c: &Option<i32>, e| c.or(Some(e.weight)));
        assert_eq!(first[(1, 2)], Some(4));
        assert_eq!(first[(2, 1)], Some(4));
    }

    #[test]
    fn undirected_edge_fills_both_triangles() {
        let mut g = Graph::new_undirected(3);
        g.add_edge(1, 3, 4);

        let m = g.to_weight_matrix(0);
        assert_eq!(m[(1, 3)], 4);
        assert_eq!(m[(3, 1)], 4);
        assert_eq!(m.to_string(), "0 0 4\n0 0 0\n4 0 0");
    }

    #[test]
    fn undirected_matrix_can_be_asymmetric() {
        let mut g = Graph::new_undirected(2);
        g.add_edge(1, 2, 4);

        // each cell only sees its own copy, so a merge reading the orientation differs per cell
        let starts = g.to_matrix(0, |_, e| e.start);
        assert_eq!(starts[(1, 2)], 1);
        assert_eq!(starts[(2, 1)], 2);
        assert_ne!(starts[(1, 2)], starts[(2, 1)]);
    }
}
