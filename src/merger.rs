/*!
# Disjoint Unions

[`Merger`] places several graphs side by side: the vertices of the `i`-th graph are shifted by
the total number of vertices of all graphs before it. Edges between the original components
are added afterwards by addressing vertices as `(component, vertex)`.

```
use fabgraph::{prelude::*, merger::Merger};

let mut a = Graph::new_undirected(2);
a.add_edge(1, 2, 1);
let mut b = Graph::new_undirected(3);
b.add_edge(2, 3, 5);

let mut merger = Merger::new(&[a, b]).unwrap();
merger.add_edge_by_component((0, 2), (1, 1), 9).unwrap();

assert_eq!(merger.to_str(Edge::to_string), "1 2 1\n2 3 9\n4 5 5");
```
*/

use std::fmt::Display;

use crate::{
    error::{GenError, Result},
    prelude::*,
};

/// Disjoint union of several graphs
#[derive(Debug, Clone)]
pub struct Merger<W = i64> {
    graph: Graph<W>,
    offsets: Vec<Node>,
}

impl<W: Clone> Merger<W> {
    /// Merges `graphs` in order. The union is directed iff the first graph is.
    ///
    /// # Errors
    /// Fails with [`GenError::EmptyMerge`] if `graphs` is empty and with
    /// [`GenError::TooManyNodes`] if the union has more than `NumNodes::MAX` vertices.
    pub fn new(graphs: &[Graph<W>]) -> Result<Self> {
        let first = graphs.first().ok_or(GenError::EmptyMerge)?;
        let (offsets, total) = component_offsets(graphs.iter().map(|g| g.number_of_nodes()))?;

        let mut graph = Graph::new(total, first.is_directed());
        for (g, &offset) in graphs.iter().zip(&offsets) {
            for e in g.iterate_edges() {
                graph.add_edge(e.start + offset, e.end + offset, e.weight.clone());
            }
        }

        Ok(Self { graph, offsets })
    }

    /// Adds an edge between vertex `u.1` of component `u.0` and vertex `v.1` of component `v.0`.
    ///
    /// # Errors
    /// Fails with [`GenError::UnknownComponent`] if a component index was not merged.
    pub fn add_edge_by_component(
        &mut self,
        (gu, u): (usize, Node),
        (gv, v): (usize, Node),
        weight: W,
    ) -> Result<()> {
        let u = self.offset_of(gu)? + u;
        let v = self.offset_of(gv)? + v;
        self.graph.add_edge(u, v, weight);
        Ok(())
    }
}

impl<W> Merger<W> {
    /// Returns the id shift applied to the vertices of the `index`-th merged graph
    ///
    /// # Errors
    /// Fails with [`GenError::UnknownComponent`] if fewer graphs were merged.
    pub fn offset_of(&self, index: usize) -> Result<Node> {
        self.offsets
            .get(index)
            .copied()
            .ok_or(GenError::UnknownComponent {
                index,
                components: self.offsets.len(),
            })
    }

    /// Number of merged graphs
    pub fn number_of_components(&self) -> usize {
        self.offsets.len()
    }

    /// Returns the union built so far
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Consumes the merger and returns the union
    pub fn into_graph(self) -> Graph<W> {
        self.graph
    }

    /// See [`Graph::to_str`]
    pub fn to_str<F>(&self, output: F) -> String
    where
        F: FnMut(&Edge<W>) -> String,
    {
        self.graph.to_str(output)
    }
}

/// Returns the id shift of every graph and the total number of vertices
fn component_offsets<I>(sizes: I) -> Result<(Vec<Node>, NumNodes)>
where
    I: IntoIterator<Item = NumNodes>,
{
    let mut total: NumNodes = 0;
    let mut offsets = Vec::new();
    let mut requested: u64 = 0;
    for n in sizes {
        offsets.push(total);
        requested += n as u64;
        total = total.checked_add(n).ok_or(GenError::TooManyNodes {
            requested,
            max: NumNodes::MAX,
        })?;
    }
    Ok((offsets, total))
}

impl<W: Display> Display for Merger<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.graph, f)
    }
}
