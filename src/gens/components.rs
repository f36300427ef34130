use rand::Rng;
use tracing::debug;

use super::*;
use crate::{error::raise_error_unless, merger::Merger};

/// Generator for disjoint unions of random graphs.
///
/// The number of components is drawn uniformly from an inclusive range (default `(2, 2)`),
/// then each component is generated by the wrapped [`RandomGraph`] with `n` nodes and `m`
/// edges and all components are merged via [`Merger`]. Components never share an edge, but a
/// single component may itself be disconnected.
#[derive(Debug, Clone)]
pub struct Components<Wg = UniformWeight> {
    component: RandomGraph<Wg>,
    count: (usize, usize),
}

impl Default for Components {
    fn default() -> Self {
        Self {
            component: RandomGraph::default(),
            count: (2, 2),
        }
    }
}

impl Components {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> Components<Wg> {
    /// Draws the number of components from `min..=max`
    pub fn component_count(mut self, min: usize, max: usize) -> Self {
        self.count = (min, max);
        self
    }

    /// See [`RandomGraph::self_loop`]
    pub fn self_loop(mut self, self_loop: bool) -> Self {
        self.component = self.component.self_loop(self_loop);
        self
    }

    /// See [`RandomGraph::repeated_edges`]
    pub fn repeated_edges(mut self, repeated_edges: bool) -> Self {
        self.component = self.component.repeated_edges(repeated_edges);
        self
    }

    /// Orients the edges of every component
    pub fn directed(mut self, directed: bool) -> Self {
        self.component = self.component.directed(directed);
        self
    }
}

impl<Wg> NumNodesGen for Components<Wg> {
    /// Sets the number of nodes of each component
    fn set_nodes(&mut self, n: NumNodes) {
        self.component.set_nodes(n);
    }
}

impl<Wg> NumEdgesGen for Components<Wg> {
    /// Sets the number of edges of each component
    fn set_edges(&mut self, m: NumEdges) {
        self.component.set_edges(m);
    }
}

impl<Wg> WeightedGen for Components<Wg> {
    type With<V: WeightGen> = Components<V>;

    fn weights<V: WeightGen>(self, weights: V) -> Components<V> {
        Components {
            component: self.component.weights(weights),
            count: self.count,
        }
    }
}

impl<Wg: WeightGen> GraphGenerator for Components<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        let (min, max) = self.count;
        raise_error_unless!(
            min >= 1 && min <= max,
            GenError::InvalidComponentRange { min, max }
        );
        self.component.validate()?;
        let requested = self.component.node_count() as u64 * max as u64;
        raise_error_unless!(
            requested <= NumNodes::MAX as u64,
            GenError::TooManyNodes {
                requested,
                max: NumNodes::MAX,
            }
        );

        let count = rng.random_range(min..=max);
        let graphs = (0..count)
            .map(|_| self.component.build(rng))
            .collect::<Result<Vec<_>>>()?;

        let graph = Merger::new(&graphs)?.into_graph();
        debug!(
            components = count,
            nodes = graph.number_of_nodes(),
            "generated components"
        );
        Ok(graph)
    }
}
