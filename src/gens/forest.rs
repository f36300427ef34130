use itertools::Itertools;
use rand::{Rng, seq::index};
use tracing::debug;

use super::*;

/// Generator for forests with exactly `trees` components.
///
/// A random tree is built with the wrapped [`Tree`] generator (all of its options apply) and
/// a uniformly chosen subset of `n - trees` of its edges is kept. Removing `k` edges from a
/// tree leaves exactly `k + 1` components.
#[derive(Debug, Clone)]
pub struct Forest<Wg = UniformWeight, Fg = UniformFather> {
    tree: Tree<Wg, Fg>,
    trees: NumNodes,
}

impl Default for Forest {
    fn default() -> Self {
        Self {
            tree: Tree::default(),
            trees: 1,
        }
    }
}

impl Forest {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg, Fg> Forest<Wg, Fg> {
    /// Sets the number of components
    pub fn trees(mut self, trees: NumNodes) -> Self {
        self.trees = trees;
        self
    }

    /// See [`Tree::chain_fraction`]
    pub fn chain_fraction(mut self, chain: f64) -> Self {
        self.tree = self.tree.chain_fraction(chain);
        self
    }

    /// See [`Tree::flower_fraction`]
    pub fn flower_fraction(mut self, flower: f64) -> Self {
        self.tree = self.tree.flower_fraction(flower);
        self
    }

    /// Orients every edge from parent to child
    pub fn directed(mut self, directed: bool) -> Self {
        self.tree = self.tree.directed(directed);
        self
    }

    /// See [`Tree::father`]
    pub fn father<G: FatherGen>(self, father: G) -> Forest<Wg, G> {
        Forest {
            tree: self.tree.father(father),
            trees: self.trees,
        }
    }
}

impl<Wg, Fg> NumNodesGen for Forest<Wg, Fg> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.tree.set_nodes(n);
    }
}

impl<Wg, Fg> WeightedGen for Forest<Wg, Fg> {
    type With<V: WeightGen> = Forest<V, Fg>;

    fn weights<V: WeightGen>(self, weights: V) -> Forest<V, Fg> {
        Forest {
            tree: self.tree.weights(weights),
            trees: self.trees,
        }
    }
}

impl<Wg, Fg> GraphGenerator for Forest<Wg, Fg>
where
    Wg: WeightGen,
    Fg: FatherGen,
{
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        let n = self.tree.node_count();
        check_nodes("forest", n)?;
        if !(1..=n).contains(&self.trees) {
            return Err(GenError::TreeCount {
                trees: self.trees,
                nodes: n,
            });
        }
        let split = self.tree.edge_split()?;
        self.tree.validate_weights()?;

        let tree = self.tree.build(rng, split);
        let tree_edges = tree.iterate_edges().collect_vec();

        let mut forest = Graph::new(n, tree.is_directed());
        let keep = (n - self.trees) as usize;
        for i in index::sample(rng, tree_edges.len(), keep) {
            let e = tree_edges[i];
            forest.add_edge(e.start, e.end, e.weight.clone());
        }

        debug!(nodes = n, trees = self.trees, "generated forest");
        Ok(forest)
    }
}
