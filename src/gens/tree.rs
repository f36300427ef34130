/*!
# Random Trees

[`Tree`] generates a tree on the vertices `1..=n` whose `n - 1` edges are split into three
groups:
- `floor((n - 1) * chain)` edges forming the path `1 - 2 - 3 - ...`,
- `floor((n - 1) * flower)` edges attaching the following vertices directly to vertex `1`,
- the remaining vertices `i` are attached to `father(i)`, by default a uniformly random
  vertex with smaller id.

Every vertex `2..=n` receives exactly one edge to a smaller vertex, hence the result is
always connected and acyclic. In directed mode edges point from parent to child.

# Example
```
use fabgraph::{prelude::*, gens::*, rng::seeded};

let rng = &mut seeded(0);
let path = Tree::chain().nodes(5).generate(rng).unwrap();
assert_eq!(path.to_str(Edge::unweighted), "1 2\n2 3\n3 4\n4 5");
```
*/

use rand::Rng;
use tracing::debug;

use super::*;
use crate::utils::check_probability_pair;

/// Generator for random trees with tunable chain and flower shares
#[derive(Debug, Clone)]
pub struct Tree<Wg = UniformWeight, Fg = UniformFather> {
    n: NumNodes,
    chain: f64,
    flower: f64,
    directed: bool,
    weights: Wg,
    father: Fg,
}

impl Default for Tree {
    fn default() -> Self {
        Self {
            n: 0,
            chain: 0.0,
            flower: 0.0,
            directed: false,
            weights: UniformWeight::default(),
            father: UniformFather,
        }
    }
}

impl Tree {
    /// Creates a new tree generator with purely random parents
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator for the path `1 - 2 - ... - n`
    pub fn chain() -> Self {
        Self::default().chain_fraction(1.0)
    }

    /// Creates a generator for the star with center `1`
    pub fn flower() -> Self {
        Self::default().flower_fraction(1.0)
    }
}

impl<Wg, Fg> Tree<Wg, Fg> {
    /// Sets the share of edges forming a path starting at vertex `1`
    pub fn chain_fraction(mut self, chain: f64) -> Self {
        self.chain = chain;
        self
    }

    /// Sets the share of edges attached directly to vertex `1`
    pub fn flower_fraction(mut self, flower: f64) -> Self {
        self.flower = flower;
        self
    }

    /// Orients edges from parent to child
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Replaces the strategy that picks parents of randomly attached vertices
    pub fn father<G: FatherGen>(self, father: G) -> Tree<Wg, G> {
        Tree {
            n: self.n,
            chain: self.chain,
            flower: self.flower,
            directed: self.directed,
            weights: self.weights,
            father,
        }
    }

    /// Returns the number of path, star and randomly attached edges.
    ///
    /// # Errors
    /// Fails if `n == 0` or the fractions are invalid.
    pub fn edge_split(&self) -> Result<(NumNodes, NumNodes, NumNodes)> {
        check_nodes("tree", self.n)?;
        check_probability_pair(("chain", self.chain), ("flower", self.flower))?;
        Ok(split_tree_edges(self.n, self.chain, self.flower))
    }

    pub(crate) fn node_count(&self) -> NumNodes {
        self.n
    }
}

impl<Wg, Fg> Tree<Wg, Fg>
where
    Wg: WeightGen,
    Fg: FatherGen,
{
    /// Builds the tree of an already validated configuration
    pub(crate) fn build<R: Rng>(
        &mut self,
        rng: &mut R,
        split: (NumNodes, NumNodes, NumNodes),
    ) -> Graph<Wg::Weight> {
        build_tree(
            rng,
            self.n,
            split,
            self.directed,
            &mut self.weights,
            &mut self.father,
        )
    }

    /// Checks the weight strategy without drawing randomness
    pub(crate) fn validate_weights(&self) -> Result<()> {
        self.weights.validate()
    }
}

impl<Wg, Fg> NumNodesGen for Tree<Wg, Fg> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<Wg, Fg> WeightedGen for Tree<Wg, Fg> {
    type With<V: WeightGen> = Tree<V, Fg>;

    fn weights<V: WeightGen>(self, weights: V) -> Tree<V, Fg> {
        Tree {
            n: self.n,
            chain: self.chain,
            flower: self.flower,
            directed: self.directed,
            weights,
            father: self.father,
        }
    }
}

impl<Wg, Fg> GraphGenerator for Tree<Wg, Fg>
where
    Wg: WeightGen,
    Fg: FatherGen,
{
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        let split = self.edge_split()?;
        self.validate_weights()?;

        let graph = self.build(rng, split);
        debug!(
            nodes = self.n,
            chain = split.0,
            flower = split.1,
            random = split.2,
            "generated tree"
        );
        Ok(graph)
    }
}

/// Splits the `n - 1` tree edges into `(chain, flower, random)` counts
pub(crate) fn split_tree_edges(
    n: NumNodes,
    chain: f64,
    flower: f64,
) -> (NumNodes, NumNodes, NumNodes) {
    let total = n - 1;
    let chain_count = ((total as f64 * chain) as NumNodes).min(total);
    let flower_count = ((total as f64 * flower) as NumNodes).min(total - chain_count);
    (chain_count, flower_count, total - chain_count - flower_count)
}

/// Builds a tree from an already validated edge split.
///
/// Randomness is drawn in edge order; for randomly attached vertices the father is drawn
/// before the weight.
pub(crate) fn build_tree<R, Wg, Fg>(
    rng: &mut R,
    n: NumNodes,
    (chain_count, flower_count, _): (NumNodes, NumNodes, NumNodes),
    directed: bool,
    weights: &mut Wg,
    father: &mut Fg,
) -> Graph<Wg::Weight>
where
    R: Rng,
    Wg: WeightGen,
    Fg: FatherGen,
{
    let mut graph = Graph::new(n, directed);

    let chain_end = chain_count + 1;
    let flower_end = chain_end + flower_count;

    for i in 2..=chain_end {
        graph.add_edge(i - 1, i, weights.gen_weight(rng));
    }
    for i in (chain_end + 1)..=flower_end {
        graph.add_edge(1, i, weights.gen_weight(rng));
    }
    for i in (flower_end + 1)..=n {
        let u = father.father_of(rng, i);
        graph.add_edge(u, i, weights.gen_weight(rng));
    }

    graph
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{error::ErrorKind, testing::*};

    #[test]
    fn chain_is_a_path() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let tree = Tree::new()
            .nodes(5)
            .chain_fraction(1.0)
            .flower_fraction(0.0)
            .generate(rng)
            .unwrap();

        assert_eq!(
            tree.iterate_edges().copied().collect_vec(),
            vec![
                Edge::new(1, 2, 1),
                Edge::new(2, 3, 1),
                Edge::new(3, 4, 1),
                Edge::new(4, 5, 1)
            ]
        );
    }

    #[test]
    fn flower_is_a_star() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let tree = Tree::flower().nodes(6).generate(rng).unwrap();

        assert_eq!(tree.degree_of(1), 5);
        assert!(tree.iterate_edges().all(|e| e.start == 1));
    }

    #[test]
    fn tree_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 3, 10, 57, 200] {
            for (chain, flower) in [(0.0, 0.0), (0.3, 0.3), (1.0, 0.0), (0.0, 1.0), (0.5, 0.5), (0.1, 0.7)] {
                for directed in [false, true] {
                    let tree = Tree::new()
                        .nodes(n)
                        .chain_fraction(chain)
                        .flower_fraction(flower)
                        .directed(directed)
                        .generate(rng)
                        .unwrap();

                    assert_eq!(tree.edge_count(), (n - 1) as NumEdges);
                    assert_eq!(number_of_components(&tree), 1);
                    assert!(tree.iterate_edges().all(|e| e.start < e.end));
                }
            }
        }
    }

    #[test]
    fn edge_split() {
        assert_eq!(split_tree_edges(11, 0.3, 0.5), (3, 5, 2));
        assert_eq!(split_tree_edges(11, 1.0, 0.0), (10, 0, 0));
        assert_eq!(split_tree_edges(1, 0.5, 0.5), (0, 0, 0));
        assert_eq!(split_tree_edges(4, 0.7, 0.3), (2, 0, 1));
    }

    #[test]
    fn weights_and_fathers() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let tree = Tree::new()
            .nodes(50)
            .weight_limit(10, 20)
            .father(FnFather(|_| 1))
            .generate(rng)
            .unwrap();

        assert!(tree.iterate_edges().all(|e| e.start == 1));
        assert!(tree.iterate_edges().all(|e| (10..=20).contains(&e.weight)));
    }

    #[test]
    fn invalid_configuration() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for (chain, flower) in [(-0.1, 0.0), (0.0, 1.5), (0.6, 0.6)] {
            let err = Tree::new()
                .nodes(10)
                .chain_fraction(chain)
                .flower_fraction(flower)
                .generate(rng)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }

        assert!(matches!(
            Tree::new().generate(rng),
            Err(GenError::NoNodes { .. })
        ));
        assert!(matches!(
            Tree::new().nodes(3).weight_limit(3, 1).generate(rng),
            Err(GenError::InvalidWeightRange(_))
        ));
    }

    #[test]
    fn failures_draw_no_randomness() {
        let mut used = Pcg64Mcg::seed_from_u64(9);
        let fresh = Pcg64Mcg::seed_from_u64(9);

        assert!(Tree::new().nodes(10).chain_fraction(2.0).generate(&mut used).is_err());
        assert_eq!(used, fresh);
    }
}
