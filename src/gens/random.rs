use rand::Rng;
use tracing::{debug, trace};

use super::*;
use crate::utils::EdgeSet;

/// Generator for graphs with `m` uniformly sampled edges.
///
/// Endpoints are drawn uniformly from `1..=n`; pairs forming a forbidden self-loop or a
/// forbidden repetition are redrawn. Without repeated edges the number of requested edges is
/// checked against [`max_edges`] beforehand, so the rejection loop always terminates.
///
/// Defaults: undirected, self-loops and repeated edges allowed.
#[derive(Debug, Clone)]
pub struct RandomGraph<Wg = UniformWeight> {
    n: NumNodes,
    m: NumEdges,
    self_loop: bool,
    repeated_edges: bool,
    directed: bool,
    weights: Wg,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            self_loop: true,
            repeated_edges: true,
            directed: false,
            weights: UniformWeight::default(),
        }
    }
}

impl RandomGraph {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> RandomGraph<Wg> {
    /// Allows edges `(u, u)`
    pub fn self_loop(mut self, self_loop: bool) -> Self {
        self.self_loop = self_loop;
        self
    }

    /// Allows the same pair to be sampled multiple times
    pub fn repeated_edges(mut self, repeated_edges: bool) -> Self {
        self.repeated_edges = repeated_edges;
        self
    }

    /// Orients edges from the first to the second sampled endpoint
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Checks the configuration without drawing randomness.
    ///
    /// # Errors
    /// Fails if `n == 0`, the weight strategy is invalid, or `m` edges cannot be sampled.
    pub fn validate(&self) -> Result<()>
    where
        Wg: WeightGen,
    {
        check_nodes("random graph", self.n)?;
        check_edge_budget(
            self.n,
            self.m,
            self.directed,
            self.self_loop,
            self.repeated_edges,
        )?;
        self.weights.validate()
    }

    pub(crate) fn node_count(&self) -> NumNodes {
        self.n
    }

    /// Samples the edges of an already validated configuration
    pub(crate) fn build<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
        Wg: WeightGen,
    {
        let nodes = node_distribution("random graph", self.n)?;
        let used = (!self.repeated_edges)
            .then(|| EdgeSet::with_capacity(self.directed, self.m as usize));
        let mut sampler = EdgeSampler::new(nodes, self.self_loop, used);

        let mut graph = Graph::new(self.n, self.directed);
        for _ in 0..self.m {
            let (u, v) = sampler.sample(rng);
            graph.add_edge(u, v, self.weights.gen_weight(rng));
        }

        trace!(rejected = sampler.rejected(), "random graph sampling done");
        Ok(graph)
    }
}

impl<Wg> NumNodesGen for RandomGraph<Wg> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<Wg> NumEdgesGen for RandomGraph<Wg> {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl<Wg> WeightedGen for RandomGraph<Wg> {
    type With<V: WeightGen> = RandomGraph<V>;

    fn weights<V: WeightGen>(self, weights: V) -> RandomGraph<V> {
        RandomGraph {
            n: self.n,
            m: self.m,
            self_loop: self.self_loop,
            repeated_edges: self.repeated_edges,
            directed: self.directed,
            weights,
        }
    }
}

impl<Wg: WeightGen> GraphGenerator for RandomGraph<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        self.validate()?;
        let graph = self.build(rng)?;
        debug!(
            nodes = self.n,
            edges = self.m,
            directed = self.directed,
            "generated random graph"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{error::ErrorKind, testing::*};

    #[test]
    fn edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 10, 100] {
            for m in [0 as NumEdges, 1, 10, 500] {
                for directed in [false, true] {
                    let g = RandomGraph::new()
                        .nodes(n)
                        .edges(m)
                        .directed(directed)
                        .weight_limit(1, 100)
                        .generate(rng)
                        .unwrap();

                    assert_eq!(g.iterate_edges().count() as NumEdges, m);
                    assert!(g.iterate_edges().all(|e| (1..=100).contains(&e.weight)));
                }
            }
        }
    }

    #[test]
    fn no_self_loops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for directed in [false, true] {
            let g = RandomGraph::new()
                .nodes(5)
                .edges(200)
                .self_loop(false)
                .directed(directed)
                .generate(rng)
                .unwrap();

            assert!(g.iterate_edges().all(|e| !e.is_loop()));
            assert_eq!(g.edge_count(), 200);
        }
    }

    #[test]
    fn no_repeated_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for (n, directed, self_loop) in [(6, false, false), (6, true, false), (6, false, true), (6, true, true)] {
            let max = max_edges(n, directed, self_loop);
            let g = RandomGraph::new()
                .nodes(n)
                .edges(max)
                .directed(directed)
                .self_loop(self_loop)
                .repeated_edges(false)
                .generate(rng)
                .unwrap();

            assert_eq!(g.iterate_edges().count() as NumEdges, max);
            assert!(has_no_repeated_pairs(&g));
            assert_eq!(g.iterate_edges().any(|e| e.is_loop()), self_loop);
        }
    }

    #[test]
    fn infeasible_budget_fails_before_drawing() {
        for seed in 0..5 {
            let mut used = Pcg64Mcg::seed_from_u64(seed);
            let fresh = used.clone();

            let err = RandomGraph::new()
                .nodes(4)
                .edges(7)
                .self_loop(false)
                .repeated_edges(false)
                .generate(&mut used)
                .unwrap_err();

            assert!(matches!(err, GenError::TooManyEdges { max: 6, requested: 7, .. }));
            assert_eq!(err.kind(), ErrorKind::Infeasible);
            assert_eq!(used, fresh);
        }
    }

    #[test]
    fn single_node_without_loops() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);

        let empty = RandomGraph::new().nodes(1).self_loop(false).generate(rng).unwrap();
        assert!(empty.is_singleton());

        assert!(matches!(
            RandomGraph::new().nodes(1).edges(1).self_loop(false).generate(rng),
            Err(GenError::TooManyEdges { .. })
        ));
        assert!(matches!(
            RandomGraph::new().edges(1).generate(rng),
            Err(GenError::NoNodes { .. })
        ));
    }
}
