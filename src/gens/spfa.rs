use rand::Rng;
use rand_distr::Distribution;
use tracing::debug;

use super::*;

/// Fixed construction that drives SPFA-style shortest path solvers into their worst case.
///
/// The vertices are split into two halves of `h = n / 2` vertices each, both forming a path
/// (`i - i+1` and `i+h - i+h+1`), and every vertex `i` of the first half is cross-linked to
/// `i + h`. If `n` is odd, vertex `h + 2` is left out of the grid and all larger ids are
/// shifted up by one. Finally `extra_edges` uniformly random edges (self-loops included) are
/// added.
///
/// This is intentionally narrow: apart from weights and the extra edges the topology is
/// deterministic.
#[derive(Debug, Clone)]
pub struct HackSpfa<Wg = UniformWeight> {
    n: NumNodes,
    extra_edges: NumEdges,
    directed: bool,
    weights: Wg,
}

impl Default for HackSpfa {
    fn default() -> Self {
        Self {
            n: 0,
            extra_edges: 2,
            directed: false,
            weights: UniformWeight::default(),
        }
    }
}

impl HackSpfa {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> HackSpfa<Wg> {
    /// Sets the number of random edges added on top of the grid
    pub fn extra_edges(mut self, extra_edges: NumEdges) -> Self {
        self.extra_edges = extra_edges;
        self
    }

    /// Orients the fixed and extra edges
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl<Wg> NumNodesGen for HackSpfa<Wg> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<Wg> WeightedGen for HackSpfa<Wg> {
    type With<V: WeightGen> = HackSpfa<V>;

    fn weights<V: WeightGen>(self, weights: V) -> HackSpfa<V> {
        HackSpfa {
            n: self.n,
            extra_edges: self.extra_edges,
            directed: self.directed,
            weights,
        }
    }
}

impl<Wg: WeightGen> GraphGenerator for HackSpfa<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        let nodes = node_distribution("hack spfa", self.n)?;
        self.weights.validate()?;

        let half = self.n / 2;
        let skip = if self.n % 2 == 1 { half + 2 } else { Node::MAX };
        let shift = |x: Node| if x >= skip { x + 1 } else { x };

        let mut graph = Graph::new(self.n, self.directed);
        for i in 1..half {
            graph.add_edge(shift(i), shift(i + 1), self.weights.gen_weight(rng));
            graph.add_edge(
                shift(i + half),
                shift(i + half + 1),
                self.weights.gen_weight(rng),
            );
        }
        for i in 1..=half {
            graph.add_edge(shift(i), shift(i + half), self.weights.gen_weight(rng));
        }

        for _ in 0..self.extra_edges {
            let u = nodes.sample(rng);
            let v = nodes.sample(rng);
            graph.add_edge(u, v, self.weights.gen_weight(rng));
        }

        debug!(
            nodes = self.n,
            extra_edges = self.extra_edges,
            "generated spfa worst case"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    #[test]
    fn even_grid() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let g = HackSpfa::new().nodes(6).extra_edges(0).generate(rng).unwrap();

        assert_eq!(
            g.iterate_edges().map(|e| e.endpoints()).collect_vec(),
            vec![(1, 2), (1, 4), (2, 3), (2, 5), (3, 6), (4, 5), (5, 6)]
        );
    }

    #[test]
    fn odd_grid_skips_middle() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let g = HackSpfa::new()
            .nodes(7)
            .extra_edges(0)
            .directed(true)
            .generate(rng)
            .unwrap();

        assert_eq!(
            g.iterate_edges().map(|e| e.endpoints()).collect_vec(),
            vec![(1, 2), (1, 4), (2, 3), (2, 6), (3, 7), (4, 6), (6, 7)]
        );
        assert_eq!(g.degree_of(5), 0);
    }

    #[test]
    fn extra_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [1 as NumNodes, 2, 3, 10, 101] {
            for extra in [0, 2, 50] {
                let g = HackSpfa::new()
                    .nodes(n)
                    .extra_edges(extra)
                    .weight_limit(1, 1000)
                    .generate(rng)
                    .unwrap();

                let half = (n / 2) as NumEdges;
                let grid = 2 * half.saturating_sub(1) + half;
                assert_eq!(g.iterate_edges().count() as NumEdges, grid + extra);
                assert!(mirrors_are_consistent(&g));
            }
        }

        let even = HackSpfa::new().nodes(40).generate(rng).unwrap();
        assert_eq!(number_of_components(&even), 1);
    }

    #[test]
    fn no_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        assert!(matches!(
            HackSpfa::new().generate(rng),
            Err(GenError::NoNodes { .. })
        ));
    }
}
