/*!
# Connected Graphs

All generators in this module first build a random spanning tree on `1..=n` (using the
configured weight strategy) and then add `m - (n - 1)` uniformly sampled extra edges, so the
result is connected and has exactly `m` edges.

- [`Dag`] reorients the tree edges. Without `loop_edges` every edge (including the extra ones)
  points from the smaller to the larger vertex, hence the graph is acyclic; with `loop_edges`
  each tree edge is flipped with probability `1/2` and extra edges keep their drawn
  orientation.
- [`Udag`] keeps everything undirected.
- [`Connected`] dispatches to either of them.
*/

use rand::Rng;
use tracing::{debug, trace};

use super::*;
use super::tree::build_tree;
use crate::{error::raise_error_unless, utils::EdgeSet};

/// Generator for connected directed graphs; acyclic unless `loop_edges` is set.
///
/// Defaults: no self-loops, repeated edges allowed, no cycles.
#[derive(Debug, Clone)]
pub struct Dag<Wg = UniformWeight> {
    n: NumNodes,
    m: NumEdges,
    self_loop: bool,
    repeated_edges: bool,
    loop_edges: bool,
    weights: Wg,
}

impl Default for Dag {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            self_loop: false,
            repeated_edges: true,
            loop_edges: false,
            weights: UniformWeight::default(),
        }
    }
}

impl Dag {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> Dag<Wg> {
    /// Allows extra edges `(u, u)`
    pub fn self_loop(mut self, self_loop: bool) -> Self {
        self.self_loop = self_loop;
        self
    }

    /// Allows the same ordered pair multiple times
    pub fn repeated_edges(mut self, repeated_edges: bool) -> Self {
        self.repeated_edges = repeated_edges;
        self
    }

    /// Allows edges from larger to smaller vertices (and thus directed cycles)
    pub fn loop_edges(mut self, loop_edges: bool) -> Self {
        self.loop_edges = loop_edges;
        self
    }
}

/// Generator for connected undirected graphs.
///
/// Defaults: self-loops and repeated edges allowed.
#[derive(Debug, Clone)]
pub struct Udag<Wg = UniformWeight> {
    n: NumNodes,
    m: NumEdges,
    self_loop: bool,
    repeated_edges: bool,
    weights: Wg,
}

impl Default for Udag {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            self_loop: true,
            repeated_edges: true,
            weights: UniformWeight::default(),
        }
    }
}

impl Udag {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> Udag<Wg> {
    /// Allows extra edges `(u, u)`
    pub fn self_loop(mut self, self_loop: bool) -> Self {
        self.self_loop = self_loop;
        self
    }

    /// Allows the same unordered pair multiple times
    pub fn repeated_edges(mut self, repeated_edges: bool) -> Self {
        self.repeated_edges = repeated_edges;
        self
    }
}

/// Generator for connected graphs that behaves like [`Dag`] if directed and like [`Udag`]
/// otherwise.
///
/// Unless set explicitly, self-loops are allowed exactly for undirected graphs.
#[derive(Debug, Clone)]
pub struct Connected<Wg = UniformWeight> {
    n: NumNodes,
    m: NumEdges,
    directed: bool,
    self_loop: Option<bool>,
    repeated_edges: bool,
    loop_edges: bool,
    weights: Wg,
}

impl Default for Connected {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            directed: false,
            self_loop: None,
            repeated_edges: true,
            loop_edges: false,
            weights: UniformWeight::default(),
        }
    }
}

impl Connected {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> Connected<Wg> {
    /// Generates a DAG if *true* and an undirected connected graph otherwise
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Allows extra edges `(u, u)`; defaults to `!directed`
    pub fn self_loop(mut self, self_loop: bool) -> Self {
        self.self_loop = Some(self_loop);
        self
    }

    /// Allows the same pair to be sampled multiple times as an extra edge
    pub fn repeated_edges(mut self, repeated_edges: bool) -> Self {
        self.repeated_edges = repeated_edges;
        self
    }

    /// Only affects directed graphs, see [`Dag::loop_edges`]
    pub fn loop_edges(mut self, loop_edges: bool) -> Self {
        self.loop_edges = loop_edges;
        self
    }
}

macro_rules! impl_connected_builders {
    ($name:ident, $($field:ident),*) => {
        impl<Wg> NumNodesGen for $name<Wg> {
            fn set_nodes(&mut self, n: NumNodes) {
                self.n = n;
            }
        }

        impl<Wg> NumEdgesGen for $name<Wg> {
            fn set_edges(&mut self, m: NumEdges) {
                self.m = m;
            }
        }

        impl<Wg> WeightedGen for $name<Wg> {
            type With<V: WeightGen> = $name<V>;

            fn weights<V: WeightGen>(self, weights: V) -> $name<V> {
                $name {
                    n: self.n,
                    m: self.m,
                    $($field: self.$field,)*
                    weights,
                }
            }
        }
    };
}

impl_connected_builders!(Dag, self_loop, repeated_edges, loop_edges);
impl_connected_builders!(Udag, self_loop, repeated_edges);
impl_connected_builders!(Connected, directed, self_loop, repeated_edges, loop_edges);

impl<Wg: WeightGen> GraphGenerator for Dag<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        // extra edges are normalized without loop edges, so only unordered pairs count
        check_connected_budget(
            self.n,
            self.m,
            self.loop_edges,
            self.self_loop,
            self.repeated_edges,
        )?;
        self.weights.validate()?;

        build_dag(
            rng,
            self.n,
            self.m,
            self.self_loop,
            self.repeated_edges,
            self.loop_edges,
            &mut self.weights,
        )
    }
}

impl<Wg: WeightGen> GraphGenerator for Udag<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        check_connected_budget(
            self.n,
            self.m,
            false,
            self.self_loop,
            self.repeated_edges,
        )?;
        self.weights.validate()?;

        build_udag(
            rng,
            self.n,
            self.m,
            self.self_loop,
            self.repeated_edges,
            &mut self.weights,
        )
    }
}

impl<Wg: WeightGen> GraphGenerator for Connected<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        let self_loop = self.self_loop.unwrap_or(!self.directed);
        let ordered_pairs = self.directed && self.loop_edges;
        check_connected_budget(
            self.n,
            self.m,
            ordered_pairs,
            self_loop,
            self.repeated_edges,
        )?;
        self.weights.validate()?;

        if self.directed {
            build_dag(
                rng,
                self.n,
                self.m,
                self_loop,
                self.repeated_edges,
                self.loop_edges,
                &mut self.weights,
            )
        } else {
            build_udag(
                rng,
                self.n,
                self.m,
                self_loop,
                self.repeated_edges,
                &mut self.weights,
            )
        }
    }
}

/// Checks that `m` edges suffice for a spanning tree and can be sampled.
///
/// `ordered_pairs` selects whether distinct pairs are counted as ordered or unordered.
/// With repeated edges only the `m - (n - 1)` extra edges need an admissible pair.
fn check_connected_budget(
    n: NumNodes,
    m: NumEdges,
    ordered_pairs: bool,
    self_loop: bool,
    repeated_edges: bool,
) -> Result<()> {
    check_nodes("connected graph", n)?;

    let min = (n - 1) as NumEdges;
    raise_error_unless!(
        m >= min,
        GenError::TooFewEdges {
            nodes: n,
            requested: m,
            min,
        }
    );

    let sampled = if repeated_edges { m - min } else { m };
    check_edge_budget(n, sampled, ordered_pairs, self_loop, repeated_edges)
}

/// Builds an undirected random spanning tree with uniformly chosen parents
fn spanning_tree<R, Wg>(rng: &mut R, n: NumNodes, weights: &mut Wg) -> Graph<Wg::Weight>
where
    R: Rng,
    Wg: WeightGen,
{
    build_tree(rng, n, (0, 0, n - 1), false, weights, &mut UniformFather)
}

fn build_dag<R, Wg>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
    self_loop: bool,
    repeated_edges: bool,
    loop_edges: bool,
    weights: &mut Wg,
) -> Result<Graph<Wg::Weight>>
where
    R: Rng,
    Wg: WeightGen,
{
    let tree = spanning_tree(rng, n, weights);

    // pairs are normalized by hand if needed, so the bookkeeping is always ordered
    let used = (!repeated_edges).then(|| EdgeSet::with_capacity(true, m as usize));
    let mut sampler = EdgeSampler::new(node_distribution("dag", n)?, self_loop, used)
        .normalized(!loop_edges);

    let mut graph = Graph::new_directed(n);
    for e in tree.iterate_edges() {
        let (mut u, mut v) = e.endpoints();
        if loop_edges && rng.random_bool(0.5) {
            std::mem::swap(&mut u, &mut v);
        }
        graph.add_edge(u, v, e.weight.clone());
        sampler.mark_used(u, v);
    }

    for _ in (n - 1) as NumEdges..m {
        let (u, v) = sampler.sample(rng);
        graph.add_edge(u, v, weights.gen_weight(rng));
    }

    trace!(rejected = sampler.rejected(), "dag sampling done");
    debug!(nodes = n, edges = m, loop_edges, "generated dag");
    Ok(graph)
}

fn build_udag<R, Wg>(
    rng: &mut R,
    n: NumNodes,
    m: NumEdges,
    self_loop: bool,
    repeated_edges: bool,
    weights: &mut Wg,
) -> Result<Graph<Wg::Weight>>
where
    R: Rng,
    Wg: WeightGen,
{
    let mut graph = spanning_tree(rng, n, weights);

    let used = (!repeated_edges).then(|| EdgeSet::with_capacity(false, m as usize));
    let mut sampler = EdgeSampler::new(node_distribution("udag", n)?, self_loop, used);
    for e in graph.iterate_edges() {
        sampler.mark_used(e.start, e.end);
    }

    for _ in (n - 1) as NumEdges..m {
        let (u, v) = sampler.sample(rng);
        graph.add_edge(u, v, weights.gen_weight(rng));
    }

    trace!(rejected = sampler.rejected(), "udag sampling done");
    debug!(nodes = n, edges = m, "generated udag");
    Ok(graph)
}
