/*!
# Graph Generators

This module provides a suite of builder-style generators that fabricate random graphs with
guaranteed structural properties.

The typical usage workflow is:

1. Create a generator instance (e.g., `Tree::new()`).
2. Set parameters using setters (e.g., `.nodes(n).chain_fraction(0.3)`).
3. Generate a [`Graph`] via [`GraphGenerator::generate`].

All options are validated before any randomness is consumed: an invalid or infeasible
configuration fails with a [`GenError`] and leaves the random source untouched.

Supported models include:
- [`Tree`]: random trees with tunable chain/flower shares (and the `chain`/`flower` shortcuts)
- [`BinaryTree`]: random binary trees with tunable left/right bias
- [`Forest`]: a tree with random edges removed to obtain a fixed number of components
- [`RandomGraph`]: uniformly sampled edges with optional self-loops and repeated edges
- [`Dag`] / [`Udag`] / [`Connected`]: connected graphs built on a random spanning tree
- [`HackSpfa`]: a fixed adversarial grid-like construction against SPFA
- [`Components`]: several random graphs merged into one disjoint union

# Randomness

Every generator draws from the `rng` handed to `generate`. Driving a sequence of generator
calls with one seeded source reproduces the exact same graphs as long as the calls are made
in the same order; there is no per-call reseeding. Sharing one source between threads
without external synchronization interleaves draws and breaks reproducibility.

# Example
```
use fabgraph::{prelude::*, gens::*, rng::seeded};

let rng = &mut seeded(42);
let tree = Tree::new().nodes(10).chain_fraction(0.5).generate(rng).unwrap();
assert_eq!(tree.edge_count(), 9);
```
*/

use rand::Rng;
use rand_distr::Uniform;

use crate::{
    error::{GenError, Result},
    prelude::*,
};

mod binary_tree;
mod components;
mod connected;
mod forest;
mod random;
mod sampler;
mod spfa;
mod strategy;
mod tree;

pub use binary_tree::*;
pub use components::*;
pub use connected::*;
pub use forest::*;
pub use random::*;
pub use spfa::*;
pub use strategy::*;
pub use tree::*;

pub(crate) use sampler::EdgeSampler;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// Trait for generators whose weight strategy can be replaced.
///
/// Replacing the strategy changes the type of the generator (and the weight type of the
/// generated graph), so misconfigurations are caught at compile time.
pub trait WeightedGen: Sized {
    /// The same generator using weight strategy `V`
    type With<V: WeightGen>;

    /// Replaces the weight strategy.
    fn weights<V: WeightGen>(self, weights: V) -> Self::With<V>;

    /// Draws weights uniformly from the inclusive range `min..=max`.
    fn weight_limit<W>(self, min: W, max: W) -> Self::With<UniformWeight<W>>
    where
        UniformWeight<W>: WeightGen,
    {
        self.weights(UniformWeight::new(min, max))
    }
}

/// General trait for a configured graph generator.
pub trait GraphGenerator {
    /// Weight type of the generated graph
    type Weight;

    /// Generates a random graph.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or infeasible. In this case no
    /// randomness has been drawn from `rng`.
    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Self::Weight>>
    where
        R: Rng;
}

/// Returns the maximum number of distinct edges a graph with `n` vertices can hold.
///
/// Pairs are ordered if `directed`, unordered otherwise; self-loops add `n` if allowed.
pub const fn max_edges(n: NumNodes, directed: bool, self_loop: bool) -> NumEdges {
    let n = n as NumEdges;
    let mut max = n * n.saturating_sub(1);
    if !directed {
        max /= 2;
    }
    if self_loop {
        max += n;
    }
    max
}

/// Fails with [`GenError::TooManyEdges`] if `m` edges cannot be sampled.
///
/// Without repeated edges the bound is [`max_edges`]; with repeated edges any positive number
/// of edges is feasible as long as at least one valid pair exists.
pub(crate) fn check_edge_budget(
    n: NumNodes,
    m: NumEdges,
    directed: bool,
    self_loop: bool,
    repeated_edges: bool,
) -> Result<()> {
    let max = max_edges(n, directed, self_loop);
    let feasible = if repeated_edges { m == 0 || max > 0 } else { m <= max };
    if feasible {
        Ok(())
    } else {
        Err(GenError::TooManyEdges {
            nodes: n,
            requested: m,
            max: if repeated_edges { 0 } else { max },
        })
    }
}

/// Fails with [`GenError::NoNodes`] if `n == 0`
pub(crate) fn check_nodes(generator: &'static str, n: NumNodes) -> Result<()> {
    if n == 0 {
        Err(GenError::NoNodes { generator })
    } else {
        Ok(())
    }
}

/// Uniform distribution over the vertex ids `1..=n`
pub(crate) fn node_distribution(generator: &'static str, n: NumNodes) -> Result<Uniform<Node>> {
    Uniform::new_inclusive(1, n).map_err(|_| GenError::NoNodes { generator })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn edge_bounds() {
        assert_eq!(max_edges(0, true, true), 0);
        assert_eq!(max_edges(1, false, false), 0);
        assert_eq!(max_edges(1, false, true), 1);
        assert_eq!(max_edges(5, false, false), 10);
        assert_eq!(max_edges(5, false, true), 15);
        assert_eq!(max_edges(5, true, false), 20);
        assert_eq!(max_edges(5, true, true), 25);
        assert_eq!(max_edges(100_000, true, false), 9_999_900_000);
    }

    #[test]
    fn budgets() {
        assert!(check_edge_budget(5, 10, false, false, false).is_ok());
        assert!(check_edge_budget(5, 11, false, false, false).is_err());
        assert!(check_edge_budget(5, 1000, false, false, true).is_ok());
        assert!(check_edge_budget(1, 0, false, false, true).is_ok());

        let err = check_edge_budget(1, 3, true, false, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Infeasible);
    }
}
