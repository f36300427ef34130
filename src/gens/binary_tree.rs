use rand::Rng;
use tracing::debug;

use super::*;
use crate::utils::{CandidatePool, check_probability_pair};

/// Generator for random binary trees.
///
/// Every vertex accepts at most one left and one right child. Vertex `i` is attached as a
/// left child with probability `left`, as a right child with probability `right`; the
/// remaining mass `1 - left - right` is split evenly between both sides.
///
/// Each side keeps its own pool of vertices with a free slot on that side. Both pools start
/// with the root `1`; a new vertex joins both pools and the chosen parent only leaves the
/// pool of the side it was used on.
#[derive(Debug, Clone)]
pub struct BinaryTree<Wg = UniformWeight> {
    n: NumNodes,
    left: f64,
    right: f64,
    directed: bool,
    weights: Wg,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self {
            n: 0,
            left: 0.0,
            right: 0.0,
            directed: false,
            weights: UniformWeight::default(),
        }
    }
}

impl BinaryTree {
    /// Creates a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Wg> BinaryTree<Wg> {
    /// Sets the probability of attaching a vertex as a left child
    pub fn left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    /// Sets the probability of attaching a vertex as a right child
    pub fn right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }

    /// Orients edges from parent to child
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns *true* if a draw `p` in `[0, 1)` routes to the left pool
    fn goes_left(&self, p: f64) -> bool {
        let sided = self.left + self.right;
        if p < self.left {
            true
        } else if p < sided {
            false
        } else {
            p < sided + (1.0 - sided) / 2.0
        }
    }
}

impl<Wg> NumNodesGen for BinaryTree<Wg> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<Wg> WeightedGen for BinaryTree<Wg> {
    type With<V: WeightGen> = BinaryTree<V>;

    fn weights<V: WeightGen>(self, weights: V) -> BinaryTree<V> {
        BinaryTree {
            n: self.n,
            left: self.left,
            right: self.right,
            directed: self.directed,
            weights,
        }
    }
}

impl<Wg: WeightGen> GraphGenerator for BinaryTree<Wg> {
    type Weight = Wg::Weight;

    fn generate<R>(&mut self, rng: &mut R) -> Result<Graph<Wg::Weight>>
    where
        R: Rng,
    {
        check_nodes("binary tree", self.n)?;
        check_probability_pair(("left", self.left), ("right", self.right))?;
        self.weights.validate()?;

        let mut graph = Graph::new(self.n, self.directed);
        let mut left_pool = CandidatePool::from_candidates([1]);
        let mut right_pool = CandidatePool::from_candidates([1]);
        let mut left_children = 0;

        for i in 2..=self.n {
            let pool = if self.goes_left(rng.random::<f64>()) {
                left_children += 1;
                &mut left_pool
            } else {
                &mut right_pool
            };

            // every step pushes one vertex into both pools and takes one out of one, so
            // neither pool ever runs dry
            let parent = pool.swap_take(rng.random_range(0..pool.len()));
            graph.add_edge(parent, i, self.weights.gen_weight(rng));

            left_pool.push(i);
            right_pool.push(i);
        }

        debug!(
            nodes = self.n,
            left_children,
            right_children = self.n - 1 - left_children,
            "generated binary tree"
        );
        Ok(graph)
    }
}
