use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{Node, utils::EdgeSet};

/// Rejection sampler for random endpoint pairs.
///
/// Pairs are drawn uniformly from `1..=n` and redrawn whenever they form a forbidden self-loop
/// or (if repeated edges are disallowed) were generated before. Callers must ensure that at
/// least one admissible pair remains, otherwise sampling does not terminate.
pub(crate) struct EdgeSampler {
    nodes: Uniform<Node>,
    self_loop: bool,
    normalize: bool,
    used: Option<EdgeSet>,
    rejected: u64,
}

impl EdgeSampler {
    /// `used` tracks already generated pairs; pass `None` to allow repeated edges
    pub(crate) fn new(nodes: Uniform<Node>, self_loop: bool, used: Option<EdgeSet>) -> Self {
        Self {
            nodes,
            self_loop,
            normalize: false,
            used,
            rejected: 0,
        }
    }

    /// Reorders every drawn pair such that `u <= v`
    pub(crate) fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Marks a pair as used without sampling it
    pub(crate) fn mark_used(&mut self, u: Node, v: Node) {
        if let Some(used) = self.used.as_mut() {
            used.insert(u, v);
        }
    }

    /// Number of pairs redrawn so far
    pub(crate) fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Draws the next admissible pair and marks it as used
    pub(crate) fn sample<R: Rng>(&mut self, rng: &mut R) -> (Node, Node) {
        loop {
            let mut u = self.nodes.sample(rng);
            let mut v = self.nodes.sample(rng);

            if self.normalize && u > v {
                std::mem::swap(&mut u, &mut v);
            }

            if (!self.self_loop && u == v)
                || self.used.as_ref().is_some_and(|used| used.contains(u, v))
            {
                self.rejected += 1;
                continue;
            }

            self.mark_used(u, v);
            return (u, v);
        }
    }
}
