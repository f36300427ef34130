/*!
# Weight and Father Strategies

Generators delegate two decisions to injectable strategies with fixed signatures:
- a [`WeightGen`] produces the weight of every edge that is added,
- a [`FatherGen`] picks the parent of vertex `cur` when a tree attaches it randomly.

Both are called in the order the edges are created, so they consume randomness from the same
source as the generator itself.

```
use fabgraph::{prelude::*, gens::*, rng::seeded};

let rng = &mut seeded(1);
let mut next = 0;
let tree = Tree::new()
    .nodes(4)
    .weights(FnWeight(move || { next += 1; next }))
    .father(FnFather(|cur| cur - 1))
    .generate(rng)
    .unwrap();

assert_eq!(tree.to_string(), "1 2 1\n2 3 2\n3 4 3");
```
*/

use std::fmt::Debug;

use rand::{
    Rng,
    distr::uniform::{SampleRange, SampleUniform},
};
use rand_distr::Uniform;

use crate::{
    error::{GenError, Result},
    prelude::*,
};

/// Strategy producing edge weights
pub trait WeightGen {
    /// Type of the produced weights
    type Weight: Clone;

    /// Checks the strategy before any weight is drawn.
    ///
    /// # Errors
    /// Returns an error if the strategy cannot produce weights.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Produces the weight of the next edge
    fn gen_weight<R: Rng>(&mut self, rng: &mut R) -> Self::Weight;
}

/// Draws weights uniformly from an inclusive range; defaults to `(1, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformWeight<W = i64> {
    min: W,
    max: W,
}

impl<W> UniformWeight<W> {
    /// Weights are drawn from `min..=max`
    pub const fn new(min: W, max: W) -> Self {
        Self { min, max }
    }

    /// Weights are drawn from `1..=max`
    pub fn up_to(max: W) -> Self
    where
        W: num::One,
    {
        Self::new(W::one(), max)
    }
}

impl Default for UniformWeight<i64> {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl<W> WeightGen for UniformWeight<W>
where
    W: SampleUniform + PartialOrd + Clone + Debug,
{
    type Weight = W;

    fn validate(&self) -> Result<()> {
        Uniform::<W>::new_inclusive(self.min.clone(), self.max.clone())
            .map(|_| ())
            .map_err(|e| {
                GenError::InvalidWeightRange(format!("({:?}, {:?}): {e}", self.min, self.max))
            })
    }

    fn gen_weight<R: Rng>(&mut self, rng: &mut R) -> W {
        let range = self.min.clone()..=self.max.clone();
        debug_assert!(!SampleRange::<W>::is_empty(&range));
        rng.random_range(range)
    }
}

/// Assigns the same weight to every edge without drawing randomness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstWeight<W>(pub W);

impl<W: Clone> WeightGen for ConstWeight<W> {
    type Weight = W;

    fn gen_weight<R: Rng>(&mut self, _rng: &mut R) -> W {
        self.0.clone()
    }
}

/// Wraps a caller-supplied closure `() -> W`.
///
/// The closure owns its own state (and randomness if needed); it does not see the
/// generator's random source.
#[derive(Clone, Copy)]
pub struct FnWeight<F>(pub F);

impl<F, W> WeightGen for FnWeight<F>
where
    F: FnMut() -> W,
    W: Clone,
{
    type Weight = W;

    fn gen_weight<R: Rng>(&mut self, _rng: &mut R) -> W {
        (self.0)()
    }
}

/// Strategy choosing the parent of vertex `cur` in a tree.
///
/// Implementations must return a vertex in `1..cur` for the result to be a tree.
pub trait FatherGen {
    /// Returns the parent of `cur`
    fn father_of<R: Rng>(&mut self, rng: &mut R, cur: Node) -> Node;
}

/// Picks the parent uniformly from all vertices with smaller id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformFather;

impl FatherGen for UniformFather {
    fn father_of<R: Rng>(&mut self, rng: &mut R, cur: Node) -> Node {
        debug_assert!(cur > 1);
        rng.random_range(1..cur)
    }
}

/// Wraps a caller-supplied closure `(cur) -> parent`
#[derive(Clone, Copy)]
pub struct FnFather<F>(pub F);

impl<F> FatherGen for FnFather<F>
where
    F: FnMut(Node) -> Node,
{
    fn father_of<R: Rng>(&mut self, _rng: &mut R, cur: Node) -> Node {
        let father = (self.0)(cur);
        debug_assert!((1..cur).contains(&father), "father of {cur} must be in 1..{cur}");
        father
    }
}
