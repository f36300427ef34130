/*!
# Utilities

Provides a couple of helper traits/structs used by the generators:
- [`Probability`] to validate probability-like options,
- [`CandidatePool`](pool::CandidatePool), an unordered pool with `O(1)` uniform random removal,
- [`EdgeSet`](edge_set::EdgeSet), the bookkeeping for rejection sampling without repeated edges.
*/

use num::{One, Zero};

pub mod edge_set;
pub mod pool;

pub use edge_set::EdgeSet;
pub use pool::CandidatePool;

use crate::error::{GenError, Result};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Checks that `value` is in `[0, 1]`
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if value.is_valid_probability() {
        Ok(())
    } else {
        Err(GenError::InvalidProbability { name, value })
    }
}

/// Checks that both values are in `[0, 1]` and their sum does not exceed `1`
pub(crate) fn check_probability_pair(
    (first, a): (&'static str, f64),
    (second, b): (&'static str, f64),
) -> Result<()> {
    check_probability(first, a)?;
    check_probability(second, b)?;
    if a + b > 1.0 {
        return Err(GenError::ProbabilitySum {
            first,
            second,
            sum: a + b,
        });
    }
    Ok(())
}
