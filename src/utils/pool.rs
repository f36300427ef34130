//! Unordered pool supporting `O(1)` removal of a uniformly random element.

use rand::Rng;

/// An unordered multiset of candidates.
///
/// Removal swaps the chosen slot with the last element and pops, so the relative order of
/// the remaining candidates changes but every removal costs `O(1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool<T> {
    items: Vec<T>,
}

impl<T> CandidatePool<T> {
    /// Creates an empty pool
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a pool holding the given candidates
    pub fn from_candidates<I: IntoIterator<Item = T>>(candidates: I) -> Self {
        Self {
            items: candidates.into_iter().collect(),
        }
    }

    /// Adds a candidate
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the number of candidates
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if there are no candidates left
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the candidates in their current (arbitrary) order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes the candidate at `index`, moving the last candidate into its place.
    /// ** Panics if `index >= len` **
    pub fn swap_take(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    /// Removes and returns a uniformly random candidate, or `None` if the pool is empty
    pub fn take_random<R: Rng>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.items.len());
        Some(self.swap_take(index))
    }
}
