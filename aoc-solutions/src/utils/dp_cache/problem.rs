//! Trait-based DP problem definition.

/// Dependency structure and computation of a memoized problem.
///
/// # Type Parameters
///
/// - `I`: Index type for the cache
/// - `K`: Value type stored in the cache
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for `index`.
    ///
    /// `deps` holds the values of the indices returned by [`deps`](Self::deps),
    /// in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
