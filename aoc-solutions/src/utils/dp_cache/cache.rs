//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

use super::problem::DpProblem;

/// A memoization cache with lazy evaluation and dependency resolution.
///
/// Values are stored in a `HashMap` behind a `RefCell`, so lookups only need
/// `&self` and recursion through [`get`](Self::get) never holds a borrow.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem};
///
/// struct Factorial;
///
/// impl DpProblem<u64, u64> for Factorial {
///     fn deps(&self, n: &u64) -> Vec<u64> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { n * deps[0] }
///     }
/// }
///
/// let cache = DpCache::new(Factorial);
/// assert_eq!(cache.get(&5), 120);
/// assert_eq!(cache.len(), 6);
/// ```
pub struct DpCache<I, K, P>
where
    P: DpProblem<I, K>,
{
    values: RefCell<HashMap<I, K>>,
    problem: P,
}

impl<I, K, P> DpCache<I, K, P>
where
    I: Hash + Eq + Clone,
    K: Clone,
    P: DpProblem<I, K>,
{
    /// Creates an empty cache for `problem`.
    pub fn new(problem: P) -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            problem,
        }
    }

    /// Retrieves the value for `index`, computing it and its dependencies if
    /// necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.values.borrow().get(index) {
            return value.clone();
        }

        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        let value = self.problem.compute(index, dep_values);
        self.values
            .borrow_mut()
            .entry(index.clone())
            .or_insert(value)
            .clone()
    }

    /// Number of memoized indices.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}
