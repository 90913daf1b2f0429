//! Memoization cache for recursive counting problems
//!
//! Values depend on other values through a directed acyclic graph. Each index
//! is computed once: dependencies are resolved first, then the value is
//! stored in a `HashMap` and cloned out on later lookups.
//!
//! # Warning: Cycle Behavior
//!
//! **There is no cycle detection.** A cyclic dependency graph recurses until
//! the stack overflows. Indices must form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem};
//!
//! /// Lattice paths from (r, c) to the origin.
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         let mut deps = Vec::new();
//!         if r > 0 { deps.push((r - 1, c)); }
//!         if c > 0 { deps.push((r, c - 1)); }
//!         deps
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(GridPaths);
//! assert_eq!(cache.get(&(4, 4)), 70);
//! ```

mod cache;
mod problem;

pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
