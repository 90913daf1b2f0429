//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

/// Simple problem with no dependencies for testing
struct NoDeps;

impl DpProblem<usize, i32> for NoDeps {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<u64, u64> for Fibonacci {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_single_value() {
    let cache = DpCache::new(NoDeps);

    assert!(cache.is_empty());
    assert_eq!(cache.get(&5), 10);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&100), 200);
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::new(Fibonacci);

    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
    assert_eq!(cache.len(), 91);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::new(Diamond {
        count: Rc::clone(&count),
    });

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(cache.get(&3), 10);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_tuple_index() {
    // Ways to climb `n` steps taking 1 or 2 at a time, tracked with the last step size.
    struct Steps;

    impl DpProblem<(u32, u32), u64> for Steps {
        fn deps(&self, &(n, _last): &(u32, u32)) -> Vec<(u32, u32)> {
            (1..=2).filter(|s| *s <= n).map(|s| (n - s, s)).collect()
        }

        fn compute(&self, &(n, _): &(u32, u32), deps: Vec<u64>) -> u64 {
            if n == 0 { 1 } else { deps.iter().sum() }
        }
    }

    let cache = DpCache::new(Steps);
    assert_eq!(cache.get(&(10, 0)), 89);
}

/// Fibonacci that counts how often `compute` runs.
struct CountingFibonacci {
    computed: Rc<Cell<usize>>,
}

impl DpProblem<u64, u64> for CountingFibonacci {
    fn deps(&self, n: &u64) -> Vec<u64> {
        Fibonacci.deps(n)
    }

    fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
        self.computed.set(self.computed.get() + 1);
        Fibonacci.compute(n, deps)
    }
}

proptest! {
    #[test]
    fn prop_fibonacci_matches_iteration(n in 0u64..=90) {
        let cache = DpCache::new(Fibonacci);
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        prop_assert_eq!(cache.get(&n), a);
        prop_assert_eq!(cache.len(), n as usize + 1);
    }

    /// Whatever the lookup order, every index is computed exactly once.
    #[test]
    fn prop_each_index_computed_once(queries in prop::collection::vec(0u64..60, 1..20)) {
        let computed = Rc::new(Cell::new(0));
        let cache = DpCache::new(CountingFibonacci {
            computed: Rc::clone(&computed),
        });
        for q in &queries {
            cache.get(q);
        }
        let highest = queries.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(cache.len(), highest as usize + 1);
        prop_assert_eq!(computed.get(), cache.len());
    }
}
