//! Monkey market

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, number, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 22, tags = ["simulation"])]
pub struct Solver;

const PRUNE: u64 = 16_777_216;
const ROUNDS: usize = 2000;
/// Price changes range over -9..=9.
const CHANGES: usize = 19;

/// Only the low 24 bits of `secret` reach the result, so the first product
/// may wrap for seeds wider than that.
fn next_secret(secret: u64) -> u64 {
    let secret = (secret.wrapping_mul(64) ^ secret) % PRUNE;
    let secret = ((secret / 32) ^ secret) % PRUNE;
    ((secret * 2048) ^ secret) % PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

/// Bananas per window of four price changes, summed over all buyers. Each
/// buyer sells at the first occurrence of the window only.
fn best_bananas(seeds: &[u64]) -> u64 {
    let mut totals = vec![0u64; CHANGES.pow(4)];
    let mut seen = vec![usize::MAX; CHANGES.pow(4)];

    for (buyer, &seed) in seeds.iter().enumerate() {
        let prices: Vec<u64> = secrets(seed).take(ROUNDS + 1).map(|s| s % 10).collect();
        let mut window = 0;
        for (i, pair) in prices.windows(2).enumerate() {
            let change = (pair[1] + 9 - pair[0]) as usize;
            window = (window * CHANGES + change) % CHANGES.pow(4);
            if i >= 3 && seen[window] != buyer {
                seen[window] = buyer;
                totals[window] += pair[1];
            }
        }
    }
    totals.into_iter().max().unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, number::<u64>).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .filter_map(|&seed| secrets(seed).nth(ROUNDS))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_bananas(shared).to_string())
    }
}
