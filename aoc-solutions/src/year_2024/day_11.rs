use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem};
use crate::utils::parse::{invalid, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["dp"])]
pub struct Solver;

/// Number of stones one engraved stone becomes after some blinks.
pub struct Blink;

impl Blink {
    fn children(stone: u64) -> Vec<u64> {
        if stone == 0 {
            return vec![1];
        }
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            vec![stone / half, stone % half]
        } else {
            vec![stone * 2024]
        }
    }
}

impl DpProblem<(u64, u32), u64> for Blink {
    fn deps(&self, &(stone, blinks): &(u64, u32)) -> Vec<(u64, u32)> {
        if blinks == 0 {
            return vec![];
        }
        Self::children(stone)
            .into_iter()
            .map(|child| (child, blinks - 1))
            .collect()
    }

    fn compute(&self, &(_, blinks): &(u64, u32), deps: Vec<u64>) -> u64 {
        if blinks == 0 { 1 } else { deps.iter().sum() }
    }
}

pub struct Stones {
    stones: Vec<u64>,
    counts: DpCache<(u64, u32), u64, Blink>,
}

impl Stones {
    fn after(&self, blinks: u32) -> u64 {
        self.stones
            .iter()
            .map(|stone| self.counts.get(&(*stone, blinks)))
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Stones;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(number::<u64>)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;

        Ok(Stones {
            stones,
            counts: DpCache::new(Blink),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.after(25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.after(75).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example() {
        let mut shared = Solver::parse("125 17\n").unwrap();
        assert_eq!(shared.after(6), 22);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "55312");
    }

    #[test]
    fn test_single_blink() {
        let shared = Solver::parse("0 1 10 99 999").unwrap();
        // 1 2024 1 0 9 9 2021976
        assert_eq!(shared.after(1), 7);
    }

    #[test]
    fn test_children() {
        assert_eq!(Blink::children(1000), vec![10, 0]);
        assert_eq!(Blink::children(253000), vec![253, 0]);
        assert_eq!(Blink::children(17), vec![1, 7]);
        assert_eq!(Blink::children(125), vec![253000]);
    }
}
