use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, number, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| line.split_whitespace().map(number::<i32>).collect()).map_err(invalid)
    }
}

/// Strictly increasing or strictly decreasing, by 1 to 3 per step.
fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let steps = || levels.clone().zip(levels.clone().skip(1)).map(|(a, b)| b - a);
    steps().all(|d| (1..=3).contains(&d)) || steps().all(|d| (-3..=-1).contains(&d))
}

fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            let kept = levels
                .iter()
                .enumerate()
                .filter(move |(i, _)| *i != skip)
                .map(|(_, level)| *level);
            is_safe(kept)
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}
