use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{invalid, number, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct Lists {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let Some((left, right)) = line.split_whitespace().collect_tuple() else {
                bail!("expected two location ids, got {line:?}");
            };
            Ok((number::<u32>(left)?, number::<u32>(right)?))
        })
        .map_err(invalid)?;

        let (left, right) = pairs.into_iter().unzip();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let left = shared.left.iter().sorted_unstable();
        let right = shared.right.iter().sorted_unstable();

        let distance: u64 = left
            .zip(right)
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = shared.right.iter().counts();

        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| u64::from(*id) * counts.get(id).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}
