use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, number, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["recursion"])]
pub struct Solver;

#[derive(Debug)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

fn concat(a: u64, b: u64) -> Option<u64> {
    let digits = b.checked_ilog10().unwrap_or(0) + 1;
    a.checked_mul(10u64.pow(digits))?.checked_add(b)
}

/// Left-to-right search. Operands are positive, so no operator ever
/// shrinks the running value and anything past the target is dead.
fn reachable(target: u64, acc: u64, rest: &[u64], with_concat: bool) -> bool {
    let Some((&next, rest)) = rest.split_first() else {
        return acc == target;
    };
    if acc > target {
        return false;
    }

    let try_value = |value: Option<u64>| {
        value.is_some_and(|v| reachable(target, v, rest, with_concat))
    };
    try_value(acc.checked_add(next))
        || try_value(acc.checked_mul(next))
        || (with_concat && try_value(concat(acc, next)))
}

impl Equation {
    fn is_solvable(&self, with_concat: bool) -> bool {
        match self.operands.split_first() {
            Some((&first, rest)) => reachable(self.target, first, rest, with_concat),
            None => false,
        }
    }
}

fn calibration(equations: &[Equation], with_concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| eq.is_solvable(with_concat))
        .map(|eq| eq.target)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (target, operands) = line
                .split_once(':')
                .context("expected `target: operands`")?;
            let operands = operands
                .split_whitespace()
                .map(number::<u64>)
                .collect::<anyhow::Result<Vec<_>>>()?;
            ensure!(!operands.is_empty(), "no operands");
            ensure!(operands.iter().all(|n| *n > 0), "operands must be positive");

            Ok(Equation {
                target: number(target)?,
                operands,
            })
        })
        .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}
