//! Corrupted `mul(X,Y)` instructions with `do()`/`don't()` switches

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::{invalid, number};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

fn instructions(input: &str) -> anyhow::Result<Vec<Instruction>> {
    let pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .context("instruction pattern")?;

    pattern
        .captures_iter(input)
        .map(|caps| -> anyhow::Result<Instruction> {
            match (caps.get(1), caps.get(2)) {
                (Some(x), Some(y)) => Ok(Instruction::Mul(number(x.as_str())?, number(y.as_str())?)),
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            }
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        instructions(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(x, y) => x * y,
                _ => 0,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Enabled state carries over line breaks.
        let (_, total) = shared
            .iter()
            .fold((true, 0u64), |(enabled, total), instruction| match instruction {
                Instruction::Do => (true, total),
                Instruction::Dont => (false, total),
                Instruction::Mul(x, y) if enabled => (enabled, total + x * y),
                Instruction::Mul(..) => (enabled, total),
            });
        Ok(total.to_string())
    }
}
