use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{integers, invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["math"])]
pub struct Solver;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;
const PRESS_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Cheapest `3a + b` that lands exactly on the prize.
    fn tokens(&self, limit: Option<i64>) -> Option<i64> {
        let ((ax, ay), (bx, by), (px, py)) = (self.a, self.b, self.prize);
        let within = |n: i64| n >= 0 && limit.is_none_or(|max| n <= max);

        let det = ax * by - ay * bx;
        if det == 0 {
            // Collinear buttons: only the bounded search is finite.
            let max = limit?;
            return (0..=max)
                .flat_map(|a| (0..=max).map(move |b| (a, b)))
                .filter(|(a, b)| a * ax + b * bx == px && a * ay + b * by == py)
                .map(|(a, b)| 3 * a + b)
                .min();
        }

        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let (a, b) = (a_num / det, b_num / det);
        (within(a) && within(b)).then_some(3 * a + b)
    }

    fn far_away(self) -> Machine {
        Machine {
            prize: (self.prize.0 + PRIZE_OFFSET, self.prize.1 + PRIZE_OFFSET),
            ..self
        }
    }
}

fn pair(line: &str) -> anyhow::Result<(i64, i64)> {
    match integers::<i64>(line)?[..] {
        [x, y] => Ok((x, y)),
        _ => bail!("expected two numbers in {line:?}"),
    }
}

fn machine(block: &[&str]) -> anyhow::Result<Machine> {
    let [a, b, prize] = block else {
        bail!("expected three lines");
    };
    Ok(Machine {
        a: pair(a)?,
        b: pair(b)?,
        prize: pair(prize)?,
    })
}

fn machines(input: &str) -> anyhow::Result<Vec<Machine>> {
    sections(input)
        .iter()
        .enumerate()
        .map(|(i, block)| machine(block).with_context(|| format!("machine {}", i + 1)))
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        machines(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared
            .iter()
            .filter_map(|m| m.tokens(Some(PRESS_LIMIT)))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: i64 = shared
            .iter()
            .filter_map(|m| m.far_away().tokens(None))
            .sum();
        Ok(total.to_string())
    }
}
