use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid, number, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct PrintQueue {
    /// `(a, b)`: page `a` must be printed before page `b`.
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl PrintQueue {
    fn order(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update
            .iter()
            .enumerate()
            .all(|(i, a)| update[i + 1..].iter().all(|b| !self.rules.contains(&(*b, *a))))
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

fn print_queue(input: &str) -> anyhow::Result<PrintQueue> {
    let groups = sections(input);
    let [rules, updates] = groups.as_slice() else {
        bail!("expected a rules section and an updates section");
    };

    let rules: HashSet<(u32, u32)> = rules
        .iter()
        .map(|line| -> anyhow::Result<(u32, u32)> {
            let (a, b) = line
                .split_once('|')
                .with_context(|| format!("invalid rule {line:?}"))?;
            Ok((number(a)?, number(b)?))
        })
        .collect::<anyhow::Result<_>>()?;

    let updates: Vec<Vec<u32>> = updates
        .iter()
        .map(|line| line.split(',').map(number).collect::<anyhow::Result<Vec<u32>>>())
        .collect::<anyhow::Result<_>>()?;

    Ok(PrintQueue { rules, updates })
}

impl AocParser for Solver {
    type SharedData<'a> = PrintQueue;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        print_queue(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|update| !shared.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|a, b| shared.order(*a, *b));
                middle(&fixed)
            })
            .sum();
        Ok(total.to_string())
    }
}
