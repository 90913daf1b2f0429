//! Linen layout

use anyhow::{bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem};
use crate::utils::parse::{invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["dp"])]
pub struct Solver;

/// Ways to finish `design` from a byte offset using the towel patterns.
struct Arrangements<'a> {
    design: &'a str,
    patterns: &'a [&'a str],
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, offset: &usize) -> Vec<usize> {
        let rest = &self.design[*offset..];
        self.patterns
            .iter()
            .filter(|p| rest.starts_with(**p))
            .map(|p| offset + p.len())
            .collect()
    }

    fn compute(&self, offset: &usize, deps: Vec<u64>) -> u64 {
        if *offset == self.design.len() {
            1
        } else {
            deps.iter().sum()
        }
    }
}

fn arrangements(design: &str, patterns: &[&str]) -> u64 {
    DpCache::new(Arrangements { design, patterns }).get(&0)
}

pub struct Onsen<'a> {
    patterns: Vec<&'a str>,
    designs: Vec<&'a str>,
    counts: Option<Vec<u64>>,
}

impl Onsen<'_> {
    fn counts(&mut self) -> &[u64] {
        let (patterns, designs) = (&self.patterns, &self.designs);
        self.counts.get_or_insert_with(|| {
            designs
                .iter()
                .map(|design| arrangements(design, patterns))
                .collect()
        })
    }
}

fn onsen(input: &str) -> anyhow::Result<Onsen<'_>> {
    let groups = sections(input);
    let [patterns, designs] = groups.as_slice() else {
        bail!("expected towel patterns, a blank line, then designs");
    };
    let [patterns] = patterns.as_slice() else {
        bail!("towel patterns must be on one line");
    };

    let patterns: Vec<&str> = patterns.split(',').map(str::trim).collect();
    ensure!(
        patterns.iter().all(|p| !p.is_empty()),
        "empty towel pattern"
    );
    let designs = designs.iter().map(|&d| d.trim()).collect();

    Ok(Onsen {
        patterns,
        designs,
        counts: None,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Onsen<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        onsen(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared.counts().iter().filter(|&&n| n > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.counts().iter().sum::<u64>().to_string())
    }
}
