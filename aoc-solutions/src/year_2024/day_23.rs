//! LAN party

use std::collections::{BTreeSet, HashMap};

use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{comma_joined, invalid, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, tags = ["graph", "clique"])]
pub struct Solver;

/// Undirected adjacency, names borrowed from the input.
pub type Network<'a> = HashMap<&'a str, BTreeSet<&'a str>>;

fn connect<'a>(links: &[(&'a str, &'a str)]) -> Network<'a> {
    let mut network = Network::new();
    for &(a, b) in links {
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }
    network
}

/// Triangles `a < b < c` where at least one computer starts with `t`.
fn t_triangles(network: &Network<'_>) -> usize {
    let mut count = 0;
    for (&a, near_a) in network {
        for &b in near_a.iter().filter(|&&b| b > a) {
            for &c in network[b].iter().filter(|&&c| c > b) {
                if near_a.contains(c) && [a, b, c].iter().any(|n| n.starts_with('t')) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Bron–Kerbosch with pivoting; keeps the largest clique seen.
fn expand<'a>(
    network: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: BTreeSet<&'a str>,
    mut excluded: BTreeSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if clique.len() > best.len() {
            best.clone_from(clique);
        }
        return;
    }

    let pivot = candidates
        .union(&excluded)
        .max_by_key(|&&u| network[u].intersection(&candidates).count())
        .copied();
    let branches: Vec<&str> = match pivot {
        Some(u) => candidates.difference(&network[u]).copied().collect(),
        None => Vec::new(),
    };

    for v in branches {
        let near = &network[v];
        clique.push(v);
        expand(
            network,
            clique,
            candidates.intersection(near).copied().collect(),
            excluded.intersection(near).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

fn largest_clique<'a>(network: &Network<'a>) -> Vec<&'a str> {
    let mut best = Vec::new();
    expand(
        network,
        &mut Vec::new(),
        network.keys().copied().collect(),
        BTreeSet::new(),
        &mut best,
    );
    best.sort_unstable();
    best
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let links = parse_lines(input, |line| {
            let (a, b) = line.split_once('-').context("expected `a-b`")?;
            ensure!(!a.is_empty() && !b.is_empty(), "empty computer name");
            ensure!(a != b, "{a} linked to itself");
            Ok((a, b))
        })
        .map_err(invalid)?;
        Ok(connect(&links))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(t_triangles(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let clique = largest_clique(shared);
        if clique.is_empty() {
            return Err(SolveError::failed("empty network"));
        }
        Ok(comma_joined(clique))
    }
}
