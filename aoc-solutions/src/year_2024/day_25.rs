//! Code chronicle

use anyhow::{bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::{invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 25, tags = ["parsing"])]
pub struct Solver;

const ROWS: usize = 7;
const COLUMNS: usize = 5;

#[derive(Debug, Default)]
pub struct Schematics {
    locks: Vec<[u8; COLUMNS]>,
    keys: Vec<[u8; COLUMNS]>,
}

fn fits(lock: &[u8; COLUMNS], key: &[u8; COLUMNS]) -> bool {
    lock.iter()
        .zip(key)
        .all(|(l, k)| usize::from(l + k) <= ROWS - 2)
}

fn schematics(input: &str) -> anyhow::Result<Schematics> {
    let mut schematics = Schematics::default();
    for (i, rows) in sections(input).into_iter().enumerate() {
        ensure!(
            rows.len() == ROWS && rows.iter().all(|r| r.len() == COLUMNS),
            "schematic {} is not {COLUMNS}x{ROWS}",
            i + 1
        );
        let mut heights = [0u8; COLUMNS];
        for row in &rows[1..ROWS - 1] {
            for (height, cell) in heights.iter_mut().zip(row.bytes()) {
                match cell {
                    b'#' => *height += 1,
                    b'.' => {}
                    other => bail!("schematic {}: unexpected {:?}", i + 1, other as char),
                }
            }
        }
        match (rows[0], rows[ROWS - 1]) {
            ("#####", ".....") => schematics.locks.push(heights),
            (".....", "#####") => schematics.keys.push(heights),
            _ => bail!("schematic {} is neither a lock nor a key", i + 1),
        }
    }
    Ok(schematics)
}

impl AocParser for Solver {
    type SharedData<'a> = Schematics;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        schematics(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let pairs = shared
            .locks
            .iter()
            .cartesian_product(&shared.keys)
            .filter(|(lock, key)| fits(lock, key))
            .count();
        Ok(pairs.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::PartNotImplemented(2))
        ));
    }

    #[test]
    fn test_heights() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.locks, vec![[0, 5, 3, 4, 3], [1, 2, 0, 5, 3]]);
        assert_eq!(
            shared.keys,
            vec![[5, 0, 2, 1, 3], [4, 3, 4, 0, 2], [3, 0, 2, 0, 1]]
        );
    }

    #[test]
    fn test_rejects_malformed_schematic() {
        assert!(Solver::parse("#####\n.....\n").is_err());
        assert!(Solver::parse("#####\n#####\n#####\n#####\n#####\n#####\n#####\n").is_err());
    }
}
