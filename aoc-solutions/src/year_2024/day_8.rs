use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Antennas {
    grid: Grid<u8>,
    by_frequency: HashMap<u8, Vec<Point>>,
}

impl Antennas {
    /// Every ordered pair of same-frequency antennas.
    fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.by_frequency
            .values()
            .flat_map(|points| points.iter().copied().permutations(2))
            .map(|pair| (pair[0], pair[1]))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Antennas;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_bytes(input).map_err(invalid)?;
        let by_frequency = grid
            .iter()
            .filter(|(_, cell)| **cell != b'.')
            .map(|(p, cell)| (*cell, p))
            .into_group_map();

        Ok(Antennas { grid, by_frequency })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let antinodes: HashSet<Point> = shared
            .pairs()
            .map(|(a, b)| b + (b - a))
            .filter(|p| shared.grid.contains(*p))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let antinodes: HashSet<Point> = shared
            .pairs()
            .flat_map(|(a, b)| {
                let step = b - a;
                (0..)
                    .map(move |k| b + step * k)
                    .take_while(move |p| grid.contains(*p))
            })
            .collect();
        Ok(antinodes.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_resonant_line() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }
}
