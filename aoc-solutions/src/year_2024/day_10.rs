use std::collections::HashSet;

use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "dfs"])]
pub struct Solver;

fn height_map(input: &str) -> anyhow::Result<Grid<u8>> {
    let grid = Grid::parse_bytes(input)?;
    if let Some((p, cell)) = grid.iter().find(|(_, cell)| !cell.is_ascii_digit()) {
        bail!("unexpected {:?} at row {} col {}", *cell as char, p.row, p.col);
    }
    Ok(grid.map(|cell| cell - b'0'))
}

/// Calls `on_summit` once per distinct uphill trail from `from` to a 9.
fn walk(grid: &Grid<u8>, from: Point, on_summit: &mut impl FnMut(Point)) {
    let height = grid[from];
    if height == 9 {
        on_summit(from);
        return;
    }
    for next in grid.neighbours(from) {
        if grid[next] == height + 1 {
            walk(grid, next, on_summit);
        }
    }
}

fn trailheads(grid: &Grid<u8>) -> impl Iterator<Item = Point> + '_ {
    grid.iter().filter(|(_, h)| **h == 0).map(|(p, _)| p)
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        height_map(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let score: usize = trailheads(grid)
            .map(|head| {
                let mut summits = HashSet::new();
                walk(grid, head, &mut |p| {
                    summits.insert(p);
                });
                summits.len()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let mut rating = 0usize;
        for head in trailheads(grid) {
            walk(grid, head, &mut |_| rating += 1);
        }
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "81");
    }

    #[test]
    fn test_single_trail() {
        let mut shared = Solver::parse("0123\n1234\n8765\n9876\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "16");
    }
}
