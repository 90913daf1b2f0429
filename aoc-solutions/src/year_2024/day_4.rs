use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["grid"])]
pub struct Solver;

const COMPASS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_bytes(input).map_err(invalid)
    }
}

fn spells(grid: &Grid<u8>, start: Point, step: Point, word: &[u8]) -> bool {
    word.iter()
        .enumerate()
        .all(|(i, letter)| grid.get(start + step * i as isize) == Some(letter))
}

/// Both diagonals through `center` read `MAS` in either direction.
fn is_x_mas(grid: &Grid<u8>, center: Point) -> bool {
    let diagonal = |a: Point, b: Point| {
        matches!(
            (grid.get(center + a), grid.get(center + b)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    grid[center] == b'A'
        && diagonal(Point::new(-1, -1), Point::new(1, 1))
        && diagonal(Point::new(-1, 1), Point::new(1, -1))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let count = grid
            .points()
            .flat_map(|p| COMPASS.iter().map(move |step| (p, *step)))
            .filter(|(p, step)| spells(grid, *p, *step, b"XMAS"))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let count = grid.points().filter(|p| is_x_mas(grid, *p)).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "18");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }

    #[test]
    fn test_same_diagonal_letters_do_not_count() {
        let grid = Grid::parse_bytes("M.M\n.A.\nS.S\n").unwrap();
        assert!(is_x_mas(&grid, Point::new(1, 1)));
        let grid = Grid::parse_bytes("M.S\n.A.\nS.M\n").unwrap();
        assert!(!is_x_mas(&grid, Point::new(1, 1)));
    }
}
