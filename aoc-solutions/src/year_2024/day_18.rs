//! RAM run: bytes fall onto a square memory grid, one per step.

use std::collections::VecDeque;

use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::{integers, invalid, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["bfs", "binary-search"])]
pub struct Solver;

/// Largest coordinate on the puzzle grid.
const SIZE: usize = 70;
const FALLEN: usize = 1024;

/// Fewest steps from the top-left corner to `(size, size)` once the given
/// bytes are corrupted, if the exit is reachable at all.
fn shortest(size: usize, bytes: &[Point]) -> Option<usize> {
    let mut corrupted = Grid::new(size + 1, size + 1, false);
    for &p in bytes {
        if let Some(cell) = corrupted.get_mut(p) {
            *cell = true;
        }
    }

    let start = Point::new(0, 0);
    let exit = Point::new(size as isize, size as isize);
    if corrupted[start] || corrupted[exit] {
        return None;
    }

    let mut steps = Grid::new(size + 1, size + 1, None::<usize>);
    steps[start] = Some(0);
    let mut queue = VecDeque::from([start]);

    while let Some(p) = queue.pop_front() {
        let here = steps[p]?;
        if p == exit {
            return Some(here);
        }
        for n in corrupted.neighbours(p) {
            if !corrupted[n] && steps[n].is_none() {
                steps[n] = Some(here + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Index of the first byte after which the exit can no longer be reached.
fn first_blocking(size: usize, bytes: &[Point]) -> Option<usize> {
    if shortest(size, bytes).is_some() {
        return None;
    }
    // Reachable with `lo` bytes fallen, blocked with `hi`.
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        match shortest(size, &bytes[..mid]) {
            Some(_) => lo = mid,
            None => hi = mid,
        }
    }
    Some(hi - 1)
}

fn solve_part1(size: usize, fallen: usize, bytes: &[Point]) -> Result<usize, SolveError> {
    shortest(size, &bytes[..fallen.min(bytes.len())])
        .ok_or_else(|| SolveError::failed("exit unreachable"))
}

fn solve_part2(size: usize, bytes: &[Point]) -> Result<String, SolveError> {
    let i = first_blocking(size, bytes)
        .ok_or_else(|| SolveError::failed("the exit is never cut off"))?;
    let p = bytes[i];
    Ok(format!("{},{}", p.col, p.row))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| match integers::<isize>(line)?[..] {
            [x, y] if x >= 0 && y >= 0 => Ok(Point::new(y, x)),
            _ => bail!("expected `x,y`, found {line:?}"),
        })
        .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_part1(SIZE, FALLEN, shared)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_part2(SIZE, shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn test_part1_example() {
        let bytes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(solve_part1(6, 12, &bytes).unwrap(), 22);
    }

    #[test]
    fn test_part2_example() {
        let bytes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(solve_part2(6, &bytes).unwrap(), "6,1");
    }

    #[test]
    fn test_open_grid() {
        assert_eq!(shortest(3, &[]), Some(6));
        assert_eq!(first_blocking(3, &[]), None);
    }

    #[test]
    fn test_corrupted_exit() {
        let bytes = [Point::new(3, 3)];
        assert_eq!(shortest(3, &bytes), None);
        assert_eq!(first_blocking(3, &bytes), Some(0));
    }

    #[test]
    fn test_parse_rejects_bad_pair() {
        assert!(Solver::parse("1,2\n3\n").is_err());
        assert!(Solver::parse("1,-2\n").is_err());
    }

    #[test]
    fn test_registered_parts_use_full_grid() {
        let mut shared = Solver::parse("1,1\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "140");
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }
}
