use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Lab {
    grid: Grid<u8>,
    start: Point,
    facing: Direction,
    /// Distinct cells of the unobstructed patrol, in first-visit order.
    route: Option<Vec<Point>>,
}

/// Walks until the guard leaves the map. Returns the distinct cells visited
/// in order, or `None` if the guard repeats a position and heading.
fn patrol(
    grid: &Grid<u8>,
    start: Point,
    facing: Direction,
    obstacle: Option<Point>,
) -> Option<Vec<Point>> {
    let mut headings = Grid::new(grid.width(), grid.height(), 0u8);
    let mut visited = Vec::new();
    let (mut pos, mut dir) = (start, facing);

    loop {
        let seen = &mut headings[pos];
        let bit = 1 << dir.index();
        if *seen & bit != 0 {
            return None;
        }
        if *seen == 0 {
            visited.push(pos);
        }
        *seen |= bit;

        let next = pos.step(dir);
        match grid.get(next) {
            None => return Some(visited),
            Some(b'#') => dir = dir.turn_right(),
            Some(_) if Some(next) == obstacle => dir = dir.turn_right(),
            Some(_) => pos = next,
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_bytes(input).map_err(invalid)?;
        let (start, facing) = grid
            .iter()
            .find_map(|(p, cell)| Direction::from_arrow(*cell).map(|d| (p, d)))
            .ok_or_else(|| invalid(anyhow!("no guard on the map")))?;

        Ok(Lab {
            grid,
            start,
            facing,
            route: None,
        })
    }
}

fn route(lab: &mut Lab) -> Result<&[Point], SolveError> {
    let route = match lab.route.take() {
        Some(route) => route,
        None => patrol(&lab.grid, lab.start, lab.facing, None)
            .ok_or_else(|| SolveError::failed("guard never leaves the map"))?,
    };
    Ok(lab.route.insert(route))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let candidates = route(shared)?.to_vec();
        let (grid, start, facing) = (&shared.grid, shared.start, shared.facing);

        // Only cells on the original route can change the patrol.
        let loops = candidates
            .iter()
            .filter(|p| **p != start)
            .filter(|p| patrol(grid, start, facing, Some(**p)).is_none())
            .count();
        Ok(loops.to_string())
    }
}
