//! Reindeer maze: cheapest route with turn penalties
//!
//! States are (tile, heading). Stepping forward costs 1, a quarter turn in
//! place costs 1000. A tile lies on some cheapest route when the cost from
//! the start plus the cost to the end through it equals the best score.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
pub struct Solver;

const STEP: u64 = 1;
const TURN: u64 = 1000;

#[derive(Debug)]
pub struct Maze {
    grid: Grid<u8>,
    start: Point,
    end: Point,
    /// Cheapest cost to each state from the start, facing east.
    from_start: Option<Vec<u64>>,
}

type State = (Point, Direction);

impl Maze {
    fn index(&self, (p, d): State) -> usize {
        (p.row as usize * self.grid.width() + p.col as usize) * 4 + d.index()
    }

    fn is_open(&self, p: Point) -> bool {
        matches!(self.grid.get(p), Some(cell) if *cell != b'#')
    }

    /// Neighbouring states with their cost. `reverse` walks edges backwards.
    fn moves(&self, (p, d): State, reverse: bool) -> impl Iterator<Item = (State, u64)> {
        let ahead = if reverse { p.step(d.opposite()) } else { p.step(d) };
        let forward = self.is_open(ahead).then_some(((ahead, d), STEP));
        [
            forward,
            Some(((p, d.turn_left()), TURN)),
            Some(((p, d.turn_right()), TURN)),
        ]
        .into_iter()
        .flatten()
    }

    fn dijkstra(&self, sources: &[State], reverse: bool) -> Vec<u64> {
        let mut dist = vec![u64::MAX; self.grid.width() * self.grid.height() * 4];
        let mut heap = BinaryHeap::new();
        for &source in sources {
            dist[self.index(source)] = 0;
            heap.push(Reverse((0, source)));
        }

        while let Some(Reverse((cost, state))) = heap.pop() {
            if cost > dist[self.index(state)] {
                continue;
            }
            for (next, weight) in self.moves(state, reverse) {
                let candidate = cost + weight;
                let slot = &mut dist[self.index(next)];
                if candidate < *slot {
                    *slot = candidate;
                    heap.push(Reverse((candidate, next)));
                }
            }
        }
        dist
    }

    fn end_states(&self) -> [State; 4] {
        Direction::ALL.map(|d| (self.end, d))
    }

    fn from_start(&mut self) -> &[u64] {
        let dist = match self.from_start.take() {
            Some(dist) => dist,
            None => self.dijkstra(&[(self.start, Direction::Right)], false),
        };
        self.from_start.insert(dist)
    }

    fn best_score(&mut self) -> Result<u64, SolveError> {
        let ends = self.end_states();
        let indices = ends.map(|state| self.index(state));
        let dist = self.from_start();
        indices
            .into_iter()
            .map(|i| dist[i])
            .min()
            .filter(|best| *best != u64::MAX)
            .ok_or_else(|| SolveError::failed("the end tile is unreachable"))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_bytes(input).map_err(invalid)?;
        let start = grid
            .find(&b'S')
            .ok_or_else(|| invalid(anyhow!("maze has no start tile")))?;
        let end = grid
            .find(&b'E')
            .ok_or_else(|| invalid(anyhow!("maze has no end tile")))?;

        Ok(Maze {
            grid,
            start,
            end,
            from_start: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best_score()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared.best_score()?;
        let from_start = shared.from_start().to_vec();
        let to_end = shared.dijkstra(&shared.end_states(), true);
        let maze: &Maze = shared;

        let on_best_path = maze
            .grid
            .points()
            .filter(|p| maze.is_open(*p))
            .filter(|p| {
                Direction::ALL.into_iter().any(|d| {
                    let i = maze.index((*p, d));
                    from_start[i]
                        .checked_add(to_end[i])
                        .is_some_and(|total| total == best)
                })
            })
            .count();
        Ok(on_best_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const FIRST_EXAMPLE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND_EXAMPLE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn test_first_example() {
        let mut shared = Solver::parse(FIRST_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7036");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45");
    }

    #[test]
    fn test_second_example() {
        let mut shared = Solver::parse(SECOND_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11048");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "64");
    }

    #[test]
    fn test_unreachable_end() {
        let mut shared = Solver::parse("#####\n#S#E#\n#####\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
