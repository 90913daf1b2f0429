//! Race condition
//!
//! The track is a single path from `S` to `E`. A cheat lets the racer pass
//! through walls for up to `max` picoseconds; it jumps between two track
//! cells within that Manhattan distance.

use anyhow::{bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["grid", "path"])]
pub struct Solver;

const MIN_SAVING: usize = 100;

pub struct Track {
    /// Track cells in race order, starting at `S`.
    path: Vec<Point>,
    /// Picoseconds from the start for every track cell.
    distance: Grid<Option<usize>>,
}

fn track(input: &str) -> anyhow::Result<Track> {
    let grid = Grid::parse_bytes(input)?;
    let Some(start) = grid.find(&b'S') else {
        bail!("no start");
    };
    let Some(end) = grid.find(&b'E') else {
        bail!("no end");
    };

    let mut distance = grid.map(|_| None);
    let mut path = vec![start];
    distance[start] = Some(0);

    let mut current = start;
    while current != end {
        let mut next = grid
            .neighbours(current)
            .filter(|&n| grid[n] != b'#' && distance[n].is_none());
        let Some(step) = next.next() else {
            bail!("track dead-ends at {current:?}");
        };
        ensure!(next.next().is_none(), "track branches at {current:?}");
        distance[step] = Some(path.len());
        path.push(step);
        current = step;
    }

    Ok(Track { path, distance })
}

impl Track {
    /// Cheats of at most `max` picoseconds that save at least `threshold`.
    fn count_cheats(&self, max: usize, threshold: usize) -> usize {
        let reach = max as isize;
        self.path
            .iter()
            .enumerate()
            .map(|(from, &p)| {
                let mut count = 0;
                for dr in -reach..=reach {
                    let span = reach - dr.abs();
                    for dc in -span..=span {
                        let q = p + Point::new(dr, dc);
                        let Some(&Some(to)) = self.distance.get(q) else {
                            continue;
                        };
                        let cost = p.manhattan(q);
                        if to >= from + cost + threshold {
                            count += 1;
                        }
                    }
                }
                count
            })
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Track;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        track(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_cheats(2, MIN_SAVING).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_cheats(20, MIN_SAVING).to_string())
    }
}
