use std::collections::{HashSet, VecDeque};

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::parse::{invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Warehouse {
    map: String,
    moves: Vec<Direction>,
}

fn warehouse(input: &str) -> anyhow::Result<Warehouse> {
    let groups = sections(input);
    let [map, moves] = groups.as_slice() else {
        bail!("expected a map and a list of moves separated by a blank line");
    };

    let moves: Vec<Direction> = moves
        .iter()
        .flat_map(|line| line.trim().bytes())
        .map(|b| Direction::from_arrow(b).ok_or_else(|| anyhow!("invalid move {:?}", b as char)))
        .collect::<anyhow::Result<_>>()?;

    Ok(Warehouse {
        map: map.join("\n"),
        moves,
    })
}

fn widen(map: &str) -> String {
    map.chars()
        .map(|c| match c {
            '#' => "##",
            'O' => "[]",
            '@' => "@.",
            '\n' => "\n",
            _ => "..",
        })
        .collect()
}

/// Pushes the robot and everything it touches one step, unless a wall is in
/// the way. Wide boxes pushed vertically drag their other half along.
fn try_move(grid: &mut Grid<u8>, robot: Point, dir: Direction) -> bool {
    let mut queue = VecDeque::from([robot]);
    let mut seen = HashSet::new();
    let mut moving = Vec::new();

    while let Some(p) = queue.pop_front() {
        if !seen.insert(p) {
            continue;
        }
        moving.push(p);

        let next = p.step(dir);
        match grid.get(next) {
            None | Some(b'#') => return false,
            Some(b'O') => queue.push_back(next),
            Some(b'[') => {
                queue.push_back(next);
                if dir.is_vertical() {
                    queue.push_back(next.step(Direction::Right));
                }
            }
            Some(b']') => {
                queue.push_back(next);
                if dir.is_vertical() {
                    queue.push_back(next.step(Direction::Left));
                }
            }
            Some(_) => {}
        }
    }

    // Farthest cells first, so every target is already vacated.
    for p in moving.into_iter().rev() {
        let next = p.step(dir);
        grid[next] = grid[p];
        grid[p] = b'.';
    }
    true
}

fn run(map: &str, moves: &[Direction]) -> Result<Grid<u8>, SolveError> {
    let mut grid = Grid::parse_bytes(map).map_err(|e| SolveError::failed(format!("{e:#}")))?;
    let mut robot = grid
        .find(&b'@')
        .ok_or_else(|| SolveError::failed("no robot on the map"))?;

    for dir in moves {
        if try_move(&mut grid, robot, *dir) {
            robot = robot.step(*dir);
        }
    }
    Ok(grid)
}

fn gps_total(grid: &Grid<u8>) -> isize {
    grid.iter()
        .filter(|(_, cell)| matches!(cell, b'O' | b'['))
        .map(|(p, _)| 100 * p.row + p.col)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Warehouse;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        warehouse(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = run(&shared.map, &shared.moves)?;
        Ok(gps_total(&grid).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = run(&widen(&shared.map), &shared.moves)?;
        Ok(gps_total(&grid).to_string())
    }
}
