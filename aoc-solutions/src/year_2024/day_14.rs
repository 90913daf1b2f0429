//! Robots patrolling a wrapping rectangle

use std::collections::HashSet;
use std::io;
use std::ops::RangeInclusive;

use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::parse::{integers, invalid, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["simulation"])]
pub struct Solver;

pub const WIDTH: i64 = 101;
pub const HEIGHT: i64 = 103;

#[derive(Debug, Clone, Copy)]
pub struct Robot {
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
}

impl Robot {
    fn after(&self, seconds: i64, width: i64, height: i64) -> (i64, i64) {
        (
            (self.x + self.dx * seconds).rem_euclid(width),
            (self.y + self.dy * seconds).rem_euclid(height),
        )
    }
}

/// Product of robot counts per quadrant; the middle row and column belong
/// to no quadrant.
pub fn safety_factor(robots: &[Robot], width: i64, height: i64, seconds: i64) -> usize {
    let (mid_x, mid_y) = (width / 2, height / 2);
    let mut quadrants = [0usize; 4];
    for (x, y) in robots.iter().map(|r| r.after(seconds, width, height)) {
        if x == mid_x || y == mid_y {
            continue;
        }
        quadrants[usize::from(x > mid_x) + 2 * usize::from(y > mid_y)] += 1;
    }
    quadrants.iter().product()
}

fn rows(positions: &HashSet<(i64, i64)>, width: i64, height: i64) -> Vec<String> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if positions.contains(&(x, y)) { '*' } else { '.' })
                .collect()
        })
        .collect()
}

fn render(positions: &HashSet<(i64, i64)>, width: i64, height: i64) -> String {
    rows(positions, width, height).join("\n")
}

/// Writes one CSV frame per second in `seconds`: a record holding the
/// second, then one record per grid row (`*` for robots, `.` for empty
/// tiles).
pub fn write_pictures<W: io::Write>(
    robots: &[Robot],
    width: i64,
    height: i64,
    seconds: RangeInclusive<i64>,
    out: W,
) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for second in seconds {
        let positions: HashSet<_> = robots
            .iter()
            .map(|r| r.after(second, width, height))
            .collect();
        writer.write_record([second.to_string()])?;
        for row in rows(&positions, width, height) {
            writer.write_record([row])?;
        }
    }
    writer.flush()
}

/// First second, within one full period, at which no two robots overlap,
/// together with the picture they draw.
pub fn first_picture(robots: &[Robot], width: i64, height: i64) -> Option<(i64, String)> {
    (1..=width * height).find_map(|seconds| {
        let mut positions = HashSet::with_capacity(robots.len());
        robots
            .iter()
            .all(|r| positions.insert(r.after(seconds, width, height)))
            .then(|| (seconds, render(&positions, width, height)))
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Robot>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| match integers::<i64>(line)?[..] {
            [x, y, dx, dy] => Ok(Robot { x, y, dx, dy }),
            _ => bail!("expected `p=x,y v=dx,dy`"),
        })
        .map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safety_factor(shared, WIDTH, HEIGHT, 100).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (seconds, picture) = first_picture(shared, WIDTH, HEIGHT)
            .ok_or_else(|| SolveError::failed("robots never spread out"))?;
        debug!(seconds, "picture:\n{picture}");
        Ok(seconds.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn test_example_safety_factor() {
        let robots = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(safety_factor(&robots, 11, 7, 100), 12);
    }

    #[test]
    fn test_wrapping() {
        let robot = Robot {
            x: 2,
            y: 4,
            dx: 2,
            dy: -3,
        };
        assert_eq!(robot.after(5, 11, 7), (1, 3));
    }

    #[test]
    fn test_first_picture() {
        let robots = Solver::parse("p=0,0 v=1,0\np=2,0 v=-1,0\n").unwrap();
        let (seconds, picture) = first_picture(&robots, 5, 1).unwrap();
        assert_eq!(seconds, 2);
        assert_eq!(picture, "*.*..");
    }

    #[test]
    fn test_write_pictures() {
        let robots = Solver::parse("p=0,0 v=1,0\np=2,1 v=-1,0\n").unwrap();
        let mut out = Vec::new();
        write_pictures(&robots, 3, 2, 1..=2, &mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        let records: Vec<&str> = written.lines().collect();
        assert_eq!(records, vec!["1", ".*.", ".*.", "2", "..*", "*.."]);
    }

    #[test]
    fn test_no_picture() {
        let robots = Solver::parse("p=1,1 v=1,1\np=1,1 v=1,1\n").unwrap();
        assert_eq!(first_picture(&robots, 3, 3), None);
    }
}
