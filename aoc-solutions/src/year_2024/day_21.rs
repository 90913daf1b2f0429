//! Keypad conundrum
//!
//! A chain of robots types a door code: the human presses a directional
//! keypad, each robot presses the next keypad in the chain and the last one
//! presses the numeric keypad. Moving between two keys only ever needs the
//! horizontal-first or the vertical-first route, whichever avoids the gap.

use std::iter;

use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::dp_cache::{DpCache, DpProblem};
use crate::utils::grid::Point;
use crate::utils::parse::{invalid, number, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 21, tags = ["dp"])]
pub struct Solver;

struct Keypad {
    rows: &'static [&'static str],
}

const NUMERIC: Keypad = Keypad {
    rows: &["789", "456", "123", " 0A"],
};

const DIRECTIONAL: Keypad = Keypad {
    rows: &[" ^A", "<v>"],
};

impl Keypad {
    fn position(&self, key: u8) -> Option<Point> {
        self.rows.iter().enumerate().find_map(|(row, keys)| {
            keys.bytes()
                .position(|k| k == key)
                .map(|col| Point::new(row as isize, col as isize))
        })
    }

    /// Key sequences typed on the controlling keypad to move from `from` to
    /// `to` and press it. Each starts and ends on `A`.
    fn routes(&self, from: u8, to: u8) -> Vec<Vec<u8>> {
        let (Some(a), Some(b)) = (self.position(from), self.position(to)) else {
            return Vec::new();
        };
        let gap = self.position(b' ');
        let d = b - a;
        let vertical = vec![if d.row < 0 { b'^' } else { b'v' }; d.row.unsigned_abs()];
        let horizontal = vec![if d.col < 0 { b'<' } else { b'>' }; d.col.unsigned_abs()];

        let mut routes: Vec<Vec<u8>> = Vec::with_capacity(2);
        for (first, second, corner) in [
            (&horizontal, &vertical, Point::new(a.row, b.col)),
            (&vertical, &horizontal, Point::new(b.row, a.col)),
        ] {
            if gap == Some(corner) {
                continue;
            }
            let route: Vec<u8> = iter::once(b'A')
                .chain(first.iter().copied())
                .chain(second.iter().copied())
                .chain(iter::once(b'A'))
                .collect();
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
        routes
    }
}

/// Human presses needed to move a directional arm from one key to another
/// and press it, with `depth` directional keypads between it and the human.
struct Presses;

impl DpProblem<(u8, u8, usize), u64> for Presses {
    fn deps(&self, &(from, to, depth): &(u8, u8, usize)) -> Vec<(u8, u8, usize)> {
        if depth == 0 {
            return Vec::new();
        }
        DIRECTIONAL
            .routes(from, to)
            .iter()
            .flat_map(|route| route.windows(2).map(|w| (w[0], w[1], depth - 1)))
            .collect()
    }

    fn compute(&self, &(from, to, depth): &(u8, u8, usize), deps: Vec<u64>) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut rest = deps.as_slice();
        let mut best = u64::MAX;
        for route in DIRECTIONAL.routes(from, to) {
            let (costs, tail) = rest.split_at(route.len() - 1);
            rest = tail;
            best = best.min(costs.iter().sum());
        }
        best
    }
}

pub struct Code<'a> {
    keys: &'a str,
    value: u64,
}

pub struct Door<'a> {
    codes: Vec<Code<'a>>,
    presses: DpCache<(u8, u8, usize), u64, Presses>,
}

impl Door<'_> {
    /// Shortest human key sequence that makes the last robot type `keys`.
    fn sequence_length(&self, keys: &str, robots: usize) -> Option<u64> {
        iter::once(b'A')
            .chain(keys.bytes())
            .tuple_windows()
            .map(|(from, to)| {
                NUMERIC
                    .routes(from, to)
                    .iter()
                    .map(|route| {
                        route
                            .windows(2)
                            .map(|w| self.presses.get(&(w[0], w[1], robots)))
                            .sum::<u64>()
                    })
                    .min()
            })
            .sum()
    }

    fn complexity(&self, robots: usize) -> Result<u64, SolveError> {
        self.codes.iter().try_fold(0u64, |total, code| {
            let length = self
                .sequence_length(code.keys, robots)
                .ok_or_else(|| SolveError::failed(format!("cannot type {}", code.keys)))?;
            Ok(total + length * code.value)
        })
    }
}

fn code(line: &str) -> anyhow::Result<Code<'_>> {
    let digits = line.strip_suffix('A').unwrap_or(line);
    ensure!(
        line.ends_with('A') && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        "expected digits followed by `A`, found {line:?}"
    );
    Ok(Code {
        keys: line,
        value: number(digits)?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Door<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let codes = parse_lines(input, code).map_err(invalid)?;
        Ok(Door {
            codes,
            presses: DpCache::new(Presses),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.complexity(2)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.complexity(25)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
029A
980A
179A
456A
379A
";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "126384");
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            Solver::solve_part(&mut shared, 2).unwrap(),
            "154115708116294"
        );
    }

    #[test]
    fn test_sequence_lengths() {
        let door = Solver::parse(EXAMPLE).unwrap();
        let lengths: Vec<u64> = door
            .codes
            .iter()
            .map(|c| door.sequence_length(c.keys, 2).unwrap())
            .collect();
        assert_eq!(lengths, vec![68, 60, 68, 64, 64]);
        assert_eq!(door.sequence_length("029A", 0), Some(12));
    }

    #[test]
    fn test_routes_avoid_gap() {
        assert_eq!(NUMERIC.routes(b'A', b'1'), vec![b"A^<<A".to_vec()]);
        assert_eq!(NUMERIC.routes(b'1', b'A'), vec![b"A>>vA".to_vec()]);
        assert_eq!(DIRECTIONAL.routes(b'A', b'<'), vec![b"Av<<A".to_vec()]);
        assert_eq!(DIRECTIONAL.routes(b'A', b'A'), vec![b"AA".to_vec()]);
        assert_eq!(DIRECTIONAL.routes(b'^', b'>').len(), 2);
    }

    #[test]
    fn test_parse_rejects_bad_code() {
        assert!(Solver::parse("02B\n").is_err());
        assert!(Solver::parse("A\n").is_err());
    }
}
