use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Region {
    area: usize,
    perimeter: usize,
    sides: usize,
}

#[derive(Debug)]
pub struct Garden {
    plots: Grid<u8>,
    regions: Option<Vec<Region>>,
}

/// Fence runs equal corners: a convex corner has both orthogonal neighbours
/// outside the region, a concave one has both inside and the diagonal outside.
fn corners(plots: &Grid<u8>, p: Point) -> usize {
    let same = |q: Point| plots.get(q) == Some(&plots[p]);
    Direction::ALL
        .into_iter()
        .filter(|d| {
            let (a, b) = (p.step(*d), p.step(d.turn_right()));
            let diagonal = a + d.turn_right().delta();
            (!same(a) && !same(b)) || (same(a) && same(b) && !same(diagonal))
        })
        .count()
}

fn regions(plots: &Grid<u8>) -> Vec<Region> {
    let mut seen = Grid::new(plots.width(), plots.height(), false);
    let mut regions = Vec::new();

    for origin in plots.points() {
        if seen[origin] {
            continue;
        }
        seen[origin] = true;

        let plant = plots[origin];
        let mut region = Region {
            area: 0,
            perimeter: 0,
            sides: 0,
        };
        let mut stack = vec![origin];
        while let Some(p) = stack.pop() {
            region.area += 1;
            region.sides += corners(plots, p);
            for d in Direction::ALL {
                let q = p.step(d);
                match plots.get(q) {
                    Some(&other) if other == plant => {
                        if !seen[q] {
                            seen[q] = true;
                            stack.push(q);
                        }
                    }
                    _ => region.perimeter += 1,
                }
            }
        }
        regions.push(region);
    }
    regions
}

impl Garden {
    fn regions(&mut self) -> &[Region] {
        let plots = &self.plots;
        self.regions.get_or_insert_with(|| regions(plots))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(Garden {
            plots: Grid::parse_bytes(input).map_err(invalid)?,
            regions: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.regions().iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.regions().iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_small_example() {
        let mut shared = Solver::parse("AAAA\nBBCD\nBBCC\nEEEC\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "140");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "80");
    }

    #[test]
    fn test_nested_regions() {
        let mut shared = Solver::parse("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "772");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "436");
    }

    #[test]
    fn test_large_example() {
        let input = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1930");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1206");
    }
}
