//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use crate::inputs::InputLocator;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result from a single solver part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first part of each day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another, stopping at the first
/// failure
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputLocator,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputLocator::new(config.input_dir.clone(), config.input_file.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputLocator {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Year/days among `work` with no input file
    pub fn missing_inputs(&self, work: &[WorkItem]) -> Vec<(u16, u8)> {
        work.iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute work items in (year, day, part) order
    ///
    /// Every result, failed ones included, is passed to `report` as soon as
    /// it is known and kept in the returned list. A parse failure yields one
    /// failed result per selected part. The run stops after the first
    /// failure; see [`halted`].
    pub fn execute<F>(&self, work: &[WorkItem], mut report: F) -> Result<Vec<SolverResult>, CliError>
    where
        F: FnMut(&SolverResult),
    {
        let mut results = Vec::new();

        for item in work {
            let input = self.inputs.read(item.year, item.day)?;
            let mut solver = match self.registry.create_solver(item.year, item.day, &input) {
                Ok(solver) => solver,
                Err(SolverError::ParseError(err)) => {
                    warn!(year = item.year, day = item.day, error = %err, "parse failed");
                    for part in item.parts.clone() {
                        let result = SolverResult {
                            year: item.year,
                            day: item.day,
                            part,
                            answer: Err(SolverError::ParseError(err.clone())),
                            parse_duration: None,
                            solve_duration: TimeDelta::zero(),
                        };
                        report(&result);
                        results.push(result);
                    }
                    return Ok(results);
                }
                Err(other) => return Err(other.into()),
            };

            let mut parse_duration = Some(solver.parse_duration());
            debug!(year = item.year, day = item.day, parse = ?solver.parse_duration(), "parsed");

            for part in item.parts.clone() {
                let (answer, solve_duration) = match solver.solve(part) {
                    Ok(solved) => {
                        let duration = solved.duration();
                        (Ok(solved.answer), duration)
                    }
                    Err(err) => (Err(SolverError::from(err)), TimeDelta::zero()),
                };
                let result = SolverResult {
                    year: item.year,
                    day: item.day,
                    part,
                    answer,
                    parse_duration: parse_duration.take(),
                    solve_duration,
                };
                report(&result);

                let failed = result.answer.is_err();
                results.push(result);
                if failed {
                    warn!(year = item.year, day = item.day, part, "solve failed");
                    return Ok(results);
                }
                info!(year = item.year, day = item.day, part, solve = ?solve_duration, "solved");
            }
        }

        Ok(results)
    }
}

/// The failure that stopped a run, if any
pub fn halted(results: &[SolverResult]) -> Option<CliError> {
    results
        .iter()
        .find(|r| r.answer.is_err())
        .map(|r| CliError::Halted {
            year: r.year,
            day: r.day,
            part: r.part,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const DAY_1: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    fn config(input_dir: &Path, day: Option<u8>, part: Option<u8>) -> Config {
        Config {
            year_filter: Some(2024),
            day_filter: day,
            part_filter: part,
            tags: Vec::new(),
            input_dir: input_dir.to_path_buf(),
            input_file: None,
            pictures: false,
            quiet: true,
            verbose: false,
        }
    }

    fn executor(config: &Config) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        Executor::new(registry, config)
    }

    fn write_day(root: &Path, day: u8, content: &str) -> PathBuf {
        let dir = root.join("2024").join(format!("day-{day:02}"));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("input.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_work_items_follow_filters() {
        let temp = TempDir::new().unwrap();

        let all = executor(&config(temp.path(), None, None)).collect_work_items();
        assert_eq!(all.len(), 25);
        assert_eq!(all[0].parts, 1..=2);
        assert_eq!(all[24].parts, 1..=1);

        let day_25_part_2 = executor(&config(temp.path(), Some(25), Some(2))).collect_work_items();
        assert!(day_25_part_2.is_empty());

        let day_7 = executor(&config(temp.path(), Some(7), Some(2))).collect_work_items();
        assert_eq!(
            day_7,
            vec![WorkItem {
                year: 2024,
                day: 7,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_runs_day_in_order() {
        let temp = TempDir::new().unwrap();
        write_day(temp.path(), 1, DAY_1);
        let executor = executor(&config(temp.path(), Some(1), None));
        let work = executor.collect_work_items();
        assert!(executor.missing_inputs(&work).is_empty());

        let mut seen = Vec::new();
        let results = executor
            .execute(&work, |r| seen.push((r.part, r.answer.is_ok())))
            .unwrap();

        let answers: Vec<&str> = results
            .iter()
            .map(|r| r.answer.as_deref().unwrap())
            .collect();
        assert_eq!(answers, vec!["11", "31"]);
        assert_eq!(seen, vec![(1, true), (2, true)]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_parse_failure_reported_per_part() {
        let temp = TempDir::new().unwrap();
        write_day(temp.path(), 1, "1 2 3\n");
        let executor = executor(&config(temp.path(), Some(1), None));
        let work = executor.collect_work_items();

        let mut reported = Vec::new();
        let results = executor
            .execute(&work, |r| reported.push((r.part, r.answer.is_err())))
            .unwrap();

        assert_eq!(reported, vec![(1, true), (2, true)]);
        assert_eq!(results.len(), 2);
        assert!(matches!(
            halted(&results),
            Some(CliError::Halted {
                year: 2024,
                day: 1,
                part: 1
            })
        ));
    }

    #[test]
    fn test_run_stops_after_failed_part() {
        let temp = TempDir::new().unwrap();
        write_day(temp.path(), 1, DAY_1);
        // Two robots that always share a tile: part 2 has no answer
        write_day(temp.path(), 14, "p=0,0 v=1,1\np=0,0 v=1,1\n");
        let executor = executor(&config(temp.path(), None, None));
        let work: Vec<WorkItem> = executor
            .collect_work_items()
            .into_iter()
            .filter(|w| w.day == 1 || w.day == 14)
            .chain([WorkItem {
                year: 2024,
                day: 25,
                parts: 1..=1,
            }])
            .collect();

        let results = executor.execute(&work, |_| {}).unwrap();

        let outcomes: Vec<(u8, u8, bool)> = results
            .iter()
            .map(|r| (r.day, r.part, r.answer.is_ok()))
            .collect();
        assert_eq!(
            outcomes,
            vec![(1, 1, true), (1, 2, true), (14, 1, true), (14, 2, false)]
        );
        assert!(matches!(
            halted(&results),
            Some(CliError::Halted {
                day: 14,
                part: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_successful_run_is_not_halted() {
        let temp = TempDir::new().unwrap();
        write_day(temp.path(), 1, DAY_1);
        let executor = executor(&config(temp.path(), Some(1), None));
        let work = executor.collect_work_items();

        let results = executor.execute(&work, |_| {}).unwrap();
        assert!(halted(&results).is_none());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let temp = TempDir::new().unwrap();
        let executor = executor(&config(temp.path(), Some(2), None));
        let work = executor.collect_work_items();

        assert_eq!(executor.missing_inputs(&work), vec![(2024, 2)]);
        assert!(matches!(
            executor.execute(&work, |_| {}),
            Err(CliError::MissingInput { .. })
        ));
    }
}
