//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), _) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{line}");
        }
    }

    pub fn print_no_work(&self) {
        if !self.quiet {
            println!("No solvers found matching the specified filters.");
        }
    }
}

/// `2024/07 Part 1: <answer> (parse: 1.20ms, solve: 350µs)`
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

fn summary_lines(results: &[SolverResult], elapsed: std::time::Duration) -> Vec<String> {
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = results.len() - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();

    vec![
        String::new(),
        "--- Summary ---".to_string(),
        format!("Solvers: {successes} solved, {failures} failed"),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!(
            "Elapsed wall-clock time: {}",
            TimeDelta::from_std(elapsed)
                .map(format_duration)
                .unwrap_or_else(|_| "N/A".to_string())
        ),
    ]
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{SolveError, SolverError};
    use proptest::prelude::*;

    fn solved(part: u8, answer: &str, parse_micros: Option<i64>, solve_micros: i64) -> SolverResult {
        SolverResult {
            year: 2024,
            day: 7,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: parse_micros.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve_micros),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(350)), "350µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1200)), "1.20ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_full_line() {
        assert_eq!(
            format_result(&solved(1, "3749", Some(1200), 350)),
            "2024/07 Part 1: 3749 (parse: 1.20ms, solve: 350µs)"
        );
        assert_eq!(
            format_result(&solved(2, "11387", None, 40)),
            "2024/07 Part 2: 11387 (solve: 40µs)"
        );
    }

    #[test]
    fn test_error_line() {
        let result = SolverResult {
            answer: Err(SolverError::SolveError(SolveError::failed("no path"))),
            ..solved(2, "", None, 0)
        };
        assert_eq!(
            format_result(&result),
            "2024/07 Part 2: Error - Solve error: Solve failed: no path"
        );
    }

    #[test]
    fn test_summary_counts_and_totals() {
        let results = [solved(1, "a", Some(1000), 500), solved(2, "b", None, 250)];
        let lines = summary_lines(&results, std::time::Duration::from_millis(3));
        assert_eq!(lines[2], "Solvers: 2 solved, 0 failed");
        assert_eq!(lines[3], "Total parse time: 1.00ms");
        assert_eq!(lines[4], "Total solve time: 750µs");
        assert_eq!(lines[5], "Elapsed wall-clock time: 3.00ms");
    }

    #[test]
    fn test_summary_counts_failures() {
        let failed = SolverResult {
            answer: Err(SolverError::SolveError(SolveError::failed("no path"))),
            ..solved(2, "", None, 0)
        };
        let results = [solved(1, "a", Some(1000), 500), failed];
        let lines = summary_lines(&results, std::time::Duration::from_millis(3));
        assert_eq!(lines[2], "Solvers: 1 solved, 1 failed");
        assert_eq!(lines[4], "Total solve time: 500µs");
    }

    proptest! {
        /// Sub-millisecond durations print as whole microseconds.
        #[test]
        fn prop_micros_below_one_millisecond(micros in 0i64..1000) {
            prop_assert_eq!(format_duration(TimeDelta::microseconds(micros)), format!("{micros}µs"));
        }
    }
}
