//! Robot picture side-file for 2024 day 14

use crate::error::CliError;
use crate::inputs::InputLocator;
use aoc_solutions::year_2024::day_14;
use aoc_solver::{AocParser, SolverError};
use std::fs::File;
use std::io::BufWriter;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::info;

pub const PICTURES_FILE: &str = "pictures.csv";

/// Renders the robots of 2024 day 14 at each second in `seconds` into
/// `pictures.csv` next to the day's input file
pub fn write_robot_pictures(
    inputs: &InputLocator,
    seconds: RangeInclusive<i64>,
) -> Result<PathBuf, CliError> {
    let input_path = inputs.locate(2024, 14).ok_or_else(|| CliError::MissingInput {
        year: 2024,
        day: 14,
        tried: inputs.candidates(2024, 14),
    })?;
    let input = inputs.read(2024, 14)?;
    let robots = day_14::Solver::parse(&input).map_err(SolverError::from)?;

    let path = input_path.with_file_name(PICTURES_FILE);
    let write_err = |source: std::io::Error| CliError::OutputWrite {
        path: path.clone(),
        source,
    };
    let file = File::create(&path).map_err(write_err)?;
    day_14::write_pictures(
        &robots,
        day_14::WIDTH,
        day_14::HEIGHT,
        seconds.clone(),
        BufWriter::new(file),
    )
    .map_err(write_err)?;

    info!(path = %path.display(), frames = seconds.count(), "wrote robot pictures");
    Ok(path)
}

/// Every frame before the robots repeat
pub fn full_period() -> RangeInclusive<i64> {
    1..=day_14::WIDTH * day_14::HEIGHT
}
