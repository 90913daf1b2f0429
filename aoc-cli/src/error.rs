//! Error types for the CLI

use itertools::Itertools;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No input file exists for a selected day
    #[error("Missing input for {year}/{day:02}: looked for {}", .tried.iter().map(|p| p.display()).join(", "))]
    MissingInput {
        year: u16,
        day: u8,
        tried: Vec<PathBuf>,
    },

    /// Input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A side-file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// A part failed and the run stopped there
    #[error("Stopped after {year}/{day:02} Part {part} failed")]
    Halted { year: u16, day: u8, part: u8 },
}
