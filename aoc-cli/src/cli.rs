//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers on local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day-{DD}/input.txt` [env: AOC_INPUT_DIR, default: inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Read this file instead of the input directory (needs --day)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write every 2024 day 14 robot frame to `pictures.csv` beside its input
    #[arg(long)]
    pub pictures: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug records to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
