//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the `{year}/day-{DD}` input tree
    pub input_dir: PathBuf,
    /// Explicit input file for a single day
    pub input_file: Option<PathBuf>,
    /// Dump day 14 frames after a successful run
    pub pictures: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args and the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let env_dir = std::env::var(INPUT_DIR_ENV).ok();
        Self::resolve(args, env_dir)
    }

    fn resolve(args: Args, env_dir: Option<String>) -> Result<Self, CliError> {
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config(
                "--input needs --day to pick a single solver".to_string(),
            ));
        }

        let input_dir = args
            .input_dir
            .or_else(|| env_dir.filter(|d| !d.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            pictures: args.pictures,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_input_dir_precedence() {
        let config = Config::resolve(args(&[]), None).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));

        let config = Config::resolve(args(&[]), Some("/data/aoc".into())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/data/aoc"));

        let config =
            Config::resolve(args(&["--input-dir", "/tmp/x"]), Some("/data/aoc".into())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/tmp/x"));

        let config = Config::resolve(args(&[]), Some(String::new())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
    }

    #[test]
    fn test_input_file_requires_day() {
        let err = Config::resolve(args(&["-i", "puzzle.txt"]), None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));

        let config = Config::resolve(args(&["-d", "3", "-i", "puzzle.txt"]), None).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("puzzle.txt")));
        assert_eq!(config.day_filter, Some(3));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("rel/path")), PathBuf::from("rel/path"));
        assert_eq!(expand_tilde(Path::new("/abs")), PathBuf::from("/abs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
