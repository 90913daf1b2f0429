//! Locating and reading puzzle inputs on disk
//!
//! Layout: `{input_dir}/{year}/day-{DD}/input.txt`. When that file is absent
//! a hand-corrected `fixed.txt` beside it is used instead.

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const INPUT_FILE: &str = "input.txt";
const FIXED_FILE: &str = "fixed.txt";

/// Maps a year/day to the input file to solve
pub struct InputLocator {
    input_dir: PathBuf,
    /// Used for every lookup when set
    override_file: Option<PathBuf>,
}

impl InputLocator {
    pub fn new(input_dir: PathBuf, override_file: Option<PathBuf>) -> Self {
        Self {
            input_dir,
            override_file,
        }
    }

    /// Directory holding the files for one day
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join(format!("day-{day:02}"))
    }

    /// Paths tried for a year/day, in order of preference
    pub fn candidates(&self, year: u16, day: u8) -> Vec<PathBuf> {
        if let Some(file) = &self.override_file {
            return vec![file.clone()];
        }
        let dir = self.day_dir(year, day);
        vec![dir.join(INPUT_FILE), dir.join(FIXED_FILE)]
    }

    /// First existing candidate, if any
    pub fn locate(&self, year: u16, day: u8) -> Option<PathBuf> {
        self.candidates(year, day).into_iter().find(|p| p.is_file())
    }

    /// Check if an input exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.locate(year, day).is_some()
    }

    /// Read the input for year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, CliError> {
        let path = self.locate(year, day).ok_or_else(|| CliError::MissingInput {
            year,
            day,
            tried: self.candidates(year, day),
        })?;
        debug!(year, day, path = %path.display(), "reading input");
        read_file(&path)
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_day_dir_format() {
        let locator = InputLocator::new(PathBuf::from("inputs"), None);
        assert_eq!(
            locator.day_dir(2024, 3),
            PathBuf::from("inputs/2024/day-03")
        );
        assert_eq!(
            locator.candidates(2024, 25),
            vec![
                PathBuf::from("inputs/2024/day-25/input.txt"),
                PathBuf::from("inputs/2024/day-25/fixed.txt"),
            ]
        );
    }

    #[test]
    fn test_input_preferred_over_fixed() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/day-01/input.txt", "raw");
        write(temp.path(), "2024/day-01/fixed.txt", "fixed");
        let locator = InputLocator::new(temp.path().to_path_buf(), None);

        assert_eq!(locator.read(2024, 1).unwrap(), "raw");
    }

    #[test]
    fn test_fixed_fallback() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/day-02/fixed.txt", "fixed");
        let locator = InputLocator::new(temp.path().to_path_buf(), None);

        assert!(locator.contains(2024, 2));
        assert_eq!(locator.read(2024, 2).unwrap(), "fixed");
    }

    #[test]
    fn test_missing_input_lists_candidates() {
        let temp = TempDir::new().unwrap();
        let locator = InputLocator::new(temp.path().to_path_buf(), None);

        assert!(!locator.contains(2024, 4));
        match locator.read(2024, 4) {
            Err(CliError::MissingInput { year, day, tried }) => {
                assert_eq!((year, day), (2024, 4));
                assert_eq!(tried.len(), 2);
            }
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn test_override_file_wins() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "2024/day-05/input.txt", "dir");
        write(temp.path(), "mine.txt", "override");
        let locator =
            InputLocator::new(temp.path().to_path_buf(), Some(temp.path().join("mine.txt")));

        assert_eq!(locator.read(2024, 5).unwrap(), "override");
        assert_eq!(locator.candidates(2024, 5).len(), 1);
    }
}
