//! Input parsing helpers shared by the day solvers

use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use aoc_solver::ParseError;
use itertools::Itertools;

/// Converts an `anyhow` chain into the framework's parse error.
pub fn invalid(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

/// Applies `f` to every non-blank line, tagging failures with the 1-based
/// line number.
pub fn parse_lines<'a, T, F>(input: &'a str, mut f: F) -> anyhow::Result<Vec<T>>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| f(line.trim()).with_context(|| format!("line {}", i + 1)))
        .collect()
}

pub fn number<T>(s: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim()
        .parse()
        .with_context(|| format!("invalid number {s:?}"))
}

/// Every (optionally negative) integer embedded in `s`, in order.
pub fn integers<T>(s: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.split(|c: char| !(c.is_ascii_digit() || c == '-'))
        .filter(|token| !token.is_empty() && *token != "-")
        .map(number)
        .collect()
}

/// Groups of consecutive non-blank lines.
pub fn sections(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in input.lines().map(str::trim_end) {
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Joins displayable items with commas.
pub fn comma_joined<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().join(",")
}
