//! Disk compaction
//!
//! The disk map alternates file lengths and free-space lengths. Part one
//! moves single blocks, part two whole files.

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                _ => Err(invalid(anyhow!("unexpected byte {:?} in disk map", b as char))),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

fn checksum_of(id: usize, span: Span) -> usize {
    (span.start..span.start + span.len).map(|pos| pos * id).sum()
}

/// File spans (indexed by id) and free spans, both in disk order.
fn layout(map: &[u8]) -> (Vec<Span>, Vec<Span>) {
    let mut files = Vec::new();
    let mut free = Vec::new();
    let mut pos = 0;
    for (i, len) in map.iter().map(|d| usize::from(*d)).enumerate() {
        let span = Span { start: pos, len };
        if i % 2 == 0 {
            files.push(span);
        } else {
            free.push(span);
        }
        pos += len;
    }
    (files, free)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (files, _) = layout(shared);
        let mut blocks: Vec<Option<usize>> = Vec::new();
        for (id, span) in files.iter().enumerate() {
            blocks.resize(span.start, None);
            blocks.extend(std::iter::repeat_n(Some(id), span.len));
        }

        let (mut left, mut right) = (0, blocks.len());
        while left < right {
            if blocks[left].is_some() {
                left += 1;
            } else if blocks[right - 1].is_none() {
                right -= 1;
            } else {
                blocks.swap(left, right - 1);
                left += 1;
                right -= 1;
            }
        }

        let checksum: usize = blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| pos * id))
            .sum();
        Ok(checksum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut files, mut free) = layout(shared);

        for file in files.iter_mut().rev() {
            let target = free
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.len >= file.len);
            if let Some(gap) = target {
                file.start = gap.start;
                gap.start += file.len;
                gap.len -= file.len;
            }
        }

        let checksum: usize = files
            .iter()
            .enumerate()
            .map(|(id, span)| checksum_of(id, *span))
            .sum();
        Ok(checksum.to_string())
    }
}
