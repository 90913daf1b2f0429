//! Three-bit computer
//!
//! Eight instructions over registers A, B and C. Combo operands 0-3 are
//! literals, 4-6 read A, B and C, and 7 is reserved.

use std::collections::BTreeSet;

use anyhow::{Context, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{comma_joined, integers, invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, tags = ["vm", "reverse-engineering"])]
pub struct Solver;

/// Guards against programs that never halt.
const MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    a: u64,
    b: u64,
    c: u64,
    program: Vec<u8>,
}

fn shift(value: u64, by: u64) -> u64 {
    u32::try_from(by)
        .ok()
        .and_then(|by| value.checked_shr(by))
        .unwrap_or(0)
}

impl Computer {
    fn combo(&self, operand: u8) -> Result<u64, SolveError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(SolveError::failed(format!("invalid combo operand {operand}"))),
        }
    }

    /// Runs until the instruction pointer leaves the program.
    fn run(&mut self) -> Result<Vec<u8>, SolveError> {
        let mut output = Vec::new();
        let mut ip = 0;

        for _ in 0..MAX_STEPS {
            let (Some(&opcode), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1))
            else {
                return Ok(output);
            };
            ip += 2;

            match opcode {
                0 => self.a = shift(self.a, self.combo(operand)?),
                1 => self.b ^= u64::from(operand),
                2 => self.b = self.combo(operand)? & 7,
                3 if self.a != 0 => ip = usize::from(operand),
                3 => {}
                4 => self.b ^= self.c,
                5 => output.push((self.combo(operand)? & 7) as u8),
                6 => self.b = shift(self.a, self.combo(operand)?),
                _ => self.c = shift(self.a, self.combo(operand)?),
            }
        }
        Err(SolveError::failed("program did not halt"))
    }

    fn output_with(&self, a: u64) -> Result<Vec<u8>, SolveError> {
        Computer { a, ..self.clone() }.run()
    }

    /// Lowest A for which the program prints itself. Built three bits at a
    /// time: every candidate must already reproduce the program's tail.
    fn quine(&self) -> Result<u64, SolveError> {
        let mut candidates = BTreeSet::from([0u64]);
        for i in (0..self.program.len()).rev() {
            let mut next = BTreeSet::new();
            for high in &candidates {
                for low in 0..8 {
                    let a = (high << 3) | low;
                    if self.output_with(a)? == self.program[i..] {
                        next.insert(a);
                    }
                }
            }
            candidates = next;
        }
        candidates
            .first()
            .copied()
            .ok_or_else(|| SolveError::failed("no initial A reproduces the program"))
    }
}

fn register(line: &str, name: &str) -> anyhow::Result<u64> {
    let value = line
        .strip_prefix(&format!("Register {name}:"))
        .with_context(|| format!("expected register {name}"))?;
    match integers::<u64>(value)?[..] {
        [v] => Ok(v),
        _ => bail!("register {name} must hold one number"),
    }
}

fn computer(input: &str) -> anyhow::Result<Computer> {
    let groups = sections(input);
    let [registers, program] = groups.as_slice() else {
        bail!("expected registers and a program separated by a blank line");
    };
    let [a, b, c] = registers.as_slice() else {
        bail!("expected three registers");
    };
    let [program] = program.as_slice() else {
        bail!("expected a single program line");
    };

    let program = program
        .strip_prefix("Program:")
        .context("expected `Program:`")?;
    let program = integers::<u8>(program)?;
    ensure!(program.iter().all(|v| *v < 8), "program values must be 3-bit");

    Ok(Computer {
        a: register(a, "A")?,
        b: register(b, "B")?,
        c: register(c, "C")?,
        program,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Computer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        computer(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let output = shared.clone().run()?;
        Ok(comma_joined(output))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.quine()?.to_string())
    }
}
