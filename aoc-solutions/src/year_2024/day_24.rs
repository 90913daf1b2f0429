//! Crossed wires
//!
//! Part 2 assumes the circuit is a ripple-carry adder and flags gate outputs
//! that break its wiring rules rather than simulating swaps.

use std::collections::{BTreeSet, HashMap};

use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::parse::{comma_joined, invalid, sections};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 24, tags = ["circuit"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a && b,
            Op::Or => a || b,
            Op::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Gate<'a> {
    a: &'a str,
    op: Op,
    b: &'a str,
    out: &'a str,
}

impl Gate<'_> {
    fn reads_input_bits(&self) -> bool {
        [self.a, self.b]
            .iter()
            .any(|w| w.starts_with('x') || w.starts_with('y'))
    }

    fn reads_first_bit(&self) -> bool {
        [self.a, self.b].iter().any(|&w| w == "x00" || w == "y00")
    }
}

pub struct Device<'a> {
    initial: Vec<(&'a str, bool)>,
    gates: Vec<Gate<'a>>,
}

impl Device<'_> {
    fn simulate(&self) -> Result<u64, SolveError> {
        let mut values: HashMap<&str, bool> = self.initial.iter().copied().collect();
        let mut pending: Vec<&Gate<'_>> = self.gates.iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|gate| match (values.get(gate.a), values.get(gate.b)) {
                (Some(&a), Some(&b)) => {
                    values.insert(gate.out, gate.op.apply(a, b));
                    false
                }
                _ => true,
            });
            if pending.len() == before {
                return Err(SolveError::failed(format!(
                    "{before} gates never receive both inputs"
                )));
            }
        }

        let mut z: Vec<(&str, bool)> = values
            .into_iter()
            .filter(|(wire, _)| wire.starts_with('z'))
            .collect();
        if z.len() > 64 {
            return Err(SolveError::failed("more than 64 output bits"));
        }
        z.sort_unstable();
        Ok(z.iter().rev().fold(0, |n, &(_, bit)| n << 1 | u64::from(bit)))
    }

    /// Outputs that cannot be right in a ripple-carry adder:
    /// - a `z` bit not driven by XOR, except the final carry;
    /// - an XOR of internal wires that does not drive a `z` bit;
    /// - an XOR of input bits (other than bit 0) that does not feed an XOR;
    /// - an AND (other than the bit-0 carry) feeding anything but an OR;
    /// - an XOR feeding an OR.
    fn crossed_wires(&self) -> BTreeSet<&str> {
        let highest_z = self
            .gates
            .iter()
            .map(|g| g.out)
            .filter(|w| w.starts_with('z'))
            .max();
        let mut readers: HashMap<&str, Vec<Op>> = HashMap::new();
        for gate in &self.gates {
            readers.entry(gate.a).or_default().push(gate.op);
            readers.entry(gate.b).or_default().push(gate.op);
        }
        let feeds = |wire: &str, pred: fn(Op) -> bool| {
            readers
                .get(wire)
                .is_some_and(|ops| ops.iter().any(|&op| pred(op)))
        };

        self.gates
            .iter()
            .filter(|g| {
                let to_z = g.out.starts_with('z');
                match g.op {
                    Op::Xor if !to_z && !g.reads_input_bits() => true,
                    Op::Xor if g.reads_input_bits()
                        && !g.reads_first_bit()
                        && !feeds(g.out, |op| op == Op::Xor) =>
                    {
                        true
                    }
                    Op::Xor => feeds(g.out, |op| op == Op::Or),
                    _ if to_z && Some(g.out) != highest_z => true,
                    Op::And if g.a != "x00" && g.b != "x00" => feeds(g.out, |op| op != Op::Or),
                    _ => false,
                }
            })
            .map(|g| g.out)
            .collect()
    }
}

fn initial(line: &str) -> anyhow::Result<(&str, bool)> {
    let (wire, value) = line.split_once(": ").context("expected `wire: bit`")?;
    match value.trim() {
        "0" => Ok((wire, false)),
        "1" => Ok((wire, true)),
        other => bail!("wire {wire} has value {other:?}"),
    }
}

fn gate(line: &str) -> anyhow::Result<Gate<'_>> {
    let [a, op, b, arrow, out] = line.split_whitespace().collect::<Vec<_>>()[..] else {
        bail!("expected `a OP b -> out`, found {line:?}");
    };
    let op = match op {
        "AND" => Op::And,
        "OR" => Op::Or,
        "XOR" => Op::Xor,
        other => bail!("unknown gate {other:?}"),
    };
    if arrow != "->" {
        bail!("expected `->`, found {arrow:?}");
    }
    Ok(Gate { a, op, b, out })
}

fn device(input: &str) -> anyhow::Result<Device<'_>> {
    let groups = sections(input);
    let [initial_lines, gate_lines] = groups.as_slice() else {
        bail!("expected initial wires, a blank line, then gates");
    };
    let initial = initial_lines
        .iter()
        .enumerate()
        .map(|(i, &l)| initial(l).with_context(|| format!("wire {}", i + 1)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let gates = gate_lines
        .iter()
        .enumerate()
        .map(|(i, &l)| gate(l).with_context(|| format!("gate {}", i + 1)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Device { initial, gates })
}

impl AocParser for Solver {
    type SharedData<'a> = Device<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        device(input).map_err(invalid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.simulate()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let crossed = shared.crossed_wires();
        debug!(count = crossed.len(), "crossed wires");
        if crossed.is_empty() {
            return Err(SolveError::failed("no crossed wires found"));
        }
        Ok(comma_joined(crossed))
    }
}
