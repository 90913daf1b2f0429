//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `AutoRegisterSolver`,
//! so linking this crate is enough for
//! [`SolverRegistryBuilder::register_all_plugins`](aoc_solver::SolverRegistryBuilder::register_all_plugins)
//! to find it.

pub mod utils;

#[cfg(feature = "year-2024")]
pub mod year_2024;
