//! AOC CLI - runs the registered solvers against local input files

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;
mod pictures;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, halted};
use output::OutputFormatter;
use tracing::debug;

fn main() {
    let args = Args::parse();

    if let Err(e) = Config::from_args(args).and_then(run) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), CliError> {
    logging::init(config.verbose);
    debug!(?config, "resolved configuration");

    let registry = build_registry(&config.tags)?;
    debug!(solvers = registry.len(), "registry built");

    let executor = Executor::new(registry, &config);
    let formatter = OutputFormatter::new(config.quiet);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        formatter.print_no_work();
        return Ok(());
    }

    // Report every missing input before solving anything
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for (year, day) in &missing {
            eprintln!("  - {year}/day-{day:02}");
        }
        let (year, day) = missing[0];
        return Err(CliError::MissingInput {
            year,
            day,
            tried: executor.inputs().candidates(year, day),
        });
    }

    let results = executor.execute(&work_items, |result| formatter.print_result(result))?;
    formatter.print_summary(&results);
    if let Some(err) = halted(&results) {
        return Err(err);
    }

    if config.pictures && work_items.iter().any(|w| (w.year, w.day) == (2024, 14)) {
        let path = pictures::write_robot_pictures(executor.inputs(), pictures::full_period())?;
        if !config.quiet {
            eprintln!("Robot pictures written to {}", path.display());
        }
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
