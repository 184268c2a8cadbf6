//! Bracket Planner — CLI entry point.
//!
//! Wires CSV ingestion to the core `plan()` call and renders the result
//! document. This binary, `src/cli.rs`, and `src/ingest/` are the thin
//! transport layer around the planner core (`src/timing.rs`,
//! `src/catalog.rs`, `src/services/`); see spec.md §1.

mod catalog;
mod cli;
mod config;
mod error;
mod ingest;
mod services;
mod timing;
mod types;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command, OutputFormat};
use services::planner;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env()?;
    let _guard = init_logging(&config);

    match cli.command {
        Some(Command::Plan { flights, drivers, shifts, autolifts, format }) => {
            run_plan(&flights, &drivers, &shifts, autolifts.as_deref(), format)
        }
        None => {
            anyhow::bail!("no subcommand given; run with `plan --flights <path> --drivers <path> --shifts <path>`")
        }
    }
}

fn init_logging(config: &config::Config) -> tracing_appender::non_blocking::WorkerGuard {
    std::fs::create_dir_all(&config.logs_dir).ok();
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.logs_dir, "bracket-planner.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter.clone()))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    guard
}

fn run_plan(
    flights_path: &Path,
    drivers_path: &Path,
    shifts_path: &Path,
    autolifts_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let flights_text = std::fs::read_to_string(flights_path)
        .with_context(|| format!("reading flights CSV at {}", flights_path.display()))?;
    let drivers_text = std::fs::read_to_string(drivers_path)
        .with_context(|| format!("reading drivers CSV at {}", drivers_path.display()))?;
    let shifts_text = std::fs::read_to_string(shifts_path)
        .with_context(|| format!("reading shifts CSV at {}", shifts_path.display()))?;

    let raw_flights = ingest::parse_flights_csv(&flights_text)?;
    let drivers = ingest::parse_drivers_csv(&drivers_text)?;
    let shifts = ingest::parse_shifts_csv(&shifts_text)?;

    if let Some(path) = autolifts_path {
        let autolifts_text = std::fs::read_to_string(path)
            .with_context(|| format!("reading autolifts CSV at {}", path.display()))?;
        let autolifts = ingest::parse_autolifts_csv(&autolifts_text)?;
        if autolifts.len() < drivers.len() {
            warn!(
                autolift_count = autolifts.len(),
                driver_count = drivers.len(),
                "fewer autolifts than drivers; not enforced by the planner"
            );
        }
    }

    info!(
        flight_count = raw_flights.len(),
        driver_count = drivers.len(),
        shift_count = shifts.len(),
        "ingestion complete, planning"
    );

    let result = planner::plan(raw_flights, &drivers, &shifts)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => print_text_summary(&result),
    }

    Ok(())
}

fn print_text_summary(result: &types::PlanResult) {
    println!("Brackets: {}", result.brackets.len());
    for b in &result.brackets {
        println!(
            "  {} [{:?}] driver={} flights={} start={} end={}",
            b.id,
            b.class,
            b.driver_id,
            b.flight_nos.join(","),
            timing::to_hhmm(b.start_time),
            timing::to_hhmm(b.end_time),
        );
    }
    println!("Shift assignments: {}", result.shift_assignments.len());
    for s in &result.shift_assignments {
        println!(
            "  driver={} shift={}-{} brackets={}",
            s.driver_id,
            s.shift_start,
            s.shift_end,
            s.bracket_ids.join(",")
        );
    }
    println!("Unassigned: {}", result.unassigned.len());
    for u in &result.unassigned {
        println!("  {} ({}) std={} reason={:?}", u.flight_no, u.ac_type, u.std, u.reason);
    }
    if !result.warnings.is_empty() {
        println!("Warnings:");
        for w in &result.warnings {
            println!("  {w:?}");
        }
    }
}
