//! CLI argument parsing for the bracket-planner binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bracket-planner", about = "In-flight catering bracket planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plan one day: ingest flights/drivers/shifts CSV and emit the
    /// result document (default if no subcommand given).
    Plan {
        /// Flights CSV path.
        #[arg(long)]
        flights: PathBuf,

        /// Drivers CSV path.
        #[arg(long)]
        drivers: PathBuf,

        /// Shifts CSV path.
        #[arg(long)]
        shifts: PathBuf,

        /// Autolifts CSV path (optional; parsed for completeness, not
        /// used as a planning constraint — see DESIGN.md).
        #[arg(long)]
        autolifts: Option<PathBuf>,

        /// Output rendering.
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
