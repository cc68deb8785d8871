//! Status command implementation.
//!
//! Shows seat usage per bus: capacity, seats taken, seats free and the
//! length of the waiting queue.

use crate::error::CliError;
use crate::output::{write_rows, ListFormat};
use crate::utils::{open_state, AppState, GlobalOptions};
use busres::SeatSummary;
use clap::Args;
use std::io::Write;

/// Show seat usage for one bus or every registered bus.
#[derive(Args)]
pub struct StatusCommand {
    /// Bus number (default: all registered buses)
    #[arg(value_name = "BUS")]
    pub bus: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let state = open_state(global)?;
        self.run(&state, &mut std::io::stdout().lock())
    }

    /// Summarize already opened state.
    pub fn run<W: Write>(&self, state: &AppState, out: &mut W) -> Result<(), CliError> {
        let format = self
            .format
            .unwrap_or_else(|| state.config.output_format().into());

        let summaries = match self.bus.as_deref() {
            Some(bus) => vec![state.engine.seat_summary(bus.trim(), &state.buses)?],
            None => state
                .buses
                .list_all()
                .into_iter()
                .map(|bus| state.engine.seat_summary(bus.bus_number(), &state.buses))
                .collect::<busres::Result<Vec<SeatSummary>>>()?,
        };
        let rows: Vec<_> = summaries.iter().collect();

        write_rows(out, &rows, format, "No buses registered.")
    }
}
