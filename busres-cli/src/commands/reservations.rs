//! Reservations command implementation.

use crate::error::CliError;
use crate::output::{write_rows, ListFormat};
use crate::utils::{open_state, AppState, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List the customers seated on a bus, in booking order.
#[derive(Args)]
pub struct ReservationsCommand {
    /// Bus number
    #[arg(value_name = "BUS")]
    pub bus: String,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl ReservationsCommand {
    /// Execute the reservations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let state = open_state(global)?;
        self.run(&state, &mut std::io::stdout().lock())
    }

    /// List from already opened state.
    pub fn run<W: Write>(&self, state: &AppState, out: &mut W) -> Result<(), CliError> {
        let format = self
            .format
            .unwrap_or_else(|| state.config.output_format().into());
        let bus = self.bus.trim();
        let seated: Vec<_> = state.engine.reservations(bus).iter().collect();

        write_rows(
            out,
            &seated,
            format,
            &format!("No reservations found for bus {bus}"),
        )
    }
}
