//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books a seat on a
//! bus for a registered customer, or queues the customer when the bus is
//! full.

use crate::error::CliError;
use crate::utils::{open_state, AppState, GlobalOptions};
use busres::ReserveOutcome;
use clap::Args;
use std::io::Write;

/// Reserve a seat on a bus.
#[derive(Args)]
pub struct ReserveCommand {
    /// Name of a registered customer
    #[arg(value_name = "CUSTOMER")]
    pub customer: String,

    /// Bus number
    #[arg(value_name = "BUS")]
    pub bus: String,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut state = open_state(global)?;
        self.run(&mut state, &mut std::io::stdout().lock())
    }

    /// Reserve against already opened state, writing the result to `out`.
    pub fn run<W: Write>(&self, state: &mut AppState, out: &mut W) -> Result<(), CliError> {
        let customer = state.customer(&self.customer)?;
        let bus = self.bus.trim();

        match state.engine.reserve(customer, bus, &state.buses)? {
            ReserveOutcome::Seated { seats_left } => writeln!(
                out,
                "Seat reserved for {} on bus {bus} ({seats_left} seats left).",
                self.customer.trim()
            )?,
            ReserveOutcome::Waitlisted { position } => writeln!(
                out,
                "Bus seats are full. {} added to the waiting list for bus {bus} at position {position}.",
                self.customer.trim()
            )?,
        }

        Ok(())
    }
}
