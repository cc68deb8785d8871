//! Request-seat command implementation.
//!
//! A customer who already holds a seat may ask for another one. The
//! request is queued only when the bus is full; otherwise the customer is
//! pointed at a plain reservation.

use crate::error::CliError;
use crate::utils::{open_state, AppState, GlobalOptions};
use busres::AdditionalSeatOutcome;
use clap::Args;
use std::io::Write;

/// Request an additional seat on a full bus.
#[derive(Args)]
pub struct RequestSeatCommand {
    /// Name of a registered customer holding a seat on the bus
    #[arg(value_name = "CUSTOMER")]
    pub customer: String,

    /// Bus number
    #[arg(value_name = "BUS")]
    pub bus: String,
}

impl RequestSeatCommand {
    /// Execute the request-seat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut state = open_state(global)?;
        self.run(&mut state, &mut std::io::stdout().lock())
    }

    /// Request against already opened state, writing the result to `out`.
    pub fn run<W: Write>(&self, state: &mut AppState, out: &mut W) -> Result<(), CliError> {
        let customer = state.customer(&self.customer)?;
        let name = customer.name().to_string();
        let bus = self.bus.trim();

        match state
            .engine
            .request_additional_seat(customer, bus, &state.buses)?
        {
            AdditionalSeatOutcome::Waitlisted { position } => writeln!(
                out,
                "Bus seats are full. {name} added to the waiting list for bus {bus} at position {position}."
            )?,
            AdditionalSeatOutcome::SeatsAvailable { seats_left } => writeln!(
                out,
                "Seats are still available on bus {bus} ({seats_left} left). Use `busres reserve` to book a seat."
            )?,
        }

        Ok(())
    }
}
