//! Cancel command implementation.
//!
//! Cancels one seat, prints the notifications sent to the cancelling
//! customer and their co-passengers, and reports any promotion from the
//! waiting list.

use crate::error::CliError;
use crate::utils::{open_state, AppState, GlobalOptions};
use busres::CancelOutcome;
use clap::Args;
use std::io::Write;

/// Cancel a seat reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Name of a registered customer
    #[arg(value_name = "CUSTOMER")]
    pub customer: String,

    /// Bus number
    #[arg(value_name = "BUS")]
    pub bus: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut state = open_state(global)?;
        self.run(&mut state, &mut std::io::stdout().lock())
    }

    /// Cancel against already opened state, writing the notifications to `out`.
    pub fn run<W: Write>(&self, state: &mut AppState, out: &mut W) -> Result<(), CliError> {
        let customer = state.customer(&self.customer)?;
        let bus = self.bus.trim();

        let CancelOutcome::Cancelled { notifications, .. } = state.engine.cancel(&customer, bus)?
        else {
            return Err(CliError::SemanticFailure(format!(
                "No reservation found for {} on bus {bus}",
                customer.name()
            )));
        };

        for notification in &notifications {
            writeln!(out, "{notification}")?;
        }

        Ok(())
    }
}
