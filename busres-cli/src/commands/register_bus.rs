//! Register-bus command implementation.

use crate::error::CliError;
use crate::utils::{open_state, AppState, GlobalOptions};
use busres::{Bus, BusRegistration};
use clap::Args;
use std::io::Write;

/// Register a new bus.
#[derive(Args)]
pub struct RegisterBusCommand {
    /// Bus number (unique)
    #[arg(value_name = "BUS")]
    pub bus_number: String,

    /// Total number of seats
    #[arg(long, value_name = "COUNT")]
    pub seats: u32,

    /// Start point of the route
    #[arg(long = "from", value_name = "PLACE", default_value = "")]
    pub start_point: String,

    /// End point of the route
    #[arg(long = "to", value_name = "PLACE", default_value = "")]
    pub end_point: String,

    /// Departure time
    #[arg(long = "time", value_name = "TIME", default_value = "")]
    pub start_time: String,

    /// Ticket fare
    #[arg(long, value_name = "AMOUNT", default_value_t = 0.0)]
    pub fare: f64,
}

impl RegisterBusCommand {
    /// Execute the register-bus command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut state = open_state(global)?;
        self.run(&mut state, &mut std::io::stdout().lock())
    }

    /// Register against already opened state, writing the result to `out`.
    ///
    /// A bus number that is already taken is a semantic failure; the
    /// existing bus is left untouched.
    pub fn run<W: Write>(&self, state: &mut AppState, out: &mut W) -> Result<(), CliError> {
        let bus = Bus::builder(&self.bus_number, self.seats)
            .route(&self.start_point, &self.end_point)
            .start_time(&self.start_time)
            .fare(self.fare)
            .build()?;
        let summary = bus.to_string();
        let number = bus.bus_number().to_string();

        match state.buses.register(bus)? {
            BusRegistration::Registered => {
                writeln!(out, "Bus registered successfully: {summary}")?;
                Ok(())
            }
            BusRegistration::AlreadyRegistered => Err(CliError::SemanticFailure(format!(
                "Bus with number {number} is already registered"
            ))),
        }
    }
}
