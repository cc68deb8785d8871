//! Customers command implementation.
//!
//! Lists registered customers, most recently registered first.

use crate::error::CliError;
use crate::output::{write_rows, ListFormat};
use crate::utils::{open_state, AppState, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List registered customers, newest first.
#[derive(Args)]
pub struct CustomersCommand {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl CustomersCommand {
    /// Execute the customers command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let state = open_state(global)?;
        self.run(&state, &mut std::io::stdout().lock())
    }

    /// List from already opened state.
    pub fn run<W: Write>(&self, state: &AppState, out: &mut W) -> Result<(), CliError> {
        let format = self
            .format
            .unwrap_or_else(|| state.config.output_format().into());

        write_rows(
            out,
            &state.customers.list_newest_first(),
            format,
            "No customers registered.",
        )
    }
}
