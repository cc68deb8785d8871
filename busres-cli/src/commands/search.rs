//! Search command implementation.
//!
//! Finds buses by route. Both endpoints must match, ignoring case and
//! surrounding whitespace.

use crate::error::CliError;
use crate::output::{write_rows, ListFormat};
use crate::utils::{open_state, AppState, GlobalOptions};
use clap::Args;
use std::io::Write;

/// Search buses by start and end point.
#[derive(Args)]
pub struct SearchCommand {
    /// Start point
    #[arg(value_name = "FROM")]
    pub from: String,

    /// End point
    #[arg(value_name = "TO")]
    pub to: String,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let state = open_state(global)?;
        self.run(&state, &mut std::io::stdout().lock())
    }

    /// Search already opened state.
    pub fn run<W: Write>(&self, state: &AppState, out: &mut W) -> Result<(), CliError> {
        let format = self
            .format
            .unwrap_or_else(|| state.config.output_format().into());
        let found = state.buses.search_by_route(&self.from, &self.to);
        log::debug!(
            "{} bus(es) match {} -> {}",
            found.len(),
            self.from,
            self.to
        );

        write_rows(
            out,
            &found,
            format,
            "No buses found for the specified route.",
        )
    }
}
