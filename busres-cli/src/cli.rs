//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BusesCommand, CancelCommand, CompletionsCommand, CustomersCommand, RegisterBusCommand,
    RegisterCustomerCommand, RequestSeatCommand, ReservationsCommand, ReserveCommand,
    SearchCommand, ShellCommand, StatusCommand, WaitingListCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for bus seat reservations and waiting lists.
#[derive(Parser)]
#[command(name = "busres")]
#[command(version, about = "Manage bus seat reservations and waiting lists", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BUSRES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Register a customer (re-registering a name replaces the record)
    RegisterCustomer(RegisterCustomerCommand),

    /// List registered customers, newest first
    Customers(CustomersCommand),

    /// Register a new bus
    RegisterBus(RegisterBusCommand),

    /// List registered buses
    Buses(BusesCommand),

    /// Search buses by route
    Search(SearchCommand),

    /// Reserve a seat, or join the waiting list when the bus is full
    Reserve(ReserveCommand),

    /// Cancel a seat reservation
    Cancel(CancelCommand),

    /// Request an additional seat on a full bus
    RequestSeat(RequestSeatCommand),

    /// List the customers seated on a bus
    Reservations(ReservationsCommand),

    /// List the waiting queue of a bus
    WaitingList(WaitingListCommand),

    /// Show seat usage per bus
    Status(StatusCommand),

    /// Start the interactive menu
    Shell(ShellCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["busres", "buses", "--quiet", "--data-dir", "/tmp/x"])
            .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Command::Buses(_)));
    }

    #[test]
    fn test_register_bus_requires_seats() {
        assert!(Cli::try_parse_from(["busres", "register-bus", "B1"]).is_err());
    }
}
