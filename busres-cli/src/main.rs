//! Main entry point for the busres CLI.
//!
//! This is the command-line interface for the bus reservation system.
//! It provides commands for managing buses, customers and seats:
//! - `register-bus`, `buses`, `search`: Bus registry
//! - `register-customer`, `customers`: Customer registry
//! - `reserve`, `cancel`, `request-seat`: Seat bookings
//! - `reservations`, `waiting-list`, `status`: Per-bus listings
//! - `shell`: Interactive menu

use busres_cli::cli::{self, Cli};
use busres_cli::utils::GlobalOptions;
use clap::Parser;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library logging through the configured level
    busres::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::RegisterCustomer(cmd) => cmd.execute(&global),
        cli::Command::Customers(cmd) => cmd.execute(&global),
        cli::Command::RegisterBus(cmd) => cmd.execute(&global),
        cli::Command::Buses(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::RequestSeat(cmd) => cmd.execute(&global),
        cli::Command::Reservations(cmd) => cmd.execute(&global),
        cli::Command::WaitingList(cmd) => cmd.execute(&global),
        cli::Command::Status(cmd) => cmd.execute(&global),
        cli::Command::Shell(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
