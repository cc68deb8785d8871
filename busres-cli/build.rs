//! Build script for busres-cli.
//!
//! This script generates the busres man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("busres")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage bus seat reservations and waiting lists")
        .long_about(
            "Command-line tool for registering buses and customers, booking seats, \
             and promoting waiting customers when seats are cancelled",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("BUSRES_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("register-customer")
                .about("Register a customer")
                .long_about("Register a customer; re-registering a name replaces the record"),
            Command::new("customers")
                .about("List registered customers")
                .long_about("List registered customers, most recently registered first"),
            Command::new("register-bus")
                .about("Register a new bus")
                .long_about("Register a bus with its seat count, route, departure time and fare"),
            Command::new("buses")
                .about("List registered buses")
                .long_about("Display all registered buses in table, JSON or CSV format"),
            Command::new("search")
                .about("Search buses by route")
                .long_about("Find buses whose start and end points match, ignoring case"),
            Command::new("reserve")
                .about("Reserve a seat on a bus")
                .long_about("Book a seat, or join the waiting list when the bus is full"),
            Command::new("cancel")
                .about("Cancel a seat reservation")
                .long_about(
                    "Cancel a seat, notify co-passengers and promote the head of the waiting list",
                ),
            Command::new("request-seat")
                .about("Request an additional seat")
                .long_about("Queue an additional seat for a customer already booked on a full bus"),
            Command::new("reservations")
                .about("List the customers seated on a bus")
                .long_about("Display the seated customers of a bus in booking order"),
            Command::new("waiting-list")
                .about("List the waiting queue of a bus")
                .long_about("Display the waiting customers of a bus, head of the queue first"),
            Command::new("status")
                .about("Show seat usage per bus")
                .long_about("Show capacity, booked seats, free seats and waiting customers"),
            Command::new("shell")
                .about("Start the interactive menu")
                .long_about("Run the numbered menu loop over standard input"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("busres.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
