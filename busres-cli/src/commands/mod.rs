//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `register_customer`: Register or update a customer
//! - `customers`: List customers, newest first
//! - `register_bus`: Register a new bus
//! - `buses`: List registered buses
//! - `search`: Find buses by route
//! - `reserve`: Book a seat or join the waiting list
//! - `cancel`: Cancel a seat and promote from the waiting list
//! - `request_seat`: Queue an additional seat on a full bus
//! - `reservations`: List the seated customers of a bus
//! - `waiting_list`: List the waiting queue of a bus
//! - `status`: Show seat usage per bus
//! - `shell`: Interactive menu
//! - `completions`: Generate shell completion scripts

pub mod buses;
pub mod cancel;
pub mod completions;
pub mod customers;
pub mod register_bus;
pub mod register_customer;
pub mod request_seat;
pub mod reservations;
pub mod reserve;
pub mod search;
pub mod shell;
pub mod status;
pub mod waiting_list;

pub use buses::BusesCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use customers::CustomersCommand;
pub use register_bus::RegisterBusCommand;
pub use register_customer::RegisterCustomerCommand;
pub use request_seat::RequestSeatCommand;
pub use reservations::ReservationsCommand;
pub use reserve::ReserveCommand;
pub use search::SearchCommand;
pub use shell::ShellCommand;
pub use status::StatusCommand;
pub use waiting_list::WaitingListCommand;
