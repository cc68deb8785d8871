#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # busres
//!
//! A library for managing bus registrations, customers and seat
//! reservations with waiting lists.
//!
//! All state lives in plain text files that are loaded on startup and
//! rewritten after every change.
//!
//! ## Core Types
//!
//! - [`Bus`] and [`Customer`]: validated entities
//! - [`BusRegistry`] and [`CustomerRegistry`]: file-backed collections
//! - [`ReservationEngine`]: seats, waiting lists, cancellation and promotion
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use busres::store::RecordStore;
//! use busres::{Bus, BusRegistry, Customer, EngineOptions, ReservationEngine};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut buses = BusRegistry::open(RecordStore::new(dir.path().join("buses.txt"))).unwrap();
//! buses
//!     .register(Bus::builder("B1", 40).route("Pune", "Mumbai").build().unwrap())
//!     .unwrap();
//!
//! let mut engine = ReservationEngine::open(
//!     RecordStore::new(dir.path().join("reservations.txt")),
//!     EngineOptions::default(),
//! )
//! .unwrap();
//!
//! let alice = Customer::builder("Alice").city("Pune").build().unwrap();
//! engine.reserve(alice.clone(), "B1", &buses).unwrap();
//! assert!(engine.is_reserved(&alice, "B1"));
//! ```

pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod logging;
pub mod registry;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use engine::{
    AdditionalSeatOutcome, CancelOutcome, EngineOptions, Notification, NotificationKind,
    ReservationEngine, ReserveOutcome, SeatSummary,
};
pub use entity::{Bus, BusBuilder, Customer, CustomerBuilder, ValidationError};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use registry::{BusRegistration, BusRegistry, CustomerRegistration, CustomerRegistry};
