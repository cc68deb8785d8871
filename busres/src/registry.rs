//! File-backed registries for buses and customers.
//!
//! Each registry owns a [`RecordStore`](crate::store::RecordStore), keeps the
//! whole collection in memory and rewrites its file after every change.

pub mod bus;
pub mod customer;

pub use bus::{BusRegistration, BusRegistry};
pub use customer::{CustomerRegistration, CustomerRegistry};
