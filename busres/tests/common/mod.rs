//! Common test utilities for integration tests.
//!
//! This module provides a temporary data directory holding all three data
//! files, plus fixture builders for buses and customers.

use std::fs;
use std::path::PathBuf;

use busres::store::RecordStore;
use busres::{Bus, BusRegistry, Customer, CustomerRegistry, EngineOptions, ReservationEngine};
use tempfile::TempDir;

/// A temporary data directory with the default file layout.
pub struct TestSystem {
    dir: TempDir,
}

/// The three components opened over a [`TestSystem`].
#[allow(dead_code)]
pub struct Components {
    pub buses: BusRegistry,
    pub customers: CustomerRegistry,
    pub engine: ReservationEngine,
}

#[allow(dead_code)]
impl TestSystem {
    /// Creates an empty data directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }

    pub fn bus_store(&self) -> RecordStore {
        RecordStore::new(self.path("buses.txt"))
    }

    pub fn customer_store(&self) -> RecordStore {
        RecordStore::new(self.path("customers.txt"))
    }

    pub fn reservation_store(&self) -> RecordStore {
        RecordStore::new(self.path("reservations.txt"))
    }

    /// Opens all three components from disk, as a fresh process would.
    pub fn open(&self) -> Components {
        self.open_with(EngineOptions::default())
    }

    pub fn open_with(&self, options: EngineOptions) -> Components {
        Components {
            buses: BusRegistry::open(self.bus_store()).unwrap(),
            customers: CustomerRegistry::open(self.customer_store()).unwrap(),
            engine: ReservationEngine::open(self.reservation_store(), options).unwrap(),
        }
    }

    /// Writes raw contents to a data file.
    pub fn write(&self, file: &str, contents: &str) {
        fs::write(self.path(file), contents).unwrap();
    }

    /// Reads a data file, or an empty string if it does not exist.
    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.path(file)).unwrap_or_default()
    }
}

/// Builds a bus with a fixed route, time and fare.
#[allow(dead_code)]
pub fn bus(number: &str, seats: u32) -> Bus {
    Bus::builder(number, seats)
        .route("X", "Y")
        .start_time("08:00")
        .fare(100.0)
        .build()
        .unwrap()
}

/// Builds a customer whose contact details derive from the name.
#[allow(dead_code)]
pub fn customer(name: &str) -> Customer {
    let lower = name.to_lowercase();
    Customer::builder(name)
        .mobile_number("555-0100")
        .email(format!("{lower}@example.com"))
        .city("Pune")
        .age(30)
        .build()
        .unwrap()
}

/// Names of the given customers, in order.
#[allow(dead_code)]
pub fn names<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> Vec<&'a str> {
    customers.into_iter().map(Customer::name).collect()
}
