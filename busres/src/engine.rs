//! Seat reservations, waiting lists and cancellation with promotion.
//!
//! The [`ReservationEngine`] tracks, per bus number, the customers holding
//! seats (in booking order) and a FIFO waiting queue. A bus never seats more
//! customers than its capacity: once full, further reservations join the
//! queue, and a cancellation promotes the queue head into the freed seat.
//!
//! Every successful mutation rewrites the reservations file.
//!
//! # Examples
//!
//! ```
//! use busres::store::RecordStore;
//! use busres::{Bus, BusRegistry, CancelOutcome, Customer, EngineOptions};
//! use busres::{ReservationEngine, ReserveOutcome};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut buses = BusRegistry::new(RecordStore::new(dir.path().join("buses.txt")));
//! buses.register(Bus::builder("B1", 1).route("X", "Y").build().unwrap()).unwrap();
//!
//! let store = RecordStore::new(dir.path().join("reservations.txt"));
//! let mut engine = ReservationEngine::open(store, EngineOptions::default()).unwrap();
//!
//! let alice = Customer::builder("Alice").build().unwrap();
//! let bob = Customer::builder("Bob").build().unwrap();
//!
//! assert_eq!(
//!     engine.reserve(alice.clone(), "B1", &buses).unwrap(),
//!     ReserveOutcome::Seated { seats_left: 0 }
//! );
//! assert_eq!(
//!     engine.reserve(bob.clone(), "B1", &buses).unwrap(),
//!     ReserveOutcome::Waitlisted { position: 1 }
//! );
//!
//! let outcome = engine.cancel(&alice, "B1").unwrap();
//! assert!(matches!(outcome, CancelOutcome::Cancelled { promoted: Some(ref c), .. } if c == &bob));
//! assert_eq!(engine.reservations("B1"), &[bob][..]);
//! ```

mod outcome;
mod sections;

#[cfg(test)]
mod proptests;

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::store::RecordStore;
use crate::{Bus, BusRegistry, Customer};

pub use outcome::{
    AdditionalSeatOutcome, CancelOutcome, Notification, NotificationKind, ReserveOutcome,
    SeatSummary,
};
use sections::Sections;

/// Behaviour switches for the reservation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Whether a customer may book more than one seat on the same bus
    /// through plain reservations.
    pub allow_duplicate_bookings: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            allow_duplicate_bookings: true,
        }
    }
}

impl EngineOptions {
    /// Sets whether duplicate bookings are allowed.
    #[must_use]
    pub const fn with_allow_duplicate_bookings(mut self, allow: bool) -> Self {
        self.allow_duplicate_bookings = allow;
        self
    }
}

fn capacity_of(bus: &Bus) -> usize {
    usize::try_from(bus.total_seats()).unwrap_or(usize::MAX)
}

/// Per-bus seat assignments and waiting queues, backed by a sectioned file.
#[derive(Debug)]
pub struct ReservationEngine {
    store: RecordStore,
    options: EngineOptions,
    state: Sections,
}

impl ReservationEngine {
    /// Creates an engine with no reservations, without reading the store.
    #[must_use]
    pub fn new(store: RecordStore, options: EngineOptions) -> Self {
        Self {
            store,
            options,
            state: Sections::default(),
        }
    }

    /// Opens the engine, loading reservations and waiting lists from the store.
    ///
    /// Malformed customer lines and lines outside any section are skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(store: RecordStore, options: EngineOptions) -> Result<Self> {
        let lines = store.read_lines()?;
        let (state, skipped) = Sections::decode(&lines);

        for line in &skipped {
            log::warn!(
                "{}:{}: skipping line '{}': {}",
                store.path().display(),
                line.line_number,
                line.content,
                line.reason
            );
        }
        log::debug!(
            "loaded reservations for {} bus(es) from {}",
            state.reservations.len(),
            store.path().display()
        );

        Ok(Self {
            store,
            options,
            state,
        })
    }

    /// Returns the engine options.
    #[must_use]
    pub const fn options(&self) -> EngineOptions {
        self.options
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Reserves a seat, or queues the customer when the bus is full.
    ///
    /// # Errors
    ///
    /// - [`Error::BusNotFound`] if no bus has this number
    /// - [`Error::AlreadyReserved`] if duplicate bookings are disabled and
    ///   the customer already holds a seat on the bus
    /// - a storage error if saving fails; the change stays applied in memory
    pub fn reserve(
        &mut self,
        customer: Customer,
        bus_number: &str,
        buses: &BusRegistry,
    ) -> Result<ReserveOutcome> {
        let bus = buses.lookup(bus_number).ok_or_else(|| Error::BusNotFound {
            bus_number: bus_number.to_string(),
        })?;
        let capacity = capacity_of(bus);

        if !self.options.allow_duplicate_bookings && self.is_reserved(&customer, bus_number) {
            return Err(Error::AlreadyReserved {
                name: customer.name().to_string(),
                bus_number: bus_number.to_string(),
            });
        }

        let seated = self
            .state
            .reservations
            .entry(bus_number.to_string())
            .or_default();

        let outcome = if seated.len() < capacity {
            log::info!("{} reserved a seat on bus {bus_number}", customer.name());
            seated.push(customer);
            ReserveOutcome::Seated {
                seats_left: capacity - seated.len(),
            }
        } else {
            log::info!(
                "bus {bus_number} is full, {} joins the waiting list",
                customer.name()
            );
            let queue = self
                .state
                .waiting_list
                .entry(bus_number.to_string())
                .or_default();
            queue.push_back(customer);
            ReserveOutcome::Waitlisted {
                position: queue.len(),
            }
        };

        self.save()?;
        Ok(outcome)
    }

    /// Checks whether the customer holds a seat on the bus.
    #[must_use]
    pub fn is_reserved(&self, customer: &Customer, bus_number: &str) -> bool {
        self.state
            .reservations
            .get(bus_number)
            .is_some_and(|seated| seated.contains(customer))
    }

    /// Requests one more seat for a customer who already holds one.
    ///
    /// When the bus is full the request joins the waiting list. Otherwise
    /// nothing changes and the free seat count is reported.
    ///
    /// # Errors
    ///
    /// - [`Error::NotReserved`] if the customer holds no seat on the bus
    /// - [`Error::BusNotFound`] if no bus has this number
    /// - a storage error if saving fails
    pub fn request_additional_seat(
        &mut self,
        customer: Customer,
        bus_number: &str,
        buses: &BusRegistry,
    ) -> Result<AdditionalSeatOutcome> {
        if !self.is_reserved(&customer, bus_number) {
            return Err(Error::NotReserved {
                name: customer.name().to_string(),
                bus_number: bus_number.to_string(),
            });
        }

        let bus = buses.lookup(bus_number).ok_or_else(|| Error::BusNotFound {
            bus_number: bus_number.to_string(),
        })?;
        let capacity = capacity_of(bus);
        let seated = self.reservations(bus_number).len();

        if seated < capacity {
            return Ok(AdditionalSeatOutcome::SeatsAvailable {
                seats_left: capacity - seated,
            });
        }

        log::info!(
            "{} queued for an additional seat on bus {bus_number}",
            customer.name()
        );
        let queue = self
            .state
            .waiting_list
            .entry(bus_number.to_string())
            .or_default();
        queue.push_back(customer);
        let position = queue.len();

        self.save()?;
        Ok(AdditionalSeatOutcome::Waitlisted { position })
    }

    /// Cancels one seat held by the customer.
    ///
    /// The earliest matching seat is released. The remaining passengers are
    /// notified, and the head of the waiting list, if any, takes the seat.
    /// Notifications are also written to the log.
    ///
    /// # Errors
    ///
    /// Returns a storage error if saving fails. A cancellation of a seat the
    /// customer does not hold succeeds with [`CancelOutcome::NotReserved`]
    /// and writes nothing.
    pub fn cancel(&mut self, customer: &Customer, bus_number: &str) -> Result<CancelOutcome> {
        let Some(seated) = self.state.reservations.get_mut(bus_number) else {
            return Ok(CancelOutcome::NotReserved);
        };
        let Some(index) = seated.iter().position(|c| c == customer) else {
            return Ok(CancelOutcome::NotReserved);
        };

        let cancelled = seated.remove(index);
        let mut notifications = vec![Notification::new(
            &cancelled,
            bus_number,
            NotificationKind::SeatCancelled,
        )];
        notifications.extend(seated.iter().map(|passenger| {
            Notification::new(
                passenger,
                bus_number,
                NotificationKind::CoPassengerCancelled {
                    co_passenger: cancelled.name().to_string(),
                },
            )
        }));

        let promoted = self
            .state
            .waiting_list
            .get_mut(bus_number)
            .and_then(|queue| queue.pop_front());
        if let Some(next) = &promoted {
            seated.push(next.clone());
            notifications.push(Notification::new(
                next,
                bus_number,
                NotificationKind::PromotedFromWaitingList,
            ));
        }

        for notification in &notifications {
            log::info!("{notification}");
        }

        self.save()?;
        Ok(CancelOutcome::Cancelled {
            notifications,
            promoted,
        })
    }

    /// Returns the customers holding seats on the bus, in booking order.
    #[must_use]
    pub fn reservations(&self, bus_number: &str) -> &[Customer] {
        self.state
            .reservations
            .get(bus_number)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Returns the waiting queue of the bus, head first.
    #[must_use]
    pub fn waiting_list(&self, bus_number: &str) -> Vec<&Customer> {
        self.state
            .waiting_list
            .get(bus_number)
            .map(|queue| queue.iter().collect())
            .unwrap_or_default()
    }

    /// Lists every bus number with seated or waiting customers, sorted.
    #[must_use]
    pub fn bus_numbers(&self) -> Vec<&str> {
        let seated = self
            .state
            .reservations
            .iter()
            .filter(|(_, s)| !s.is_empty())
            .map(|(bus, _)| bus.as_str());
        let waiting = self
            .state
            .waiting_list
            .iter()
            .filter(|(_, q)| !q.is_empty())
            .map(|(bus, _)| bus.as_str());
        seated
            .chain(waiting)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Summarizes seat usage of a registered bus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BusNotFound`] if no bus has this number.
    pub fn seat_summary(&self, bus_number: &str, buses: &BusRegistry) -> Result<SeatSummary> {
        let bus = buses.lookup(bus_number).ok_or_else(|| Error::BusNotFound {
            bus_number: bus_number.to_string(),
        })?;
        Ok(SeatSummary {
            bus_number: bus.bus_number().to_string(),
            capacity: capacity_of(bus),
            seated: self.reservations(bus_number).len(),
            waiting: self.waiting_list(bus_number).len(),
        })
    }

    fn save(&self) -> Result<()> {
        self.store.write_lines(self.state.encode()?)
    }
}
