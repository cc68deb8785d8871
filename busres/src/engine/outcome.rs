//! Results reported by reservation engine operations.

use serde::Serialize;

use crate::Customer;

/// Outcome of a seat reservation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReserveOutcome {
    /// The customer got a seat.
    Seated {
        /// Seats still free on the bus after this booking.
        seats_left: usize,
    },
    /// The bus was full and the customer joined the waiting list.
    Waitlisted {
        /// 1-based position in the waiting queue.
        position: usize,
    },
}

/// Outcome of a request for an additional seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdditionalSeatOutcome {
    /// The bus is full, so the request joined the waiting list.
    Waitlisted {
        /// 1-based position in the waiting queue.
        position: usize,
    },
    /// Seats are still free; a direct reservation should be used instead.
    SeatsAvailable {
        /// Number of free seats.
        seats_left: usize,
    },
}

/// Outcome of a cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The customer held no seat on the bus; nothing changed.
    NotReserved,
    /// The seat was released.
    Cancelled {
        /// Everyone who must be told about the cancellation, in delivery
        /// order: the cancelling customer, the remaining passengers, then
        /// the promoted customer if any.
        notifications: Vec<Notification>,
        /// The waiting-list head that took over the freed seat.
        promoted: Option<Customer>,
    },
}

impl CancelOutcome {
    /// Checks whether a seat was actually released.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// What a notification is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationKind {
    /// The recipient's own seat was cancelled.
    SeatCancelled,
    /// Another passenger on the same bus cancelled.
    CoPassengerCancelled {
        /// Name of the passenger who cancelled.
        co_passenger: String,
    },
    /// The recipient moved from the waiting list into a seat.
    PromotedFromWaitingList,
}

/// A message addressed to one customer.
///
/// # Examples
///
/// ```
/// use busres::{Notification, NotificationKind};
///
/// let note = Notification {
///     recipient: "Bob".to_string(),
///     bus_number: "B1".to_string(),
///     kind: NotificationKind::PromotedFromWaitingList,
/// };
/// assert!(note.to_string().starts_with("Notification to Bob:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Name of the customer being notified.
    pub recipient: String,
    /// The bus the notification concerns.
    pub bus_number: String,
    /// What happened.
    #[serde(flatten)]
    pub kind: NotificationKind,
}

impl Notification {
    pub(crate) fn new(recipient: &Customer, bus_number: &str, kind: NotificationKind) -> Self {
        Self {
            recipient: recipient.name().to_string(),
            bus_number: bus_number.to_string(),
            kind,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let to = &self.recipient;
        let bus = &self.bus_number;
        match &self.kind {
            NotificationKind::SeatCancelled => write!(
                f,
                "Notification to {to}: Your seat on bus {bus} has been cancelled successfully."
            ),
            NotificationKind::CoPassengerCancelled { co_passenger } => write!(
                f,
                "Notification to {to}: Dear {to}, your co-passenger {co_passenger} \
                 cancelled their seat on bus {bus} just now."
            ),
            NotificationKind::PromotedFromWaitingList => write!(
                f,
                "Notification to {to}: Dear {to}, your seat on bus {bus} is now booked \
                 from the waiting list!"
            ),
        }
    }
}

/// Seat usage of one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSummary {
    /// The bus number.
    pub bus_number: String,
    /// Total seats on the bus.
    pub capacity: usize,
    /// Seats currently booked.
    pub seated: usize,
    /// Customers in the waiting queue.
    pub waiting: usize,
}

impl SeatSummary {
    /// Returns the number of free seats.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.capacity.saturating_sub(self.seated)
    }
}
