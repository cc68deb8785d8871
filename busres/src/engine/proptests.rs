//! Property-based tests for seat allocation and waiting-list promotion.

use std::collections::VecDeque;

use proptest::prelude::*;
use tempfile::TempDir;

use super::{EngineOptions, ReservationEngine};
use crate::store::RecordStore;
use crate::{Bus, BusRegistry, Customer};

const NAMES: [&str; 5] = ["Alice", "Bob", "Carol", "Dave", "Erin"];

#[derive(Debug, Clone, Copy)]
enum Op {
    Reserve(usize),
    Cancel(usize),
    AdditionalSeat(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..NAMES.len()).prop_map(Op::Reserve),
        2 => (0..NAMES.len()).prop_map(Op::Cancel),
        1 => (0..NAMES.len()).prop_map(Op::AdditionalSeat),
    ]
}

fn customer(index: usize) -> Customer {
    Customer::builder(NAMES[index]).age(30).build().unwrap()
}

fn setup(seats: u32) -> (TempDir, BusRegistry, ReservationEngine) {
    let dir = TempDir::new().unwrap();
    let mut buses = BusRegistry::new(RecordStore::new(dir.path().join("buses.txt")));
    buses
        .register(Bus::builder("B1", seats).build().unwrap())
        .unwrap();
    let engine = ReservationEngine::new(
        RecordStore::new(dir.path().join("reservations.txt")),
        EngineOptions::default(),
    );
    (dir, buses, engine)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // A bus never seats more than its capacity, and nobody waits while a
    // seat is free
    #[test]
    fn seats_never_exceed_capacity(seats in 1u32..4, ops in prop::collection::vec(op(), 1..30)) {
        let (_dir, buses, mut engine) = setup(seats);
        let capacity = seats as usize;

        for op in ops {
            match op {
                Op::Reserve(i) => { engine.reserve(customer(i), "B1", &buses).unwrap(); }
                Op::Cancel(i) => { engine.cancel(&customer(i), "B1").unwrap(); }
                Op::AdditionalSeat(i) => { let _ = engine.request_additional_seat(customer(i), "B1", &buses); }
            }

            let seated = engine.reservations("B1").len();
            let waiting = engine.waiting_list("B1").len();
            prop_assert!(seated <= capacity);
            prop_assert!(waiting == 0 || seated == capacity);
        }
    }

    // Seats and queue follow a simple list-and-queue model exactly
    #[test]
    fn matches_fifo_model(seats in 1u32..4, ops in prop::collection::vec(op(), 1..30)) {
        let (_dir, buses, mut engine) = setup(seats);
        let capacity = seats as usize;
        let mut model_seated: Vec<usize> = Vec::new();
        let mut model_waiting: VecDeque<usize> = VecDeque::new();

        for op in ops {
            match op {
                Op::Reserve(i) => {
                    engine.reserve(customer(i), "B1", &buses).unwrap();
                    if model_seated.len() < capacity {
                        model_seated.push(i);
                    } else {
                        model_waiting.push_back(i);
                    }
                }
                Op::Cancel(i) => {
                    let outcome = engine.cancel(&customer(i), "B1").unwrap();
                    if let Some(pos) = model_seated.iter().position(|&s| s == i) {
                        prop_assert!(outcome.is_cancelled());
                        model_seated.remove(pos);
                        if let Some(next) = model_waiting.pop_front() {
                            model_seated.push(next);
                        }
                    } else {
                        prop_assert!(!outcome.is_cancelled());
                    }
                }
                Op::AdditionalSeat(i) => {
                    let result = engine.request_additional_seat(customer(i), "B1", &buses);
                    if !model_seated.contains(&i) {
                        prop_assert!(result.is_err());
                    } else if model_seated.len() == capacity {
                        model_waiting.push_back(i);
                    }
                }
            }
        }

        let seated: Vec<_> = model_seated.into_iter().map(customer).collect();
        let waiting: Vec<_> = model_waiting.into_iter().map(customer).collect();
        prop_assert_eq!(engine.reservations("B1"), seated.as_slice());
        prop_assert_eq!(engine.waiting_list("B1"), waiting.iter().collect::<Vec<_>>());
    }

    // Reopening the file restores the exact seat and queue order, including
    // per-bus entries that were emptied by cancellations
    #[test]
    fn reopen_restores_state(seats in 1u32..3, ops in prop::collection::vec(op(), 1..20)) {
        let (dir, buses, mut engine) = setup(seats);
        engine.reserve(customer(0), "B1", &buses).unwrap();
        for op in ops {
            match op {
                Op::Reserve(i) => { engine.reserve(customer(i), "B1", &buses).unwrap(); }
                Op::Cancel(i) => { engine.cancel(&customer(i), "B1").unwrap(); }
                Op::AdditionalSeat(i) => { let _ = engine.request_additional_seat(customer(i), "B1", &buses); }
            }
        }

        let reopened = ReservationEngine::open(
            RecordStore::new(dir.path().join("reservations.txt")),
            EngineOptions::default(),
        )
        .unwrap();

        prop_assert_eq!(reopened.reservations("B1"), engine.reservations("B1"));
        prop_assert_eq!(reopened.waiting_list("B1"), engine.waiting_list("B1"));
        prop_assert_eq!(&reopened.state, &engine.state);
    }
}
