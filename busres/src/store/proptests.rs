//! Property-based tests for line encoding and forgiving loads.

use super::{decode_line, encode_line, RecordStore};
use crate::{Bus, Customer};
use proptest::prelude::*;
use std::fs;

// Printable text that may contain the delimiter and quote characters
fn field_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,\"@.:-]{0,20}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ,\"]{0,15}[a-zA-Z]"
}

fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        name_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        0u32..120,
    )
        .prop_map(|(name, mobile, email, city, age)| {
            Customer::builder(name)
                .mobile_number(mobile)
                .email(email)
                .city(city)
                .age(age)
                .build()
                .unwrap()
        })
}

fn bus_strategy() -> impl Strategy<Value = Bus> {
    (
        name_strategy(),
        1u32..100,
        field_strategy(),
        field_strategy(),
        field_strategy(),
        0u32..100_000,
    )
        .prop_map(|(number, seats, start, end, time, cents)| {
            Bus::builder(number, seats)
                .route(start, end)
                .start_time(time)
                .fare(f64::from(cents) / 100.0)
                .build()
                .unwrap()
        })
}

// Lines that can never decode as a customer: too few fields
fn malformed_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(,[a-z]{1,8}){0,2}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Any valid customer survives encode/decode, delimiter characters included
    #[test]
    fn customer_line_round_trip(customer in customer_strategy()) {
        let line = encode_line(&customer).unwrap();
        prop_assert!(!line.contains('\n'));
        let decoded: Customer = decode_line(&line).unwrap();
        prop_assert_eq!(decoded, customer);
    }

    #[test]
    fn bus_line_round_trip(bus in bus_strategy()) {
        let line = encode_line(&bus).unwrap();
        let decoded: Bus = decode_line(&line).unwrap();
        prop_assert_eq!(decoded, bus);
    }

    // N valid and M malformed lines load exactly the N valid records, in order
    #[test]
    fn malformed_lines_never_hide_valid_ones(
        entries in prop::collection::vec(
            prop_oneof![
                customer_strategy().prop_map(Ok),
                malformed_strategy().prop_map(Err),
            ],
            0..20,
        )
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.txt");

        let mut contents = String::new();
        let mut expected = Vec::new();
        let mut malformed = 0;
        for entry in entries {
            match entry {
                Ok(customer) => {
                    contents.push_str(&encode_line(&customer).unwrap());
                    expected.push(customer);
                }
                Err(garbage) => {
                    contents.push_str(&garbage);
                    malformed += 1;
                }
            }
            contents.push('\n');
        }
        fs::write(&path, contents).unwrap();

        let loaded = RecordStore::new(&path).load::<Customer>().unwrap();
        prop_assert_eq!(loaded.records, expected);
        prop_assert_eq!(loaded.skipped.len(), malformed);
    }
}
