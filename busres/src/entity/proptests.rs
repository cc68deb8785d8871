//! Property-based tests for `Bus` and `Customer` construction.

use super::{Bus, Customer};
use proptest::prelude::*;

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Surrounding whitespace never becomes part of a key
    #[test]
    fn customer_name_is_trimmed(name in "[a-zA-Z]{1,12}", left in padding(), right in padding()) {
        let customer = Customer::builder(format!("{left}{name}{right}")).build().unwrap();
        prop_assert_eq!(customer.name(), name.as_str());
    }

    // Any positive capacity and non-negative fare builds
    #[test]
    fn bus_accepts_valid_capacity_and_fare(seats in 1u32.., fare in 0.0f64..1.0e9) {
        let bus = Bus::builder("B1", seats).fare(fare).build().unwrap();
        prop_assert_eq!(bus.total_seats(), seats);
        prop_assert!(bus.fare() >= 0.0);
    }

    #[test]
    fn bus_rejects_negative_fare(fare in -1.0e9f64..-0.001) {
        prop_assert!(Bus::builder("B1", 1).fare(fare).build().is_err());
    }

    // Route matching ignores case in both directions of the comparison
    #[test]
    fn route_match_is_case_insensitive(start in "[a-zA-Zà-ýÀ-Ý]{1,10}", end in "[a-zA-Zà-ýÀ-Ý]{1,10}") {
        let bus = Bus::builder("B1", 1).route(start.clone(), end.clone()).build().unwrap();
        prop_assert!(bus.serves_route(&start.to_uppercase(), &end.to_lowercase()));
    }
}
