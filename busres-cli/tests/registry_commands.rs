//! Integration tests for the bus and customer registry commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_register_bus_and_list() {
    let env = TestEnv::new();
    env.register_bus("B2", 10);
    env.register_bus("B1", 40);

    env.command()
        .arg("buses")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "BUS_NUMBER\tTOTAL_SEATS\tSTART_POINT\tEND_POINT\tSTART_TIME\tFARE\n\
             B1\t40\tPune\tGoa\t08:00\t450.00\n\
             B2\t10\tPune\tGoa\t08:00\t450.00\n",
        ));

    assert_eq!(
        env.read("buses.txt"),
        "B1,40,Pune,Goa,08:00,450\nB2,10,Pune,Goa,08:00,450\n"
    );
}

#[test]
fn test_register_bus_twice_is_rejected() {
    let env = TestEnv::new();
    env.register_bus("B1", 40);

    env.command()
        .args(["register-bus", "B1", "--seats", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already registered"));

    env.command()
        .args(["buses", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B1,40,"));
}

#[test]
fn test_register_bus_with_zero_seats() {
    let env = TestEnv::new();

    env.command()
        .args(["register-bus", "B1", "--seats", "0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("total_seats"));
}

#[test]
fn test_empty_listings() {
    let env = TestEnv::new();

    env.command()
        .arg("buses")
        .assert()
        .success()
        .stdout("No buses registered.\n");
    env.command()
        .arg("customers")
        .assert()
        .success()
        .stdout("No customers registered.\n");
    env.command()
        .args(["customers", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_customers_listed_newest_first() {
    let env = TestEnv::new();
    env.register_customer("Alice");
    env.register_customer("Bob");
    env.register_customer("Carol");

    assert_eq!(env.names(&["customers"]), vec!["Carol", "Bob", "Alice"]);
}

#[test]
fn test_reregistering_customer_updates_and_moves_to_front() {
    let env = TestEnv::new();
    env.register_customer("Alice");
    env.register_customer("Bob");

    env.command()
        .args(["register-customer", "Alice", "--city", "Mumbai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer updated: Alice"));

    assert_eq!(env.names(&["customers"]), vec!["Alice", "Bob"]);
    env.command()
        .args(["customers", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice,,,Mumbai,0"));
}

#[test]
fn test_search_by_route_ignores_case() {
    let env = TestEnv::new();
    env.register_bus("B1", 40);
    env.command()
        .args(["register-bus", "B2", "--seats", "20", "--from", "Pune", "--to", "Mumbai"])
        .assert()
        .success();

    env.command()
        .args(["search", "pune", "GOA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B1\t40"))
        .stdout(predicate::str::contains("B2").not());

    env.command()
        .args(["search", "Goa", "Pune"])
        .assert()
        .success()
        .stdout("No buses found for the specified route.\n");
}

#[test]
fn test_customer_fields_with_commas() {
    let env = TestEnv::new();

    env.command()
        .args(["register-customer", "O'Neil, Jr.", "--city", "Washington, D.C."])
        .assert()
        .success();

    assert_eq!(env.names(&["customers"]), vec!["O'Neil, Jr."]);
    assert_eq!(env.read("customers.txt").lines().count(), 1);
}
