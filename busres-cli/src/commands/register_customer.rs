//! Register-customer command implementation.

use crate::error::CliError;
use crate::utils::{open_state, AppState, GlobalOptions};
use busres::{Customer, CustomerRegistration};
use clap::Args;
use std::io::Write;

/// Register a customer, replacing any earlier record with the same name.
#[derive(Args)]
pub struct RegisterCustomerCommand {
    /// Customer name (unique)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Mobile number
    #[arg(long, value_name = "NUMBER", default_value = "")]
    pub mobile: String,

    /// Email address
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Home city
    #[arg(long, value_name = "CITY", default_value = "")]
    pub city: String,

    /// Age in years
    #[arg(long, value_name = "YEARS", default_value_t = 0)]
    pub age: u32,
}

impl RegisterCustomerCommand {
    /// Execute the register-customer command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut state = open_state(global)?;
        self.run(&mut state, &mut std::io::stdout().lock())
    }

    /// Register against already opened state, writing the result to `out`.
    pub fn run<W: Write>(&self, state: &mut AppState, out: &mut W) -> Result<(), CliError> {
        let customer = Customer::builder(&self.name)
            .mobile_number(&self.mobile)
            .email(&self.email)
            .city(&self.city)
            .age(self.age)
            .build()?;
        let name = customer.name().to_string();

        match state.customers.register(customer)? {
            CustomerRegistration::Registered => {
                writeln!(out, "Customer registered successfully: {name}")?;
            }
            CustomerRegistration::Updated => writeln!(out, "Customer updated: {name}")?,
        }

        Ok(())
    }
}
