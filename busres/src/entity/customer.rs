//! The customer record.

use serde::{Deserialize, Serialize};

use super::{key_field, text_field, ValidationError};
use crate::store::{parse_field, Record};

/// A registered customer.
///
/// Equality is structural over every field: two customers with the same
/// name but a different email are different passengers as far as seat
/// lookups are concerned.
///
/// # Examples
///
/// ```
/// use busres::Customer;
///
/// let alice = Customer::builder("Alice")
///     .mobile_number("555-0100")
///     .email("alice@example.com")
///     .city("Pune")
///     .age(30)
///     .build()
///     .unwrap();
///
/// assert_eq!(alice.name(), "Alice");
/// assert_eq!(alice.age(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    mobile_number: String,
    email: String,
    city: String,
    age: u32,
}

impl Customer {
    /// Creates a new customer builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> CustomerBuilder {
        CustomerBuilder {
            name: name.into(),
            mobile_number: String::new(),
            email: String::new(),
            city: String::new(),
            age: 0,
        }
    }

    /// Returns the unique customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mobile number.
    #[must_use]
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the home city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Mobile: {}, Email: {}, City: {}, Age: {}",
            self.name, self.mobile_number, self.email, self.city, self.age
        )
    }
}

impl Record for Customer {
    const KIND: &'static str = "customer";
    const FIELD_COUNT: usize = 5;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.mobile_number.clone(),
            self.email.clone(),
            self.city.clone(),
            self.age.to_string(),
        ]
    }

    fn from_fields(fields: &csv::StringRecord) -> Result<Self, String> {
        let age = parse_field(fields, 4, "age")?;
        Self::builder(&fields[0])
            .mobile_number(&fields[1])
            .email(&fields[2])
            .city(&fields[3])
            .age(age)
            .build()
            .map_err(|e| e.to_string())
    }
}

/// Builder for creating `Customer` instances.
#[derive(Debug)]
pub struct CustomerBuilder {
    name: String,
    mobile_number: String,
    email: String,
    city: String,
    age: u32,
}

impl CustomerBuilder {
    /// Sets the mobile number.
    #[must_use]
    pub fn mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = mobile_number.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the home city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the age.
    #[must_use]
    pub const fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Builds the customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or any field
    /// contains a line break.
    pub fn build(self) -> Result<Customer, ValidationError> {
        Ok(Customer {
            name: key_field("name", &self.name)?,
            mobile_number: text_field("mobile_number", &self.mobile_number)?,
            email: text_field("email", &self.email)?,
            city: text_field("city", &self.city)?,
            age: self.age,
        })
    }
}
