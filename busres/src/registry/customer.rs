//! The customer registry.

use std::collections::HashMap;

use crate::error::Result;
use crate::store::RecordStore;
use crate::Customer;

/// Outcome of registering a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerRegistration {
    /// A new customer was added.
    Registered,
    /// An existing customer with the same name was replaced.
    Updated,
}

/// Registered customers keyed by name.
///
/// Registration order is tracked explicitly: the file is written oldest
/// first, and re-registering a name moves it to the newest position.
#[derive(Debug)]
pub struct CustomerRegistry {
    store: RecordStore,
    customers: HashMap<String, Customer>,
    order: Vec<String>,
}

impl CustomerRegistry {
    /// Creates an empty registry without reading the store.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            customers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Opens the registry, loading every valid customer from the store.
    ///
    /// Lines are replayed as registrations, so a name that appears twice
    /// keeps its later record and position.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(store: RecordStore) -> Result<Self> {
        let loaded = store.load::<Customer>()?;
        let mut registry = Self::new(store);
        for customer in loaded.records {
            registry.insert(customer);
        }
        log::debug!(
            "loaded {} customer(s) from {}",
            registry.customers.len(),
            registry.store.path().display()
        );
        Ok(registry)
    }

    /// Registers a customer, replacing any existing record with that name.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails. The change stays applied in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use busres::store::RecordStore;
    /// use busres::{Customer, CustomerRegistration, CustomerRegistry};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = RecordStore::new(dir.path().join("customers.txt"));
    /// let mut registry = CustomerRegistry::open(store).unwrap();
    ///
    /// let alice = Customer::builder("Alice").age(30).build().unwrap();
    /// let older = Customer::builder("Alice").age(31).build().unwrap();
    ///
    /// assert_eq!(registry.register(alice).unwrap(), CustomerRegistration::Registered);
    /// assert_eq!(registry.register(older).unwrap(), CustomerRegistration::Updated);
    /// assert_eq!(registry.lookup("Alice").unwrap().age(), 31);
    /// ```
    pub fn register(&mut self, customer: Customer) -> Result<CustomerRegistration> {
        log::info!("registered customer {customer}");
        let outcome = self.insert(customer);
        self.save()?;
        Ok(outcome)
    }

    /// Looks up a customer by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Customer> {
        self.customers.get(name)
    }

    /// Lists customers from the most recently registered to the oldest.
    #[must_use]
    pub fn list_newest_first(&self) -> Vec<&Customer> {
        self.order
            .iter()
            .rev()
            .filter_map(|name| self.customers.get(name))
            .collect()
    }

    /// Returns the number of registered customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Checks whether no customers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn insert(&mut self, customer: Customer) -> CustomerRegistration {
        let name = customer.name().to_string();
        let outcome = if self.customers.insert(name.clone(), customer).is_some() {
            self.order.retain(|existing| existing != &name);
            CustomerRegistration::Updated
        } else {
            CustomerRegistration::Registered
        };
        self.order.push(name);
        outcome
    }

    fn save(&self) -> Result<()> {
        self.store
            .save(self.order.iter().filter_map(|name| self.customers.get(name)))
    }
}
