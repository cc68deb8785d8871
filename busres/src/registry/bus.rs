//! The bus registry.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::store::RecordStore;
use crate::Bus;

/// Outcome of registering a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusRegistration {
    /// The bus was added and the registry saved.
    Registered,
    /// A bus with the same number already exists; nothing changed.
    AlreadyRegistered,
}

/// Registered buses keyed by bus number.
///
/// # Examples
///
/// ```
/// use busres::store::RecordStore;
/// use busres::{Bus, BusRegistration, BusRegistry};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut registry = BusRegistry::open(RecordStore::new(dir.path().join("buses.txt"))).unwrap();
///
/// let bus = Bus::builder("B1", 2).route("X", "Y").build().unwrap();
/// assert_eq!(registry.register(bus.clone()).unwrap(), BusRegistration::Registered);
/// assert_eq!(registry.register(bus).unwrap(), BusRegistration::AlreadyRegistered);
/// assert_eq!(registry.search_by_route("x", "y").len(), 1);
/// ```
#[derive(Debug)]
pub struct BusRegistry {
    store: RecordStore,
    buses: BTreeMap<String, Bus>,
}

impl BusRegistry {
    /// Creates an empty registry without reading the store.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            buses: BTreeMap::new(),
        }
    }

    /// Opens the registry, loading every valid bus from the store.
    ///
    /// When the file lists the same bus number twice, the later line wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(store: RecordStore) -> Result<Self> {
        let loaded = store.load::<Bus>()?;
        let mut registry = Self::new(store);
        for bus in loaded.records {
            registry.buses.insert(bus.bus_number().to_string(), bus);
        }
        log::debug!(
            "loaded {} bus(es) from {}",
            registry.buses.len(),
            registry.store.path().display()
        );
        Ok(registry)
    }

    /// Registers a new bus.
    ///
    /// Bus records are never replaced: registering a number that is already
    /// taken leaves the registry and its file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails. The bus stays registered in memory.
    pub fn register(&mut self, bus: Bus) -> Result<BusRegistration> {
        if self.buses.contains_key(bus.bus_number()) {
            log::warn!("bus {} is already registered", bus.bus_number());
            return Ok(BusRegistration::AlreadyRegistered);
        }

        log::info!("registered bus {bus}");
        self.buses.insert(bus.bus_number().to_string(), bus);
        self.save()?;
        Ok(BusRegistration::Registered)
    }

    /// Looks up a bus by number.
    #[must_use]
    pub fn lookup(&self, bus_number: &str) -> Option<&Bus> {
        self.buses.get(bus_number)
    }

    /// Finds every bus running from `start` to `end`, ignoring case.
    #[must_use]
    pub fn search_by_route(&self, start: &str, end: &str) -> Vec<&Bus> {
        self.buses
            .values()
            .filter(|bus| bus.serves_route(start, end))
            .collect()
    }

    /// Lists all buses ordered by bus number.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Bus> {
        self.buses.values().collect()
    }

    /// Returns the number of registered buses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buses.len()
    }

    /// Checks whether no buses are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn save(&self) -> Result<()> {
        self.store.save(self.buses.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn bus(number: &str, start: &str, end: &str) -> Bus {
        Bus::builder(number, 2)
            .route(start, end)
            .start_time("08:00")
            .fare(100.0)
            .build()
            .unwrap()
    }

    fn open(dir: &TempDir) -> BusRegistry {
        BusRegistry::open(RecordStore::new(dir.path().join("buses.txt"))).unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let dir = TempDir::new().unwrap();
        let mut registry = open(&dir);

        registry.register(bus("B1", "X", "Y")).unwrap();

        assert_eq!(registry.lookup("B1"), Some(&bus("B1", "X", "Y")));
        assert_eq!(registry.lookup("B2"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let dir = TempDir::new().unwrap();
        let mut registry = open(&dir);

        registry.register(bus("B1", "X", "Y")).unwrap();
        let outcome = registry.register(bus("B1", "P", "Q")).unwrap();

        assert_eq!(outcome, BusRegistration::AlreadyRegistered);
        assert_eq!(registry.lookup("B1").unwrap().start_point(), "X");
    }

    #[test]
    fn test_registrations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let mut registry = open(&dir);
            registry.register(bus("B2", "X", "Y")).unwrap();
            registry.register(bus("B1", "Y", "Z")).unwrap();
        }

        let registry = open(&dir);
        let numbers: Vec<_> = registry
            .list_all()
            .into_iter()
            .map(Bus::bus_number)
            .collect();
        assert_eq!(numbers, vec!["B1", "B2"]);
    }

    #[test]
    fn test_search_by_route_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut registry = open(&dir);
        registry.register(bus("B1", "Pune", "Mumbai")).unwrap();
        registry.register(bus("B2", "pune", "MUMBAI")).unwrap();
        registry.register(bus("B3", "Mumbai", "Pune")).unwrap();

        let found: Vec<_> = registry
            .search_by_route("PUNE", "mumbai")
            .into_iter()
            .map(Bus::bus_number)
            .collect();

        assert_eq!(found, vec!["B1", "B2"]);
        assert!(registry.search_by_route("Goa", "Pune").is_empty());
    }

    #[test]
    fn test_search_by_route_matches_accented_names() {
        let dir = TempDir::new().unwrap();
        let mut registry = open(&dir);
        registry.register(bus("B1", "Zürich", "Genève")).unwrap();

        let found = registry.search_by_route("ZÜRICH", "GENÈVE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].bus_number(), "B1");
    }

    #[test]
    fn test_open_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("buses.txt"),
            "B1,2,X,Y,08:00,100.0\nB2,2,X\nB3,0,X,Y,08:00,1\n",
        )
        .unwrap();

        let registry = open(&dir);

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("B1").is_some());
    }

    #[test]
    fn test_new_does_not_read_store() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("buses.txt"), "B1,2,X,Y,08:00,100.0\n").unwrap();

        let registry = BusRegistry::new(RecordStore::new(dir.path().join("buses.txt")));

        assert!(registry.is_empty());
    }
}
