//! Per-screen record store.
//!
//! A [`RecordStore`] is the authoritative, unfiltered collection behind one
//! list screen. Projections borrow it; only [`RecordStore::load`] and
//! [`RecordStore::remove`] change it.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// An entity with a stable, unique identifier.
pub trait Record {
    /// Identifier type.
    type Id: Copy + Eq + Hash + Display;

    /// This record's identifier.
    fn id(&self) -> Self::Id;
}

/// In-memory collection of records, in load order.
///
/// Identifiers are unique: [`load`](Self::load) keeps the first record for
/// each identifier and drops later duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`.
    ///
    /// Duplicate identifiers are dropped as in [`load`](Self::load).
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        let mut store = Self::new();
        store.load(records);
        store
    }

    /// Replace every record with `records`.
    ///
    /// Returns how many records were dropped because their identifier had
    /// already been seen earlier in `records`.
    pub fn load(&mut self, records: Vec<T>) -> usize {
        let incoming = records.len();
        let mut seen = HashSet::with_capacity(incoming);
        self.records = records
            .into_iter()
            .filter(|record| seen.insert(record.id()))
            .collect();
        incoming - self.records.len()
    }

    /// Remove the record with `id`, keeping the order of the rest.
    ///
    /// Removing an identifier that is not present is a no-op and returns `None`.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// All records in load order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
