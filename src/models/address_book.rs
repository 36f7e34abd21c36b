//! AddressBook: the in-memory store of records keyed by name.

use super::record::Record;
use crate::error::{BookError, BookResult};
use std::collections::HashMap;

/// A mapping from contact name to [`Record`].
///
/// Iteration follows the order names were first added. Adding a record
/// under an existing name replaces it in the same position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, overwriting any existing entry.
    ///
    /// Returns the record that was replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key.clone(), record);
        if replaced.is_none() {
            self.order.push(key);
        }
        replaced
    }

    /// Look up the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no such contact exists.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no such contact exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    /// Iterate over records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
