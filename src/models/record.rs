//! Record model: one contact and its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep the order they were added in
/// and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// The list is untouched when validation fails.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value`.
    ///
    /// Returns the removed phone, or `None` when nothing matched.
    pub fn remove_phone(&mut self, value: &str) -> Option<Phone> {
        let index = self.position(value)?;
        Some(self.phones.remove(index))
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is validated before the list is touched, so a failed edit
    /// leaves the record as it was. The replacement takes the old phone's
    /// position; if `old` is absent, `new` is appended.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(new)?;
        match self.position(old) {
            Some(index) => self.phones[index] = phone,
            None => self.phones.push(phone),
        }
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_new_record_has_no_phones() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_new_record_rejects_blank_name() {
        assert_eq!(Record::new(" "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let record = record_with("Alice", &["1111111111", "2222222222", "1111111111"]);
        assert_eq!(
            phone_values(&record),
            vec!["1111111111", "2222222222", "1111111111"]
        );
    }

    #[test]
    fn test_add_invalid_phone_leaves_list_unchanged() {
        let mut record = record_with("Alice", &["1111111111"]);
        assert!(record.add_phone("12345").is_err());
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut record = record_with("Alice", &["1111111111"]);
        let before = record.clone();

        record.add_phone("2222222222").unwrap();
        assert!(record.remove_phone("2222222222").is_some());
        assert_eq!(record, before);

        // Removing an absent value is a no-op, however often it is repeated.
        assert!(record.remove_phone("2222222222").is_none());
        assert!(record.remove_phone("2222222222").is_none());
        assert_eq!(record, before);
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = record_with("Alice", &["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111");
        assert_eq!(phone_values(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record_with("Alice", &["1111111111", "2222222222"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_appends_when_old_missing() {
        let mut record = record_with("Alice", &["1111111111"]);
        record.edit_phone("9999999999", "3333333333").unwrap();
        assert_eq!(phone_values(&record), vec!["1111111111", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut record = record_with("Alice", &["1111111111"]);
        let result = record.edit_phone("1111111111", "bad");
        assert_eq!(result, Err(ValidationError::InvalidPhone("bad".to_string())));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_find_phone() {
        let record = record_with("Alice", &["1111111111"]);
        assert_eq!(
            record.find_phone("1111111111").map(Phone::as_str),
            Some("1111111111")
        );
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_display() {
        let record = record_with("Alice", &["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );

        let empty = Record::new("Bob").unwrap();
        assert_eq!(empty.to_string(), "Contact name: Bob, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let record = record_with("Alice", &["1111111111"]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","phones":["1111111111"]}"#);

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_rejects_bad_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name":"Alice","phones":["123"]}"#);
        assert!(result.is_err());
    }
}
