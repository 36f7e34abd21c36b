//! Fuzzy matching utilities for contact search.
//!
//! This module provides fuzzy name matching and exact or partial phone
//! matching over the records of an address book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, ContactQuery, MatchResult, MatchType};
