//! Fuzzy matching implementation for the `search` command.
//!
//! This module provides contact matching with:
//! - Exact and partial matching on phone numbers
//! - Fuzzy name matching (substring and Levenshtein similarity)
//! - Confidence scoring (0-100 scale)

use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals one of the record's phones
    ExactPhone,

    /// Query is a digit run inside one of the record's phones
    PartialPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query for contact matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Phone digits to search for
    pub phone: Option<String>,
}

impl ContactQuery {
    /// Build a query from free text.
    ///
    /// All-digit text searches phone numbers; anything else searches names.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }
        if text.chars().all(|c| c.is_ascii_digit()) {
            Self {
                phone: Some(text.to_string()),
                ..Default::default()
            }
        } else {
            Self {
                name: Some(text.to_string()),
                ..Default::default()
            }
        }
    }
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find records matching the query.
    ///
    /// # Arguments
    /// * `query` - Name or phone to look for
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name
    pub fn find_matches<'a, I>(
        &self,
        query: &ContactQuery,
        records: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in records {
            if let Some(phone) = &query.phone {
                if let Some((confidence, match_type)) = self.match_phone(phone, record) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            record,
                            confidence,
                            match_type,
                        });
                    }
                    continue;
                }
            }

            if let Some(name) = &query.name {
                if let Some(confidence) = self.fuzzy_match_name(name, record.name().as_str()) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            record,
                            confidence,
                            match_type: MatchType::FuzzyName,
                        });
                    }
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);

        results
    }

    /// Match phone digits, exact (100) before partial (80).
    fn match_phone(&self, query: &str, record: &Record) -> Option<(u8, MatchType)> {
        if record.find_phone(query).is_some() {
            return Some((100, MatchType::ExactPhone));
        }
        if record.phones().iter().any(|p| p.as_str().contains(query)) {
            return Some((80, MatchType::PartialPhone));
        }
        None
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.len() as f64 / target.len() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row of the edit-distance matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
