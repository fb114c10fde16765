//! Document identifiers, statuses and search hit types.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier of a document in the index.
///
/// Ids are non-negative, unique and immutable once assigned.
pub type DocumentId = i32;

/// An indexed term.
///
/// Each distinct term is allocated exactly once; both the inverted and the
/// forward index share the same allocation, and matcher output clones the
/// handle rather than the text.
pub type Term = Arc<str>;

/// Per-document term weights, keyed by term in ascending order.
pub type TermFrequencies = BTreeMap<Term, f64>;

/// Moderation status attached to a document at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Live content, returned by default searches.
    Actual,
    /// Content kept in the index but no longer relevant.
    Irrelevant,
    /// Content hidden by moderation.
    Banned,
    /// Content scheduled for deletion.
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// A single ranked search result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Identifier of the matched document.
    pub document_id: DocumentId,
    /// Accumulated TF-IDF relevance over the query's plus-terms.
    pub relevance: f64,
    /// Average rating of the document.
    pub rating: i32,
}

impl SearchHit {
    /// Create a new search hit.
    pub fn new(document_id: DocumentId, relevance: f64, rating: i32) -> Self {
        SearchHit {
            document_id,
            relevance,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&DocumentStatus::Banned).unwrap();
        assert_eq!(json, "\"banned\"");
        let status: DocumentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, DocumentStatus::Banned);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(DocumentStatus::Actual.to_string(), "actual");
        assert_eq!(DocumentStatus::Removed.to_string(), "removed");
    }
}
