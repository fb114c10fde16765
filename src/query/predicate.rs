//! Filter predicates applied to candidate documents during search.

use crate::document::{DocumentId, DocumentStatus};

/// A filter over `(document id, status, rating)` deciding whether a
/// candidate document may appear in search results.
///
/// The trait requires `Sync` so a single predicate can be shared by the
/// parallel evaluation path. Any matching closure implements it:
///
/// ```
/// use lancea::query::DocumentPredicate;
/// use lancea::DocumentStatus;
///
/// fn accepts<P: DocumentPredicate>(p: P) -> bool {
///     p.matches(7, DocumentStatus::Actual, 3)
/// }
///
/// assert!(accepts(|id: i32, _status: DocumentStatus, _rating: i32| id % 2 == 1));
/// ```
pub trait DocumentPredicate: Sync {
    /// Decide whether the document passes the filter.
    fn matches(&self, document_id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool + Sync,
{
    fn matches(&self, document_id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(document_id, status, rating)
    }
}

/// Predicate accepting exactly the documents with the given status.
#[derive(Debug, Clone, Copy)]
pub struct StatusPredicate {
    status: DocumentStatus,
}

impl StatusPredicate {
    /// Create a predicate matching `status`.
    pub fn new(status: DocumentStatus) -> Self {
        StatusPredicate { status }
    }
}

impl DocumentPredicate for StatusPredicate {
    fn matches(&self, _document_id: DocumentId, status: DocumentStatus, _rating: i32) -> bool {
        status == self.status
    }
}
