//! Duplicate document removal.
//!
//! Two documents are duplicates when their sets of distinct terms are
//! equal, regardless of term frequencies. The scan visits documents in
//! ascending id order, so the lowest id with a given term-set survives.

use std::collections::BTreeSet;

use ahash::AHashSet;
use log::debug;

use crate::document::{DocumentId, Term};
use crate::engine::SearchEngine;

/// Remove every document whose distinct-term set duplicates a
/// lower-id document.
///
/// Each removal is announced on standard output as
/// `Found duplicate document id <id>`; the removed ids are also returned
/// in ascending order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocumentId> {
    let mut seen: AHashSet<BTreeSet<Term>> = AHashSet::new();
    let mut duplicates = Vec::new();
    for document_id in engine.document_ids() {
        let term_set: BTreeSet<Term> = engine
            .word_frequencies(document_id)
            .keys()
            .cloned()
            .collect();
        if !seen.insert(term_set) {
            duplicates.push(document_id);
        }
    }

    for &document_id in &duplicates {
        engine.remove_document(document_id);
        println!("Found duplicate document id {document_id}");
    }
    debug!("removed {} duplicate documents", duplicates.len());
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    #[test]
    fn test_keeps_lowest_id_of_each_term_set() {
        let mut engine = SearchEngine::from_stop_words_text("").unwrap();
        engine
            .add_document(1, "a b c", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(2, "c a b", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(3, "a b c c", DocumentStatus::Actual, &[])
            .unwrap();

        let removed = remove_duplicates(&mut engine);
        assert_eq!(removed, vec![2, 3]);
        assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_distinct_term_sets_survive() {
        let mut engine = SearchEngine::from_stop_words_text("").unwrap();
        engine
            .add_document(1, "a b", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(2, "a b c", DocumentStatus::Actual, &[])
            .unwrap();
        assert!(remove_duplicates(&mut engine).is_empty());
        assert_eq!(engine.document_count(), 2);
    }

    #[test]
    fn test_idempotent() {
        let mut engine = SearchEngine::from_stop_words_text("").unwrap();
        engine
            .add_document(5, "x y", DocumentStatus::Actual, &[])
            .unwrap();
        engine
            .add_document(6, "y x", DocumentStatus::Actual, &[])
            .unwrap();
        assert_eq!(remove_duplicates(&mut engine), vec![6]);
        assert!(remove_duplicates(&mut engine).is_empty());
        assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![5]);
    }
}
