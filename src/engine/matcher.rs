//! Per-document query matching.
//!
//! Matching reports which of a query's plus-terms occur in one specific
//! document. Any minus-term occurring in the document empties the result;
//! the document's status is returned either way.

use rayon::prelude::*;

use crate::document::{DocumentId, DocumentStatus, Term};
use crate::engine::SearchEngine;
use crate::error::{LanceaError, Result};
use crate::policy::ExecutionPolicy;
use crate::query::parser::QueryParser;

impl SearchEngine {
    /// Match a query against one document.
    ///
    /// Returns the ascending, duplicate-free list of plus-terms present
    /// in the document, and the document's status. The list is empty if
    /// any minus-term is present. Fails with
    /// [`LanceaError::DocumentNotFound`] if the id is not live.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocumentId,
    ) -> Result<(Vec<Term>, DocumentStatus)> {
        let parser = QueryParser::new(self.stop_words());
        let query = parser.parse(raw_query)?;
        let info = self
            .documents
            .get(&document_id)
            .ok_or(LanceaError::DocumentNotFound(document_id))?;

        for term in &query.minus_terms {
            let in_document = self
                .inverted_index
                .get(term.as_str())
                .is_some_and(|postings| postings.contains_key(&document_id));
            if in_document {
                return Ok((Vec::new(), info.status));
            }
        }

        let mut matched: Vec<Term> = Vec::new();
        for term in &query.plus_terms {
            if let Some((term, postings)) = self.inverted_index.get_key_value(term.as_str()) {
                if postings.contains_key(&document_id) {
                    matched.push(term.clone());
                }
            }
        }
        matched.sort_unstable();
        matched.dedup();
        Ok((matched, info.status))
    }

    /// Policy-selectable variant of [`match_document`](Self::match_document).
    ///
    /// The parallel path works off the document's forward entry instead
    /// of the inverted index; both paths return the same term set.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        document_id: DocumentId,
    ) -> Result<(Vec<Term>, DocumentStatus)> {
        match policy {
            ExecutionPolicy::Sequential => self.match_document(raw_query, document_id),
            ExecutionPolicy::Parallel => {
                let parser = QueryParser::new(self.stop_words());
                let query = parser.parse_with_policy(policy, raw_query)?;
                let info = self
                    .documents
                    .get(&document_id)
                    .ok_or(LanceaError::DocumentNotFound(document_id))?;
                let document_words = self.word_frequencies(document_id);

                let has_minus_term = query
                    .minus_terms
                    .par_iter()
                    .any(|term| document_words.contains_key(term.as_str()));
                if has_minus_term {
                    return Ok((Vec::new(), info.status));
                }

                let mut matched: Vec<Term> = query
                    .plus_terms
                    .par_iter()
                    .filter_map(|term| {
                        document_words
                            .get_key_value(term.as_str())
                            .map(|(term, _)| term.clone())
                    })
                    .collect();
                matched.par_sort_unstable();
                matched.dedup();
                Ok((matched, info.status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    fn match_fixture() -> SearchEngine {
        let mut engine = SearchEngine::from_stop_words_text("in the").unwrap();
        engine
            .add_document(7, "cat in the city of dogs", DocumentStatus::Irrelevant, &[3])
            .unwrap();
        engine
    }

    #[test]
    fn test_match_collects_present_plus_terms() {
        let engine = match_fixture();
        let (terms, status) = engine.match_document("city cat bird cat", 7).unwrap();
        let terms: Vec<&str> = terms.iter().map(|term| &**term).collect();
        assert_eq!(terms, vec!["cat", "city"]);
        assert_eq!(status, DocumentStatus::Irrelevant);
    }

    #[test]
    fn test_match_minus_term_empties_result() {
        let engine = match_fixture();
        let (terms, status) = engine.match_document("city cat -dogs", 7).unwrap();
        assert!(terms.is_empty());
        assert_eq!(status, DocumentStatus::Irrelevant);
    }

    #[test]
    fn test_match_absent_minus_term_is_harmless() {
        let engine = match_fixture();
        let (terms, _) = engine.match_document("city -bird", 7).unwrap();
        let terms: Vec<&str> = terms.iter().map(|term| &**term).collect();
        assert_eq!(terms, vec!["city"]);
    }

    #[test]
    fn test_match_unknown_document_is_an_error() {
        let engine = match_fixture();
        let result = engine.match_document("city", 8);
        assert!(matches!(result, Err(LanceaError::DocumentNotFound(8))));
    }

    #[test]
    fn test_match_policies_agree() {
        let engine = match_fixture();
        for query in ["city cat bird", "city -dogs", "of city of -bird"] {
            let sequential = engine
                .match_document_with_policy(ExecutionPolicy::Sequential, query, 7)
                .unwrap();
            let parallel = engine
                .match_document_with_policy(ExecutionPolicy::Parallel, query, 7)
                .unwrap();
            assert_eq!(sequential, parallel);
        }
    }
}
