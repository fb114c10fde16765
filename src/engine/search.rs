//! Ranked query evaluation.
//!
//! Relevance is TF-IDF: every plus-term present in the index contributes
//! `term_weight * ln(live_documents / documents_containing_term)` to each
//! document it appears in, subject to the caller's predicate. Documents
//! hit by any minus-term are erased before ranking. Results are ordered
//! by relevance descending, with ratings breaking near-ties, and capped
//! at [`MAX_RESULT_DOCUMENT_COUNT`].

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::concurrent::{SCORE_MAP_SHARDS, ShardedScoreMap};
use crate::document::{DocumentId, DocumentStatus, SearchHit};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::policy::ExecutionPolicy;
use crate::query::parser::{ParsedQuery, QueryParser};
use crate::query::predicate::{DocumentPredicate, StatusPredicate};

/// Maximum number of documents a search returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance values closer than this are considered equal and ranked by
/// rating instead.
pub const ACCURACY_THRESHOLD: f64 = 1e-6;

impl SearchEngine {
    /// Search for `Actual` documents matching the query.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<SearchHit>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Search for documents with the given status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_by(raw_query, StatusPredicate::new(status))
    }

    /// Search with an arbitrary predicate over (id, status, rating).
    pub fn find_top_documents_by<P: DocumentPredicate>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_filtered(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Policy-selectable variant of [`find_top_documents`](Self::find_top_documents).
    pub fn find_top_documents_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_with_status_and_policy(policy, raw_query, DocumentStatus::Actual)
    }

    /// Policy-selectable variant of
    /// [`find_top_documents_with_status`](Self::find_top_documents_with_status).
    pub fn find_top_documents_with_status_and_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_filtered(policy, raw_query, StatusPredicate::new(status))
    }

    /// Full search entry point: policy, query and predicate.
    ///
    /// Both policies yield the same result vector for the same engine
    /// state and query.
    pub fn find_top_documents_filtered<P: DocumentPredicate>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<SearchHit>> {
        let parser = QueryParser::new(self.stop_words());
        let query = parser.parse_with_policy(policy, raw_query)?;

        let mut hits = self.find_all_documents(policy, &query, &predicate);
        hits.sort_by(|lhs, rhs| {
            if (lhs.relevance - rhs.relevance).abs() < ACCURACY_THRESHOLD {
                rhs.rating.cmp(&lhs.rating)
            } else {
                rhs.relevance.total_cmp(&lhs.relevance)
            }
        });
        hits.truncate(MAX_RESULT_DOCUMENT_COUNT);
        Ok(hits)
    }

    /// Score every candidate document for the parsed query.
    fn find_all_documents<P: DocumentPredicate>(
        &self,
        policy: ExecutionPolicy,
        query: &ParsedQuery,
        predicate: &P,
    ) -> Vec<SearchHit> {
        // The parallel parser leaves plus-terms unsorted and possibly
        // duplicated; normalize here so duplicates never inflate scores.
        let mut plus_terms: Vec<&str> = query.plus_terms.iter().map(String::as_str).collect();
        plus_terms.sort_unstable();
        plus_terms.dedup();

        let mut scores = match policy {
            ExecutionPolicy::Sequential => {
                let mut scores = BTreeMap::new();
                for term in &plus_terms {
                    self.accumulate_term(term, predicate, |document_id, increment| {
                        *scores.entry(document_id).or_insert(0.0) += increment;
                    });
                }
                scores
            }
            ExecutionPolicy::Parallel => {
                let accumulator = ShardedScoreMap::new(SCORE_MAP_SHARDS);
                plus_terms.par_iter().for_each(|term| {
                    self.accumulate_term(term, predicate, |document_id, increment| {
                        *accumulator.access(document_id) += increment;
                    });
                });
                accumulator.into_ordered_map()
            }
        };

        for term in &query.minus_terms {
            if let Some(postings) = self.inverted_index.get(term.as_str()) {
                for document_id in postings.keys() {
                    scores.remove(document_id);
                }
            }
        }

        scores
            .into_iter()
            .map(|(document_id, relevance)| {
                let rating = self
                    .documents
                    .get(&document_id)
                    .map_or(0, |info| info.rating);
                SearchHit::new(document_id, relevance, rating)
            })
            .collect()
    }

    /// Feed one plus-term's weighted postings to `add`, skipping terms
    /// absent from the index and documents rejected by the predicate.
    fn accumulate_term<P: DocumentPredicate>(
        &self,
        term: &str,
        predicate: &P,
        mut add: impl FnMut(DocumentId, f64),
    ) {
        let Some(postings) = self.inverted_index.get(term) else {
            return;
        };
        let idf = self.inverse_document_frequency(postings.len());
        for (&document_id, &term_freq) in postings {
            let Some(info) = self.documents.get(&document_id) else {
                continue;
            };
            if predicate.matches(document_id, info.status, info.rating) {
                add(document_id, term_freq * idf);
            }
        }
    }

    /// `ln(live_document_count / documents_containing_term)`.
    fn inverse_document_frequency(&self, containing_documents: usize) -> f64 {
        (self.document_count() as f64 / containing_documents as f64).ln()
    }
}
