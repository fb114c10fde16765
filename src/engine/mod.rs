//! The in-memory search engine: document store and index maintenance.
//!
//! [`SearchEngine`] owns the stop-word set, the inverted index
//! (term → document → weight), the forward index (document → term →
//! weight), per-document metadata and the ordered set of live ids. Both
//! indices are updated together by every mutation, so they always mirror
//! each other.
//!
//! Query evaluation lives in [`search`], per-document matching in
//! [`matcher`].

pub mod matcher;
pub mod search;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::tokenizer::{is_valid_term, split_words};
use crate::document::{DocumentId, DocumentStatus, Term, TermFrequencies};
use crate::error::{LanceaError, Result};
use crate::policy::ExecutionPolicy;

pub use search::{ACCURACY_THRESHOLD, MAX_RESULT_DOCUMENT_COUNT};

/// Metadata recorded for each live document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentInfo {
    pub(crate) rating: i32,
    pub(crate) status: DocumentStatus,
}

/// An in-memory full-text search engine with TF-IDF ranking.
///
/// Documents are insert-once and immutable in content; they can be
/// removed but not updated. All query operations are read-only and may
/// run concurrently with each other, but not with mutations.
///
/// # Examples
///
/// ```
/// use lancea::{DocumentStatus, SearchEngine};
///
/// let mut engine = SearchEngine::from_stop_words_text("in the").unwrap();
/// engine
///     .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
///     .unwrap();
///
/// let hits = engine.find_top_documents("cat").unwrap();
/// assert_eq!(hits[0].document_id, 42);
/// ```
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWordSet,
    pub(crate) inverted_index: BTreeMap<Term, BTreeMap<DocumentId, f64>>,
    pub(crate) forward_index: BTreeMap<DocumentId, TermFrequencies>,
    pub(crate) documents: BTreeMap<DocumentId, DocumentInfo>,
    document_ids: BTreeSet<DocumentId>,
}

impl SearchEngine {
    /// Create an engine from any iterable of stop words.
    ///
    /// Empty strings are dropped and duplicates collapse; a stop word
    /// containing a control byte fails construction with
    /// [`LanceaError::InvalidArgument`].
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(SearchEngine {
            stop_words: StopWordSet::from_words(stop_words)?,
            ..SearchEngine::default()
        })
    }

    /// Create an engine from a space-separated stop-word string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::new(split_words(text))
    }

    /// The engine's stop-word set.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Insert a document into the index.
    ///
    /// Fails with [`LanceaError::InvalidArgument`] if the id is negative,
    /// the id is already live, or any token of `text` contains a control
    /// byte. On failure the engine is unchanged.
    ///
    /// Each surviving token contributes `1 / token_count` to its term's
    /// weight in the document, so the weights of a non-empty document sum
    /// to 1. A document whose tokens are all stop words is registered
    /// with no term entries.
    pub fn add_document(
        &mut self,
        document_id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(LanceaError::invalid_argument(format!(
                "document id {document_id} is negative"
            )));
        }
        if self.documents.contains_key(&document_id) {
            return Err(LanceaError::invalid_argument(format!(
                "document id {document_id} is already in the index"
            )));
        }
        let words = self.split_into_words_no_stop(text)?;

        let frequencies = self.forward_index.entry(document_id).or_default();
        if !words.is_empty() {
            let weight = 1.0 / words.len() as f64;
            for word in words {
                let term = match self.inverted_index.get_key_value(word) {
                    Some((term, _)) => term.clone(),
                    None => Arc::from(word),
                };
                *self
                    .inverted_index
                    .entry(term.clone())
                    .or_default()
                    .entry(document_id)
                    .or_insert(0.0) += weight;
                *frequencies.entry(term).or_insert(0.0) += weight;
            }
        }
        self.documents.insert(
            document_id,
            DocumentInfo {
                rating: average_rating(ratings),
                status,
            },
        );
        self.document_ids.insert(document_id);
        debug!("added document {document_id}");
        Ok(())
    }

    /// Remove a document and every index entry it produced.
    ///
    /// Removing an id that is not live is a no-op.
    pub fn remove_document(&mut self, document_id: DocumentId) {
        let Some(frequencies) = self.forward_index.remove(&document_id) else {
            return;
        };
        self.documents.remove(&document_id);
        self.document_ids.remove(&document_id);
        for term in frequencies.keys() {
            if let Some(postings) = self.inverted_index.get_mut(&**term) {
                postings.remove(&document_id);
                if postings.is_empty() {
                    self.inverted_index.remove(&**term);
                }
            }
        }
        debug!("removed document {document_id}");
    }

    /// Remove a document under the given execution policy.
    ///
    /// The parallel path erases the document's postings with a parallel
    /// sweep over the inverted index. Callers never observe intermediate
    /// state: the engine is borrowed exclusively for the whole call.
    pub fn remove_document_with_policy(
        &mut self,
        policy: ExecutionPolicy,
        document_id: DocumentId,
    ) {
        match policy {
            ExecutionPolicy::Sequential => self.remove_document(document_id),
            ExecutionPolicy::Parallel => {
                let Some(frequencies) = self.forward_index.remove(&document_id) else {
                    return;
                };
                self.documents.remove(&document_id);
                self.document_ids.remove(&document_id);
                self.inverted_index
                    .par_iter_mut()
                    .for_each(|(term, postings)| {
                        if frequencies.contains_key(&**term) {
                            postings.remove(&document_id);
                        }
                    });
                self.inverted_index.retain(|_, postings| !postings.is_empty());
                debug!("removed document {document_id}");
            }
        }
    }

    /// Term weights of a document, or an empty mapping for an unknown id.
    pub fn word_frequencies(&self, document_id: DocumentId) -> &TermFrequencies {
        static EMPTY: TermFrequencies = TermFrequencies::new();
        self.forward_index.get(&document_id).unwrap_or(&EMPTY)
    }

    /// Iterate the live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.document_ids.iter().copied()
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Tokenize a document, rejecting invalid tokens and dropping stop
    /// words. Validation happens before any index mutation.
    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_words(text) {
            if !is_valid_term(word) {
                return Err(LanceaError::invalid_argument(format!(
                    "word {word:?} contains a control character"
                )));
            }
            if !self.stop_words.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}

/// Average of the ratings, truncated toward zero; 0 for an empty list.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&rating| i64::from(rating)).sum();
    (sum / ratings.len() as i64) as i32
}
