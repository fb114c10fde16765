//! Query string parsing.
//!
//! A raw query is a space-separated list of terms. A leading `-` marks a
//! minus-term: documents containing it are excluded from results. Terms
//! that are stop words are discarded. Malformed terms (a bare `-`, a
//! doubled `--`, control bytes) fail the whole parse.

use rayon::prelude::*;

use crate::analysis::stop_words::StopWordSet;
use crate::analysis::tokenizer::{is_valid_term, split_words};
use crate::error::{LanceaError, Result};
use crate::policy::ExecutionPolicy;

/// A parsed query: the terms a document must contain and the terms it
/// must not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Terms whose postings contribute relevance.
    pub plus_terms: Vec<String>,
    /// Terms excluding any document that contains them.
    pub minus_terms: Vec<String>,
}

impl ParsedQuery {
    /// True if the query holds no terms at all.
    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty() && self.minus_terms.is_empty()
    }
}

/// One classified query token.
#[derive(Debug, Clone)]
struct QueryTerm {
    text: String,
    is_minus: bool,
    is_stop: bool,
}

/// Parser turning raw query strings into [`ParsedQuery`] values.
///
/// The parser borrows the engine's stop-word set; it owns no state of
/// its own.
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'a> {
    stop_words: &'a StopWordSet,
}

impl<'a> QueryParser<'a> {
    /// Create a parser over the given stop-word set.
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        QueryParser { stop_words }
    }

    /// Parse a raw query, sorting and de-duplicating both term lists.
    pub fn parse(&self, text: &str) -> Result<ParsedQuery> {
        let mut query = ParsedQuery::default();
        for word in split_words(text) {
            let term = self.parse_term(word)?;
            if term.is_stop {
                continue;
            }
            if term.is_minus {
                query.minus_terms.push(term.text);
            } else {
                query.plus_terms.push(term.text);
            }
        }
        query.plus_terms.sort_unstable();
        query.plus_terms.dedup();
        query.minus_terms.sort_unstable();
        query.minus_terms.dedup();
        Ok(query)
    }

    /// Parse a raw query under the given execution policy.
    ///
    /// The parallel path classifies tokens on the rayon pool and returns
    /// the term lists in discovered order, without sorting or
    /// de-duplicating; the evaluator normalizes the plus-terms it scores
    /// with, and minus-term erasure is idempotent.
    pub fn parse_with_policy(&self, policy: ExecutionPolicy, text: &str) -> Result<ParsedQuery> {
        match policy {
            ExecutionPolicy::Sequential => self.parse(text),
            ExecutionPolicy::Parallel => {
                let words = split_words(text);
                let terms: Vec<QueryTerm> = words
                    .par_iter()
                    .map(|word| self.parse_term(word))
                    .collect::<Result<_>>()?;

                let mut query = ParsedQuery::default();
                query.plus_terms.reserve(terms.len());
                for term in terms {
                    if term.is_stop {
                        continue;
                    }
                    if term.is_minus {
                        query.minus_terms.push(term.text);
                    } else {
                        query.plus_terms.push(term.text);
                    }
                }
                Ok(query)
            }
        }
    }

    /// Classify a single token as plus/minus/stop, validating it.
    fn parse_term(&self, raw: &str) -> Result<QueryTerm> {
        if raw.is_empty() {
            return Err(LanceaError::invalid_argument("query word is empty"));
        }
        let (text, is_minus) = match raw.strip_prefix('-') {
            Some(stripped) => (stripped, true),
            None => (raw, false),
        };
        if text.is_empty() || text.starts_with('-') || !is_valid_term(text) {
            return Err(LanceaError::invalid_argument(format!(
                "query word {raw:?} is invalid"
            )));
        }
        Ok(QueryTerm {
            text: text.to_string(),
            is_minus,
            is_stop: self.stop_words.contains(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser_fixture(stop_text: &str) -> StopWordSet {
        StopWordSet::from_text(stop_text).unwrap()
    }

    #[test]
    fn test_parse_plus_and_minus_terms() {
        let stop_words = parser_fixture("");
        let parser = QueryParser::new(&stop_words);
        let query = parser.parse("cat -dog bird").unwrap();
        assert_eq!(query.plus_terms, vec!["bird", "cat"]);
        assert_eq!(query.minus_terms, vec!["dog"]);
    }

    #[test]
    fn test_parse_discards_stop_terms() {
        let stop_words = parser_fixture("in the");
        let parser = QueryParser::new(&stop_words);
        let query = parser.parse("cat in the city -the").unwrap();
        assert_eq!(query.plus_terms, vec!["cat", "city"]);
        assert!(query.minus_terms.is_empty());
    }

    #[test]
    fn test_parse_sorts_and_deduplicates() {
        let stop_words = parser_fixture("");
        let parser = QueryParser::new(&stop_words);
        let query = parser.parse("dog cat dog -rat -rat").unwrap();
        assert_eq!(query.plus_terms, vec!["cat", "dog"]);
        assert_eq!(query.minus_terms, vec!["rat"]);
    }

    #[test]
    fn test_parse_rejects_malformed_terms() {
        let stop_words = parser_fixture("");
        let parser = QueryParser::new(&stop_words);
        assert!(parser.parse("-").is_err());
        assert!(parser.parse("--cat").is_err());
        assert!(parser.parse("ca\u{3}t").is_err());
        assert!(parser.parse("cat -").is_err());
    }

    #[test]
    fn test_parse_empty_query() {
        let stop_words = parser_fixture("");
        let parser = QueryParser::new(&stop_words);
        assert!(parser.parse("").unwrap().is_empty());
        assert!(parser.parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parallel_parse_keeps_discovered_order() {
        let stop_words = parser_fixture("the");
        let parser = QueryParser::new(&stop_words);
        let query = parser
            .parse_with_policy(ExecutionPolicy::Parallel, "dog the cat dog -rat")
            .unwrap();
        assert_eq!(query.plus_terms, vec!["dog", "cat", "dog"]);
        assert_eq!(query.minus_terms, vec!["rat"]);
    }

    #[test]
    fn test_parallel_parse_propagates_errors() {
        let stop_words = parser_fixture("");
        let parser = QueryParser::new(&stop_words);
        let result = parser.parse_with_policy(ExecutionPolicy::Parallel, "cat --dog");
        assert!(result.is_err());
    }
}
