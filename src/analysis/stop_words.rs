//! Stop-word set construction and lookup.

use std::collections::BTreeSet;

use crate::analysis::tokenizer::{is_valid_term, split_words};
use crate::error::{LanceaError, Result};

/// An immutable, validated set of stop words.
///
/// Stop words are fixed at engine construction and filtered out of both
/// documents (at insertion) and queries (at parse). Construction
/// de-duplicates, drops empty strings and rejects words containing
/// control bytes.
///
/// # Examples
///
/// ```
/// use lancea::analysis::StopWordSet;
///
/// let stop_words = StopWordSet::from_text("in the the").unwrap();
/// assert_eq!(stop_words.len(), 2);
/// assert!(stop_words.contains("in"));
/// assert!(!stop_words.contains("cat"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: BTreeSet<String>,
}

impl StopWordSet {
    /// Build a stop-word set from any iterable of word-like strings.
    ///
    /// Empty strings are skipped, duplicates collapse, and any word that
    /// fails [`is_valid_term`] makes the whole construction fail with
    /// [`LanceaError::InvalidArgument`].
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_term(word) {
                return Err(LanceaError::invalid_argument(format!(
                    "stop word {word:?} contains a control character"
                )));
            }
            set.insert(word.to_string());
        }
        Ok(StopWordSet { words: set })
    }

    /// Build a stop-word set from a space-separated string, tokenized the
    /// same way documents are.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_words(text))
    }

    /// Check whether a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the stop words in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_deduplicates_and_drops_empties() {
        let set = StopWordSet::from_words(["the", "", "in", "the"]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("in"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_from_text_splits_on_spaces() {
        let set = StopWordSet::from_text("  in   the ").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["in", "the"]);
    }

    #[test]
    fn test_invalid_stop_word_is_rejected() {
        let result = StopWordSet::from_words(["in", "th\u{2}e"]);
        assert!(matches!(result, Err(LanceaError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_set() {
        let set = StopWordSet::from_text("").unwrap();
        assert!(set.is_empty());
        assert!(!set.contains("anything"));
    }
}
