//! Whitespace tokenization.
//!
//! Documents and queries are split on the ASCII space byte only. A run of
//! consecutive spaces produces no empty tokens, and token order preserves
//! input order. Splitting performs no validation; [`is_valid_term`] is the
//! separate check callers apply to each token.
//!
//! # Examples
//!
//! ```
//! use lancea::analysis::split_words;
//!
//! let words = split_words("cat in  the city");
//! assert_eq!(words, vec!["cat", "in", "the", "city"]);
//! ```

/// Split text on ASCII spaces into non-empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Check that a term contains no control bytes.
///
/// Any byte in `[0x00, 0x20)` disqualifies the term. Bytes at or above
/// 0x20 are allowed, so multi-byte UTF-8 sequences pass unchanged.
pub fn is_valid_term(term: &str) -> bool {
    !term.bytes().any(|b| b < 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        let words = split_words("hello world");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn test_split_collapses_space_runs() {
        let words = split_words("  cat   in the  city ");
        assert_eq!(words, vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_split_keeps_non_space_whitespace() {
        // Only the space byte separates words; a tab stays inside the token.
        let words = split_words("a\tb c");
        assert_eq!(words, vec!["a\tb", "c"]);
    }

    #[test]
    fn test_is_valid_term() {
        assert!(is_valid_term("cat"));
        assert!(is_valid_term("c-3po"));
        assert!(is_valid_term("кот"));
        assert!(!is_valid_term("ca\tt"));
        assert!(!is_valid_term("cat\u{1}"));
        assert!(!is_valid_term("\n"));
    }
}
