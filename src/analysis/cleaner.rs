//! Sentence cleaner implementation.
//!
//! Lowercases a sentence and removes tokens from a fixed stop-token set.
//! The default set covers punctuation fragments and emoticon markers that
//! carry no sentiment information of their own.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::cleaner::SentenceCleaner;
//!
//! let cleaner = SentenceCleaner::new();
//! let tokens = cleaner.clean("Great movie .");
//!
//! assert_eq!(tokens, vec!["great", "movie"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

/// Default stop tokens removed during cleaning.
///
/// These are whole tokens, not characters: the input is already
/// whitespace-delimited, so `'s` and `.` arrive as standalone tokens.
pub const DEFAULT_STOP_TOKENS: &[&str] = &["'", ".", ",", ":)", ":(", "'s", "'d", "'m"];

/// A cleaner that lowercases sentences and removes stop tokens.
#[derive(Clone, Debug)]
pub struct SentenceCleaner {
    /// The set of tokens to remove
    stop_tokens: Arc<HashSet<String>>,
}

impl SentenceCleaner {
    /// Create a new cleaner with the default stop-token set.
    pub fn new() -> Self {
        Self::from_tokens(DEFAULT_STOP_TOKENS.iter().copied())
    }

    /// Create a new cleaner from a list of stop tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentira::analysis::cleaner::SentenceCleaner;
    ///
    /// let cleaner = SentenceCleaner::from_tokens(vec!["foo", "bar"]);
    /// assert_eq!(cleaner.len(), 2);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_tokens = tokens.into_iter().map(|s| s.into()).collect();
        SentenceCleaner {
            stop_tokens: Arc::new(stop_tokens),
        }
    }

    /// Check if a token is a stop token.
    pub fn is_stop_token(&self, token: &str) -> bool {
        self.stop_tokens.contains(token)
    }

    /// Get the number of stop tokens.
    pub fn len(&self) -> usize {
        self.stop_tokens.len()
    }

    /// Check if the stop-token set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_tokens.is_empty()
    }

    /// Lowercase a sentence and return its tokens with stop tokens removed.
    ///
    /// A blank sentence yields an empty token list.
    pub fn clean(&self, sentence: &str) -> Vec<String> {
        sentence
            .to_lowercase()
            .split_whitespace()
            .filter(|token| !self.is_stop_token(token))
            .map(|token| token.to_string())
            .collect()
    }
}

impl Default for SentenceCleaner {
    fn default() -> Self {
        Self::new()
    }
}
