//! Expectation-maximization training.
//!
//! The [`Initializer`] turns raw training lines into a deduplicated
//! corpus with initial soft class assignments; the [`EmTrainer`] then
//! alternates classification (E-step) and full model rebuilds (M-step)
//! for a fixed number of rounds.

pub mod config;
pub mod initializer;
pub mod trainer;

pub use config::{EmConfig, SeedMode};
pub use initializer::Initializer;
pub use trainer::{EmTrainer, TrainedModel};

use ahash::AHashMap;

/// An ordered collection of distinct training sentences.
///
/// Sentence text is the identity: inserting a duplicate returns the
/// existing entry's index instead of growing the corpus. First-seen
/// order is preserved so iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sentence, returning its index and whether it was new.
    pub fn insert(&mut self, sentence: String) -> (usize, bool) {
        if let Some(&i) = self.index.get(&sentence) {
            return (i, false);
        }
        let i = self.sentences.len();
        self.index.insert(sentence.clone(), i);
        self.sentences.push(sentence);
        (i, true)
    }

    /// Number of distinct sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check whether the corpus holds no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The distinct sentences in first-seen order.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Check whether a sentence is present.
    pub fn contains(&self, sentence: &str) -> bool {
        self.index.contains_key(sentence)
    }
}
