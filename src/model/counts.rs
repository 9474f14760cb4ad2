//! Shared per-class count accumulators.
//!
//! Both model variants keep the same core state: the expected number of
//! sentences softly assigned to each class, the expected number of word
//! tokens per class, and a per-class token count table. The Markov model
//! layers its bigram tables on top of this.

use ahash::AHashMap;

use crate::error::{Result, SentiraError};

/// Expected-count accumulators for a fixed number of classes.
///
/// All counts start at zero and only grow; a fresh `ClassCounts` is
/// built for every M-step.
#[derive(Debug, Clone)]
pub struct ClassCounts {
    /// Expected number of sentences assigned to each class.
    class_counts: Vec<f64>,
    /// Expected number of word tokens assigned to each class.
    total_words: Vec<f64>,
    /// Per-class expected occurrence count of each token.
    word_counts: Vec<AHashMap<String, f64>>,
}

impl ClassCounts {
    /// Create zeroed accumulators for `classes` classes.
    pub fn new(classes: usize) -> Self {
        ClassCounts {
            class_counts: vec![0.0; classes],
            total_words: vec![0.0; classes],
            word_counts: vec![AHashMap::new(); classes],
        }
    }

    /// Number of classes these accumulators cover.
    pub fn classes(&self) -> usize {
        self.class_counts.len()
    }

    /// Add sentence mass `prob` to class `class`.
    pub fn add_sentence(&mut self, class: usize, prob: f64) {
        self.class_counts[class] += prob;
    }

    /// Add token mass `prob` for `token` under class `class`.
    ///
    /// Bumps both the token's own count and the class word total, so the
    /// total always equals the sum of per-token accumulations.
    pub fn add_token(&mut self, class: usize, token: &str, prob: f64) {
        self.total_words[class] += prob;
        *self
            .word_counts[class]
            .entry(token.to_string())
            .or_insert(0.0) += prob;
    }

    /// Expected sentence count for a class.
    pub fn class_count(&self, class: usize) -> f64 {
        self.class_counts[class]
    }

    /// Expected token total for a class.
    pub fn total_words(&self, class: usize) -> f64 {
        self.total_words[class]
    }

    /// The token count table for a class.
    pub fn words(&self, class: usize) -> &AHashMap<String, f64> {
        &self.word_counts[class]
    }

    /// P(token | class) from the accumulated counts, or `None` if the
    /// token was never seen under this class.
    pub fn word_likelihood(&self, class: usize, token: &str) -> Option<f64> {
        self.word_counts[class]
            .get(token)
            .map(|count| count / self.total_words[class])
    }

    /// P(class) for every class: each class's sentence mass over the
    /// total mass.
    ///
    /// Fails fast when no mass was ever assigned (an empty corpus or a
    /// zero-class configuration), since dividing by zero here would
    /// silently poison every downstream distribution with NaN.
    pub fn priors(&self) -> Result<Vec<f64>> {
        let total: f64 = self.class_counts.iter().sum();
        if total <= 0.0 {
            return Err(SentiraError::model(
                "no class mass accumulated; train on at least one sentence",
            ));
        }
        Ok(self.class_counts.iter().map(|c| c / total).collect())
    }
}
