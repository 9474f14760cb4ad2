//! Probabilistic sentiment models.
//!
//! Two generative model variants share one contract: a unigram Naive
//! Bayes model and a first-order Markov (bigram) model. Both accumulate
//! soft-assigned counts via [`SentimentModel::update`] and produce
//! posterior class distributions via [`SentimentModel::classify`].

pub mod counts;
pub mod markov;
pub mod naive_bayes;
pub mod report;

pub use counts::ClassCounts;
pub use markov::MarkovModel;
pub use naive_bayes::NaiveBayesModel;
pub use report::ClassTopTerms;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Posterior probability of each latent class for one sentence.
///
/// Entries are non-negative and sum to 1.0; length equals the number of
/// classes the model was built with.
pub type ClassDistribution = Vec<f64>;

/// Probability substituted for a unigram or bigram never observed under a
/// class during training.
pub const DEFAULT_OOV_PROB: f64 = 0.000001;

/// A generative model over sentences, trained from soft class assignments.
///
/// Implementations hold per-class aggregate counts. A model is built
/// fresh for each M-step and discarded when the next one replaces it;
/// `update` is the only mutating operation.
pub trait SentimentModel: Send + Sync {
    /// Accumulate the counts of one sentence, weighted per class by `probs`.
    fn update(&mut self, sentence: &str, probs: &[f64]);

    /// Compute posterior class probabilities for a sentence.
    ///
    /// Fails if the model has no class mass at all (nothing was ever
    /// trained), rather than propagating NaN.
    fn classify(&self, sentence: &str) -> Result<ClassDistribution>;

    /// Rank vocabulary items per class by their posterior probability for
    /// that class, keeping items whose expected count is at least
    /// `min_count`, and return up to `n` per class.
    fn top_terms(&self, n: usize, min_count: f64) -> Result<Vec<ClassTopTerms>>;

    /// Get the name of this model for debugging and output.
    fn name(&self) -> &'static str;
}

/// Model variant selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Unigram bag-of-words model over raw whitespace tokens.
    NaiveBayes,
    /// Bigram model over cleaned tokens, chaining P(word | previous word).
    Markov,
}

/// Scale a score vector in place so it sums to 1.0.
///
/// Callers substitute `f64::MIN_POSITIVE` for exact-zero scores before
/// normalizing, so the sum is always positive.
pub(crate) fn normalize(probs: &mut [f64]) {
    let sum: f64 = probs.iter().sum();
    for p in probs.iter_mut() {
        *p /= sum;
    }
}
