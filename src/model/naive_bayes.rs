//! Unigram Naive Bayes model.
//!
//! Treats a sentence as a bag of raw whitespace tokens: no lowercasing
//! and no stop-token removal, so punctuation-attached tokens are counted
//! verbatim. Token occurrences are assumed conditionally independent
//! given the class.

use crate::error::Result;
use crate::model::counts::ClassCounts;
use crate::model::report::{self, ClassTopTerms};
use crate::model::{ClassDistribution, DEFAULT_OOV_PROB, SentimentModel, normalize};

/// A unigram bag-of-words sentiment model.
///
/// # Examples
///
/// ```
/// use sentira::model::{NaiveBayesModel, SentimentModel};
///
/// let mut model = NaiveBayesModel::new(2);
/// model.update("great movie", &[0.0, 1.0]);
/// model.update("terrible film", &[1.0, 0.0]);
///
/// let probs = model.classify("great movie").unwrap();
/// assert!(probs[1] > probs[0]);
/// ```
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    counts: ClassCounts,
    oov_prob: f64,
}

impl NaiveBayesModel {
    /// Create an empty model for `classes` classes with the default
    /// out-of-vocabulary probability.
    pub fn new(classes: usize) -> Self {
        Self::with_oov_prob(classes, DEFAULT_OOV_PROB)
    }

    /// Create an empty model with an explicit out-of-vocabulary probability.
    pub fn with_oov_prob(classes: usize, oov_prob: f64) -> Self {
        NaiveBayesModel {
            counts: ClassCounts::new(classes),
            oov_prob,
        }
    }

    /// The count accumulators backing this model.
    pub fn counts(&self) -> &ClassCounts {
        &self.counts
    }
}

impl SentimentModel for NaiveBayesModel {
    fn update(&mut self, sentence: &str, probs: &[f64]) {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        for (class, &prob) in probs.iter().enumerate() {
            self.counts.add_sentence(class, prob);
            for word in &words {
                self.counts.add_token(class, word, prob);
            }
        }
    }

    fn classify(&self, sentence: &str) -> Result<ClassDistribution> {
        let priors = self.counts.priors()?;
        let mut probs = Vec::with_capacity(self.counts.classes());

        for (class, prior) in priors.into_iter().enumerate() {
            let mut p_words = 1.0;
            for word in sentence.split_whitespace() {
                p_words *= self
                    .counts
                    .word_likelihood(class, word)
                    .unwrap_or(self.oov_prob);
            }

            // Keep every class reachable even when the product underflows
            // to an exact zero.
            let score = prior * p_words;
            probs.push(if score == 0.0 { f64::MIN_POSITIVE } else { score });
        }

        normalize(&mut probs);
        Ok(probs)
    }

    fn top_terms(&self, n: usize, min_count: f64) -> Result<Vec<ClassTopTerms>> {
        report::rank_terms(
            self,
            |class| self.counts.words(class),
            self.counts.classes(),
            n,
            min_count,
        )
    }

    fn name(&self) -> &'static str {
        "naive_bayes"
    }
}
