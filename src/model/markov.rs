//! First-order Markov (bigram) model.
//!
//! Sentences are cleaned (lowercased, stop tokens removed) before
//! counting. The first token is scored as a unigram; every later token is
//! conditioned on its predecessor through per-class bigram tables. This
//! captures local word order that the bag-of-words model ignores, at the
//! cost of two extra count tables per class.

use ahash::AHashMap;

use crate::analysis::SentenceCleaner;
use crate::error::Result;
use crate::model::counts::ClassCounts;
use crate::model::report::{self, ClassTopTerms};
use crate::model::{ClassDistribution, DEFAULT_OOV_PROB, SentimentModel, normalize};

/// A bigram-conditioned sentiment model.
///
/// # Examples
///
/// ```
/// use sentira::model::{MarkovModel, SentimentModel};
///
/// let mut model = MarkovModel::new(2);
/// model.update("great fun movie", &[0.0, 1.0]);
/// model.update("terrible boring film", &[1.0, 0.0]);
///
/// let probs = model.classify("great fun film").unwrap();
/// assert!(probs[1] > probs[0]);
/// ```
#[derive(Debug, Clone)]
pub struct MarkovModel {
    counts: ClassCounts,
    /// Expected co-occurrence count of each ordered word pair, per class.
    bigram_counts: Vec<AHashMap<String, f64>>,
    /// Expected count of each word as a bigram predecessor, per class.
    /// Used as the conditioning denominator.
    bigram_denom_counts: Vec<AHashMap<String, f64>>,
    cleaner: SentenceCleaner,
    oov_prob: f64,
}

impl MarkovModel {
    /// Create an empty model for `classes` classes with the default
    /// cleaner and out-of-vocabulary probability.
    pub fn new(classes: usize) -> Self {
        Self::with_options(classes, SentenceCleaner::new(), DEFAULT_OOV_PROB)
    }

    /// Create an empty model with an explicit cleaner and
    /// out-of-vocabulary probability.
    pub fn with_options(classes: usize, cleaner: SentenceCleaner, oov_prob: f64) -> Self {
        MarkovModel {
            counts: ClassCounts::new(classes),
            bigram_counts: vec![AHashMap::new(); classes],
            bigram_denom_counts: vec![AHashMap::new(); classes],
            cleaner,
            oov_prob,
        }
    }

    /// The count accumulators backing this model.
    pub fn counts(&self) -> &ClassCounts {
        &self.counts
    }

    /// The bigram count table for a class.
    pub fn bigrams(&self, class: usize) -> &AHashMap<String, f64> {
        &self.bigram_counts[class]
    }

    /// Ordered word-pair key used in the bigram tables.
    fn bigram_key(prev: &str, word: &str) -> String {
        format!("{prev} {word}")
    }
}

impl SentimentModel for MarkovModel {
    fn update(&mut self, sentence: &str, probs: &[f64]) {
        let words = self.cleaner.clean(sentence);
        for (class, &prob) in probs.iter().enumerate() {
            self.counts.add_sentence(class, prob);

            let mut previous: Option<&str> = None;
            for (j, word) in words.iter().enumerate() {
                self.counts.add_token(class, word, prob);

                if let Some(prev) = previous {
                    *self.bigram_counts[class]
                        .entry(Self::bigram_key(prev, word))
                        .or_insert(0.0) += prob;
                }

                // Every token except the last conditions a successor.
                if j != words.len() - 1 {
                    *self.bigram_denom_counts[class]
                        .entry(word.clone())
                        .or_insert(0.0) += prob;
                }

                previous = Some(word);
            }
        }
    }

    fn classify(&self, sentence: &str) -> Result<ClassDistribution> {
        let priors = self.counts.priors()?;
        let words = self.cleaner.clean(sentence);
        let mut probs = Vec::with_capacity(self.counts.classes());

        for (class, prior) in priors.into_iter().enumerate() {
            let mut p_words = 1.0;
            let mut previous: Option<&str> = None;

            for (j, word) in words.iter().enumerate() {
                if j == 0 {
                    p_words *= self
                        .counts
                        .word_likelihood(class, word)
                        .unwrap_or(self.oov_prob);
                } else {
                    let prev = previous.unwrap_or_default();
                    let bigram = self.bigram_counts[class].get(&Self::bigram_key(prev, word));
                    let denom = self.bigram_denom_counts[class].get(prev);
                    p_words *= match (bigram, denom) {
                        (Some(count), Some(&denom)) if denom != 0.0 => count / denom,
                        _ => self.oov_prob,
                    };
                }
                previous = Some(word);
            }

            let score = prior * p_words;
            probs.push(if score == 0.0 { f64::MIN_POSITIVE } else { score });
        }

        normalize(&mut probs);
        Ok(probs)
    }

    fn top_terms(&self, n: usize, min_count: f64) -> Result<Vec<ClassTopTerms>> {
        report::rank_terms(
            self,
            |class| &self.bigram_counts[class],
            self.counts.classes(),
            n,
            min_count,
        )
    }

    fn name(&self) -> &'static str {
        "markov"
    }
}
