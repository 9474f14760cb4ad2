//! Per-class top-term ranking.
//!
//! After training, each class is summarized by the vocabulary items most
//! indicative of it: Pr(class | item), obtained by classifying the item
//! as a one-item sentence under the trained model. Items seen fewer than
//! a minimum expected number of times are skipped so that stray words
//! appearing in a single sentence do not dominate the summary.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::SentimentModel;

/// Ranked vocabulary items for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTopTerms {
    /// Class index.
    pub class: usize,
    /// Items ranked by Pr(class | item), descending.
    pub terms: Vec<String>,
    /// True when fewer items qualified than were requested.
    pub exhausted: bool,
}

/// A vocabulary item with its posterior probability for one class.
#[derive(Debug, Clone)]
struct TermScore {
    term: String,
    prob: f64,
}

/// Rank the items of each class's count table by posterior probability.
///
/// `table` yields the per-class count table to rank: unigram counts for
/// the Naive Bayes model, bigram counts for the Markov model. Candidates
/// are gathered in lexical order and stable-sorted by probability, so
/// equal-probability items tie-break lexically.
pub(crate) fn rank_terms<'a>(
    model: &dyn SentimentModel,
    table: impl Fn(usize) -> &'a AHashMap<String, f64>,
    classes: usize,
    n: usize,
    min_count: f64,
) -> Result<Vec<ClassTopTerms>> {
    let mut results = Vec::with_capacity(classes);

    for class in 0..classes {
        let counts = table(class);
        let mut candidates: Vec<&String> = counts
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(term, _)| term)
            .collect();
        candidates.sort();

        let mut scored = Vec::with_capacity(candidates.len());
        for term in candidates {
            // Treating an item as a one-item sentence lets us reuse the
            // model's own classifier.
            let probs = model.classify(term)?;
            scored.push(TermScore {
                term: term.clone(),
                prob: probs[class],
            });
        }
        scored.sort_by(|a, b| {
            b.prob
                .partial_cmp(&a.prob)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let exhausted = scored.len() < n;
        results.push(ClassTopTerms {
            class,
            terms: scored.into_iter().take(n).map(|s| s.term).collect(),
            exhausted,
        });
    }

    Ok(results)
}
