//! Initial soft class assignment.
//!
//! Each distinct training sentence gets a starting class distribution.
//! In semisupervised mode, sentences carrying an in-band sentiment marker
//! are pinned to their labeled class and the marker is stripped from the
//! stored sentence. Everything else starts near uniform, with a small
//! random bump on one class to break symmetry when no labels exist.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::em::config::SeedMode;
use crate::em::Corpus;
use crate::model::ClassDistribution;

/// Marker prefixing a labeled negative training sentence.
pub const NEGATIVE_MARKER: &str = ":(";

/// Marker prefixing a labeled positive training sentence.
pub const POSITIVE_MARKER: &str = ":)";

/// Assigns each distinct training sentence an initial class distribution.
#[derive(Debug)]
pub struct Initializer {
    classes: usize,
    semisupervised: bool,
    rng: StdRng,
}

impl Initializer {
    /// Create an initializer for `classes` classes.
    pub fn new(classes: usize, semisupervised: bool, seed: SeedMode) -> Self {
        let rng = match seed {
            SeedMode::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedMode::Entropy => StdRng::from_os_rng(),
        };
        Initializer {
            classes,
            semisupervised,
            rng,
        }
    }

    /// Build the corpus and its initial assignments from raw lines.
    ///
    /// Duplicate sentence text collapses to one corpus entry; a later
    /// duplicate's distribution replaces the earlier one.
    pub fn assign<I>(&mut self, lines: I) -> (Corpus, Vec<ClassDistribution>)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut corpus = Corpus::new();
        let mut assignments: Vec<ClassDistribution> = Vec::new();

        for line in lines {
            let line = line.into();
            let (sentence, probs) = self.assign_line(line);
            let (index, inserted) = corpus.insert(sentence);
            if inserted {
                assignments.push(probs);
            } else {
                assignments[index] = probs;
            }
        }

        (corpus, assignments)
    }

    /// Strip a recognized marker and produce one line's distribution.
    fn assign_line(&mut self, line: String) -> (String, ClassDistribution) {
        if self.semisupervised {
            if let Some(rest) = line.strip_prefix(NEGATIVE_MARKER) {
                return (Self::strip_delimiter(rest), self.labeled(0));
            }
            if let Some(rest) = line.strip_prefix(POSITIVE_MARKER) {
                return (Self::strip_delimiter(rest), self.labeled(1));
            }
        }
        (line, self.symmetry_broken())
    }

    /// Remove the single delimiter that follows a marker. A marker-only
    /// line becomes a zero-token sentence.
    fn strip_delimiter(rest: &str) -> String {
        rest.strip_prefix(' ').unwrap_or(rest).to_string()
    }

    /// A distribution certain of one class.
    fn labeled(&self, class: usize) -> ClassDistribution {
        let mut probs = vec![0.0; self.classes];
        probs[class] = 1.0;
        probs
    }

    /// A near-uniform distribution with a bump on one random class.
    ///
    /// Labeled examples already break symmetry in semisupervised mode, so
    /// the bump is zero there.
    fn symmetry_broken(&mut self) -> ClassDistribution {
        if self.classes == 1 {
            return vec![1.0];
        }

        let baseline = 1.0 / self.classes as f64;
        let bump = if self.semisupervised {
            0.0
        } else {
            baseline * 0.25
        };
        let bumped = self.rng.random_range(0..self.classes);

        (0..self.classes)
            .map(|class| {
                if class == bumped {
                    baseline + bump
                } else {
                    baseline - bump / (self.classes - 1) as f64
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(classes: usize, semisupervised: bool) -> Initializer {
        Initializer::new(classes, semisupervised, SeedMode::Fixed(2019))
    }

    #[test]
    fn test_negative_marker_pins_class_zero() {
        let mut init = fixed(3, true);
        let (corpus, probs) = init.assign([":( terrible film"]);

        assert_eq!(corpus.sentences(), ["terrible film"]);
        assert_eq!(probs[0], vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_positive_marker_pins_class_one() {
        let mut init = fixed(3, true);
        let (corpus, probs) = init.assign([":) great movie"]);

        assert_eq!(corpus.sentences(), ["great movie"]);
        assert_eq!(probs[0], vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_marker_only_line_becomes_empty_sentence() {
        let mut init = fixed(2, true);
        let (corpus, probs) = init.assign([":)"]);

        assert_eq!(corpus.sentences(), [""]);
        assert_eq!(probs[0], vec![0.0, 1.0]);
    }

    #[test]
    fn test_markers_ignored_when_unsupervised() {
        let mut init = fixed(2, false);
        let (corpus, _) = init.assign([":) great movie"]);

        // The marker stays part of the sentence text.
        assert_eq!(corpus.sentences(), [":) great movie"]);
    }

    #[test]
    fn test_semisupervised_unlabeled_is_uniform() {
        let mut init = fixed(4, true);
        let (_, probs) = init.assign(["no marker here"]);

        for &p in &probs[0] {
            assert!((p - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unsupervised_bump_sums_to_one() {
        let mut init = fixed(3, false);
        let (_, probs) = init.assign(["some sentence"]);

        let dist = &probs[0];
        let sum: f64 = dist.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);

        let baseline = 1.0 / 3.0;
        let bump = baseline * 0.25;
        let high = dist.iter().filter(|&&p| (p - (baseline + bump)).abs() < 1e-12);
        let low = dist
            .iter()
            .filter(|&&p| (p - (baseline - bump / 2.0)).abs() < 1e-12);
        assert_eq!(high.count(), 1);
        assert_eq!(low.count(), 2);
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let lines = ["alpha", "beta", "gamma", "delta"];
        let mut a = Initializer::new(2, false, SeedMode::Fixed(7));
        let mut b = Initializer::new(2, false, SeedMode::Fixed(7));

        assert_eq!(a.assign(lines).1, b.assign(lines).1);
    }

    #[test]
    fn test_duplicate_sentence_keeps_last_assignment() {
        let mut init = fixed(2, true);
        let (corpus, probs) = init.assign([":) great movie", ":( great movie"]);

        assert_eq!(corpus.len(), 1);
        assert_eq!(probs.len(), 1);
        assert_eq!(probs[0], vec![1.0, 0.0]);
    }

    #[test]
    fn test_single_class_is_pinned() {
        let mut init = Initializer::new(1, false, SeedMode::Entropy);
        let (_, probs) = init.assign(["anything"]);
        assert_eq!(probs[0], vec![1.0]);
    }
}
