//! Training configuration.

use serde::{Deserialize, Serialize};

use crate::analysis::cleaner::DEFAULT_STOP_TOKENS;
use crate::error::{Result, SentiraError};
use crate::model::{DEFAULT_OOV_PROB, ModelKind};

/// Seed used by [`SeedMode::Fixed`] when no explicit value is given.
pub const DEFAULT_FIXED_SEED: u64 = 2019;

/// How the initializer's symmetry-breaking randomness is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedMode {
    /// Deterministic seed for reproducible runs.
    Fixed(u64),
    /// Seed from operating-system entropy.
    Entropy,
}

/// Configuration for EM training.
///
/// # Examples
///
/// ```
/// use sentira::em::EmConfig;
/// use sentira::model::ModelKind;
///
/// let config = EmConfig {
///     iterations: 10,
///     model: ModelKind::NaiveBayes,
///     ..EmConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmConfig {
    /// Number of latent classes to train toward.
    pub classes: usize,
    /// Number of EM rounds. There is no early stopping; zero rounds
    /// yields the model built directly from the initial assignments.
    pub iterations: usize,
    /// Whether `:)` / `:(` markers on training lines seed class identity.
    pub semisupervised: bool,
    /// Seeding of the initializer's randomness.
    pub seed: SeedMode,
    /// Which model variant to train.
    pub model: ModelKind,
    /// Probability substituted for unseen unigrams and bigrams.
    pub oov_prob: f64,
    /// Expected count an item needs before it may appear in a class
    /// summary.
    pub min_to_print: f64,
    /// Number of top items to report per class.
    pub top_n: usize,
    /// Tokens removed by the Markov model's cleaner.
    pub stop_tokens: Vec<String>,
}

impl Default for EmConfig {
    fn default() -> Self {
        EmConfig {
            classes: 2,
            iterations: 200,
            semisupervised: true,
            seed: SeedMode::Entropy,
            model: ModelKind::Markov,
            oov_prob: DEFAULT_OOV_PROB,
            min_to_print: 15.0,
            top_n: 10,
            stop_tokens: DEFAULT_STOP_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EmConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.classes < 1 {
            return Err(SentiraError::invalid_config("classes must be at least 1"));
        }
        if self.semisupervised && self.classes < 2 {
            return Err(SentiraError::invalid_config(
                "semisupervised mode needs at least 2 classes",
            ));
        }
        if !(self.oov_prob > 0.0) {
            return Err(SentiraError::invalid_config(
                "oov_prob must be a positive number",
            ));
        }
        if self.min_to_print < 0.0 {
            return Err(SentiraError::invalid_config(
                "min_to_print must be non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EmConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_classes_rejected() {
        let config = EmConfig {
            classes: 0,
            ..EmConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_semisupervised_needs_two_classes() {
        let config = EmConfig {
            classes: 1,
            semisupervised: true,
            ..EmConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EmConfig {
            classes: 1,
            semisupervised: false,
            ..EmConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_oov_rejected() {
        let config = EmConfig {
            oov_prob: 0.0,
            ..EmConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
