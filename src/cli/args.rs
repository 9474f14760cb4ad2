//! Command line argument parsing for the Sentira CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::cleaner::DEFAULT_STOP_TOKENS;
use crate::em::config::{EmConfig, SeedMode};
use crate::model::ModelKind;

/// Sentira - EM sentiment clustering over short text
#[derive(Parser, Debug, Clone)]
#[command(name = "sentira")]
#[command(about = "Unsupervised and semisupervised sentiment clustering for short text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Sentira Contributors")]
#[command(long_about = None)]
pub struct SentiraArgs {
    /// Input file holding the training section, a `---` separator line,
    /// and the classification section (defaults to stdin)
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Number of latent classes
    #[arg(long, default_value = "2")]
    pub classes: usize,

    /// Number of EM rounds
    #[arg(long, default_value = "200")]
    pub iterations: usize,

    /// Ignore `:)` / `:(` markers and start from random assignments
    #[arg(long)]
    pub unsupervised: bool,

    /// Fix the symmetry-breaking seed for reproducible runs; `--seed`
    /// without a value uses 2019, absent means OS entropy
    #[arg(long, value_name = "SEED", num_args = 0..=1, default_missing_value = "2019")]
    pub seed: Option<u64>,

    /// Model variant
    #[arg(long = "model", default_value = "markov")]
    pub model: ModelArg,

    /// Probability for unigrams and bigrams never seen during training
    #[arg(long, value_name = "PROB", default_value = "0.000001")]
    pub oov_prob: f64,

    /// Expected count an item needs before appearing in a class summary
    #[arg(long, value_name = "COUNT", default_value = "15.0")]
    pub min_count: f64,

    /// Number of top items reported per class
    #[arg(long, default_value = "10")]
    pub top_n: usize,

    /// Stop token removed by the cleaner (repeatable; replaces the
    /// default set when given)
    #[arg(long = "stop-token", value_name = "TOKEN")]
    pub stop_tokens: Vec<String>,
}

impl SentiraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the training configuration these arguments describe.
    pub fn em_config(&self) -> EmConfig {
        EmConfig {
            classes: self.classes,
            iterations: self.iterations,
            semisupervised: !self.unsupervised,
            seed: match self.seed {
                Some(seed) => SeedMode::Fixed(seed),
                None => SeedMode::Entropy,
            },
            model: self.model.kind(),
            oov_prob: self.oov_prob,
            min_to_print: self.min_count,
            top_n: self.top_n,
            stop_tokens: if self.stop_tokens.is_empty() {
                DEFAULT_STOP_TOKENS.iter().map(|s| s.to_string()).collect()
            } else {
                self.stop_tokens.clone()
            },
        }
    }
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Model variant selection on the command line
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum ModelArg {
    /// Unigram Naive Bayes over raw whitespace tokens
    NaiveBayes,
    /// First-order Markov model over cleaned tokens
    Markov,
}

impl ModelArg {
    /// The library-level model kind this argument selects.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelArg::NaiveBayes => ModelKind::NaiveBayes,
            ModelArg::Markov => ModelKind::Markov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_map_to_config() {
        let args = SentiraArgs::parse_from(["sentira"]);
        let config = args.em_config();

        assert_eq!(config.classes, 2);
        assert_eq!(config.iterations, 200);
        assert!(config.semisupervised);
        assert_eq!(config.seed, SeedMode::Entropy);
        assert_eq!(config.model, ModelKind::Markov);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.stop_tokens.len(), DEFAULT_STOP_TOKENS.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_flag_without_value() {
        let args = SentiraArgs::parse_from(["sentira", "--seed"]);
        assert_eq!(args.em_config().seed, SeedMode::Fixed(2019));

        let args = SentiraArgs::parse_from(["sentira", "--seed", "42"]);
        assert_eq!(args.em_config().seed, SeedMode::Fixed(42));
    }

    #[test]
    fn test_model_and_mode_flags() {
        let args =
            SentiraArgs::parse_from(["sentira", "--model", "naive-bayes", "--unsupervised"]);
        let config = args.em_config();

        assert_eq!(config.model, ModelKind::NaiveBayes);
        assert!(!config.semisupervised);
    }

    #[test]
    fn test_stop_tokens_replace_defaults() {
        let args =
            SentiraArgs::parse_from(["sentira", "--stop-token", "uh", "--stop-token", "um"]);
        assert_eq!(args.em_config().stop_tokens, vec!["uh", "um"]);
    }

    #[test]
    fn test_verbosity() {
        let args = SentiraArgs::parse_from(["sentira"]);
        assert_eq!(args.verbosity(), 1);

        let args = SentiraArgs::parse_from(["sentira", "-q"]);
        assert_eq!(args.verbosity(), 0);

        let args = SentiraArgs::parse_from(["sentira", "-vv"]);
        assert_eq!(args.verbosity(), 2);
    }
}
