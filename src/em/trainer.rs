//! EM training loop.
//!
//! Each round classifies every corpus sentence under the previous
//! round's model (E-step), then rebuilds a brand-new model from those
//! soft assignments (M-step). The previous model is discarded entirely;
//! no state survives a round except the assignments themselves. Rounds
//! run for a fixed count with no convergence check.

use std::fmt;

use rayon::prelude::*;

use crate::analysis::SentenceCleaner;
use crate::em::Corpus;
use crate::em::config::EmConfig;
use crate::em::initializer::Initializer;
use crate::error::{Result, SentiraError};
use crate::model::{
    ClassDistribution, ClassTopTerms, MarkovModel, ModelKind, NaiveBayesModel, SentimentModel,
};

/// Corpus size above which the E-step classifies sentences in parallel.
///
/// Classification is independent per sentence; results are collected in
/// corpus order, so the parallel and serial paths are equivalent.
const PARALLEL_THRESHOLD: usize = 256;

/// Trains a sentiment model with expectation-maximization.
///
/// # Examples
///
/// ```
/// use sentira::em::{EmConfig, EmTrainer};
/// use sentira::model::ModelKind;
///
/// let trainer = EmTrainer::new(EmConfig {
///     iterations: 1,
///     model: ModelKind::NaiveBayes,
///     ..EmConfig::default()
/// })
/// .unwrap();
///
/// let trained = trainer
///     .train([":) great movie", ":( terrible mess", "great film"])
///     .unwrap();
///
/// let probs = trained.classify("great film").unwrap();
/// assert!(probs[1] > probs[0]);
/// ```
#[derive(Debug, Clone)]
pub struct EmTrainer {
    config: EmConfig,
}

impl EmTrainer {
    /// Create a trainer after validating the configuration.
    pub fn new(config: EmConfig) -> Result<Self> {
        config.validate()?;
        Ok(EmTrainer { config })
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &EmConfig {
        &self.config
    }

    /// Train on raw training lines.
    pub fn train<I>(&self, lines: I) -> Result<TrainedModel>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.train_with_progress(lines, |_| {})
    }

    /// Train on raw training lines, invoking `progress` with each round
    /// index before the round runs.
    pub fn train_with_progress<I, F>(&self, lines: I, progress: F) -> Result<TrainedModel>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        F: Fn(usize),
    {
        let mut initializer = Initializer::new(
            self.config.classes,
            self.config.semisupervised,
            self.config.seed,
        );
        let (corpus, mut assignments) = initializer.assign(lines);
        if corpus.is_empty() {
            return Err(SentiraError::training("training corpus is empty"));
        }

        // Initial M-step: train as if the initial assignments were ground
        // truth.
        let mut model = self.rebuilt_model(&corpus, &assignments);

        for round in 0..self.config.iterations {
            progress(round);
            assignments = self.expectation(&corpus, model.as_ref())?;
            model = self.rebuilt_model(&corpus, &assignments);
        }

        Ok(TrainedModel {
            config: self.config.clone(),
            corpus,
            model,
        })
    }

    /// E-step: classify every corpus sentence under the current model.
    fn expectation(
        &self,
        corpus: &Corpus,
        model: &dyn SentimentModel,
    ) -> Result<Vec<ClassDistribution>> {
        let sentences = corpus.sentences();
        if sentences.len() >= PARALLEL_THRESHOLD {
            sentences
                .par_iter()
                .map(|sentence| model.classify(sentence))
                .collect()
        } else {
            sentences
                .iter()
                .map(|sentence| model.classify(sentence))
                .collect()
        }
    }

    /// M-step: a fresh model populated with one update per sentence.
    fn rebuilt_model(
        &self,
        corpus: &Corpus,
        assignments: &[ClassDistribution],
    ) -> Box<dyn SentimentModel> {
        let mut model = self.build_model();
        for (sentence, probs) in corpus.sentences().iter().zip(assignments) {
            model.update(sentence, probs);
        }
        model
    }

    /// Construct an empty model of the configured variant.
    fn build_model(&self) -> Box<dyn SentimentModel> {
        match self.config.model {
            ModelKind::NaiveBayes => Box::new(NaiveBayesModel::with_oov_prob(
                self.config.classes,
                self.config.oov_prob,
            )),
            ModelKind::Markov => Box::new(MarkovModel::with_options(
                self.config.classes,
                SentenceCleaner::from_tokens(self.config.stop_tokens.iter().cloned()),
                self.config.oov_prob,
            )),
        }
    }
}

/// The outcome of a training run: the final model and its corpus.
pub struct TrainedModel {
    config: EmConfig,
    corpus: Corpus,
    model: Box<dyn SentimentModel>,
}

impl TrainedModel {
    /// The trained model.
    pub fn model(&self) -> &dyn SentimentModel {
        self.model.as_ref()
    }

    /// The deduplicated training corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Posterior class probabilities for a sentence.
    pub fn classify(&self, sentence: &str) -> Result<ClassDistribution> {
        self.model.classify(sentence)
    }

    /// Per-class top terms under the configured count threshold.
    pub fn top_terms(&self) -> Result<Vec<ClassTopTerms>> {
        self.model
            .top_terms(self.config.top_n, self.config.min_to_print)
    }
}

impl fmt::Debug for TrainedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedModel")
            .field("model", &self.model.name())
            .field("corpus_len", &self.corpus.len())
            .finish()
    }
}
