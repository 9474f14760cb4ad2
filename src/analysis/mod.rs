//! Text analysis for sentiment clustering.
//!
//! Sentences arrive pre-tokenized and space-delimited; analysis here is
//! limited to lowercasing and stop-token removal ahead of the Markov
//! model. The Naive Bayes model consumes raw whitespace tokens and
//! bypasses this module entirely.

pub mod cleaner;

pub use cleaner::SentenceCleaner;
