//! # Sentira
//!
//! Unsupervised and semisupervised sentiment clustering for short text,
//! built around expectation-maximization over generative language models.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Unigram Naive Bayes and first-order Markov (bigram) models
//! - Soft-assignment EM training with a fixed iteration budget
//! - Semisupervised seeding from in-band sentiment markers
//! - Per-class top-term reporting
//! - Parallel E-step for large corpora

pub mod analysis;
pub mod cli;
pub mod em;
pub mod error;
pub mod model;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
