//! Command implementation for the Sentira CLI.
//!
//! The input stream has two sections: training lines up to a separator
//! line, then unlabeled lines to classify under the trained model.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::cli::args::SentiraArgs;
use crate::cli::output::{RunResults, SentenceScores, print_results};
use crate::em::EmTrainer;
use crate::error::Result;

/// A line whose content begins with this token ends the training section.
pub const SECTION_SEPARATOR: &str = "---";

/// Execute a CLI invocation end to end.
pub fn execute_command(args: SentiraArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let results = run_pipeline(reader, &args)?;
    print_results(&results, &args)
}

/// Train on the stream's training section and classify the remainder.
///
/// Progress notices go to stderr so they never interleave with results.
pub fn run_pipeline<R: BufRead>(reader: R, args: &SentiraArgs) -> Result<RunResults> {
    let verbosity = args.verbosity();
    let mut lines = reader.lines();

    // Training section: everything up to the separator line.
    let mut training = Vec::new();
    for line in lines.by_ref() {
        let line = line?;
        if line.starts_with(SECTION_SEPARATOR) {
            break;
        }
        training.push(line);
    }

    if verbosity > 0 {
        eprintln!("Initializing models....");
    }
    let trainer = EmTrainer::new(args.em_config())?;
    let trained = trainer.train_with_progress(training, |round| {
        if verbosity > 0 {
            eprintln!("EM round {round}");
        }
    })?;

    let top_terms = trained.top_terms()?;

    // Classification section: score every remaining line.
    let mut classifications = Vec::new();
    for line in lines {
        let line = line?;
        let probabilities = trained.classify(&line)?;
        classifications.push(SentenceScores {
            sentence: line,
            probabilities,
        });
    }

    Ok(RunResults {
        model: trained.model().name().to_string(),
        top_terms,
        classifications,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn quiet_args(extra: &[&str]) -> SentiraArgs {
        let mut argv = vec!["sentira", "-q", "--model", "naive-bayes", "--iterations", "1"];
        argv.extend_from_slice(extra);
        SentiraArgs::parse_from(argv)
    }

    #[test]
    fn test_pipeline_splits_sections() {
        let input = ":) great movie\n:( terrible film\ngreat film\n---\ngreat film\nterrible movie\n";
        let args = quiet_args(&[]);

        let results = run_pipeline(Cursor::new(input), &args).unwrap();

        assert_eq!(results.model, "naive_bayes");
        assert_eq!(results.classifications.len(), 2);
        assert_eq!(results.classifications[0].sentence, "great film");
        let probs = &results.classifications[0].probabilities;
        assert_eq!(probs.len(), 2);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pipeline_without_classification_section() {
        let input = ":) good\n:( bad\n---\n";
        let args = quiet_args(&[]);

        let results = run_pipeline(Cursor::new(input), &args).unwrap();
        assert!(results.classifications.is_empty());
    }

    #[test]
    fn test_pipeline_empty_training_fails() {
        let input = "---\nsomething to classify\n";
        let args = quiet_args(&[]);

        assert!(run_pipeline(Cursor::new(input), &args).is_err());
    }

    #[test]
    fn test_pipeline_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ":) great movie\n:( terrible film\n---\ngreat movie\n").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args = quiet_args(&[path.as_str()]);

        let reader = BufReader::new(File::open(args.input.as_ref().unwrap()).unwrap());
        let results = run_pipeline(reader, &args).unwrap();

        assert_eq!(results.classifications.len(), 1);
        assert!(results.classifications[0].probabilities[1] > 0.5);
    }
}
