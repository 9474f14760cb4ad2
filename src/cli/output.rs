//! Output formatting for CLI results.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentiraArgs};
use crate::error::Result;
use crate::model::ClassTopTerms;

/// Posterior probabilities for one held-out sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScores {
    pub sentence: String,
    pub probabilities: Vec<f64>,
}

/// Everything one run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResults {
    pub model: String,
    pub top_terms: Vec<ClassTopTerms>,
    pub classifications: Vec<SentenceScores>,
}

/// Render results to stdout in the requested format.
pub fn print_results(results: &RunResults, args: &SentiraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_human(results));
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(results)?
            } else {
                serde_json::to_string(results)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

/// Human-readable rendering: per-class summaries, then one line per
/// classified sentence with its space-separated class probabilities.
pub fn render_human(results: &RunResults) -> String {
    let mut out = String::new();

    for class_terms in &results.top_terms {
        out.push_str(&format!("Cluster {}:\n", class_terms.class));
        for term in &class_terms.terms {
            out.push_str(term);
            out.push('\n');
        }
        if class_terms.exhausted {
            out.push_str("No more words...\n");
        }
    }

    for scores in &results.classifications {
        let probs: Vec<String> = scores
            .probabilities
            .iter()
            .map(|p| p.to_string())
            .collect();
        out.push_str(&format!("{}:{}\n", scores.sentence, probs.join(" ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> RunResults {
        RunResults {
            model: "naive_bayes".to_string(),
            top_terms: vec![
                ClassTopTerms {
                    class: 0,
                    terms: vec!["terrible".to_string()],
                    exhausted: true,
                },
                ClassTopTerms {
                    class: 1,
                    terms: vec!["great".to_string(), "fun".to_string()],
                    exhausted: false,
                },
            ],
            classifications: vec![SentenceScores {
                sentence: "great film".to_string(),
                probabilities: vec![0.25, 0.75],
            }],
        }
    }

    #[test]
    fn test_render_human() {
        let rendered = render_human(&sample_results());
        let expected = "Cluster 0:\nterrible\nNo more words...\nCluster 1:\ngreat\nfun\ngreat film:0.25 0.75\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_results_round_trip_json() {
        let results = sample_results();
        let json = serde_json::to_string(&results).unwrap();
        let back: RunResults = serde_json::from_str(&json).unwrap();

        assert_eq!(back.model, results.model);
        assert_eq!(back.top_terms, results.top_terms);
        assert_eq!(back.classifications, results.classifications);
    }
}
