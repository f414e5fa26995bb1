//! Rule evaluators: one per match type.
//!
//! Every evaluator follows the same flow:
//! 1. resolve the source value from the subject (blank → no findings)
//! 2. resolve target values from the candidate (blanks skipped)
//! 3. apply its algorithm with rule parameters (named defaults)
//! 4. keep the best-scoring target value; only the best clears the
//!    threshold (the Korean chosung-only mode deviates: first match wins)
//! 5. convert similarity to a score via the rule's `ScoreConfig`
//! 6. emit one `MatchFinding` with human-readable evidence
//!
//! Skipped evaluations are empty vectors, never errors: the hot path is
//! exception-free.

mod composite;
mod contains;
mod date_range;
mod exact;
mod fuzzy;
mod jaro_winkler;
mod korean;
mod ngram;
mod phonetic;

pub use composite::CompositeEvaluator;
pub use contains::ContainsEvaluator;
pub use date_range::DateRangeEvaluator;
pub use exact::ExactEvaluator;
pub use fuzzy::FuzzyEvaluator;
pub use jaro_winkler::JaroWinklerEvaluator;
pub use korean::KoreanEvaluator;
pub use ngram::NgramEvaluator;
pub use phonetic::PhoneticEvaluator;

use sift_core::normalize::{normalize_name, normalize_nationality};
use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use crate::ScoreConfig;

use crate::fields;
use crate::schema::{MatchType, RuleDefinition};

/// A rule evaluator for one match type.
///
/// Implementations are stateless and safe for concurrent read-only use;
/// the registry stores them as shared trait objects.
pub trait Evaluate: Send + Sync {
    /// The match-type key this evaluator handles.
    fn match_type(&self) -> MatchType;

    /// Evaluate one rule against one (subject, candidate) pair.
    fn evaluate(
        &self,
        subject: &Subject,
        candidate: &WatchlistCandidate,
        rule: &RuleDefinition,
    ) -> Vec<MatchFinding>;
}

/// Resolve the rule's source value from the subject.
pub(crate) fn source_value(subject: &Subject, rule: &RuleDefinition) -> Option<String> {
    fields::subject_field(subject, &rule.source_field)
}

/// Resolve the rule's target values from the candidate.
pub(crate) fn target_values(candidate: &WatchlistCandidate, rule: &RuleDefinition) -> Vec<String> {
    fields::candidate_field_values(candidate, &rule.target_field)
}

/// Normalize a value according to its field's classification.
pub(crate) fn normalized_for(field: &str, value: &str) -> String {
    if fields::is_name_field(field) {
        normalize_name(value)
    } else {
        normalize_nationality(value)
    }
}

/// Convert an algorithm similarity into the emitted score.
///
/// Proportional scoring scales with similarity; flat scoring pays
/// `exact_match` for exact algorithmic equality and `partial_match`
/// otherwise.
pub(crate) fn scored(config: &ScoreConfig, similarity: f64, exact: bool) -> f64 {
    if config.proportional_to_similarity {
        similarity * config.max_score
    } else if exact {
        config.exact_match
    } else {
        config.partial_match
    }
}

/// Assemble a finding for a rule.
pub(crate) fn finding(
    rule: &RuleDefinition,
    score: f64,
    matched_value: String,
    target_value: String,
    description: String,
) -> MatchFinding {
    MatchFinding {
        rule_id: rule.id.clone(),
        rule_type: rule.match_type.to_string(),
        score,
        matched_value,
        target_value,
        description,
    }
}

/// Format a similarity as a whole percentage for descriptions.
pub(crate) fn percent(similarity: f64) -> String {
    format!("{:.0}%", similarity * 100.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_scoring_scales_with_similarity() {
        let config = ScoreConfig {
            exact_match: 100.0,
            partial_match: 50.0,
            max_score: 80.0,
            proportional_to_similarity: true,
        };
        assert_eq!(scored(&config, 0.5, false), 40.0);
        assert_eq!(scored(&config, 1.0, true), 80.0);
    }

    #[test]
    fn flat_scoring_pays_exact_or_partial() {
        let config = ScoreConfig {
            exact_match: 100.0,
            partial_match: 50.0,
            max_score: 100.0,
            proportional_to_similarity: false,
        };
        assert_eq!(scored(&config, 0.93, false), 50.0);
        assert_eq!(scored(&config, 1.0, true), 100.0);
    }

    #[test]
    fn normalization_strategy_follows_field_class() {
        assert_eq!(normalized_for("name", "José  GARCÍA"), "jose garcia");
        // Nationality keeps its characters, only casefolds and trims.
        assert_eq!(normalized_for("nationality", " Curaçao "), "curaçao");
    }
}
