//! Contains evaluator: all-words-contained in either direction.
//!
//! Boolean algorithm with no score gradient: findings always pay the
//! flat `partial_match` value regardless of proportional scoring.

use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use sift_match::textual;

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, source_value, target_values, Evaluate};

pub struct ContainsEvaluator;

impl Evaluate for ContainsEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Contains
    }

    fn evaluate(
        &self,
        subject: &Subject,
        candidate: &WatchlistCandidate,
        rule: &RuleDefinition,
    ) -> Vec<MatchFinding> {
        let Some(source) = source_value(subject, rule) else {
            return Vec::new();
        };

        for target in target_values(candidate, rule) {
            if textual::contains_all_words(&source, &target) {
                let description = format!(
                    "All words of the shorter of '{}' and '{}' contained in the longer",
                    source, target
                );
                return vec![finding(
                    rule,
                    rule.score_config.partial_match,
                    source,
                    target,
                    description,
                )];
            }
        }

        Vec::new()
    }
}
