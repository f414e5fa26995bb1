//! Exact match evaluator: normalized equality, no similarity gradient.

use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use sift_match::textual;

use crate::fields;
use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, scored, source_value, target_values, Evaluate};

pub struct ExactEvaluator;

impl Evaluate for ExactEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Exact
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
            let is_match = if fields::is_name_field(&rule.source_field) {
                textual::exact_match(&source, &target)
            } else {
                let ns = normalized_for(&rule.source_field, &source);
                !ns.is_empty() && ns == normalized_for(&rule.target_field, &target)
            };

            if is_match {
                let score = scored(&rule.score_config, 1.0, true);
                let description = format!(
                    "Exact match on {}: '{}' equals '{}'",
                    rule.source_field, source, target
                );
                return vec![finding(rule, score, source, target, description)];
            }
        }

        Vec::new()
    }
}
