//! Fuzzy evaluator: normalized edit-distance similarity.

use sift_core::normalize;
use sift_core::{MatchFinding, Subject, WatchlistCandidate};

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, percent, scored, source_value, target_values, Evaluate};

const DEFAULT_THRESHOLD: f64 = 0.8;

pub struct FuzzyEvaluator;

impl Evaluate for FuzzyEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Fuzzy
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
        let threshold = rule
            .parameters
            .f64_or("similarityThreshold", DEFAULT_THRESHOLD);
        let norm_source = normalized_for(&rule.source_field, &source);

        let mut best: Option<(f64, String)> = None;
        for target in target_values(candidate, rule) {
            let norm_target = normalized_for(&rule.target_field, &target);
            let similarity = normalize::similarity(&norm_source, &norm_target);
            if best.as_ref().map_or(true, |(b, _)| similarity > *b) {
                best = Some((similarity, target));
            }
        }

        let Some((similarity, target)) = best else {
            return Vec::new();
        };
        if similarity < threshold {
            return Vec::new();
        }

        let score = scored(&rule.score_config, similarity, similarity >= 1.0);
        let description = format!(
            "Edit-distance similarity {} between '{}' and '{}'",
            percent(similarity),
            source,
            target
        );
        vec![finding(rule, score, source, target, description)]
    }
}
