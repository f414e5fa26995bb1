//! Jaro-Winkler evaluator: token-aligned by default.

use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use sift_match::jaro;

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, percent, scored, source_value, target_values, Evaluate};

const DEFAULT_THRESHOLD: f64 = 0.85;

pub struct JaroWinklerEvaluator;

impl Evaluate for JaroWinklerEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::JaroWinkler
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
        // Token alignment tolerates swapped name parts and is the default;
        // set `tokenized: false` for the plain full-string variant.
        let tokenized = rule.parameters.bool_or("tokenized", true);

        let norm_source = normalized_for(&rule.source_field, &source);

        let mut best: Option<(f64, String)> = None;
        for target in target_values(candidate, rule) {
            let norm_target = normalized_for(&rule.target_field, &target);
            let similarity = if tokenized {
                jaro::jaro_winkler_tokens(&norm_source, &norm_target)
            } else {
                jaro::jaro_winkler(&norm_source, &norm_target)
            };
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
            "Jaro-Winkler similarity {} between '{}' and '{}'",
            percent(similarity),
            source,
            target
        );
        vec![finding(rule, score, source, target, description)]
    }
}
