//! Korean evaluator: chosung-only coarse matching or jamo-level similarity.
//!
//! Applies only when the subject value or a target value contains Hangul
//! syllables; pairs without Hangul on either side are skipped, not scored.
//!
//! Chosung-only mode deviates from the best-match policy of the other
//! evaluators: the first target whose chosung string equals the source's
//! wins, with a fixed similarity of 0.8, and scanning stops there.

use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use sift_match::korean;

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, percent, scored, source_value, target_values, Evaluate};

const DEFAULT_THRESHOLD: f64 = 0.7;
const CHOSUNG_MATCH_SIMILARITY: f64 = 0.8;

pub struct KoreanEvaluator;

impl Evaluate for KoreanEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Korean
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
        let chosung_only = rule.parameters.bool_or("chosungOnly", false);

        let norm_source = normalized_for(&rule.source_field, &source);
        let source_hangul = korean::contains_hangul(&norm_source);

        if chosung_only {
            let source_chosung = korean::chosung(&norm_source);
            if source_chosung.is_empty() {
                return Vec::new();
            }
            // First-match-wins: stop scanning on the first chosung hit.
            for target in target_values(candidate, rule) {
                let norm_target = normalized_for(&rule.target_field, &target);
                if korean::chosung(&norm_target) == source_chosung {
                    let score =
                        scored(&rule.score_config, CHOSUNG_MATCH_SIMILARITY, false);
                    let description = format!(
                        "Chosung match {} between '{}' and '{}'",
                        source_chosung, source, target
                    );
                    return vec![finding(rule, score, source, target, description)];
                }
            }
            return Vec::new();
        }

        let mut best: Option<(f64, String)> = None;
        for target in target_values(candidate, rule) {
            let norm_target = normalized_for(&rule.target_field, &target);
            // No Hangul on either side: not applicable, skip the pair.
            if !source_hangul && !korean::contains_hangul(&norm_target) {
                continue;
            }
            let similarity = korean::jamo_similarity(&norm_source, &norm_target);
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
            "Jamo similarity {} between '{}' (chosung {}) and '{}' (chosung {})",
            percent(similarity),
            source,
            korean::chosung(&norm_source),
            target,
            korean::chosung(&normalized_for(&rule.target_field, &target)),
        );
        vec![finding(rule, score, source, target, description)]
    }
}
