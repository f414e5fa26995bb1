//! Phonetic evaluator: Soundex / Double Metaphone code comparison.
//!
//! The `algorithm` parameter selects `SOUNDEX`, `METAPHONE`, or `BOTH`
//! (default). Code equality counts as exact algorithmic equality for flat
//! scoring; similarity comes from shared code prefixes.

use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use sift_match::phonetic::{self, PhoneticAlgorithm};

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, percent, scored, source_value, target_values, Evaluate};

const DEFAULT_THRESHOLD: f64 = 0.7;
const DEFAULT_ALGORITHM: PhoneticAlgorithm = PhoneticAlgorithm::Both;

pub struct PhoneticEvaluator;

impl Evaluate for PhoneticEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Phonetic
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
        let algorithm = PhoneticAlgorithm::parse(rule.parameters.str_or("algorithm", ""))
            .unwrap_or(DEFAULT_ALGORITHM);

        let norm_source = normalized_for(&rule.source_field, &source);

        let mut best: Option<(f64, bool, String)> = None;
        for target in target_values(candidate, rule) {
            let norm_target = normalized_for(&rule.target_field, &target);
            let similarity = algorithm.similarity(&norm_source, &norm_target);
            if best.as_ref().map_or(true, |(b, _, _)| similarity > *b) {
                let codes_equal = algorithm.matches(&norm_source, &norm_target);
                best = Some((similarity, codes_equal, target));
            }
        }

        let Some((similarity, codes_equal, target)) = best else {
            return Vec::new();
        };
        if similarity < threshold {
            return Vec::new();
        }

        let norm_target = normalized_for(&rule.target_field, &target);
        let score = scored(&rule.score_config, similarity, codes_equal);
        let description = format!(
            "Phonetic similarity {} ({}): soundex {}~{}, metaphone {}~{}",
            percent(similarity),
            algorithm,
            phonetic::soundex(&norm_source),
            phonetic::soundex(&norm_target),
            phonetic::double_metaphone(&norm_source).primary,
            phonetic::double_metaphone(&norm_target).primary,
        );
        vec![finding(rule, score, source, target, description)]
    }
}
