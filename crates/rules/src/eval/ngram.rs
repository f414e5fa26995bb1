//! N-gram evaluator: Dice-coefficient overlap of character n-grams.

use sift_core::{MatchFinding, Subject, WatchlistCandidate};
use sift_match::ngram;

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, percent, scored, source_value, target_values, Evaluate};

const DEFAULT_THRESHOLD: f64 = 0.6;
const DEFAULT_NGRAM_SIZE: usize = 2;

pub struct NgramEvaluator;

impl Evaluate for NgramEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Ngram
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
        let n = rule.parameters.usize_or("ngramSize", DEFAULT_NGRAM_SIZE).max(1);

        let norm_source = normalized_for(&rule.source_field, &source);

        let mut best: Option<(f64, String)> = None;
        for target in target_values(candidate, rule) {
            let norm_target = normalized_for(&rule.target_field, &target);
            let similarity = ngram::ngram_similarity(&norm_source, &norm_target, n);
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

        let norm_target = normalized_for(&rule.target_field, &target);
        let shared = ngram::shared_gram_count(
            &ngram::ngrams(&norm_source, n),
            &ngram::ngrams(&norm_target, n),
        );
        let score = scored(&rule.score_config, similarity, similarity >= 1.0);
        let description = format!(
            "{}-gram overlap {} ({} shared) between '{}' and '{}'",
            n,
            percent(similarity),
            shared,
            source,
            target
        );
        vec![finding(rule, score, source, target, description)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::testutil::rule;
    use crate::schema::ParamValue;

    #[test]
    fn bigram_overlap_scores_proportionally() {
        let rule = rule(MatchType::Ngram, "name", "name");
        let subject = Subject::new("Johnson");
        let candidate = WatchlistCandidate::new("WL-1", "Johnsen", "UN");

        let findings = NgramEvaluator.evaluate(&subject, &candidate, &rule);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].score > 60.0 && findings[0].score < 100.0);
        assert!(findings[0].description.contains("2-gram"));
    }

    #[test]
    fn trigram_size_is_configurable() {
        let mut rule = rule(MatchType::Ngram, "name", "name");
        rule.parameters.set("ngramSize", ParamValue::Number(3.0));
        let subject = Subject::new("Johnson");
        let candidate = WatchlistCandidate::new("WL-1", "Johnson", "UN");

        let findings = NgramEvaluator.evaluate(&subject, &candidate, &rule);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].score, 100.0);
        assert!(findings[0].description.contains("3-gram"));
    }

    #[test]
    fn low_overlap_emits_nothing() {
        let rule = rule(MatchType::Ngram, "name", "name");
        let subject = Subject::new("Johnson");
        let candidate = WatchlistCandidate::new("WL-1", "Albrecht", "UN");
        assert!(NgramEvaluator.evaluate(&subject, &candidate, &rule).is_empty());
    }
}
