//! Composite evaluator: weighted blend of Jaro-Winkler, metaphone, and
//! n-gram similarities (Korean substituting when Hangul is present).

use sift_core::{CompositeMatchResult, MatchFinding, Subject, WatchlistCandidate};
use sift_match::composite::composite_score;

use crate::schema::{MatchType, RuleDefinition};

use super::{finding, normalized_for, percent, scored, source_value, target_values, Evaluate};

const DEFAULT_THRESHOLD: f64 = 0.75;

pub struct CompositeEvaluator;

impl Evaluate for CompositeEvaluator {
    fn match_type(&self) -> MatchType {
        MatchType::Composite
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

        // Strictly highest composite among targets clearing the threshold;
        // ties keep the first occurrence.
        let mut best: Option<(CompositeMatchResult, String)> = None;
        for target in target_values(candidate, rule) {
            let norm_target = normalized_for(&rule.target_field, &target);
            let result = composite_score(&norm_source, &norm_target);
            if !result.is_high_confidence_match(threshold) {
                continue;
            }
            if best
                .as_ref()
                .map_or(true, |(b, _)| result.composite_score > b.composite_score)
            {
                best = Some((result, target));
            }
        }

        let Some((result, target)) = best else {
            return Vec::new();
        };

        let score = scored(
            &rule.score_config,
            result.composite_score,
            result.composite_score >= 1.0,
        );
        let description = format!(
            "Composite {} (jaro-winkler {}, metaphone {}, ngram {}, korean {}){}",
            percent(result.composite_score),
            percent(result.jaro_winkler_score),
            percent(result.metaphone_score),
            percent(result.ngram_score),
            percent(result.korean_score),
            if result.metaphone_match {
                ", metaphone codes agree"
            } else {
                ""
            },
        );
        vec![finding(rule, score, source, target, description)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::testutil::rule;

    fn candidate() -> WatchlistCandidate {
        WatchlistCandidate::new("WL-9", "John Smith", "OFAC").with_aliases(vec![
            "Smith John".to_string(),
            "Jon Smith".to_string(),
        ])
    }

    #[test]
    fn emits_single_best_finding() {
        let rule = rule(MatchType::Composite, "name", "aliases");
        let subject = Subject::new("John Smith");

        let findings = CompositeEvaluator.evaluate(&subject, &candidate(), &rule);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_type, "COMPOSITE");
        assert!(findings[0].description.contains("jaro-winkler"));
    }

    #[test]
    fn below_confidence_threshold_emits_nothing() {
        let rule = rule(MatchType::Composite, "name", "name");
        let subject = Subject::new("Wilhelmina Baumgartner");
        assert!(CompositeEvaluator.evaluate(&subject, &candidate(), &rule).is_empty());
    }

    #[test]
    fn hangul_subject_blends_korean_sub_score() {
        let rule = rule(MatchType::Composite, "name", "name");
        let subject = Subject::new("김철수");
        let candidate = WatchlistCandidate::new("WL-1", "김철수", "KR-LIST");

        let findings = CompositeEvaluator.evaluate(&subject, &candidate, &rule);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].description.contains("korean 100%"));
    }

    #[test]
    fn tie_keeps_first_occurrence() {
        let rule = rule(MatchType::Composite, "name", "aliases");
        let subject = Subject::new("John Smith");
        let candidate = WatchlistCandidate::new("WL-1", "x", "UN").with_aliases(vec![
            "John Smith".to_string(),
            "john smith".to_string(),
        ]);

        let findings = CompositeEvaluator.evaluate(&subject, &candidate, &rule);
        assert_eq!(findings[0].target_value, "John Smith");
    }
}
