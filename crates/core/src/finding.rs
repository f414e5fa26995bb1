//! Screening outputs: per-rule match findings and composite sub-scores.

use serde::{Deserialize, Serialize};

/// One rule's positive match result against one watchlist candidate.
///
/// Created fresh per evaluation, immutable afterwards. The `description`
/// carries human-readable evidence (similarity percentage, phonetic codes,
/// chosung strings, composite sub-score breakdown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFinding {
    pub rule_id: String,
    pub rule_type: String,
    pub score: f64,
    pub matched_value: String,
    pub target_value: String,
    pub description: String,
}

/// Sub-score breakdown produced by the composite algorithm.
///
/// Derived per comparison, never persisted. `korean_score` is 0.0 when
/// neither input contains Hangul (inapplicable, not NaN).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeMatchResult {
    pub composite_score: f64,
    pub jaro_winkler_score: f64,
    pub metaphone_score: f64,
    pub ngram_score: f64,
    pub korean_score: f64,
    pub metaphone_match: bool,
}

impl CompositeMatchResult {
    /// Whether the blended score clears the given confidence threshold.
    pub fn is_high_confidence_match(&self, threshold: f64) -> bool {
        self.composite_score >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_confidence_threshold_is_inclusive() {
        let result = CompositeMatchResult {
            composite_score: 0.75,
            jaro_winkler_score: 0.9,
            metaphone_score: 0.5,
            ngram_score: 0.7,
            korean_score: 0.0,
            metaphone_match: false,
        };
        assert!(result.is_high_confidence_match(0.75));
        assert!(!result.is_high_confidence_match(0.76));
    }

    #[test]
    fn finding_serializes_camel_case() {
        let finding = MatchFinding {
            rule_id: "name-jw".to_string(),
            rule_type: "JARO_WINKLER".to_string(),
            score: 91.2,
            matched_value: "jon smith".to_string(),
            target_value: "john smith".to_string(),
            description: "Jaro-Winkler similarity 91%".to_string(),
        };
        let json = serde_json::to_string(&finding).unwrap();
        assert!(json.contains("\"ruleType\":\"JARO_WINKLER\""));
        assert!(json.contains("\"matchedValue\""));
    }
}
