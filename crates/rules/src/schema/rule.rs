//! Rule definitions, score configuration, and the ordered rule set.

use serde::{Deserialize, Serialize};
use sift_core::ConfigError;

use super::{MatchType, Params};

/// One screening rule: which fields to compare, with which algorithm,
/// and how a match converts into a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Lower priority evaluates first; ties break by `id` ascending.
    #[serde(default)]
    pub priority: i32,
    pub source_field: String,
    pub target_field: String,
    #[serde(default)]
    pub description: String,
    pub score_config: ScoreConfig,
    #[serde(default)]
    pub parameters: Params,
}

fn default_true() -> bool {
    true
}

/// How a rule's match converts into an emitted score.
///
/// Invariant: `0 <= partial_match <= exact_match <= max_score <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreConfig {
    pub exact_match: f64,
    pub partial_match: f64,
    pub max_score: f64,
    /// When set, emitted score is `similarity * max_score` instead of the
    /// flat exact/partial values.
    #[serde(default)]
    pub proportional_to_similarity: bool,
}

impl ScoreConfig {
    /// Enforce the score bounds invariant at load time.
    pub fn validate(&self, rule_id: &str) -> Result<(), ConfigError> {
        let bounds_err = |detail: String| ConfigError::ScoreBounds {
            rule_id: rule_id.to_string(),
            detail,
        };

        if self.partial_match < 0.0 {
            return Err(bounds_err(format!(
                "partialMatch {} is negative",
                self.partial_match
            )));
        }
        if self.partial_match > self.exact_match {
            return Err(bounds_err(format!(
                "partialMatch {} exceeds exactMatch {}",
                self.partial_match, self.exact_match
            )));
        }
        if self.exact_match > self.max_score {
            return Err(bounds_err(format!(
                "exactMatch {} exceeds maxScore {}",
                self.exact_match, self.max_score
            )));
        }
        if self.max_score > 100.0 {
            return Err(bounds_err(format!(
                "maxScore {} exceeds 100",
                self.max_score
            )));
        }
        Ok(())
    }
}

/// The ordered, immutable rule set a `RuleEngine` snapshot holds.
///
/// Rules are sorted by `(priority, id)` at construction; disabled rules are
/// retained (so introspection sees them) but skipped during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfiguration {
    pub rules: Vec<RuleDefinition>,
}

impl RuleConfiguration {
    pub fn new(mut rules: Vec<RuleDefinition>) -> Self {
        rules.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));
        Self { rules }
    }

    /// Enabled rules in evaluation order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.iter().filter(|r| r.enabled)
    }

    /// Load-time validation: non-empty unique ids and valid score bounds.
    ///
    /// Match-type resolvability is checked against the registry by
    /// [`crate::engine::RuleEngine`] when the configuration is installed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for rule in &self.rules {
            if rule.id.is_empty() {
                return Err(ConfigError::EmptyRuleId);
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(ConfigError::DuplicateRuleId {
                    rule_id: rule.id.clone(),
                });
            }
            rule.score_config.validate(&rule.id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_yaml() -> &'static str {
        r#"
id: name-jaro
type: JARO_WINKLER
priority: 10
sourceField: name
targetField: aliases
description: Fuzzy name match against aliases
scoreConfig:
  exactMatch: 100
  partialMatch: 60
  maxScore: 100
  proportionalToSimilarity: true
parameters:
  similarityThreshold: 0.85
"#
    }

    #[test]
    fn parse_rule_yaml() {
        let rule: RuleDefinition = serde_yaml::from_str(rule_yaml()).unwrap();
        assert_eq!(rule.match_type, MatchType::JaroWinkler);
        assert!(rule.enabled, "enabled defaults to true");
        assert_eq!(rule.priority, 10);
        assert!(rule.score_config.proportional_to_similarity);
        assert_eq!(rule.parameters.f64_or("similarityThreshold", 0.0), 0.85);
    }

    #[test]
    fn unknown_rule_field_is_rejected() {
        let yaml = format!("{}\nshortCircuit: true\n", rule_yaml().trim_end());
        assert!(serde_yaml::from_str::<RuleDefinition>(&yaml).is_err());
    }

    #[test]
    fn score_bounds_invariant() {
        let ok = ScoreConfig {
            exact_match: 90.0,
            partial_match: 40.0,
            max_score: 100.0,
            proportional_to_similarity: false,
        };
        assert!(ok.validate("r1").is_ok());

        let inverted = ScoreConfig {
            exact_match: 40.0,
            partial_match: 90.0,
            ..ok
        };
        assert!(matches!(
            inverted.validate("r1"),
            Err(ConfigError::ScoreBounds { .. })
        ));

        let too_big = ScoreConfig {
            max_score: 120.0,
            exact_match: 110.0,
            ..ok
        };
        assert!(too_big.validate("r1").is_err());
    }

    #[test]
    fn configuration_sorts_by_priority_then_id() {
        let mut low = serde_yaml::from_str::<RuleDefinition>(rule_yaml()).unwrap();
        low.id = "b-rule".to_string();
        low.priority = 1;
        let mut tied = low.clone();
        tied.id = "a-rule".to_string();
        let mut high = low.clone();
        high.id = "z-rule".to_string();
        high.priority = 0;

        let config = RuleConfiguration::new(vec![low, tied, high]);
        let ids: Vec<&str> = config.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["z-rule", "a-rule", "b-rule"]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let rule = serde_yaml::from_str::<RuleDefinition>(rule_yaml()).unwrap();
        let config = RuleConfiguration::new(vec![rule.clone(), rule]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateRuleId { .. })
        ));
    }
}
