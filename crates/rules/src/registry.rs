//! Evaluator registry: match-type key to evaluator instance.
//!
//! Built once at startup and immutable afterwards, which keeps the
//! many-reader evaluation path lock-free. Duplicate registrations
//! overwrite silently — last registration wins.

use std::collections::HashMap;

use sift_core::ConfigError;
use tracing::debug;

use crate::eval::{
    CompositeEvaluator, ContainsEvaluator, DateRangeEvaluator, Evaluate, ExactEvaluator,
    FuzzyEvaluator, JaroWinklerEvaluator, KoreanEvaluator, NgramEvaluator, PhoneticEvaluator,
};
use crate::schema::MatchType;

pub struct EvaluatorRegistry {
    evaluators: HashMap<MatchType, Box<dyn Evaluate>>,
}

impl EvaluatorRegistry {
    /// An empty registry; callers register evaluators explicitly.
    pub fn empty() -> Self {
        Self {
            evaluators: HashMap::new(),
        }
    }

    /// Registry with every built-in evaluator.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(ExactEvaluator));
        registry.register(Box::new(ContainsEvaluator));
        registry.register(Box::new(FuzzyEvaluator));
        registry.register(Box::new(PhoneticEvaluator));
        registry.register(Box::new(JaroWinklerEvaluator));
        registry.register(Box::new(NgramEvaluator));
        registry.register(Box::new(KoreanEvaluator));
        registry.register(Box::new(DateRangeEvaluator));
        registry.register(Box::new(CompositeEvaluator));
        registry
    }

    /// Register an evaluator under its self-reported match type.
    ///
    /// A duplicate key replaces the previous evaluator (last wins).
    pub fn register(&mut self, evaluator: Box<dyn Evaluate>) {
        let key = evaluator.match_type();
        if self.evaluators.insert(key, evaluator).is_some() {
            debug!(match_type = %key, "evaluator registration overwrote existing entry");
        }
    }

    /// Resolve the evaluator for a match type.
    pub fn resolve(&self, match_type: MatchType) -> Result<&dyn Evaluate, ConfigError> {
        self.evaluators
            .get(&match_type)
            .map(|e| e.as_ref())
            .ok_or_else(|| ConfigError::UnsupportedMatchType {
                match_type: match_type.to_string(),
            })
    }

    /// Supported match types, sorted by wire key for stable diagnostics.
    pub fn supported_types(&self) -> Vec<MatchType> {
        let mut types: Vec<MatchType> = self.evaluators.keys().copied().collect();
        types.sort_by_key(|t| t.as_str());
        types
    }
}

impl Default for EvaluatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::{MatchFinding, Subject, WatchlistCandidate};

    use crate::schema::RuleDefinition;

    #[test]
    fn defaults_cover_all_match_types() {
        let registry = EvaluatorRegistry::with_defaults();
        let types = registry.supported_types();
        assert_eq!(types.len(), 9);
        // Sorted by wire key.
        assert_eq!(types.first().map(MatchType::as_str), Some("COMPOSITE"));
        assert_eq!(types.last().map(MatchType::as_str), Some("PHONETIC"));
    }

    #[test]
    fn missing_evaluator_is_config_error() {
        let registry = EvaluatorRegistry::empty();
        let err = registry.resolve(MatchType::Fuzzy).err().unwrap();
        assert!(err.to_string().contains("FUZZY"));
    }

    struct MarkerEvaluator;

    impl Evaluate for MarkerEvaluator {
        fn match_type(&self) -> MatchType {
            MatchType::Exact
        }

        fn evaluate(
            &self,
            _subject: &Subject,
            _candidate: &WatchlistCandidate,
            rule: &RuleDefinition,
        ) -> Vec<MatchFinding> {
            vec![MatchFinding {
                rule_id: rule.id.clone(),
                rule_type: "MARKER".to_string(),
                score: 1.0,
                matched_value: String::new(),
                target_value: String::new(),
                description: String::new(),
            }]
        }
    }

    #[test]
    fn duplicate_registration_last_wins() {
        let mut registry = EvaluatorRegistry::with_defaults();
        registry.register(Box::new(MarkerEvaluator));

        let rule = crate::eval::testutil::rule(MatchType::Exact, "name", "name");
        let findings = registry.resolve(MatchType::Exact).unwrap().evaluate(
            &Subject::new("x"),
            &WatchlistCandidate::new("WL-1", "y", "UN"),
            &rule,
        );
        assert_eq!(findings[0].rule_type, "MARKER");
    }
}
