//! Rule engine: ordered evaluation against an atomically swappable
//! configuration snapshot.
//!
//! The engine holds the current `RuleConfiguration` behind an
//! `RwLock<Arc<..>>`. Readers clone the `Arc` once and evaluate against
//! that immutable snapshot with no lock held; `reload` validates the new
//! set and swaps the pointer. In-flight evaluations keep the snapshot
//! they started with, so no evaluation ever observes a half-updated rule
//! set.

use std::sync::{Arc, RwLock};

use sift_core::{ConfigError, MatchFinding, Subject, WatchlistCandidate};
use tracing::{debug, info};

use crate::registry::EvaluatorRegistry;
use crate::schema::RuleConfiguration;

pub struct RuleEngine {
    registry: EvaluatorRegistry,
    snapshot: RwLock<Arc<RuleConfiguration>>,
}

/// Findings for one candidate, as returned by [`RuleEngine::screen`].
#[derive(Debug, Clone)]
pub struct CandidateFindings {
    pub candidate_id: String,
    pub source_list: String,
    pub findings: Vec<MatchFinding>,
}

impl RuleEngine {
    /// Build an engine over a validated configuration.
    pub fn new(
        registry: EvaluatorRegistry,
        config: RuleConfiguration,
    ) -> Result<Self, ConfigError> {
        Self::validate(&registry, &config)?;
        info!(rules = config.rules.len(), "rule engine initialized");
        Ok(Self {
            registry,
            snapshot: RwLock::new(Arc::new(config)),
        })
    }

    /// Engine with the default evaluator set.
    pub fn with_defaults(config: RuleConfiguration) -> Result<Self, ConfigError> {
        Self::new(EvaluatorRegistry::with_defaults(), config)
    }

    fn validate(registry: &EvaluatorRegistry, config: &RuleConfiguration) -> Result<(), ConfigError> {
        config.validate()?;
        for rule in &config.rules {
            registry.resolve(rule.match_type)?;
        }
        Ok(())
    }

    /// The configuration snapshot current evaluations would use.
    pub fn snapshot(&self) -> Arc<RuleConfiguration> {
        Arc::clone(&self.snapshot.read().expect("rule snapshot lock poisoned"))
    }

    /// Atomically replace the rule configuration.
    ///
    /// The new set is validated first; on error the previous snapshot
    /// stays installed. In-flight evaluations finish against the snapshot
    /// they cloned.
    pub fn reload(&self, config: RuleConfiguration) -> Result<(), ConfigError> {
        Self::validate(&self.registry, &config)?;
        let rules = config.rules.len();
        *self.snapshot.write().expect("rule snapshot lock poisoned") = Arc::new(config);
        info!(rules, "rule configuration reloaded");
        Ok(())
    }

    /// Evaluate every enabled rule against one (subject, candidate) pair.
    ///
    /// Rules run in `(priority, id)` order and never short-circuit each
    /// other: each enabled rule contributes its own findings as
    /// independent evidence. Aggregating findings into one risk score is
    /// the caller's concern.
    pub fn evaluate(
        &self,
        subject: &Subject,
        candidate: &WatchlistCandidate,
    ) -> Vec<MatchFinding> {
        let config = self.snapshot();

        let mut findings = Vec::new();
        for rule in config.enabled_rules() {
            // Resolvability was checked when the snapshot was installed.
            let Ok(evaluator) = self.registry.resolve(rule.match_type) else {
                continue;
            };
            let emitted = evaluator.evaluate(subject, candidate, rule);
            if !emitted.is_empty() {
                debug!(
                    rule_id = %rule.id,
                    candidate_id = %candidate.id,
                    findings = emitted.len(),
                    "rule matched"
                );
            }
            findings.extend(emitted);
        }
        findings
    }

    /// Evaluate the subject against a full candidate set, grouping
    /// findings per candidate. Candidates with no findings are omitted.
    pub fn screen<'a, I>(&self, subject: &Subject, candidates: I) -> Vec<CandidateFindings>
    where
        I: IntoIterator<Item = &'a WatchlistCandidate>,
    {
        candidates
            .into_iter()
            .filter_map(|candidate| {
                let findings = self.evaluate(subject, candidate);
                if findings.is_empty() {
                    None
                } else {
                    Some(CandidateFindings {
                        candidate_id: candidate.id.clone(),
                        source_list: candidate.source_list.clone(),
                        findings,
                    })
                }
            })
            .collect()
    }
}
