//! Load-time configuration errors.
//!
//! These are raised only while building the evaluator registry or loading a
//! rule configuration. The hot evaluation path never raises: a rule that
//! cannot match (blank field, unsupported script, similarity below
//! threshold) simply emits zero findings.

use thiserror::Error;

/// Fatal configuration errors surfaced at registry build or rule load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule references a match type with no registered evaluator.
    #[error("no evaluator registered for match type '{match_type}'")]
    UnsupportedMatchType { match_type: String },

    /// A rule's score configuration violates `0 <= partial <= exact <= max <= 100`.
    #[error("rule '{rule_id}' has invalid score bounds: {detail}")]
    ScoreBounds { rule_id: String, detail: String },

    /// Two rules in one configuration share an id.
    #[error("duplicate rule id '{rule_id}'")]
    DuplicateRuleId { rule_id: String },

    /// A rule with an empty id.
    #[error("rule id must not be empty")]
    EmptyRuleId,
}
