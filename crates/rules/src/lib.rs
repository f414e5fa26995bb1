//! Rule-driven identity matching engine.
//!
//! This crate provides:
//! - YAML-based rule definitions with serde deserialization
//! - One evaluator per match type (exact, contains, fuzzy, phonetic,
//!   Jaro-Winkler, n-gram, Korean, date range, composite)
//! - An evaluator registry resolved once at startup
//! - A rule engine holding an atomically swappable configuration snapshot
//! - A filesystem loader with hot-reload via `notify` watcher
//!
//! The engine is a pure library: callers supply `Subject` and
//! `WatchlistCandidate` records and fold the returned findings into their
//! own decision.

pub mod engine;
pub mod eval;
pub mod fields;
pub mod loader;
pub mod registry;
pub mod schema;

pub use engine::{CandidateFindings, RuleEngine};
pub use registry::EvaluatorRegistry;
pub use schema::{MatchType, ParamValue, Params, RuleConfiguration, RuleDefinition, ScoreConfig};
