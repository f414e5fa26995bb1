//! Shared domain types for the sift screening engine.
//!
//! This crate holds:
//! - `Subject` / `WatchlistCandidate` screening inputs
//! - `MatchFinding` / `CompositeMatchResult` outputs
//! - `ConfigError` load-time error taxonomy
//! - The normalization provider (casefold, diacritic strip, edit-distance
//!   similarity) consumed by the rule evaluators

pub mod entity;
pub mod error;
pub mod finding;
pub mod normalize;

pub use entity::*;
pub use error::*;
pub use finding::*;
