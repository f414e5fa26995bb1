//! Pure comparison algorithms for identity matching.
//!
//! Every function here is stateless, deterministic, and side-effect-free:
//! two strings in, a similarity in `[0.0, 1.0]` out, plus where applicable
//! a stable "code" representation for explainability (phonetic codes,
//! chosung strings, n-grams).
//!
//! Algorithms:
//! - `textual`: normalized equality and contains-all-words (boolean)
//! - `jaro`: Jaro-Winkler, full-string and token-aligned variants
//! - `ngram`: Dice-coefficient n-gram overlap
//! - `phonetic`: American Soundex and Double Metaphone
//! - `korean`: Hangul chosung extraction and jamo-level similarity
//! - `composite`: fixed weighted blend of the above

pub mod composite;
pub mod jaro;
pub mod korean;
pub mod ngram;
pub mod phonetic;
pub mod textual;
