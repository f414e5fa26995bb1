//! Match-type keys linking rules to evaluators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sift_core::ConfigError;

/// The closed set of supported match types.
///
/// Wire keys are the SCREAMING_SNAKE_CASE names used in rule files
/// (`EXACT`, `JARO_WINKLER`, ...). Adding an algorithm means adding a
/// variant and registering its evaluator; engine and callers are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Exact,
    Contains,
    Fuzzy,
    Phonetic,
    JaroWinkler,
    Ngram,
    Korean,
    DateRange,
    Composite,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "EXACT",
            MatchType::Contains => "CONTAINS",
            MatchType::Fuzzy => "FUZZY",
            MatchType::Phonetic => "PHONETIC",
            MatchType::JaroWinkler => "JARO_WINKLER",
            MatchType::Ngram => "NGRAM",
            MatchType::Korean => "KOREAN",
            MatchType::DateRange => "DATE_RANGE",
            MatchType::Composite => "COMPOSITE",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXACT" => Ok(MatchType::Exact),
            "CONTAINS" => Ok(MatchType::Contains),
            "FUZZY" => Ok(MatchType::Fuzzy),
            "PHONETIC" => Ok(MatchType::Phonetic),
            "JARO_WINKLER" => Ok(MatchType::JaroWinkler),
            "NGRAM" => Ok(MatchType::Ngram),
            "KOREAN" => Ok(MatchType::Korean),
            "DATE_RANGE" => Ok(MatchType::DateRange),
            "COMPOSITE" => Ok(MatchType::Composite),
            other => Err(ConfigError::UnsupportedMatchType {
                match_type: other.to_string(),
            }),
        }
    }
}
