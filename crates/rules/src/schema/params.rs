//! Loosely typed rule parameters.
//!
//! Each rule carries an open `parameters` map for algorithm-specific
//! knobs (thresholds, n-gram size, flags). Values are a small tagged
//! union; accessors take a per-call default, so a missing key or a
//! wrong-typed value falls back to the evaluator's documented default
//! instead of failing mid-screening.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single rule parameter value: number, flag, or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            ParamValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Some(*n as usize),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Ordered parameter map with typed, defaulting accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: ParamValue) {
        self.0.insert(key.into(), value);
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.0.get(key).and_then(ParamValue::as_f64).unwrap_or(default)
    }

    pub fn usize_or(&self, key: &str, default: usize) -> usize {
        self.0
            .get(key)
            .and_then(ParamValue::as_usize)
            .unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.0
            .get(key)
            .and_then(ParamValue::as_bool)
            .unwrap_or(default)
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(ParamValue::as_str).unwrap_or(default)
    }
}

impl FromIterator<(String, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_from_yaml(yaml: &str) -> Params {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn yaml_values_take_their_natural_type() {
        let params = params_from_yaml(
            r#"
similarityThreshold: 0.85
ngramSize: 3
chosungOnly: true
algorithm: SOUNDEX
"#,
        );
        assert_eq!(params.f64_or("similarityThreshold", 0.5), 0.85);
        assert_eq!(params.usize_or("ngramSize", 2), 3);
        assert!(params.bool_or("chosungOnly", false));
        assert_eq!(params.str_or("algorithm", "BOTH"), "SOUNDEX");
    }

    #[test]
    fn missing_key_falls_back() {
        let params = Params::new();
        assert_eq!(params.f64_or("similarityThreshold", 0.8), 0.8);
        assert_eq!(params.str_or("algorithm", "BOTH"), "BOTH");
    }

    #[test]
    fn wrong_type_falls_back() {
        let params = params_from_yaml("similarityThreshold: strict\nngramSize: 2.5\n");
        assert_eq!(params.f64_or("similarityThreshold", 0.8), 0.8);
        // Fractional n-gram size is not coerced.
        assert_eq!(params.usize_or("ngramSize", 2), 2);
    }
}
