//! Normalization provider: deterministic, total string canonicalization.
//!
//! All name comparison in the engine happens on the normalized form:
//! casefolded, diacritic-stripped, whitespace-collapsed. Hangul is passed
//! through untouched — transliterating it would destroy the input of the
//! Korean comparison algorithms.

use deunicode::deunicode_char;

/// Hangul syllables, jamo, and compatibility jamo blocks.
fn is_hangul_char(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

/// Normalize a personal or organization name: casefold, strip diacritics,
/// collapse runs of whitespace to single spaces, trim.
///
/// Total over arbitrary input; empty input yields an empty string.
pub fn normalize_name(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    for c in input.chars() {
        if is_hangul_char(c) {
            stripped.push(c);
        } else if let Some(ascii) = deunicode_char(c) {
            stripped.push_str(ascii);
        }
        // Unmapped characters are dropped.
    }

    let lowered = stripped.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a nationality / country designation: casefold and trim.
pub fn normalize_nationality(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Edit-distance similarity in `[0.0, 1.0]`: `1 - levenshtein / max_len`.
///
/// Returns 0.0 whenever either input is empty, including when both are —
/// an empty name carries no evidence of identity.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    let distance = strsim::levenshtein(a, b);
    1.0 - distance as f64 / max_len as f64
}
