//! Character n-gram overlap similarity (Dice coefficient).

use std::collections::HashMap;

/// Overlapping character n-grams of `s`.
///
/// A string shorter than `n` yields itself as a single gram, so short
/// strings degrade to whole-string comparison instead of matching nothing.
pub fn ngrams(s: &str, n: usize) -> Vec<String> {
    let n = n.max(1);
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() < n {
        return vec![s.to_string()];
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Dice-coefficient similarity over n-gram multisets:
/// `2 * |shared| / (|A| + |B|)`.
///
/// Shared grams are counted with multiplicity, so repeated substrings are
/// not over-weighted. Either input empty yields 0.0.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    let grams_a = ngrams(a, n);
    let grams_b = ngrams(b, n);
    if grams_a.is_empty() || grams_b.is_empty() {
        return 0.0;
    }

    let shared = shared_gram_count(&grams_a, &grams_b);
    2.0 * shared as f64 / (grams_a.len() + grams_b.len()) as f64
}

/// Number of grams shared between the two multisets (min multiplicity).
pub fn shared_gram_count(grams_a: &[String], grams_b: &[String]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for gram in grams_a {
        *counts.entry(gram.as_str()).or_insert(0) += 1;
    }

    let mut shared = 0;
    for gram in grams_b {
        if let Some(remaining) = counts.get_mut(gram.as_str()) {
            if *remaining > 0 {
                *remaining -= 1;
                shared += 1;
            }
        }
    }
    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bigrams_of_name() {
        assert_eq!(ngrams("smith", 2), vec!["sm", "mi", "it", "th"]);
    }

    #[test]
    fn short_string_degrades_to_whole_string() {
        assert_eq!(ngrams("al", 3), vec!["al"]);
        assert_eq!(ngram_similarity("al", "al", 3), 1.0);
        assert_eq!(ngram_similarity("al", "om", 3), 0.0);
    }

    #[test]
    fn self_similarity_is_one() {
        for n in 1..=5 {
            assert_eq!(ngram_similarity("smith", "smith", n), 1.0);
        }
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ngram_similarity("abc", "xyz", 2), 0.0);
    }

    #[test]
    fn overlap_is_partial() {
        // "smith"/"smyth" share bigrams "sm" and "th": 2*2/(4+4) = 0.5
        let s = ngram_similarity("smith", "smyth", 2);
        assert!((s - 0.5).abs() < 1e-9);
    }

    #[test]
    fn repeated_grams_counted_with_multiplicity() {
        // "aaa" = [aa, aa], "aa" = [aa]: shared 1, 2*1/(2+1)
        let s = ngram_similarity("aaa", "aa", 2);
        assert!((s - 2.0 / 3.0).abs() < 1e-9);
    }
}
