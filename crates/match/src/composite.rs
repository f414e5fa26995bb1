//! Composite name similarity: fixed weighted blend of the core algorithms.
//!
//! Weights: token Jaro-Winkler 0.4, Double Metaphone similarity 0.3,
//! bigram overlap 0.3. When either input contains Hangul the metaphone
//! term (a Latin-script phonetic) is replaced by the Korean jamo
//! similarity at the same weight. The result is clamped to `[0, 1]`;
//! inapplicable sub-scores contribute 0, never NaN.

use sift_core::CompositeMatchResult;

use crate::{jaro, korean, ngram, phonetic};

const JARO_WINKLER_WEIGHT: f64 = 0.4;
const PHONETIC_WEIGHT: f64 = 0.3;
const NGRAM_WEIGHT: f64 = 0.3;

/// Blend the sub-algorithm similarities for one comparison.
pub fn composite_score(a: &str, b: &str) -> CompositeMatchResult {
    let jaro_winkler_score = jaro::jaro_winkler_tokens(a, b);
    let ngram_score = ngram::ngram_similarity(a, b, 2);

    let hangul = korean::contains_hangul(a) || korean::contains_hangul(b);
    let (metaphone_score, korean_score, metaphone_match, phonetic_term) = if hangul {
        let ks = korean::jamo_similarity(a, b);
        (0.0, ks, false, ks)
    } else {
        let ms = phonetic::metaphone_similarity(a, b);
        (ms, 0.0, phonetic::matches_metaphone(a, b), ms)
    };

    let blended = JARO_WINKLER_WEIGHT * jaro_winkler_score
        + PHONETIC_WEIGHT * phonetic_term
        + NGRAM_WEIGHT * ngram_score;

    CompositeMatchResult {
        composite_score: blended.clamp(0.0, 1.0),
        jaro_winkler_score,
        metaphone_score,
        ngram_score,
        korean_score,
        metaphone_match,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_names_score_one() {
        let result = composite_score("john smith", "john smith");
        assert!((result.composite_score - 1.0).abs() < 1e-9);
        assert!(result.metaphone_match);
    }

    #[test]
    fn score_always_in_unit_interval() {
        for (a, b) in [
            ("", ""),
            ("", "smith"),
            ("john smith", "xyzzy"),
            ("김철수", "john smith"),
        ] {
            let result = composite_score(a, b);
            assert!(
                (0.0..=1.0).contains(&result.composite_score),
                "{a:?} vs {b:?} scored {}",
                result.composite_score
            );
            assert!(!result.composite_score.is_nan());
        }
    }

    #[test]
    fn close_variant_clears_default_threshold() {
        let result = composite_score("jon smith", "john smith");
        assert!(result.is_high_confidence_match(0.75));
        assert!(result.metaphone_match);
    }

    #[test]
    fn hangul_substitutes_korean_for_metaphone() {
        let result = composite_score("김철수", "김철순");
        assert_eq!(result.metaphone_score, 0.0);
        assert!(!result.metaphone_match);
        assert!(result.korean_score > 0.8);
        assert!(result.composite_score > 0.0);
    }

    #[test]
    fn latin_pair_leaves_korean_at_zero() {
        let result = composite_score("stephen", "steven");
        assert_eq!(result.korean_score, 0.0);
        assert!(result.metaphone_score > 0.99);
    }
}
