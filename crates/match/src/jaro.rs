//! Jaro-Winkler similarity: full-string and token-aligned variants.
//!
//! The token variant is the default for name comparison because it
//! tolerates reordered name parts ("Smith John" vs "John Smith"). It is
//! asymmetric when the two strings have different token counts: the mean
//! runs over the first argument's tokens.

/// Standard Jaro-Winkler similarity over whole strings.
///
/// Winkler boost applies to shared prefixes up to length 4 at a factor of
/// 0.1 per matching character. Symmetric.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::jaro_winkler(a, b)
}

/// Token-aligned Jaro-Winkler: split both strings on whitespace, align each
/// token of `a` with its best-scoring token of `b`, return the mean of the
/// best-match similarities.
///
/// Symmetric only when both strings have equal token counts. With unequal
/// counts the extra or missing tokens of `a` drag the mean down, so
/// `jaro_winkler_tokens("John Smith", "Smith")` is lower than
/// `jaro_winkler_tokens("Smith", "John Smith")`.
pub fn jaro_winkler_tokens(a: &str, b: &str) -> f64 {
    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let sum: f64 = tokens_a
        .iter()
        .map(|ta| {
            tokens_b
                .iter()
                .map(|tb| strsim::jaro_winkler(ta, tb))
                .fold(0.0, f64::max)
        })
        .sum();

    sum / tokens_a.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_string_identity() {
        assert_eq!(jaro_winkler("smith", "smith"), 1.0);
    }

    #[test]
    fn full_string_is_symmetric() {
        let ab = jaro_winkler("jon smith", "john smith");
        let ba = jaro_winkler("john smith", "jon smith");
        assert_eq!(ab, ba);
        assert!(ab > 0.9);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(jaro_winkler("", "smith"), 0.0);
        assert_eq!(jaro_winkler_tokens("smith", ""), 0.0);
    }

    #[test]
    fn tokens_tolerate_reordering() {
        let swapped = jaro_winkler_tokens("smith john", "john smith");
        assert_eq!(swapped, 1.0);
    }

    #[test]
    fn tokens_asymmetric_on_unequal_counts() {
        // Every token of "smith" finds a perfect partner in "john smith";
        // the reverse direction pays for the unmatched "john".
        let short_to_long = jaro_winkler_tokens("smith", "john smith");
        let long_to_short = jaro_winkler_tokens("john smith", "smith");
        assert_eq!(short_to_long, 1.0);
        assert!(long_to_short < 1.0);
    }

    #[test]
    fn close_variant_scores_high() {
        assert!(jaro_winkler_tokens("jon smith", "john smith") > 0.85);
    }
}
