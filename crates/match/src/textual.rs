//! Boolean textual comparisons: normalized equality and contains-all-words.

use sift_core::normalize::normalize_name;

/// Case-, diacritic-, and whitespace-insensitive equality.
///
/// Boolean by design: exact matching has no similarity gradient.
pub fn exact_match(a: &str, b: &str) -> bool {
    let na = normalize_name(a);
    if na.is_empty() {
        return false;
    }
    na == normalize_name(b)
}

/// All-words-contained check, in either direction.
///
/// The shorter normalized string (by character length) supplies the
/// tokens; matches when every one of them appears as a substring of the
/// longer normalized string.
pub fn contains_all_words(a: &str, b: &str) -> bool {
    let na = normalize_name(a);
    let nb = normalize_name(b);
    if na.is_empty() || nb.is_empty() {
        return false;
    }

    let (shorter, longer) = if na.chars().count() <= nb.chars().count() {
        (na.as_str(), nb.as_str())
    } else {
        (nb.as_str(), na.as_str())
    };

    shorter
        .split_whitespace()
        .all(|token| longer.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_is_reflexive() {
        assert!(exact_match("John Smith", "John Smith"));
        assert!(exact_match("José  Gärtner", "jose gartner"));
    }

    #[test]
    fn exact_rejects_empty() {
        assert!(!exact_match("", ""));
        assert!(!exact_match("", "smith"));
    }

    #[test]
    fn contains_subset_of_words() {
        assert!(contains_all_words("John Smith", "Smith"));
        assert!(contains_all_words("Smith", "John Smith"));
        assert!(contains_all_words("Mohammed Al-Fulan", "al-fulan mohammed trading co"));
    }

    #[test]
    fn contains_rejects_missing_word() {
        assert!(!contains_all_words("John Smith", "John Doe"));
        assert!(!contains_all_words("", "John"));
    }

    #[test]
    fn shorter_side_is_chosen_by_char_length_not_token_count() {
        // "de la cruz" has more tokens but fewer characters than
        // "delacruz enterprises"; its tokens must be the ones checked.
        assert!(contains_all_words("De La Cruz", "Delacruz Enterprises"));
        assert!(contains_all_words("Delacruz Enterprises", "De La Cruz"));
    }
}
