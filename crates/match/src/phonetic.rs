//! Phonetic encodings: American Soundex and Double Metaphone.
//!
//! Both algorithms produce stable codes from already-normalized Latin-script
//! names. They are selectable per rule; `Both` mode ORs the boolean matches
//! and takes the higher similarity.
//!
//! The Double Metaphone here covers the rule subset that matters for name
//! screening (PH/V folding, silent GH/H/W, C/G softening, TH, SH/TI/SI,
//! initial-cluster exceptions); it is not the exhaustive Philips table.

const CODE_LEN: usize = 4;

// ── Soundex ─────────────────────────────────────────────────────────

/// Four-character American Soundex code, e.g. `soundex("Robert") == "R163"`.
///
/// Empty or non-alphabetic input yields an empty code.
pub fn soundex(s: &str) -> String {
    let letters: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let Some((&first, rest)) = letters.split_first() else {
        return String::new();
    };

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);
    let mut prev = soundex_digit(first);

    for &c in rest {
        if code.len() == CODE_LEN {
            break;
        }
        match soundex_digit(c) {
            // H and W are transparent: they neither emit nor reset.
            None if c == 'H' || c == 'W' => {}
            // Vowels separate consonant groups.
            None => prev = None,
            Some(digit) => {
                if prev != Some(digit) {
                    code.push(char::from_digit(digit, 10).unwrap_or('0'));
                }
                prev = Some(digit);
            }
        }
    }

    while code.len() < CODE_LEN {
        code.push('0');
    }
    code
}

fn soundex_digit(c: char) -> Option<u32> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some(1),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some(2),
        'D' | 'T' => Some(3),
        'L' => Some(4),
        'M' | 'N' => Some(5),
        'R' => Some(6),
        _ => None,
    }
}

/// Whether two names share a Soundex code.
pub fn matches_soundex(a: &str, b: &str) -> bool {
    let ca = soundex(a);
    !ca.is_empty() && ca == soundex(b)
}

/// Soundex similarity: shared code prefix length over code length.
pub fn soundex_similarity(a: &str, b: &str) -> f64 {
    code_similarity(&soundex(a), &soundex(b))
}

// ── Double Metaphone ────────────────────────────────────────────────

/// Primary and alternate Double Metaphone codes, each at most 4 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaphoneCode {
    pub primary: String,
    pub alternate: String,
}

impl MetaphoneCode {
    /// Whether any code of `self` equals any code of `other`.
    pub fn matches(&self, other: &MetaphoneCode) -> bool {
        if self.primary.is_empty() {
            return false;
        }
        self.primary == other.primary
            || self.primary == other.alternate
            || self.alternate == other.primary
            || self.alternate == other.alternate
    }
}

struct MetaphoneEncoder {
    primary: String,
    alternate: String,
}

impl MetaphoneEncoder {
    fn push(&mut self, c: char) {
        self.push_pair(c, c);
    }

    fn push_pair(&mut self, p: char, a: char) {
        // Collapse adjacent duplicate codes.
        if self.primary.len() < CODE_LEN && self.primary.chars().last() != Some(p) {
            self.primary.push(p);
        }
        if self.alternate.len() < CODE_LEN && self.alternate.chars().last() != Some(a) {
            self.alternate.push(a);
        }
    }

    fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push(c);
        }
    }

    fn full(&self) -> bool {
        self.primary.len() >= CODE_LEN && self.alternate.len() >= CODE_LEN
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// Double Metaphone encoding: primary code plus an alternate capturing the
/// main ambiguous pronunciations (CH, G before E/I/Y, SI-).
pub fn double_metaphone(s: &str) -> MetaphoneCode {
    let word: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut enc = MetaphoneEncoder {
        primary: String::new(),
        alternate: String::new(),
    };

    if word.is_empty() {
        return MetaphoneCode {
            primary: enc.primary,
            alternate: enc.alternate,
        };
    }

    let at = |i: usize| word.get(i).copied().unwrap_or('\0');

    let mut i = 0;
    // Initial silent clusters: GN-, KN-, PN-, WR-, PS-.
    if word.len() > 1 {
        match (word[0], word[1]) {
            ('G', 'N') | ('K', 'N') | ('P', 'N') | ('W', 'R') | ('P', 'S') => i = 1,
            _ => {}
        }
    }
    // Initial X sounds like S (Xavier).
    if i == 0 && word[0] == 'X' {
        enc.push('S');
        i = 1;
    }

    while i < word.len() && !enc.full() {
        let c = at(i);
        match c {
            'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                if i == 0 {
                    enc.push('A');
                }
                i += 1;
            }
            'B' => {
                // Silent in final -MB (lamb).
                if !(i == word.len() - 1 && at(i.wrapping_sub(1)) == 'M') {
                    enc.push('P');
                }
                i += if at(i + 1) == 'B' { 2 } else { 1 };
            }
            'C' => {
                if at(i + 1) == 'H' {
                    enc.push_pair('X', 'K');
                    i += 2;
                } else if at(i + 1) == 'C' || at(i + 1) == 'K' || at(i + 1) == 'Q' {
                    enc.push('K');
                    i += 2;
                } else if matches!(at(i + 1), 'I' | 'E' | 'Y') {
                    if at(i + 1) == 'I' && at(i + 2) == 'A' {
                        enc.push('X');
                    } else {
                        enc.push('S');
                    }
                    i += 1;
                } else {
                    enc.push('K');
                    i += 1;
                }
            }
            'D' => {
                if at(i + 1) == 'G' && matches!(at(i + 2), 'E' | 'I' | 'Y') {
                    enc.push('J');
                    i += 3;
                } else {
                    enc.push('T');
                    i += if at(i + 1) == 'D' { 2 } else { 1 };
                }
            }
            'F' => {
                enc.push('F');
                i += if at(i + 1) == 'F' { 2 } else { 1 };
            }
            'G' => {
                if at(i + 1) == 'H' {
                    if i > 0 && is_vowel(at(i - 1)) {
                        // Silent as in "night", "Haugh".
                    } else {
                        enc.push('K');
                    }
                    i += 2;
                } else if matches!(at(i + 1), 'E' | 'I' | 'Y') {
                    enc.push_pair('J', 'K');
                    i += 1;
                } else {
                    enc.push('K');
                    i += if at(i + 1) == 'G' { 2 } else { 1 };
                }
            }
            'H' => {
                // Audible only between vowels or word-initially before a vowel.
                if (i == 0 || is_vowel(at(i.wrapping_sub(1)))) && is_vowel(at(i + 1)) {
                    enc.push('H');
                }
                i += 1;
            }
            'J' => {
                enc.push('J');
                i += if at(i + 1) == 'J' { 2 } else { 1 };
            }
            'K' => {
                enc.push('K');
                i += if at(i + 1) == 'K' { 2 } else { 1 };
            }
            'L' => {
                enc.push('L');
                i += if at(i + 1) == 'L' { 2 } else { 1 };
            }
            'M' => {
                enc.push('M');
                i += if at(i + 1) == 'M' { 2 } else { 1 };
            }
            'N' => {
                enc.push('N');
                i += if at(i + 1) == 'N' { 2 } else { 1 };
            }
            'P' => {
                if at(i + 1) == 'H' {
                    enc.push('F');
                    i += 2;
                } else {
                    enc.push('P');
                    i += if at(i + 1) == 'P' { 2 } else { 1 };
                }
            }
            'Q' => {
                enc.push('K');
                i += 1;
            }
            'R' => {
                enc.push('R');
                i += if at(i + 1) == 'R' { 2 } else { 1 };
            }
            'S' => {
                if at(i + 1) == 'H' {
                    enc.push('X');
                    i += 2;
                } else if at(i + 1) == 'I' && matches!(at(i + 2), 'O' | 'A') {
                    enc.push_pair('X', 'S');
                    i += 1;
                } else {
                    enc.push('S');
                    i += if at(i + 1) == 'S' { 2 } else { 1 };
                }
            }
            'T' => {
                if at(i + 1) == 'H' {
                    enc.push('0');
                    i += 2;
                } else if at(i + 1) == 'I' && matches!(at(i + 2), 'O' | 'A') {
                    enc.push('X');
                    i += 1;
                } else {
                    enc.push('T');
                    i += if at(i + 1) == 'T' { 2 } else { 1 };
                }
            }
            'V' => {
                enc.push('F');
                i += if at(i + 1) == 'V' { 2 } else { 1 };
            }
            'W' => {
                if is_vowel(at(i + 1)) {
                    enc.push('W');
                }
                i += 1;
            }
            'X' => {
                enc.push_str("KS");
                i += 1;
            }
            'Z' => {
                enc.push('S');
                i += if at(i + 1) == 'Z' { 2 } else { 1 };
            }
            _ => {
                i += 1;
            }
        }
    }

    MetaphoneCode {
        primary: enc.primary,
        alternate: enc.alternate,
    }
}

/// Whether two names share a Double Metaphone code (primary or alternate).
pub fn matches_metaphone(a: &str, b: &str) -> bool {
    double_metaphone(a).matches(&double_metaphone(b))
}

/// Metaphone similarity: best shared-prefix ratio across the four
/// primary/alternate code pairings.
pub fn metaphone_similarity(a: &str, b: &str) -> f64 {
    let ca = double_metaphone(a);
    let cb = double_metaphone(b);
    [
        code_similarity(&ca.primary, &cb.primary),
        code_similarity(&ca.primary, &cb.alternate),
        code_similarity(&ca.alternate, &cb.primary),
        code_similarity(&ca.alternate, &cb.alternate),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

/// Shared-prefix ratio of two codes: 1.0 when equal, otherwise common
/// prefix length over the longer code length. Empty codes score 0.0.
fn code_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let shared = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();
    shared as f64 / a.chars().count().max(b.chars().count()) as f64
}

// ── Algorithm selector ──────────────────────────────────────────────

/// Phonetic algorithm selection, configurable per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneticAlgorithm {
    Soundex,
    Metaphone,
    /// OR of both boolean matches, max of both similarities.
    Both,
}

impl PhoneticAlgorithm {
    /// Wire-style name as written in rule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soundex => "SOUNDEX",
            Self::Metaphone => "METAPHONE",
            Self::Both => "BOTH",
        }
    }

    /// Parse a rule parameter value; unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SOUNDEX" => Some(Self::Soundex),
            "METAPHONE" => Some(Self::Metaphone),
            "BOTH" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Soundex => matches_soundex(a, b),
            Self::Metaphone => matches_metaphone(a, b),
            Self::Both => matches_soundex(a, b) || matches_metaphone(a, b),
        }
    }

    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        match self {
            Self::Soundex => soundex_similarity(a, b),
            Self::Metaphone => metaphone_similarity(a, b),
            Self::Both => soundex_similarity(a, b).max(metaphone_similarity(a, b)),
        }
    }
}

impl std::fmt::Display for PhoneticAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soundex_classic_examples() {
        assert_eq!(soundex("Robert"), "R163");
        assert_eq!(soundex("Rupert"), "R163");
        assert_eq!(soundex("Smith"), "S530");
        assert_eq!(soundex("Smyth"), "S530");
    }

    #[test]
    fn soundex_h_w_are_transparent() {
        // Ashcraft: A-S(2)-H-C(2 suppressed by H rule)-R(6)-A-F(1)-T
        assert_eq!(soundex("Ashcraft"), "A261");
    }

    #[test]
    fn soundex_empty_input() {
        assert_eq!(soundex(""), "");
        assert!(!matches_soundex("", ""));
    }

    #[test]
    fn matches_soundex_smith_smyth() {
        assert!(matches_soundex("Smith", "Smyth"));
        assert!(!matches_soundex("Smith", "Jones"));
    }

    #[test]
    fn metaphone_stephen_equals_steven() {
        let stephen = double_metaphone("Stephen");
        let steven = double_metaphone("Steven");
        assert_eq!(stephen.primary, steven.primary);
        assert!(stephen.matches(&steven));
    }

    #[test]
    fn metaphone_codes_capped_at_four() {
        let code = double_metaphone("Featherstonehaugh");
        assert!(code.primary.len() <= 4);
        assert!(code.alternate.len() <= 4);
    }

    #[test]
    fn metaphone_initial_clusters_silent() {
        assert_eq!(double_metaphone("Knight").primary, double_metaphone("Night").primary);
        assert_eq!(double_metaphone("Wright").primary, double_metaphone("Right").primary);
    }

    #[test]
    fn metaphone_alternate_diverges_on_ch() {
        let code = double_metaphone("Michael");
        assert_ne!(code.primary, code.alternate);
        assert!(code.alternate.contains('K'));
    }

    #[test]
    fn similarity_shared_prefix() {
        assert_eq!(soundex_similarity("Smith", "Smyth"), 1.0);
        // Robert R163 vs Roland R453: only the initial shared.
        let partial = soundex_similarity("Robert", "Roland");
        assert!(partial > 0.0 && partial < 1.0);
    }

    #[test]
    fn both_mode_takes_either_match() {
        // Jon/John: same soundex (J500); BOTH must match even if one
        // algorithm alone would be enough.
        assert!(PhoneticAlgorithm::Both.matches("Jon", "John"));
        assert!(
            PhoneticAlgorithm::Both.similarity("Jon", "John")
                >= PhoneticAlgorithm::Soundex.similarity("Jon", "John")
        );
    }

    #[test]
    fn parse_algorithm_parameter() {
        assert_eq!(PhoneticAlgorithm::parse("soundex"), Some(PhoneticAlgorithm::Soundex));
        assert_eq!(PhoneticAlgorithm::parse("BOTH"), Some(PhoneticAlgorithm::Both));
        assert_eq!(PhoneticAlgorithm::parse("cologne"), None);
    }

    #[test]
    fn algorithm_round_trips_through_wire_name() {
        for alg in [
            PhoneticAlgorithm::Soundex,
            PhoneticAlgorithm::Metaphone,
            PhoneticAlgorithm::Both,
        ] {
            assert_eq!(PhoneticAlgorithm::parse(&alg.to_string()), Some(alg));
        }
    }
}
