//! Korean name comparison: chosung extraction and jamo decomposition.
//!
//! Hangul syllable blocks (U+AC00–U+D7A3) decompose arithmetically into a
//! leading consonant (chosung), vowel (jungsung), and optional trailing
//! consonant (jongsung). Coarse matching compares chosung-only strings
//! (김철수 → ㄱㅊㅅ); fine matching runs edit-distance similarity over the
//! fully decomposed jamo sequence.
//!
//! When neither input contains Hangul these algorithms are not applicable —
//! callers must skip, not score 0.

use sift_core::normalize;

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const JUNGSUNG_COUNT: u32 = 21;
const JONGSUNG_COUNT: u32 = 28;

const CHOSUNG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const JUNGSUNG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

// Index 0 is "no trailing consonant"; entries 1..=27 map to these.
const JONGSUNG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

fn syllable_index(c: char) -> Option<u32> {
    let cp = c as u32;
    (SYLLABLE_BASE..=SYLLABLE_LAST)
        .contains(&cp)
        .then(|| cp - SYLLABLE_BASE)
}

/// Whether the string contains at least one Hangul syllable block.
pub fn contains_hangul(s: &str) -> bool {
    s.chars().any(|c| syllable_index(c).is_some())
}

/// Leading-consonant string for coarse matching: `chosung("김철수") == "ㄱㅊㅅ"`.
///
/// Non-Hangul characters are dropped.
pub fn chosung(s: &str) -> String {
    s.chars()
        .filter_map(syllable_index)
        .map(|idx| CHOSUNG[(idx / (JUNGSUNG_COUNT * JONGSUNG_COUNT)) as usize])
        .collect()
}

/// Full jamo decomposition: each syllable expands to its chosung, jungsung,
/// and (when present) jongsung. Non-Hangul characters pass through.
pub fn decompose_jamo(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match syllable_index(c) {
            Some(idx) => {
                out.push(CHOSUNG[(idx / (JUNGSUNG_COUNT * JONGSUNG_COUNT)) as usize]);
                out.push(JUNGSUNG[((idx / JONGSUNG_COUNT) % JUNGSUNG_COUNT) as usize]);
                let tail = idx % JONGSUNG_COUNT;
                if tail > 0 {
                    out.push(JONGSUNG[(tail - 1) as usize]);
                }
            }
            None => out.push(c),
        }
    }
    out
}

/// Edit-distance similarity over the fully decomposed jamo sequences.
///
/// Finer than chosung comparison: 김철수 vs 김철순 differ by one trailing
/// consonant rather than one whole syllable.
pub fn jamo_similarity(a: &str, b: &str) -> f64 {
    normalize::similarity(&decompose_jamo(a), &decompose_jamo(b))
}
