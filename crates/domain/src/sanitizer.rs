//! Profanity masking for any text shown to players.
//!
//! Banned words keep their shape: every vowel in a whole-word, case-insensitive
//! match becomes `*`, consonants (and their case) are left alone. "Bitch"
//! becomes "B*tch", while "class" is untouched even though "ass" is banned.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

/// Terms masked by [`sanitize`]. Lowercase, letters only, each with a vowel.
pub const BANNED_TERMS: &[&str] = &[
    "ass",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "cock",
    "cunt",
    "dick",
    "fuck",
    "fucker",
    "fucking",
    "motherfucker",
    "piss",
    "prick",
    "shit",
    "slut",
    "twat",
    "wanker",
    "whore",
];

// One whole-word matcher per term, compiled on first use and kept for the process lifetime.
static BANNED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BANNED_TERMS
        .iter()
        .map(|term| {
            Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(term))).expect("valid regex")
        })
        .collect()
});

/// Mask every banned word in `text`.
///
/// Empty input comes back unchanged. Never fails.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = text.to_string();
    for pattern in BANNED_PATTERNS.iter() {
        if pattern.is_match(&out) {
            out = pattern
                .replace_all(&out, |caps: &Captures<'_>| mask_vowels(&caps[0]))
                .into_owned();
        }
    }
    out
}

/// [`sanitize`] for fields that may be absent.
pub fn sanitize_opt(text: Option<&str>) -> Option<String> {
    text.map(sanitize)
}

fn mask_vowels(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U' => '*',
            other => other,
        })
        .collect()
}
