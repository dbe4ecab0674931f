//! Text tokenizing primitives.
//!
//! Character, word and sentence counting shared by every readability
//! formula. These are simple heuristics: sentence detection looks for
//! terminal punctuation followed by a space, `|` or newline and then a
//! capital letter, so abbreviations like "T.V. And" count as a boundary and
//! a text ending in lowercase after a period does not add one.

use regex::Regex;
use std::sync::LazyLock;

/// Sentence boundary: terminator, optional closing quote/bracket, a space,
/// `|` or `\n`, then a capital. Tabs and carriage returns do not separate.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]['\\)\]]*[ |\n][A-Z]").expect("valid regex"));

/// Count characters, optionally ignoring the space character.
///
/// Only `' '` is removed when `ignore_spaces` is set; newlines and tabs
/// still count.
pub fn char_count(text: &str, ignore_spaces: bool) -> usize {
    if ignore_spaces {
        text.chars().filter(|&c| c != ' ').count()
    } else {
        text.chars().count()
    }
}

/// Count whitespace-delimited words.
///
/// With `remove_punctuation`, everything outside `[A-Za-z]` and whitespace
/// is stripped first, so tokens made only of punctuation (`...`, `&`)
/// disappear and `T.V.` becomes a single word.
pub fn lexicon_count(text: &str, remove_punctuation: bool) -> usize {
    if remove_punctuation {
        strip_to_letters(text).split_whitespace().count()
    } else {
        text.split_whitespace().count()
    }
}

/// Count sentences: one per detected boundary, plus one for the final sentence.
///
/// Always at least 1, even for empty text.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BOUNDARY.find_iter(text).count() + 1
}

/// Count whitespace tokens longer than six characters, punctuation included.
pub fn long_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 6)
        .count()
}

/// Normalize text for difficult-word classification.
///
/// Lowercases, keeps only ASCII digits, lowercase letters and the space
/// character, then splits on whitespace. Newlines are dropped rather than
/// treated as separators, so the words on either side of a line break join.
pub fn difficulty_tokens(text: &str) -> Vec<String> {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_digit() || c.is_ascii_lowercase() || c == ' ')
        .collect();
    kept.split_whitespace().map(str::to_string).collect()
}

/// Round half away from zero to `places` decimal digits.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn strip_to_letters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}
