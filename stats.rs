use once_cell::sync::Lazy;
use regex::Regex;

use crate::report_types::CharacterFrequencyMap;

// General category L (Lu, Ll, Lt, Lm, Lo). Letter numbers and combining
// vowel signs are not letters.
static LETTER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}").unwrap());

/// Number of whitespace-delimited tokens in `text`
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive tally of every letter in `text`.
///
/// The text is lowercased before the letter test, so a character whose
/// lowercase form expands (e.g. 'İ' -> "i\u{307}") contributes each letter of
/// the expansion.
pub fn count_characters(text: &str) -> CharacterFrequencyMap {
    let lower: String = text.chars().flat_map(char::to_lowercase).collect();
    LETTER_REGEX
        .find_iter(&lower)
        .filter_map(|m| m.as_str().chars().next())
        .fold(CharacterFrequencyMap::new(), |mut counts, c| {
            *counts.entry(c).or_insert(0) += 1;
            counts
        })
}
