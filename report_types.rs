use std::collections::BTreeMap;

/// Lowercase alphabetic character -> number of occurrences (always >= 1).
pub type CharacterFrequencyMap = BTreeMap<char, usize>;

/// One line of the ranked character listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub character: char,
    pub count: usize,
}

/// Everything printed for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// path or identifier shown in the header line
    pub source: String,
    pub word_count: usize,
    /// sorted by count descending, ties by ascending code point
    pub ranked: Vec<RankedEntry>,
}
