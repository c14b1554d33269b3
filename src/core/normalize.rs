// src/core/normalize.rs

/// Normalizes a word to its anagram key: the word's characters sorted by
/// Unicode code point. Two words are anagrams exactly when their keys are
/// equal. This is the single normalization point for both the load and the
/// query phase.
pub fn anagram_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
