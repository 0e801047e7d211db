//! Word and letter frequency tables.

use std::collections::HashMap;

use crate::shared::types::{LetterFrequency, WordFrequency};

/// Common English function words left out of the top-words table.
pub const STOP_WORDS: [&str; 40] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at",
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she",
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what",
];

/// Words this short never make the top-words table.
const MIN_TOP_WORD_CHARS: usize = 3;

pub fn is_stop_word(lowercase_word: &str) -> bool {
    STOP_WORDS.contains(&lowercase_word)
}

/// Most frequent words, lowercased, excluding stop words and words under three characters.
///
/// Sorted by descending count; equal counts keep the order in which the words first appeared.
pub fn top_words<S: AsRef<str>>(words: &[S], limit: usize) -> Vec<WordFrequency> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<WordFrequency> = Vec::new();

    for word in words {
        let lower = word.as_ref().to_lowercase();
        if lower.chars().count() < MIN_TOP_WORD_CHARS || is_stop_word(&lower) {
            continue;
        }
        match index.get(&lower) {
            Some(&i) => table[i].count += 1,
            None => {
                index.insert(lower.clone(), table.len());
                table.push(WordFrequency { word: lower, count: 1 });
            }
        }
    }

    // sort_by is stable, so first-occurrence order survives among ties
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table.truncate(limit);
    table
}

/// Occurrences of each letter `a`-`z` after lowercasing, most frequent first.
///
/// Letters that never occur are omitted. Ties keep first-occurrence order.
pub fn letter_frequency(text: &str) -> Vec<LetterFrequency> {
    let mut counts = [0usize; 26];
    let mut first_seen: Vec<u8> = Vec::new();

    for lower in text.chars().flat_map(char::to_lowercase) {
        if !lower.is_ascii_lowercase() {
            continue;
        }
        let slot = (lower as u8 - b'a') as usize;
        if counts[slot] == 0 {
            first_seen.push(slot as u8);
        }
        counts[slot] += 1;
    }

    let mut table: Vec<LetterFrequency> = first_seen
        .into_iter()
        .map(|slot| LetterFrequency {
            letter: (b'a' + slot) as char,
            count: counts[slot as usize],
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}
