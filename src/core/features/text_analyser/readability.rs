//! Syllable heuristic and Flesch readability formulas.
//!
//! The syllable count is a vowel-group approximation, not a dictionary
//! lookup. It is deliberately kept as-is so scores stay comparable with
//! earlier versions of the analyser.

use regex::Regex;
use std::sync::OnceLock;

use super::logic::round_to;

static SILENT_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();
static LEADING_Y_REGEX: OnceLock<Regex> = OnceLock::new();
static VOWEL_GROUP_REGEX: OnceLock<Regex> = OnceLock::new();

fn silent_suffix_regex() -> &'static Regex {
    SILENT_SUFFIX_REGEX.get_or_init(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap())
}

fn leading_y_regex() -> &'static Regex {
    LEADING_Y_REGEX.get_or_init(|| Regex::new(r"^y").unwrap())
}

fn vowel_group_regex() -> &'static Regex {
    VOWEL_GROUP_REGEX.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").unwrap())
}

/// Approximate syllables in a single word.
pub fn count_word_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = silent_suffix_regex().replace(&word, "");
    let stripped = leading_y_regex().replace(&stripped, "");

    match vowel_group_regex().find_iter(&stripped).count() {
        0 => 1,
        n => n,
    }
}

/// Total syllables over every word.
pub fn count_syllables<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| count_word_syllables(w.as_ref())).sum()
}

/// Flesch Reading Ease, clamped to `[0, 100]` and rounded to one decimal.
///
/// Returns 0 when there are no words.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let (w, s, sy) = (words as f64, sentences as f64, syllables as f64);
    let score = 206.835 - 1.015 * (w / s) - 84.6 * (sy / w);
    round_to(score.clamp(0.0, 100.0), 1)
}

/// Flesch-Kincaid Grade Level, floored at 0 and rounded to one decimal.
///
/// Returns 0 when there are no words.
pub fn flesch_kincaid_grade(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let (w, s, sy) = (words as f64, sentences as f64, syllables as f64);
    let grade = 0.39 * (w / s) + 11.8 * (sy / w) - 15.59;
    round_to(grade.max(0.0), 1)
}
