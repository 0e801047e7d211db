use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

use super::frequency::{letter_frequency, top_words};
use super::readability::{count_syllables, flesch_kincaid_grade, flesch_reading_ease};
use super::timing::{format_duration, minutes_for};
use crate::shared::settings::AnalyserSettings;
use crate::shared::types::TextReport;

/// Shown for longest/shortest word when the text has no words.
pub const NO_WORD: &str = "-";

static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
static SENTENCE_END_REGEX: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(r"\b[\w']+\b").unwrap())
}

fn sentence_end_regex() -> &'static Regex {
    SENTENCE_END_REGEX.get_or_init(|| Regex::new(r"[.!?]+").unwrap())
}

fn paragraph_break_regex() -> &'static Regex {
    PARAGRAPH_BREAK_REGEX.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Round to `places` decimals from the exact stored value.
///
/// Exact binary ties (e.g. 1.125) round away from zero; everything else goes
/// through the formatter, which works on the exact expansion rather than a
/// product that may itself round onto a tie.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    // value * 2^places is exact, and its fraction is .5 only for a true decimal tie
    if (value * 2f64.powi(places as i32)).fract().abs() == 0.5 {
        let factor = 10f64.powi(places as i32);
        return (value * factor).round() / factor;
    }
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Words in order of appearance: letters, digits, underscores and inner apostrophes.
pub fn extract_words(text: &str) -> Vec<&str> {
    word_regex().find_iter(text).map(|m| m.as_str()).collect()
}

/// Runs of `.`, `!` and `?`, never less than one so per-sentence ratios stay defined.
pub fn count_sentences(text: &str) -> usize {
    sentence_end_regex().find_iter(text).count().max(1)
}

pub fn count_paragraphs(text: &str) -> usize {
    paragraph_break_regex()
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
}

pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '(' | ')' | '-')
}

#[derive(Default)]
struct CharClasses {
    whitespace: usize,
    punctuation: usize,
    uppercase: usize,
    lowercase: usize,
    digits: usize,
}

fn classify_chars(text: &str) -> CharClasses {
    let mut classes = CharClasses::default();
    for c in text.chars() {
        if c.is_whitespace() {
            classes.whitespace += 1;
        } else if is_punctuation(c) {
            classes.punctuation += 1;
        } else if c.is_ascii_uppercase() {
            classes.uppercase += 1;
        } else if c.is_ascii_lowercase() {
            classes.lowercase += 1;
        } else if c.is_ascii_digit() {
            classes.digits += 1;
        }
    }
    classes
}

/// Longest and shortest word by character count; the earlier word wins a tie.
fn word_extremes(words: &[&str]) -> (String, String) {
    let mut iter = words.iter().map(|w| (*w, w.chars().count()));
    let Some(first) = iter.next() else {
        return (NO_WORD.to_string(), NO_WORD.to_string());
    };

    let (mut longest, mut shortest) = (first, first);
    for entry in iter {
        if entry.1 > longest.1 {
            longest = entry;
        }
        if entry.1 < shortest.1 {
            shortest = entry;
        }
    }
    (longest.0.to_string(), shortest.0.to_string())
}

/// Analyze `text` with the default reading speeds and table sizes.
pub fn analyze(text: &str) -> TextReport {
    analyze_with(text, &AnalyserSettings::default())
}

/// Analyze `text` using the speeds and limits from `settings`.
///
/// Total over every input: empty or punctuation-only text produces zero counts,
/// `"-"` extremes and a sentence count of one.
pub fn analyze_with(text: &str, settings: &AnalyserSettings) -> TextReport {
    let words = extract_words(text);
    let word_count = words.len();
    let char_count = text.chars().count();
    let sentence_count = count_sentences(text);
    let syllable_count = count_syllables(&words);

    let unique_word_count = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    let (avg_word_length, avg_sentence_length) = if word_count > 0 {
        let total_len: usize = words.iter().map(|w| w.chars().count()).sum();
        (
            round_to(total_len as f64 / word_count as f64, 2),
            round_to(word_count as f64 / sentence_count as f64, 2),
        )
    } else {
        (0.0, 0.0)
    };

    let (longest_word, shortest_word) = word_extremes(&words);
    let classes = classify_chars(text);

    let reading_minutes = minutes_for(word_count, settings.reading_wpm);
    let speaking_minutes = minutes_for(word_count, settings.speaking_wpm);

    log::debug!(
        "[analyze] {} chars, {} words, {} sentences",
        char_count, word_count, sentence_count
    );

    TextReport {
        char_count,
        char_count_no_spaces: char_count - classes.whitespace,
        grapheme_count: text.graphemes(true).count(),
        whitespace_count: classes.whitespace,
        punctuation_count: classes.punctuation,
        uppercase_count: classes.uppercase,
        lowercase_count: classes.lowercase,
        digit_count: classes.digits,

        line_count: count_lines(text),
        paragraph_count: count_paragraphs(text),
        word_count,
        unique_word_count,
        sentence_count,
        syllable_count,
        token_count: char_count.div_ceil(settings.chars_per_token.max(1)),

        avg_word_length,
        avg_sentence_length,
        longest_word,
        shortest_word,

        reading_time: format_duration(reading_minutes),
        reading_time_sec: reading_minutes * 60.0,
        speaking_time: format_duration(speaking_minutes),
        speaking_time_sec: speaking_minutes * 60.0,

        flesch_reading_ease: flesch_reading_ease(word_count, sentence_count, syllable_count),
        flesch_kincaid_grade: flesch_kincaid_grade(word_count, sentence_count, syllable_count),

        top_words: top_words(&words, settings.top_words_limit),
        letter_frequency: letter_frequency(text),
    }
}
