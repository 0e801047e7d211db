use text_analyser_lib::{analyze, analyze_with, AnalyserSettings};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Hello world.",
    "no punctuation here at all",
    "Wait... what?! Really. Yes!!!",
    "It's the rock'n'roll era; isn't it?\n\nSecond paragraph.\nStill second.",
    "Ünïcödé wörds, naïve café façade — déjà vu.",
    "1234 5678 90",
    "A quick brown fox jumps over the lazy dog. The dog sleeps. The fox runs away quickly!",
];

#[test]
fn unique_words_never_exceed_words() {
    for text in SAMPLES {
        let report = analyze(text);
        assert!(report.unique_word_count <= report.word_count, "{text:?}");
    }
}

#[test]
fn sentence_count_is_at_least_one() {
    for text in SAMPLES {
        assert!(analyze(text).sentence_count >= 1, "{text:?}");
    }
}

#[test]
fn analysis_is_idempotent() {
    for text in SAMPLES {
        assert_eq!(analyze(text), analyze(text));
    }
}

#[test]
fn appending_text_never_decreases_counts() {
    for text in SAMPLES {
        let before = analyze(text);
        for suffix in ["x", " more words.", "!", "tail"] {
            let after = analyze(&format!("{text}{suffix}"));
            assert!(after.char_count >= before.char_count);
            assert!(after.word_count >= before.word_count);
            assert!(after.sentence_count >= before.sentence_count);
        }
    }
}

#[test]
fn readability_scores_stay_in_range() {
    let long_words = "internationalization ".repeat(50) + ".";
    for text in SAMPLES.iter().copied().chain([long_words.as_str(), "a a a a."]) {
        let report = analyze(text);
        assert!((0.0..=100.0).contains(&report.flesch_reading_ease), "{text:?}");
        assert!(report.flesch_kincaid_grade >= 0.0, "{text:?}");
    }
    assert_eq!(analyze(&long_words).flesch_reading_ease, 0.0);
    assert_eq!(analyze("a a a a.").flesch_reading_ease, 100.0);
}

#[test]
fn top_words_exclude_stop_words_and_short_tokens() {
    let text = "The the the and and of of we we it is is is so so so so words words";
    let report = analyze(text);
    assert_eq!(report.top_words.len(), 1);
    assert_eq!(report.top_words[0].word, "words");
    assert_eq!(report.top_words[0].count, 2);
}

#[test]
fn reading_time_of_exactly_one_minute() {
    let text = "word ".repeat(200);
    let report = analyze(&text);
    assert_eq!(report.word_count, 200);
    assert_eq!(report.reading_time, "1m");
    assert_eq!(report.speaking_time, "1m 20s");
}

#[test]
fn report_serializes_for_the_frontend() {
    let report = analyze_with("Short. Text!", &AnalyserSettings::default());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["sentence_count"], 2);
    assert_eq!(value["reading_time"], "1s");

    let back: text_analyser_lib::TextReport = serde_json::from_value(value).unwrap();
    assert_eq!(back, report);
}
