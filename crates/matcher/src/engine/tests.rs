use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use index::IndexConfig;

use crate::metrics::{set_check_metrics, CheckMetrics};

const FOX: &str = "The quick brown fox jumps over the lazy dog.";

fn build_index(cfg: IndexConfig, docs: &[(&str, &str)]) -> ReferenceIndex {
    let mut index = ReferenceIndex::new(cfg).expect("valid index config");
    for &(name, text) in docs {
        index.ingest(name, &[text]);
    }
    index
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-12
}

#[test]
fn verbatim_sentence_scores_full_in_both_passes() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());

    let report = matcher.report(&[FOX]);
    assert_eq!(
        report.to_lines(),
        vec![
            "Sentence Matching: ",
            "fox.txt : 100.0000 %",
            "",
            "Word Sequence Matching: ",
            "fox.txt : 100.0000 %",
        ]
    );
    assert_eq!(report.candidate_words, 9);
}

#[test]
fn short_quote_is_not_matched_but_counted() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let quoted = format!("\"{FOX}\"");

    let lenient = Matcher::new(&index, MatchConfig::default().with_max_quote_length(9));
    let scores = lenient.score(&[quoted.as_str()]);
    assert_eq!(scores.candidate_words, 9);
    assert_eq!(scores.sentence, vec![0.0]);
    assert_eq!(scores.word_sequence, vec![0.0]);
    assert!(lenient.report(&[quoted.as_str()]).is_clean());
}

#[test]
fn overlong_quote_is_scored_as_body() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let quoted = format!("\"{FOX}\"");

    let strict = Matcher::new(&index, MatchConfig::default());
    let scores = strict.score(&[quoted.as_str()]);
    assert_eq!(scores.sentence, vec![1.0]);
    assert_eq!(scores.word_sequence, vec![1.0]);
}

#[test]
fn quoted_words_dilute_the_score() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let quoted = format!("\"{FOX}\"");
    let matcher = Matcher::new(&index, MatchConfig::default().with_max_quote_length(9));

    let scores = matcher.score(&[quoted.as_str(), FOX]);
    assert_eq!(scores.candidate_words, 18);
    assert_eq!(scores.sentence, vec![0.5]);
    assert_eq!(scores.word_sequence, vec![0.5]);
}

#[test]
fn unterminated_quote_is_ignored() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());

    let line = format!("{FOX} \"dangling words here");
    let text = matcher.normalize(&[line.as_str()]);
    assert_eq!(text.unterminated_quote, vec!["dangling words here"]);

    let scores = matcher.score_text(&text);
    assert_eq!(scores.candidate_words, 9);
    assert_eq!(scores.sentence, vec![1.0]);
}

#[test]
fn earliest_document_owns_shared_text() {
    let index = build_index(
        IndexConfig::default(),
        &[("first.txt", FOX), ("second.txt", FOX)],
    );
    let matcher = Matcher::new(&index, MatchConfig::default());

    let report = matcher.report(&[FOX]);
    assert_eq!(report.sentence.len(), 1);
    assert_eq!(report.sentence[0].name, "first.txt");
    assert_eq!(report.word_sequence.len(), 1);
    assert_eq!(report.word_sequence[0].document_id, DocumentId(0));
}

#[test]
fn short_sentences_never_match() {
    let docs: &[(&str, &str)] = &[("short.txt", "Go now.")];

    let strict = build_index(IndexConfig::default(), docs);
    let scores = Matcher::new(&strict, MatchConfig::default()).score(&["Go now."]);
    assert_eq!(scores.candidate_words, 2);
    assert_eq!(scores.sentence, vec![0.0]);
    assert_eq!(scores.word_sequence, vec![0.0]);

    let loose = build_index(IndexConfig::default().with_min_words_in_sentence(2), docs);
    let scores = Matcher::new(&loose, MatchConfig::default()).score(&["Go now."]);
    assert_eq!(scores.sentence, vec![1.0]);
    assert_eq!(scores.word_sequence, vec![1.0]);
}

#[test]
fn ineligible_candidate_sentences_still_count() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());

    // 9 matching words out of 11
    let scores = matcher.score(&[FOX, "Go now."]);
    assert_eq!(scores.candidate_words, 11);
    assert!(close(scores.sentence[0], 9.0 / 11.0));
}

#[test]
fn empty_candidate_reports_headers_only() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());
    let lines: [&str; 0] = [];

    let scores = matcher.score(&lines);
    assert_eq!(scores.candidate_words, 0);
    assert_eq!(scores.sentence, vec![0.0]);

    let report = matcher.report(&lines);
    assert_eq!(
        report.to_lines(),
        vec!["Sentence Matching: ", "", "Word Sequence Matching: "]
    );
}

#[test]
fn empty_index_scores_nothing() {
    let index = build_index(IndexConfig::default(), &[]);
    let scores = Matcher::new(&index, MatchConfig::default()).score(&[FOX]);
    assert!(scores.sentence.is_empty());
    assert!(scores.word_sequence.is_empty());
    assert_eq!(scores.candidate_words, 9);
}

#[test]
fn long_sentence_copy_matches_through_windows() {
    let text = "Memory safety without garbage collection is what the borrow checker gives us.";
    let index = build_index(IndexConfig::default(), &[("rust.txt", text)]);
    let matcher = Matcher::new(&index, MatchConfig::default());

    let scores = matcher.score(&[text]);
    assert_eq!(scores.candidate_words, 12);
    assert_eq!(scores.sentence, vec![1.0]);
    assert_eq!(scores.word_sequence, vec![1.0]);
}

#[test]
fn paraphrase_keeps_window_credit_only() {
    let reference = "Memory safety without garbage collection is what the borrow checker gives us.";
    let candidate = "Memory safety without garbage collection is what the borrow checker gives us all.";
    let index = build_index(IndexConfig::default(), &[("rust.txt", reference)]);
    let matcher = Matcher::new(&index, MatchConfig::default());

    let scores = matcher.score(&[candidate]);
    assert_eq!(scores.sentence, vec![0.0]);
    // the last window was never indexed, but every covered position is rust.txt
    assert_eq!(scores.word_sequence, vec![1.0]);
}

#[test]
fn overlapping_windows_split_credit_by_position() {
    let cfg = IndexConfig::default().with_sensitivity(3);
    let index = build_index(
        cfg,
        &[
            ("a.txt", "alpha beta gamma delta epsilon."),
            ("b.txt", "delta epsilon zeta eta theta."),
        ],
    );
    let matcher = Matcher::new(&index, MatchConfig::default());

    // windows at 0 and 1 belong to a, 3 and 4 to b; b overwrites position 3
    let scores = matcher.score(&["alpha beta gamma delta epsilon zeta eta theta."]);
    assert_eq!(scores.candidate_words, 8);
    assert!(close(scores.word_sequence[0], 3.0 / 7.0));
    assert!(close(scores.word_sequence[1], 4.0 / 7.0));
    assert_eq!(scores.sentence, vec![0.0, 0.0]);

    let report = matcher.report(&["alpha beta gamma delta epsilon zeta eta theta."]);
    assert_eq!(
        report.to_lines()[2..],
        [
            "Word Sequence Matching: ".to_owned(),
            "a.txt : 42.8571 %".to_owned(),
            "b.txt : 57.1429 %".to_owned(),
        ]
    );
}

#[test]
fn final_window_opt_in_changes_attribution() {
    let cfg = IndexConfig::default()
        .with_sensitivity(3)
        .with_final_window(true);
    let index = build_index(
        cfg,
        &[
            ("a.txt", "alpha beta gamma delta epsilon."),
            ("b.txt", "delta epsilon zeta eta theta."),
        ],
    );
    let matcher = Matcher::new(&index, MatchConfig::default());

    let scores = matcher.score(&["alpha beta gamma delta epsilon zeta eta theta."]);
    assert!(close(scores.word_sequence[0], 3.0 / 8.0));
    assert!(close(scores.word_sequence[1], 5.0 / 8.0));
}

#[test]
fn parallel_scoring_is_identical() {
    let docs: Vec<(String, Vec<String>)> = (0..20)
        .map(|i| {
            (
                format!("doc-{i}.txt"),
                vec![
                    format!("Shared opening words for every single reference document number {i}."),
                    "The quick brown fox jumps over the lazy dog near the river bank.".to_owned(),
                    format!("Closing remark {i} with a few extra words to pad it out."),
                ],
            )
        })
        .collect();
    let mut index = ReferenceIndex::new(IndexConfig::default().with_parallel(true))
        .expect("valid index config");
    index.ingest_many(&docs);

    let candidate = [
        "Shared opening words for every single reference document number 7.",
        "Something new. The quick brown fox jumps over the lazy dog near the river.",
        "\"a short quote\" and Closing remark 12 with a few extra words to pad it out.",
    ];
    let serial = Matcher::new(&index, MatchConfig::default()).score(&candidate);
    let parallel = Matcher::new(&index, MatchConfig::default().with_parallel(true)).score(&candidate);
    assert_eq!(serial, parallel);
    assert!(serial.sentence.iter().any(|&s| s > 0.0));
}

#[test]
fn rescoring_is_deterministic() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());
    let candidate = [FOX, "Unrelated trailing text that does not match anything."];
    assert_eq!(matcher.score(&candidate), matcher.score(&candidate));
}

#[derive(Default)]
struct RecordingMetrics {
    events: Mutex<Vec<(usize, usize)>>,
}

impl CheckMetrics for RecordingMetrics {
    fn record_check(&self, _latency: Duration, sentences: usize, matched_documents: usize) {
        self.events
            .lock()
            .expect("metrics mutex")
            .push((sentences, matched_documents));
    }
}

#[test]
fn metrics_recorder_sees_checks() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());
    let recorder = Arc::new(RecordingMetrics::default());

    set_check_metrics(Some(recorder.clone()));
    matcher.score(&[FOX, "Unrelated text without a match here."]);
    let empty: [&str; 0] = [];
    matcher.score(&empty);
    set_check_metrics(None);

    let events = recorder.events.lock().expect("metrics mutex");
    assert!(events.contains(&(2, 1)));
    assert!(events.contains(&(0, 0)));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log mutex").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn logs_of<F: FnOnce()>(f: F) -> String {
    let captured = CapturedLogs::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().expect("log mutex").clone();
    String::from_utf8(bytes).expect("utf8 logs")
}

#[test]
fn unterminated_quote_is_warned_about() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());
    let line = format!("{FOX} \"dangling words here");

    let logs = logs_of(|| {
        matcher.score(&[line.as_str()]);
    });
    assert!(logs.contains("WARN"));
    assert!(logs.contains("unterminated quote dropped from candidate"));

    let clean = logs_of(|| {
        matcher.score(&[FOX]);
    });
    assert!(!clean.contains("unterminated quote"));
}

#[test]
fn empty_candidate_still_logs_completion() {
    let index = build_index(IndexConfig::default(), &[("fox.txt", FOX)]);
    let matcher = Matcher::new(&index, MatchConfig::default());
    let empty: [&str; 0] = [];

    let logs = logs_of(|| {
        matcher.score(&empty);
    });
    assert!(logs.contains("check_complete"));
    assert!(logs.contains("candidate_words=0"));
}
