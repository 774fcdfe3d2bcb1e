use std::collections::BTreeMap;
use std::time::Instant;

use canonical::{normalize_candidate, CandidateText};
use hashing::WordHash;
use index::{DocumentId, ReferenceIndex};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::metrics::metrics_recorder;
use crate::types::{MatchConfig, MatchReport, MatchScores};

#[cfg(test)]
mod tests;

/// Scores candidate texts against a built [`ReferenceIndex`].
///
/// The matcher only reads the index. Sensitivity, minimum sentence length and
/// the final-window setting come from the index's own configuration.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    index: &'a ReferenceIndex,
    cfg: MatchConfig,
}

/// Lookup result for one candidate sentence, before weighting.
#[derive(Debug, Default)]
struct SentenceOutcome {
    words: usize,
    sentence: Option<DocumentId>,
    /// Attributed word positions per document, in id order.
    windows: Vec<(DocumentId, usize)>,
    /// Total attributed positions.
    covered: usize,
}

impl<'a> Matcher<'a> {
    pub fn new(index: &'a ReferenceIndex, cfg: MatchConfig) -> Self {
        Self { index, cfg }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn normalize<S: AsRef<str>>(&self, lines: &[S]) -> CandidateText {
        normalize_candidate(lines, self.cfg.max_quote_length)
    }

    /// Normalizes and scores raw candidate lines.
    pub fn score<S: AsRef<str>>(&self, lines: &[S]) -> MatchScores {
        self.score_text(&self.normalize(lines))
    }

    /// Scores and filters raw candidate lines into a report.
    pub fn report<S: AsRef<str>>(&self, lines: &[S]) -> MatchReport {
        MatchReport::from_scores(self.index.documents(), &self.score(lines))
    }

    /// Scores an already normalized candidate.
    ///
    /// Each eligible sentence adds `words / total` to the document owning its
    /// hash in the sentence table, and the same weight, split by attributed
    /// positions, across the documents owning its windows. `total` counts set
    /// aside quotes too, so a candidate made mostly of short quotations can
    /// never reach 100 %.
    pub fn score_text(&self, candidate: &CandidateText) -> MatchScores {
        let start = Instant::now();
        let total = candidate.word_count();
        let mut scores = MatchScores::zeroed(self.index.len(), total);
        if !candidate.unterminated_quote.is_empty() {
            warn!(
                lines = candidate.unterminated_quote.len(),
                "unterminated quote dropped from candidate"
            );
        }
        if total == 0 {
            self.finish(start, &scores, 0);
            return scores;
        }

        let cfg = self.index.config();
        let eligible: Vec<&str> = candidate
            .sentences
            .iter()
            .filter(|sentence| cfg.is_eligible(sentence.words))
            .map(|sentence| sentence.text.as_str())
            .collect();
        let hashed = self
            .index
            .hasher()
            .hash_sentences(&eligible, self.cfg.use_parallel);

        let outcomes: Vec<SentenceOutcome> = if self.cfg.use_parallel {
            hashed.par_iter().map(|words| self.lookup(words)).collect()
        } else {
            hashed.iter().map(|words| self.lookup(words)).collect()
        };

        // Summation order is fixed so serial and parallel runs agree bit for bit.
        let total = total as f64;
        for outcome in &outcomes {
            let weight = outcome.words as f64 / total;
            if let Some(id) = outcome.sentence {
                scores.sentence[id.index()] += weight;
            }
            if outcome.covered > 0 {
                let covered = outcome.covered as f64;
                for &(id, positions) in &outcome.windows {
                    scores.word_sequence[id.index()] += (positions as f64 / covered) * weight;
                }
            }
        }

        self.finish(start, &scores, outcomes.len());
        scores
    }

    /// Logs and records one finished check, empty ones included.
    fn finish(&self, start: Instant, scores: &MatchScores, sentences: usize) {
        let matched = scores
            .sentence
            .iter()
            .zip(&scores.word_sequence)
            .filter(|&(&sentence, &window)| sentence > 0.0 || window > 0.0)
            .count();
        let latency = start.elapsed();
        debug!(
            sentences,
            candidate_words = scores.candidate_words,
            matched_documents = matched,
            elapsed_micros = latency.as_micros(),
            "check_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_check(latency, sentences, matched);
        }
    }

    fn lookup(&self, words: &[WordHash]) -> SentenceOutcome {
        let sequence = self.index.hasher().sequence();
        let hash = sequence.hash(words);
        let sentence = self.index.sentence_match(hash);
        let sensitivity = self.index.config().sensitivity;

        if words.len() <= sensitivity {
            let windows: Vec<(DocumentId, usize)> = self
                .index
                .window_match(hash)
                .map(|id| (id, words.len()))
                .into_iter()
                .collect();
            let covered = windows.iter().map(|&(_, n)| n).sum();
            return SentenceOutcome {
                words: words.len(),
                sentence,
                windows,
                covered,
            };
        }

        // Later windows overwrite earlier ones on shared positions.
        let mut owners: Vec<Option<DocumentId>> = vec![None; words.len()];
        let count = self.index.config().window_count(words.len());
        for (start, window) in sequence.windows(words, sensitivity).take(count).enumerate() {
            if let Some(id) = self.index.window_match(window) {
                owners[start..start + sensitivity].fill(Some(id));
            }
        }

        let mut per_document: BTreeMap<DocumentId, usize> = BTreeMap::new();
        for id in owners.into_iter().flatten() {
            *per_document.entry(id).or_default() += 1;
        }
        let covered = per_document.values().sum();
        SentenceOutcome {
            words: words.len(),
            sentence,
            windows: per_document.into_iter().collect(),
            covered,
        }
    }
}
