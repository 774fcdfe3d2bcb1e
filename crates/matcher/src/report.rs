use std::fmt;

use index::Document;

use crate::types::{DocumentScore, MatchReport, MatchScores};

/// Accumulators at or below this value are not reported.
pub const MATCH_EPSILON: f64 = 1e-6;

pub const SENTENCE_HEADER: &str = "Sentence Matching: ";
pub const WORD_SEQUENCE_HEADER: &str = "Word Sequence Matching: ";

fn above_threshold(documents: &[Document], accumulators: &[f64]) -> Vec<DocumentScore> {
    documents
        .iter()
        .zip(accumulators)
        .filter(|(_, score)| **score > MATCH_EPSILON)
        .map(|(doc, &score)| DocumentScore {
            document_id: doc.id,
            name: doc.name.clone(),
            percentage: score * 100.0,
        })
        .collect()
}

impl MatchReport {
    /// Keeps documents whose accumulator exceeds [`MATCH_EPSILON`], in
    /// ingestion order.
    pub fn from_scores(documents: &[Document], scores: &MatchScores) -> Self {
        Self {
            candidate_words: scores.candidate_words,
            sentence: above_threshold(documents, &scores.sentence),
            word_sequence: above_threshold(documents, &scores.word_sequence),
        }
    }

    /// Plain-text rendering: sentence header and lines, a blank line, then
    /// the word-sequence header and lines.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.sentence.len() + self.word_sequence.len() + 3);
        lines.push(SENTENCE_HEADER.to_owned());
        lines.extend(self.sentence.iter().map(DocumentScore::to_line));
        lines.push(String::new());
        lines.push(WORD_SEQUENCE_HEADER.to_owned());
        lines.extend(self.word_sequence.iter().map(DocumentScore::to_line));
        lines
    }

    pub fn is_clean(&self) -> bool {
        self.sentence.is_empty() && self.word_sequence.is_empty()
    }
}

impl DocumentScore {
    pub fn to_line(&self) -> String {
        format!("{} : {:.4} %", self.name, self.percentage)
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
