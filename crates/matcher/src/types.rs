use serde::{Deserialize, Serialize};

use index::DocumentId;

/// Query-side options.
///
/// Window size and minimum sentence length are not here: they are read from
/// the index so that a candidate is always cut the same way the corpus was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Quotations with at most this many words are set aside and never
    /// matched. Longer ones are scored as ordinary text.
    #[serde(default = "MatchConfig::default_max_quote_length")]
    pub max_quote_length: usize,
    /// Hash and look up candidate sentences on the rayon pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_max_quote_length() -> usize {
        5
    }

    pub fn with_max_quote_length(mut self, max_quote_length: usize) -> Self {
        self.max_quote_length = max_quote_length;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_quote_length: Self::default_max_quote_length(),
            use_parallel: false,
        }
    }
}

/// Raw per-document accumulators for one candidate.
///
/// Both vectors are indexed by [`DocumentId`] and hold fractions of the
/// candidate's words, not percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScores {
    /// Denominator: words in body sentences plus words in set-aside quotes.
    pub candidate_words: usize,
    pub sentence: Vec<f64>,
    pub word_sequence: Vec<f64>,
}

impl MatchScores {
    pub(crate) fn zeroed(documents: usize, candidate_words: usize) -> Self {
        Self {
            candidate_words,
            sentence: vec![0.0; documents],
            word_sequence: vec![0.0; documents],
        }
    }

    pub fn sentence_score(&self, id: DocumentId) -> f64 {
        self.sentence.get(id.index()).copied().unwrap_or(0.0)
    }

    pub fn word_sequence_score(&self, id: DocumentId) -> f64 {
        self.word_sequence.get(id.index()).copied().unwrap_or(0.0)
    }
}

/// One reported line: a document and its match percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScore {
    pub document_id: DocumentId,
    pub name: String,
    /// Accumulator × 100.
    pub percentage: f64,
}

/// The final report: documents above the reporting threshold, in ingestion
/// order, for each of the two passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub candidate_words: usize,
    pub sentence: Vec<DocumentScore>,
    pub word_sequence: Vec<DocumentScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_quote_cap_is_five() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.max_quote_length, 5);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn config_fills_missing_fields() {
        let cfg: MatchConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(cfg, MatchConfig::default());
        let cfg: MatchConfig =
            serde_json::from_str(r#"{"max_quote_length":0}"#).expect("deserialize");
        assert_eq!(cfg.max_quote_length, 0);
    }

    #[test]
    fn out_of_range_document_scores_zero() {
        let scores = MatchScores::zeroed(2, 10);
        assert_eq!(scores.sentence_score(DocumentId(5)), 0.0);
        assert_eq!(scores.word_sequence_score(DocumentId(1)), 0.0);
    }
}
