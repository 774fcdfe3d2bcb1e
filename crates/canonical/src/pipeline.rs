use serde::{Deserialize, Serialize};

use crate::paragraph::merge_lines;
use crate::quotes::{extract_quotes, split_by_quotes, QuoteSplit};
use crate::sentence::{split_sentences, Sentence};
use crate::token::total_word_count;
use crate::whitespace::collapse_lines;

/// Normalizes a reference document into cleaned sentences.
///
/// merge paragraphs → collapse whitespace → split on terminators → clean.
pub fn normalize_reference<S: AsRef<str>>(lines: &[S]) -> Vec<Sentence> {
    let paragraphs = collapse_lines(&merge_lines(lines));
    split_sentences(&paragraphs)
        .iter()
        .map(|fragment| Sentence::from_fragment(fragment))
        .collect()
}

/// A candidate text after normalization and quote extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateText {
    /// Raw lines of short, closed quotations. Never matched, but counted.
    pub quotes: Vec<String>,
    /// Cleaned body sentences.
    pub sentences: Vec<Sentence>,
    /// Lines of a quotation left open at end of input. Neither matched nor
    /// counted.
    pub unterminated_quote: Vec<String>,
}

impl CandidateText {
    /// Scoring denominator: words in quotes plus words in body sentences.
    pub fn word_count(&self) -> usize {
        total_word_count(&self.quotes) + self.sentences.iter().map(|s| s.words).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty() && self.sentences.is_empty()
    }
}

/// Normalizes a candidate text, pulling out quotations of at most
/// `max_quote_length` words.
///
/// merge paragraphs → collapse whitespace → split on `"` → extract quotes →
/// split body on terminators → clean.
pub fn normalize_candidate<S: AsRef<str>>(lines: &[S], max_quote_length: usize) -> CandidateText {
    let paragraphs = collapse_lines(&merge_lines(lines));
    let tokens = split_by_quotes(&paragraphs);
    let QuoteSplit {
        quotes,
        no_quotes,
        unterminated,
    } = extract_quotes(&tokens, max_quote_length);

    let sentences = split_sentences(&no_quotes)
        .iter()
        .map(|fragment| Sentence::from_fragment(fragment))
        .collect();

    CandidateText {
        quotes,
        sentences,
        unterminated_quote: unterminated,
    }
}
