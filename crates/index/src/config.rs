use serde::{Deserialize, Serialize};

use crate::IndexError;

/// Settings shared by ingestion and lookup.
///
/// Queries must run with the same settings the index was built with, so the
/// matcher reads them back from [`ReferenceIndex::config`](crate::ReferenceIndex::config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Window size, in words, for fuzzy matching. Must be at least 1.
    pub sensitivity: usize,
    /// Sentences with fewer words are neither indexed nor matched.
    pub min_words_in_sentence: usize,
    /// Also use the last window of a long sentence (start `len − sensitivity`).
    ///
    /// Off by default: the established scoring never looks at that window,
    /// and turning it on changes reported percentages.
    pub include_final_window: bool,
    /// Normalize and hash documents on the rayon pool during batch ingestion.
    pub use_parallel: bool,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sensitivity(mut self, sensitivity: usize) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_min_words_in_sentence(mut self, min_words: usize) -> Self {
        self.min_words_in_sentence = min_words;
        self
    }

    pub fn with_final_window(mut self, include: bool) -> Self {
        self.include_final_window = include;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.sensitivity == 0 {
            return Err(IndexError::InvalidConfig(
                "sensitivity must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Whether a sentence of `len` words takes part in matching at all.
    pub fn is_eligible(&self, len: usize) -> bool {
        len >= self.min_words_in_sentence
    }

    /// Number of window starts scanned for a sentence longer than
    /// `sensitivity`.
    ///
    /// `len − sensitivity` by default, which skips the final window;
    /// one more with `include_final_window`.
    pub fn window_count(&self, len: usize) -> usize {
        let count = len.saturating_sub(self.sensitivity);
        if self.include_final_window {
            count + 1
        } else {
            count
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sensitivity: 9,
            min_words_in_sentence: 3,
            include_final_window: false,
            use_parallel: false,
        }
    }
}
