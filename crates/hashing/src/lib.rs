//! # plagcheck hashing
//!
//! Two-level polynomial hashing over cleaned sentences:
//!
//! 1. **Word hashing** ([`WordHasher`]): each word becomes a [`WordHash`] in
//!    `[0, 2825773)` from its characters mapped onto a 37-symbol alphabet.
//! 2. **Sequence hashing** ([`SequenceHasher`]): an ordered run of word
//!    hashes, a whole sentence or a fixed-size window, becomes a 64-bit
//!    [`SequenceHash`]. Windows are produced by a rolling update in O(1) per
//!    step and always equal the from-scratch hash of the same words.
//!
//! Both hashers own their power tables, built once at construction. There
//! is no global state; a [`TextHasher`] can be shared freely across threads.
//!
//! Collisions are possible and are not detected. Downstream matching treats
//! equal hashes as equal text.

mod modular;
mod sequence;
mod word;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use crate::sequence::{
    SequenceHash, SequenceHasher, Windows, WORD_BASE, WORD_CYCLE, WORD_MODULUS,
};
pub use crate::word::{
    symbol, WordHash, WordHasher, CATCH_ALL_SYMBOL, CHAR_BASE, CHAR_CYCLE, CHAR_MODULUS,
};

/// Word and sequence hashers bundled together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextHasher {
    word: WordHasher,
    sequence: SequenceHasher,
}

impl TextHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(&self) -> &WordHasher {
        &self.word
    }

    pub fn sequence(&self) -> &SequenceHasher {
        &self.sequence
    }

    /// Hashes every space-separated word of a cleaned sentence.
    ///
    /// The result has exactly [`canonical::word_count`] entries; empty words
    /// hash to 0.
    pub fn hash_words(&self, sentence: &str) -> Vec<WordHash> {
        canonical::words(sentence)
            .map(|word| self.word.hash(word))
            .collect()
    }

    /// Hashes the words of many sentences, preserving order.
    ///
    /// With `parallel` set the work is spread over the rayon pool; the output
    /// is identical either way.
    pub fn hash_sentences<S>(&self, sentences: &[S], parallel: bool) -> Vec<Vec<WordHash>>
    where
        S: AsRef<str> + Sync,
    {
        if parallel {
            sentences
                .par_iter()
                .map(|sentence| self.hash_words(sentence.as_ref()))
                .collect()
        } else {
            sentences
                .iter()
                .map(|sentence| self.hash_words(sentence.as_ref()))
                .collect()
        }
    }
}
