//! Word-sequence hashing and sliding windows.
//!
//! A sequence of word hashes `w_0 .. w_{n-1}` hashes to
//!
//! ```text
//! H = Σ w_i · P^(K−1−(i mod K))  mod M      P = 2825777, K = 25
//! ```
//!
//! Like the character hash, the exponent wraps every `K` positions. Windows
//! of a fixed size `S` are produced in O(1) per step. Removing the leading word
//! and multiplying by `P` shifts every remaining weight down one position,
//! except for words whose relative offset was a non-zero multiple of `K`:
//! their weight wraps from `P^(K−1)` back to `P^0`, so they are corrected
//! with `(P^K − 1)`. The sum of those words is tracked per residue class of
//! the absolute position, which keeps the correction O(1) too:
//!
//! ```text
//! E  = (Σ w_p, p ≡ i (mod K), i ≤ p < i+S) − w_i
//! H' = (H − w_i·P^(K−1))·P − (P^K − 1)·E + w_{i+S}·P^(K−1−((S−1) mod K))
//! ```
//!
//! For `S ≤ K` the correction term is always zero, and for `S = K` the update
//! reduces to the textbook `(H − w_i·P^(S−1))·P + w_{i+S}`. In every case the
//! rolled value equals [`SequenceHasher::hash`] over the same window.

use serde::{Deserialize, Serialize};

use crate::modular::{add_mod, mul_mod, sub_mod};
use crate::word::WordHash;

/// Hash of a word sequence (whole sentence or window), in `[0, WORD_MODULUS)`.
pub type SequenceHash = u64;

/// Polynomial base for word-sequence hashing.
pub const WORD_BASE: u64 = 2_825_777;
/// Modulus for word-sequence hashing, just below `i64::MAX`.
pub const WORD_MODULUS: u64 = 4_223_372_036_854_775_803;
/// Exponent cycle length for word-sequence hashing.
pub const WORD_CYCLE: usize = 25;

/// Sequence-level polynomial hasher with its power table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceHasher {
    /// `P^0 ..= P^K`; the last entry only feeds the wrap correction.
    powers: Vec<u64>,
}

impl SequenceHasher {
    pub fn new() -> Self {
        let mut powers = Vec::with_capacity(WORD_CYCLE + 1);
        let mut power = 1u64;
        for _ in 0..=WORD_CYCLE {
            powers.push(power);
            power = mul_mod(power, WORD_BASE, WORD_MODULUS);
        }
        Self { powers }
    }

    #[inline]
    fn weight(&self, offset: usize) -> u64 {
        self.powers[WORD_CYCLE - 1 - offset % WORD_CYCLE]
    }

    /// Hashes a whole sequence from scratch.
    pub fn hash(&self, word_hashes: &[WordHash]) -> SequenceHash {
        word_hashes
            .iter()
            .enumerate()
            .fold(0, |hash, (offset, &word)| {
                let term = mul_mod(word as u64, self.weight(offset), WORD_MODULUS);
                add_mod(hash, term, WORD_MODULUS)
            })
    }

    /// Iterates over the hashes of every window of `size` consecutive words.
    ///
    /// Yields `len − size + 1` values, in start order. Yields nothing if
    /// `size` is zero or longer than the sequence.
    pub fn windows<'a>(&'a self, word_hashes: &'a [WordHash], size: usize) -> Windows<'a> {
        Windows {
            hasher: self,
            word_hashes,
            size,
            start: 0,
            current: None,
            residues: [0; WORD_CYCLE],
        }
    }
}

impl Default for SequenceHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling window iterator returned by [`SequenceHasher::windows`].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    hasher: &'a SequenceHasher,
    word_hashes: &'a [WordHash],
    size: usize,
    /// Start offset of the next window to yield.
    start: usize,
    current: Option<SequenceHash>,
    /// Sum of word hashes in the current window per `position mod K`.
    residues: [u64; WORD_CYCLE],
}

impl Windows<'_> {
    fn first(&mut self) -> SequenceHash {
        let window = &self.word_hashes[..self.size];
        for (position, &word) in window.iter().enumerate() {
            let slot = &mut self.residues[position % WORD_CYCLE];
            *slot = add_mod(*slot, word as u64, WORD_MODULUS);
        }
        self.hasher.hash(window)
    }

    /// Moves from the window starting at `from` to the one at `from + 1`.
    fn roll(&mut self, hash: SequenceHash, from: usize) -> SequenceHash {
        let m = WORD_MODULUS;
        let powers = &self.hasher.powers;
        let outgoing = self.word_hashes[from] as u64;
        let incoming = self.word_hashes[from + self.size] as u64;
        let out_slot = from % WORD_CYCLE;
        let in_slot = (from + self.size) % WORD_CYCLE;

        let wrapped = sub_mod(self.residues[out_slot], outgoing, m);
        let wrap_factor = sub_mod(powers[WORD_CYCLE], 1, m);

        let mut next = sub_mod(hash, mul_mod(outgoing, powers[WORD_CYCLE - 1], m), m);
        next = mul_mod(next, WORD_BASE, m);
        next = sub_mod(next, mul_mod(wrap_factor, wrapped, m), m);
        next = add_mod(next, mul_mod(incoming, self.hasher.weight(self.size - 1), m), m);

        self.residues[out_slot] = wrapped;
        self.residues[in_slot] = add_mod(self.residues[in_slot], incoming, m);
        next
    }
}

impl Iterator for Windows<'_> {
    type Item = SequenceHash;

    fn next(&mut self) -> Option<SequenceHash> {
        if self.size == 0 || self.start + self.size > self.word_hashes.len() {
            return None;
        }
        let hash = match self.current {
            None => self.first(),
            Some(previous) => self.roll(previous, self.start - 1),
        };
        self.current = Some(hash);
        self.start += 1;
        Some(hash)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.size == 0 {
            0
        } else {
            (self.word_hashes.len() + 1).saturating_sub(self.size + self.start)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}
