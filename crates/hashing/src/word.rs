use serde::{Deserialize, Serialize};

/// Hash of a single word, in `[0, CHAR_MODULUS)`.
pub type WordHash = u32;

/// Polynomial base for character hashing.
pub const CHAR_BASE: u32 = 41;
/// Modulus for character hashing.
pub const CHAR_MODULUS: u32 = 2_825_773;
/// Exponent cycle length: characters `K` positions apart share a weight.
pub const CHAR_CYCLE: usize = 5;
/// Symbol assigned to anything outside `[0-9a-z]`.
pub const CATCH_ALL_SYMBOL: u32 = 36;

/// Maps a character onto the 37-symbol alphabet.
///
/// `'0'..='9'` → `0..=9`, `'a'..='z'` → `10..=35`, everything else → `36`.
#[inline]
pub fn symbol(ch: char) -> u32 {
    match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 10,
        _ => CATCH_ALL_SYMBOL,
    }
}

/// Character-level polynomial hasher.
///
/// `hash = Σ symbol(c_i) · 41^(4 − (i mod 5)) mod 2825773`
///
/// The exponent wraps every five characters, so `"abcdef"` and `"fbcdea"`
/// collide. That cycling is part of the hash definition and must not be
/// turned into a plain positional polynomial, or stored scores stop lining
/// up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHasher {
    powers: [u32; CHAR_CYCLE],
}

impl WordHasher {
    pub fn new() -> Self {
        let mut powers = [0u32; CHAR_CYCLE];
        let mut power = 1u64;
        for slot in powers.iter_mut() {
            *slot = power as u32;
            power = power * CHAR_BASE as u64 % CHAR_MODULUS as u64;
        }
        Self { powers }
    }

    /// Hashes one word. The empty word hashes to 0.
    pub fn hash(&self, word: &str) -> WordHash {
        let modulus = CHAR_MODULUS as u64;
        let mut hash = 0u64;
        for (i, ch) in word.chars().enumerate() {
            let weight = self.powers[CHAR_CYCLE - 1 - i % CHAR_CYCLE] as u64;
            hash = (hash + symbol(ch) as u64 * weight) % modulus;
        }
        hash as WordHash
    }
}

impl Default for WordHasher {
    fn default() -> Self {
        Self::new()
    }
}
