//! Content digests for ingested documents.
//!
//! The digest identifies a document's normalized content in logs and index
//! statistics. It plays no part in matching.
//!
//! ```text
//! SHA-256(sentence_0 || 0x0A || sentence_1 || 0x0A || ...)
//! ```

use sha2::{Digest, Sha256};

/// SHA-256 hex digest over cleaned sentences, each terminated by `\n`.
///
/// ```rust
/// use canonical::content_digest;
///
/// let a = content_digest(&["the quick brown fox"]);
/// assert_eq!(a.len(), 64);
/// assert_ne!(a, content_digest(&["the quick", "brown fox"]));
/// ```
pub fn content_digest<S: AsRef<str>>(sentences: &[S]) -> String {
    let mut hasher = Sha256::new();
    for sentence in sentences {
        hasher.update(sentence.as_ref().as_bytes());
        hasher.update([b'\n']);
    }
    hex::encode(hasher.finalize())
}
