use canonical::{content_digest, normalize_reference};
use hashing::{TextHasher, WordHash};

use crate::config::IndexConfig;

/// A reference document normalized and hashed, ready to be written into the
/// tables. Preparation touches no shared state, so it may run on any thread.
#[derive(Debug, Clone)]
pub(crate) struct PreparedDocument {
    pub name: String,
    pub digest: String,
    /// Word hashes of every eligible sentence, in document order.
    pub sentences: Vec<Vec<WordHash>>,
}

pub(crate) fn prepare<S: AsRef<str> + Sync>(
    hasher: &TextHasher,
    cfg: &IndexConfig,
    name: &str,
    lines: &[S],
) -> PreparedDocument {
    let sentences = normalize_reference(lines);
    let digest = content_digest(&sentences);
    let eligible: Vec<&str> = sentences
        .iter()
        .filter(|sentence| cfg.is_eligible(sentence.words))
        .map(|sentence| sentence.text.as_str())
        .collect();

    PreparedDocument {
        name: name.to_owned(),
        digest,
        sentences: hasher.hash_sentences(&eligible, cfg.use_parallel),
    }
}
