use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a document in ingestion order, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub usize);

impl DocumentId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A reference document as registered in the index.
///
/// Documents are never mutated or removed once ingested. Names are for
/// display only and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    /// SHA-256 of the document's cleaned sentences.
    pub digest: String,
    /// Sentences long enough to be indexed.
    pub eligible_sentences: usize,
}
