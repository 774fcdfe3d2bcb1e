//! # plagcheck index
//!
//! Append-only reference index built from a corpus of documents.
//!
//! Every ingested document is normalized into cleaned sentences, and each
//! sentence with at least `min_words_in_sentence` words contributes to two
//! tables:
//!
//! - the **sentence table**: hash of the whole sentence → document
//! - the **window table**: hash of every `sensitivity`-word window → document
//!   (a sentence no longer than `sensitivity` is stored as a single window)
//!
//! Both tables are first-write-wins. A hash already present is never
//! re-attributed, so the earliest ingested document owns shared text. There
//! is no removal and no update; ingest order fully determines lookups.
//!
//! ## Example
//!
//! ```
//! use index::{IndexConfig, ReferenceIndex};
//!
//! let mut index = ReferenceIndex::new(IndexConfig::default()).unwrap();
//! let id = index.ingest("fox.txt", &["The quick brown fox jumps over the lazy dog."]);
//!
//! assert_eq!(index.document(id).unwrap().name, "fox.txt");
//! assert_eq!(index.stats().sentence_hashes, 1);
//! ```

mod builder;
mod config;
mod document;
mod table;

use std::time::Instant;

use fxhash::FxBuildHasher;
use hashbrown::HashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn, Level};

use hashing::{SequenceHash, TextHasher, WordHash};

use crate::builder::{prepare, PreparedDocument};

pub use crate::config::IndexConfig;
pub use crate::document::{Document, DocumentId};
pub use crate::table::HashIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("invalid index configuration: {0}")]
    InvalidConfig(String),
}

/// Table sizes, for logging and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub sentence_hashes: usize,
    pub window_hashes: usize,
    /// Documents whose cleaned sentences equal an earlier document's.
    pub duplicate_documents: usize,
}

/// The two hash tables plus the document registry.
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    cfg: IndexConfig,
    hasher: TextHasher,
    sentences: HashIndex,
    windows: HashIndex,
    documents: Vec<Document>,
    digests: HashSet<String, FxBuildHasher>,
    duplicate_documents: usize,
}

impl ReferenceIndex {
    pub fn new(cfg: IndexConfig) -> Result<Self, IndexError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            hasher: TextHasher::new(),
            sentences: HashIndex::new(),
            windows: HashIndex::new(),
            documents: Vec::new(),
            digests: HashSet::default(),
            duplicate_documents: 0,
        })
    }

    pub fn config(&self) -> &IndexConfig {
        &self.cfg
    }

    pub fn hasher(&self) -> &TextHasher {
        &self.hasher
    }

    /// Registers one reference document and indexes its sentences.
    ///
    /// Returns the new document's id, which is its position in ingestion
    /// order. A document with no eligible sentence is still registered.
    pub fn ingest<S>(&mut self, name: &str, lines: &[S]) -> DocumentId
    where
        S: AsRef<str> + Sync,
    {
        let prepared = prepare(&self.hasher, &self.cfg, name, lines);
        self.insert(prepared)
    }

    /// Registers many documents at once.
    ///
    /// Normalization and hashing run on the rayon pool when `use_parallel` is
    /// set; table writes always happen in slice order, so the result is the
    /// same as calling [`ingest`](Self::ingest) on each document in turn.
    pub fn ingest_many<N, L, S>(&mut self, documents: &[(N, L)]) -> Vec<DocumentId>
    where
        N: AsRef<str> + Sync,
        L: AsRef<[S]> + Sync,
        S: AsRef<str> + Sync,
    {
        let prepared: Vec<PreparedDocument> = if self.cfg.use_parallel {
            documents
                .par_iter()
                .map(|(name, lines)| prepare(&self.hasher, &self.cfg, name.as_ref(), lines.as_ref()))
                .collect()
        } else {
            documents
                .iter()
                .map(|(name, lines)| prepare(&self.hasher, &self.cfg, name.as_ref(), lines.as_ref()))
                .collect()
        };
        prepared.into_iter().map(|doc| self.insert(doc)).collect()
    }

    fn insert(&mut self, prepared: PreparedDocument) -> DocumentId {
        let start = Instant::now();
        let id = DocumentId(self.documents.len());
        let span = tracing::span!(
            Level::INFO,
            "index.ingest",
            document_id = id.index(),
            document = %prepared.name
        );
        let _guard = span.enter();

        let mut new_sentences = 0usize;
        let mut new_windows = 0usize;
        for words in &prepared.sentences {
            let (sentence, windows) = self.insert_sentence(words, id);
            new_sentences += usize::from(sentence);
            new_windows += windows;
        }

        if prepared.sentences.is_empty() {
            warn!("document has no eligible sentences");
        }
        let duplicate = !self.digests.insert(prepared.digest.clone());
        if duplicate {
            self.duplicate_documents += 1;
        }

        self.documents.push(Document {
            id,
            name: prepared.name,
            digest: prepared.digest,
            eligible_sentences: prepared.sentences.len(),
        });

        let elapsed_micros = start.elapsed().as_micros();
        let doc = &self.documents[id.index()];
        info!(
            digest = %doc.digest,
            duplicate,
            sentences = doc.eligible_sentences,
            new_sentences,
            new_windows,
            elapsed_micros,
            "ingest_success"
        );
        id
    }

    /// Returns whether the sentence hash was new and how many window hashes
    /// were new.
    fn insert_sentence(&mut self, words: &[WordHash], id: DocumentId) -> (bool, usize) {
        let sequence = self.hasher.sequence();
        let hash = sequence.hash(words);
        let inserted = self.sentences.insert_if_absent(hash, id);

        let sensitivity = self.cfg.sensitivity;
        if words.len() <= sensitivity {
            let window = usize::from(self.windows.insert_if_absent(hash, id));
            return (inserted, window);
        }

        let count = self.cfg.window_count(words.len());
        let mut new_windows = 0;
        for window in sequence.windows(words, sensitivity).take(count) {
            if self.windows.insert_if_absent(window, id) {
                new_windows += 1;
            }
        }
        (inserted, new_windows)
    }

    /// Owner of a whole-sentence hash.
    pub fn sentence_match(&self, hash: SequenceHash) -> Option<DocumentId> {
        self.sentences.get(hash)
    }

    /// Owner of a window hash.
    pub fn window_match(&self, hash: SequenceHash) -> Option<DocumentId> {
        self.windows.get(hash)
    }

    /// All documents in ingestion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            sentence_hashes: self.sentences.len(),
            window_hashes: self.windows.len(),
            duplicate_documents: self.duplicate_documents,
        }
    }
}
