//! # plagcheck
//!
//! Detects textual overlap between a candidate text and a corpus of reference
//! documents. For every reference document two percentages are reported:
//!
//! - **sentence matching**: share of the candidate's words that sit in
//!   sentences copied verbatim (after normalization) from that document
//! - **word sequence matching**: share covered by runs of `sensitivity`
//!   consecutive words found in that document, split proportionally when
//!   several documents cover the same sentence
//!
//! The work is spread across the workspace crates:
//!
//! | crate       | role                                                   |
//! |-------------|--------------------------------------------------------|
//! | `canonical` | lines → paragraphs → cleaned sentences, quote removal  |
//! | `hashing`   | word hashes and rolling word-sequence hashes           |
//! | `index`     | append-only, first-write-wins sentence/window tables   |
//! | `matcher`   | per-document scoring and report rendering              |
//!
//! [`Checker`] wires them together behind one configuration.
//!
//! ```
//! use plagcheck::{Checker, CheckerConfig};
//!
//! let mut checker = Checker::new(&CheckerConfig::default()).unwrap();
//! checker.ingest_document("fox.txt", &["The quick brown fox jumps over the lazy dog."]);
//!
//! let lines = checker.check(&["The quick brown fox jumps over the lazy dog."]);
//! assert_eq!(lines[1], "fox.txt : 100.0000 %");
//! ```

pub mod config;
pub mod corpus;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use canonical::{CandidateText, Sentence};
pub use hashing::{SequenceHash, TextHasher, WordHash};
pub use index::{Document, DocumentId, IndexConfig, IndexError, IndexStats, ReferenceIndex};
pub use matcher::{
    set_check_metrics, CheckMetrics, DocumentScore, MatchConfig, MatchReport, MatchScores,
    Matcher,
};

pub use crate::config::{CheckerConfig, ConfigLoadError, LoggingConfig, PlagcheckConfig};
pub use crate::corpus::{load_corpus_dir, read_lines, CorpusEntry};

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A reference index plus the query options used against it.
#[derive(Debug, Clone)]
pub struct Checker {
    index: ReferenceIndex,
    match_cfg: MatchConfig,
}

impl Checker {
    pub fn new(cfg: &CheckerConfig) -> Result<Self, CheckerError> {
        Ok(Self {
            index: ReferenceIndex::new(cfg.index_config())?,
            match_cfg: cfg.match_config(),
        })
    }

    /// Adds one reference document. Ids are assigned in call order from 0.
    pub fn ingest_document<S>(&mut self, name: &str, lines: &[S]) -> DocumentId
    where
        S: AsRef<str> + Sync,
    {
        self.index.ingest(name, lines)
    }

    /// Adds documents in slice order.
    pub fn ingest_corpus(&mut self, corpus: &[CorpusEntry]) -> Vec<DocumentId> {
        self.index.ingest_many(corpus)
    }

    /// Loads and ingests every file in `dir`, in file-name order.
    pub fn ingest_dir(&mut self, dir: &Path) -> Result<Vec<DocumentId>, CheckerError> {
        let corpus = load_corpus_dir(dir)?;
        Ok(self.ingest_corpus(&corpus))
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.index, self.match_cfg.clone())
    }

    /// Raw per-document accumulators for a candidate.
    pub fn scores<S: AsRef<str>>(&self, lines: &[S]) -> MatchScores {
        self.matcher().score(lines)
    }

    pub fn check_report<S: AsRef<str>>(&self, lines: &[S]) -> MatchReport {
        self.matcher().report(lines)
    }

    /// Report lines, ready to print one per line.
    pub fn check<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        self.check_report(lines).to_lines()
    }
}
