//! # plagcheck matcher
//!
//! Scores a candidate text against a [`ReferenceIndex`](index::ReferenceIndex)
//! and turns the scores into a per-document report.
//!
//! Two independent passes run over every eligible candidate sentence:
//!
//! - **Sentence pass**: the whole-sentence hash is looked up in the sentence
//!   table. A hit credits the owning document with the sentence's share of
//!   the candidate's words.
//! - **Word sequence pass**: each window hash is looked up in the window
//!   table. Every hit stamps its document onto the window's word positions,
//!   later windows overwriting earlier ones. The sentence's share is then
//!   split between documents by how many positions each one holds.
//!
//! Short quotations are removed before either pass but still count towards
//! the candidate's total word count.
//!
//! ## Example
//!
//! ```
//! use index::{IndexConfig, ReferenceIndex};
//! use matcher::{MatchConfig, Matcher};
//!
//! let mut index = ReferenceIndex::new(IndexConfig::default()).unwrap();
//! index.ingest("fox.txt", &["The quick brown fox jumps over the lazy dog."]);
//!
//! let matcher = Matcher::new(&index, MatchConfig::default());
//! let report = matcher.report(&["The quick brown fox jumps over the lazy dog."]);
//! assert_eq!(report.sentence[0].to_line(), "fox.txt : 100.0000 %");
//! ```
//!
//! ## Observability
//!
//! Install a [`CheckMetrics`] implementation via [`set_check_metrics`] to
//! record per-check latency and match counts.

pub mod engine;
pub mod metrics;
pub mod report;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_check_metrics, CheckMetrics};
pub use crate::report::{MATCH_EPSILON, SENTENCE_HEADER, WORD_SEQUENCE_HEADER};
pub use crate::types::{DocumentScore, MatchConfig, MatchReport, MatchScores};
