//! plagcheck text layer.
//!
//! Turns raw document lines into the cleaned sentences that the hashing and
//! matching stages consume. Reference documents and candidate texts share
//! the same steps; candidates additionally have short quotations pulled out.
//!
//! ## Steps
//!
//! 1. [`merge_lines`]: glue lines into paragraphs (letters-only and empty
//!    lines act as separators and are dropped)
//! 2. [`collapse_whitespace`]: every whitespace run becomes one space
//! 3. [`split_by_quotes`] / [`extract_quotes`]: candidate text only
//! 4. [`split_sentences`]: cut on `.`, `!`, `?`, keep fragments with letters
//! 5. [`clean_sentence`]: lowercase, trim, keep only `[a-z0-9. -]`
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no global state. Same lines and options in, same
//! sentences out.

mod hash;
mod paragraph;
mod pipeline;
mod quotes;
mod sentence;
mod token;
mod whitespace;

pub use crate::hash::content_digest;
pub use crate::paragraph::merge_lines;
pub use crate::pipeline::{normalize_candidate, normalize_reference, CandidateText};
pub use crate::quotes::{extract_quotes, split_by_quotes, QuoteSplit, QuoteToken, QUOTE_MARK};
pub use crate::sentence::{clean_sentence, split_sentences, Sentence, SENTENCE_DELIMITERS};
pub use crate::token::{total_word_count, word_count, words};
pub use crate::whitespace::{collapse_lines, collapse_whitespace};
