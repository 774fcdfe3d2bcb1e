//! Quote extraction for candidate text.
//!
//! Short quotations are legitimate citations and must not count as copied
//! text. Lines are first cut on `"` into a flat token stream, then a small
//! state machine walks the stream:
//!
//! | state     | token   | action                                                  |
//! |-----------|---------|---------------------------------------------------------|
//! | `Outside` | marker  | enter `Inside`, reset word counter                      |
//! | `Inside`  | marker  | buffered lines become quotes, back to `Outside`         |
//! | `Inside`  | content | count words; over the cap, buffer + line become body    |
//! | `Outside` | content | line is body text                                       |
//!
//! The state carries across lines. A quote that is still open when input ends
//! is reported separately in [`QuoteSplit::unterminated`] and belongs to
//! neither output.

use serde::{Deserialize, Serialize};

use crate::token::word_count;

/// Quotation delimiter.
pub const QUOTE_MARK: char = '"';

/// One element of a quote-split line stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteToken<'a> {
    /// Text between delimiters (possibly empty).
    Content(&'a str),
    /// A single `"` delimiter.
    Marker,
}

/// Cuts every line on `"`, emitting a marker between consecutive pieces.
///
/// A line with `n` delimiters yields `n + 1` content tokens and `n` markers.
pub fn split_by_quotes<S: AsRef<str>>(lines: &[S]) -> Vec<QuoteToken<'_>> {
    let mut tokens = Vec::with_capacity(lines.len());
    for line in lines {
        let mut pieces = line.as_ref().split(QUOTE_MARK).peekable();
        while let Some(piece) = pieces.next() {
            tokens.push(QuoteToken::Content(piece));
            if pieces.peek().is_some() {
                tokens.push(QuoteToken::Marker);
            }
        }
    }
    tokens
}

/// Result of quote extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSplit {
    /// Lines from closed quotes that stayed within the word cap.
    pub quotes: Vec<String>,
    /// Body text, including quotes that overflowed the cap.
    pub no_quotes: Vec<String>,
    /// Lines of a quote left open at end of input.
    pub unterminated: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Outside,
    Inside { words: usize },
}

/// Separates quoted material from body text.
///
/// A quote whose running word count exceeds `max_quote_length` is abandoned:
/// everything buffered so far plus the current line is reclassified as body
/// text and the machine returns to `Outside`. The closing `"` of such a quote
/// then opens a new one.
pub fn extract_quotes(tokens: &[QuoteToken<'_>], max_quote_length: usize) -> QuoteSplit {
    let mut split = QuoteSplit::default();
    let mut pending: Vec<&str> = Vec::new();
    let mut state = QuoteState::Outside;

    for token in tokens {
        state = match (*token, state) {
            (QuoteToken::Marker, QuoteState::Outside) => QuoteState::Inside { words: 0 },
            (QuoteToken::Marker, QuoteState::Inside { .. }) => {
                split.quotes.extend(pending.drain(..).map(str::to_owned));
                QuoteState::Outside
            }
            (QuoteToken::Content(line), QuoteState::Inside { words }) => {
                let words = words + word_count(line);
                if words > max_quote_length {
                    split.no_quotes.extend(pending.drain(..).map(str::to_owned));
                    split.no_quotes.push(line.to_owned());
                    QuoteState::Outside
                } else {
                    pending.push(line);
                    QuoteState::Inside { words }
                }
            }
            (QuoteToken::Content(line), QuoteState::Outside) => {
                split.no_quotes.push(line.to_owned());
                QuoteState::Outside
            }
        };
    }

    split.unterminated = pending.into_iter().map(str::to_owned).collect();
    split
}
