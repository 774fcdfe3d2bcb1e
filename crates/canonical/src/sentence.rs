use serde::{Deserialize, Serialize};

/// Characters that terminate a sentence.
pub const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Splits lines into sentence fragments.
///
/// Each line is cut on `.`, `!` and `?`. Fragments without a single
/// alphabetic character (numbers, stray punctuation, blanks) are discarded.
pub fn split_sentences<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| line.as_ref().split(&SENTENCE_DELIMITERS[..]))
        .filter(|fragment| fragment.chars().any(char::is_alphabetic))
        .map(str::to_owned)
        .collect()
}

/// Lowercases, trims, and filters a sentence down to `[a-z0-9. -]`.
///
/// Trimming happens before filtering, so a removed leading symbol can leave
/// a leading space behind (`"& fox"` becomes `" fox"`). Word counting treats
/// that as an empty first word.
pub fn clean_sentence(sentence: &str) -> String {
    sentence
        .to_lowercase()
        .trim()
        .chars()
        .filter(|&ch| is_kept(ch))
        .collect()
}

fn is_kept(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '.' | ' ' | '-')
}

/// A cleaned sentence together with its word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub words: usize,
}

impl Sentence {
    /// Cleans a raw fragment and counts its words.
    pub fn from_fragment(fragment: &str) -> Self {
        let text = clean_sentence(fragment);
        let words = crate::token::word_count(&text);
        Self { text, words }
    }
}

impl AsRef<str> for Sentence {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}
