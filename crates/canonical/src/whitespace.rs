//! Whitespace normalization utilities.
//!
//! Every run of Unicode whitespace becomes one ASCII space. Unlike a
//! `split_whitespace().join(" ")` approach, edges are **not** trimmed: the
//! paragraph merger prefixes each line with a space and that space survives
//! here. Trimming happens later, per sentence, in
//! [`clean_sentence`](crate::clean_sentence).
//!
//! # Examples
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("hello   world"), "hello world");
//! assert_eq!(collapse_whitespace(" \t hello\r\n"), " hello ");
//! ```

/// Replaces every whitespace run in `text` with a single space.
///
/// Newlines, tabs, carriage returns and non-breaking spaces all count as
/// whitespace. Empty input yields an empty string; whitespace-only input
/// yields a single space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
                in_run = true;
            }
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    collapsed
}

/// Applies [`collapse_whitespace`] to each line.
pub fn collapse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| collapse_whitespace(line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_runs() {
        assert_eq!(collapse_whitespace("a \t\n b"), "a b");
        assert_eq!(collapse_whitespace("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn keeps_single_edge_spaces() {
        assert_eq!(collapse_whitespace("   lead"), " lead");
        assert_eq!(collapse_whitespace("trail   "), "trail ");
        assert_eq!(collapse_whitespace("   "), " ");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn collapse_lines_preserves_order() {
        let lines = ["one  two", "three\t\tfour"];
        assert_eq!(collapse_lines(&lines), vec!["one two", "three four"]);
    }
}
