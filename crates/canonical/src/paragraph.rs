//! Paragraph merging.
//!
//! Raw documents arrive as lines. Lines are glued into paragraphs with the
//! following literal rule, which is easy to get backwards:
//!
//! - a line containing **any** non-alphabetic character (a space, a digit,
//!   punctuation) is appended to the open paragraph, prefixed by one space;
//! - a line made only of alphabetic characters, or an empty line, closes the
//!   open paragraph and is itself discarded.
//!
//! So ordinary prose lines ("The fox jumps.") are merged, while a bare word
//! such as a heading ("Introduction") acts as a separator.

/// Merges raw lines into paragraphs.
///
/// The output preserves input order. Every paragraph starts with a space
/// because each merged line is prefixed with one.
///
/// ```rust
/// use canonical::merge_lines;
///
/// let merged = merge_lines(&["The fox", "jumps.", "Heading", "Next part."]);
/// assert_eq!(merged, vec![" The fox jumps.", " Next part."]);
/// ```
pub fn merge_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut open = String::new();

    for line in lines {
        let line = line.as_ref();
        if line.chars().any(|ch| !ch.is_alphabetic()) {
            open.push(' ');
            open.push_str(line);
        } else if !open.is_empty() {
            paragraphs.push(std::mem::take(&mut open));
        }
    }

    if !open.is_empty() {
        paragraphs.push(open);
    }
    paragraphs
}
