/// Splits a cleaned sentence into words on the ASCII space.
///
/// Consecutive spaces yield empty words; they are kept so that the word list
/// length always equals [`word_count`].
pub fn words(sentence: &str) -> std::str::Split<'_, char> {
    sentence.split(' ')
}

/// Number of words in a line: whitespace characters plus one.
///
/// This is the counting rule for both cleaned sentences and raw quote lines.
/// An empty line counts as one word.
pub fn word_count(line: &str) -> usize {
    line.chars().filter(|ch| ch.is_whitespace()).count() + 1
}

/// Sum of [`word_count`] over all lines.
pub fn total_word_count<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().map(|line| word_count(line.as_ref())).sum()
}
