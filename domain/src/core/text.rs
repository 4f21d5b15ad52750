//! Text utilities for the domain layer.
//!
//! Word counts use whitespace-delimited tokens. Context windows are cut at a
//! word boundary and keep the original spacing of the kept prefix.

/// Prefix marking a string as a failure report rather than generated text.
pub const ERROR_TAG: &str = "Error:";

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The prefix of `text` holding at most `max_words` words.
///
/// Leading whitespace is skipped and the slice ends right after the last kept
/// word, so the result never splits a word or a UTF-8 character.
pub fn leading_words(text: &str, max_words: usize) -> &str {
    let text = text.trim_start();
    if max_words == 0 {
        return "";
    }

    let mut words = 0;
    let mut in_word = false;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_word {
                words += 1;
                in_word = false;
                if words == max_words {
                    return &text[..idx];
                }
            }
        } else {
            in_word = true;
        }
    }
    text.trim_end()
}

/// Render `message` with the error tag.
pub fn tag_error(message: impl AsRef<str>) -> String {
    format!("{} {}", ERROR_TAG, message.as_ref())
}

/// Whether `text` carries the error tag.
pub fn is_error_tagged(text: &str) -> bool {
    text.trim_start().starts_with(ERROR_TAG)
}
