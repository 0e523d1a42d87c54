//! Removal of unwanted chars and lines.

use crate::common::split_lines;
use crate::patterns::DIGIT;

/// Keep only alphanumeric and whitespace chars.
pub fn remove_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Join the lines of `text` with `replace_with`.
pub fn remove_newlines(text: &str, replace_with: &str) -> String {
    split_lines(text).join(replace_with)
}

/// Drop every whitespace run, inner ones included.
pub fn remove_all_whitespace(text: &str) -> String {
    text.split_whitespace().collect()
}

pub fn remove_digits(text: &str) -> String {
    DIGIT.replace_all(text, "").into_owned()
}

/// Drop every line containing `target`; survivors are joined with `\n`.
pub fn remove_lines_containing(text: &str, target: &str) -> String {
    split_lines(text)
        .into_iter()
        .filter(|line| !line.contains(target))
        .collect::<Vec<_>>()
        .join("\n")
}
