//! Text statistics and word-aligned diffs.

use crate::common::{char_len, split_lines};
use crate::error::{TextError, TextResult};
use serde::Serialize;

/// Character, word and line counts for a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub word_count: usize,
    pub line_count: usize,
}

/// One position where two token sequences disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDiffEntry {
    pub index: usize,
    pub left: String,
    pub right: String,
}

/// Compute statistics for `text`.
///
/// Blank text (empty or only whitespace) yields all-zero stats, including a
/// zero line count.
pub fn stats(text: &str) -> TextStats {
    if text.trim().is_empty() {
        return TextStats::default();
    }

    let (word_count, char_count_no_spaces) = text
        .split_whitespace()
        .fold((0, 0), |(words, chars), word| (words + 1, chars + char_len(word)));

    TextStats {
        char_count: char_len(text),
        char_count_no_spaces,
        word_count,
        line_count: split_lines(text).len(),
    }
}

/// Compare two texts token by token.
///
/// Without `separators` tokens are whitespace-delimited. With `separators`,
/// every char in it is a delimiter and empty tokens are dropped. Both sides must
/// produce the same number of tokens.
pub fn word_diff(
    left: &str,
    right: &str,
    separators: Option<&str>,
) -> TextResult<Vec<WordDiffEntry>> {
    let (left_tokens, right_tokens) = match separators {
        None => (
            left.split_whitespace().collect::<Vec<_>>(),
            right.split_whitespace().collect::<Vec<_>>(),
        ),
        Some("") => {
            return Err(TextError::value_error(
                "Input 'separators' must contain at least one character.",
            ))
        }
        Some(separators) => (
            split_on_any(left, separators),
            split_on_any(right, separators),
        ),
    };

    if left_tokens.len() != right_tokens.len() {
        return Err(TextError::value_error(format!(
            "Inputs must have the same number of words (left has {}, right has {}).",
            left_tokens.len(),
            right_tokens.len()
        )));
    }

    Ok(left_tokens
        .iter()
        .zip(right_tokens.iter())
        .enumerate()
        .filter(|(_, (l, r))| l != r)
        .map(|(index, (l, r))| WordDiffEntry {
            index,
            left: l.to_string(),
            right: r.to_string(),
        })
        .collect())
}

fn split_on_any<'a>(text: &'a str, separators: &str) -> Vec<&'a str> {
    text.split(|c: char| separators.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}
