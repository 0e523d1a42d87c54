//! Formatter
//!
//!     String-to-string transforms. Each function takes the text plus its options and
//!     returns a new string; nothing is modified in place.
//!
//! Layout
//!
//!     This module holds the general reshaping helpers (slugs, truncation, initials,
//!     padding). The more specialized families live in submodules:
//!         1. Case conversion. See [case](case).
//!         2. Masking, including email masking which leans on the validator. See
//!            [mask](mask).
//!         3. Stripping of punctuation, digits, whitespace and lines. See [strip](strip).
//!
//! Lengths
//!
//!     Every length, width and index is counted in chars, never in bytes, so multi-byte
//!     text is cut, padded and masked on character boundaries.

pub mod case;
pub mod mask;
pub mod strip;

pub use case::{convert_case, CaseStyle};
pub use mask::{mask_email, mask_middle, mask_text};
pub use strip::{
    remove_all_whitespace, remove_digits, remove_lines_containing, remove_newlines,
    remove_punctuation,
};

use crate::common::char_len;
use crate::error::{TextError, TextResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Knobs for [`slugify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    pub lowercase: bool,
    /// Replaces spaces; must not be alphanumeric
    pub separator: char,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            separator: '-',
        }
    }
}

/// Knobs for [`truncate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Appended whenever the text is shortened
    pub suffix: String,
    /// Back off to the last boundary instead of cutting a word in half
    pub preserve_words: bool,
    /// Chars that count as word boundaries
    pub boundaries: String,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            suffix: "...".to_string(),
            preserve_words: true,
            boundaries: " \n\t".to_string(),
        }
    }
}

/// Side of the text that receives padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSide {
    Left,
    #[default]
    Right,
}

impl FromStr for PadSide {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(PadSide::Left),
            "right" => Ok(PadSide::Right),
            _ => Err(TextError::value_error(
                "Input 'side' must be either 'left' or 'right'.",
            )),
        }
    }
}

/// Turn `text` into a URL-friendly slug.
///
/// Optionally lowercases, swaps spaces for the separator, then drops every char
/// that is neither alphanumeric nor the separator. Applying it twice changes
/// nothing.
pub fn slugify(text: &str, options: &SlugOptions) -> TextResult<String> {
    let separator = options.separator;
    if separator.is_alphanumeric() {
        return Err(TextError::value_error(
            "Separator must be a single, non-alphanumeric character.",
        ));
    }

    let text = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    Ok(text
        .chars()
        .map(|c| if c == ' ' { separator } else { c })
        .filter(|c| c.is_alphanumeric() || *c == separator)
        .collect())
}

/// Shorten `text` to at most `max_length` chars plus the suffix.
///
/// With `preserve_words`, a cut that would land inside a word backs off to the
/// right-most boundary char within the first `max_length` chars. When the char
/// right after the cut is itself a boundary, or no boundary exists in range, the
/// cut is made exactly at `max_length`.
pub fn truncate(text: &str, max_length: usize, options: &TruncateOptions) -> TextResult<String> {
    if max_length == 0 {
        return Err(TextError::value_error(
            "Input 'max_length' must be a positive integer.",
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return Ok(text.to_string());
    }

    let is_boundary = |c: &char| options.boundaries.contains(*c);
    let mut cut = max_length;
    if options.preserve_words && !is_boundary(&chars[max_length]) {
        if let Some(last_boundary) = chars[..max_length].iter().rposition(is_boundary) {
            cut = last_boundary;
        }
    }

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push_str(&options.suffix);
    Ok(truncated)
}

/// Uppercased first letters of each word, e.g. `"ada lovelace"` -> `"AL"`.
///
/// Words that start with a non-alphanumeric char contribute nothing.
pub fn initials(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}

/// Pad `text` with `fill` up to `width` chars. Longer text is returned as is.
pub fn pad_text(text: &str, width: usize, fill: char, side: PadSide) -> String {
    let length = char_len(text);
    if length >= width {
        return text.to_string();
    }

    let padding: String = std::iter::repeat(fill).take(width - length).collect();
    match side {
        PadSide::Left => padding + text,
        PadSide::Right => text.to_string() + &padding,
    }
}
