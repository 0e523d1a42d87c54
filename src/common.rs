//! Helpers shared across the analyzer, formatter and parser.

/// Split text into line segments on `\r\n`, `\r` or `\n`.
///
/// A trailing line break does not produce an empty final segment, and the
/// empty string has no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Length in chars, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns the single char in `text`, or `None` when it holds zero or several.
pub fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_line_break_flavor() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_break_adds_no_segment() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
    }

    #[test]
    fn keeps_inner_empty_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn single_char_rejects_other_lengths() {
        assert_eq!(single_char("*"), Some('*'));
        assert_eq!(single_char("é"), Some('é'));
        assert_eq!(single_char(""), None);
        assert_eq!(single_char("**"), None);
    }
}
