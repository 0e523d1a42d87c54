//! Character masking for partially hiding sensitive text.

use crate::common::char_len;
use crate::error::{TextError, TextResult};
use crate::validator::{is_email, EmailMode};

/// Replace chars in `[start, end)` with `mask`.
///
/// `end` is clamped to the text length; a `start` at or past the end leaves the
/// text unchanged.
pub fn mask_text(text: &str, start: usize, end: usize, mask: char) -> TextResult<String> {
    if start > end {
        return Err(TextError::value_error(
            "start index cannot be greater than end index.",
        ));
    }

    Ok(text
        .chars()
        .enumerate()
        .map(|(i, c)| if (start..end).contains(&i) { mask } else { c })
        .collect())
}

/// Keep the first `keep_start` and last `keep_end` chars, mask the rest.
///
/// Text that is too short to hide anything comes back unchanged.
pub fn mask_middle(text: &str, keep_start: usize, keep_end: usize, mask: char) -> String {
    let length = char_len(text);
    if keep_start.saturating_add(keep_end) >= length {
        return text.to_string();
    }

    let tail = length - keep_end;
    text.chars()
        .enumerate()
        .map(|(i, c)| if i >= keep_start && i < tail { mask } else { c })
        .collect()
}

/// Mask an email's local part except its first char: `john@example.com` ->
/// `j***@example.com`. The domain is left readable.
pub fn mask_email(text: &str, mask: char) -> TextResult<String> {
    let (local, domain) = text
        .split_once('@')
        .filter(|_| is_email(text, EmailMode::Default))
        .ok_or_else(|| {
            TextError::value_error(format!("Input '{text}' is not a valid email address."))
        })?;

    let masked_local = mask_middle(local, 1, 0, mask);
    Ok(format!("{masked_local}@{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_half_open_range() {
        assert_eq!(mask_text("abcdef", 1, 4, '*').unwrap(), "a***ef");
        assert_eq!(mask_text("abcdef", 2, 2, '*').unwrap(), "abcdef");
    }

    #[test]
    fn clamps_end_to_text_length() {
        assert_eq!(mask_text("abcdef", 3, 100, '#').unwrap(), "abc###");
        assert_eq!(mask_text("ab", 5, 9, '*').unwrap(), "ab");
    }

    #[test]
    fn start_after_end_is_value_error() {
        assert!(mask_text("abc", 2, 1, '*').unwrap_err().is_value_error());
    }

    #[test]
    fn masks_by_char_not_byte() {
        assert_eq!(mask_text("héllo", 1, 2, '*').unwrap(), "h*llo");
    }

    #[test]
    fn mask_middle_keeps_both_ends() {
        assert_eq!(mask_middle("4111111111111111", 4, 4, '*'), "4111********1111");
        assert_eq!(mask_middle("secret", 0, 0, '#'), "######");
    }

    #[test]
    fn mask_middle_leaves_short_text() {
        assert_eq!(mask_middle("abcd", 2, 2, '*'), "abcd");
        assert_eq!(mask_middle("abc", 5, 0, '*'), "abc");
        assert_eq!(mask_middle("abc", usize::MAX, 1, '*'), "abc");
    }

    #[test]
    fn masks_email_local_part() {
        assert_eq!(mask_email("john@example.com", '*').unwrap(), "j***@example.com");
        assert_eq!(mask_email("a@b.io", '*').unwrap(), "a@b.io");
        assert_eq!(mask_email("jane.doe@x.org", '#').unwrap(), "j#######@x.org");
    }

    #[test]
    fn rejects_invalid_email() {
        assert!(mask_email("not-an-email", '*').unwrap_err().is_value_error());
        assert!(mask_email("a@b@c.com", '*').unwrap_err().is_value_error());
    }
}
