//! Pull emails and links out of free text.
//!
//! Matches are returned left to right, non-overlapping, duplicates included.

use crate::patterns;
use crate::validator::EmailMode;

/// Every email-shaped substring of `text` under the grammar of `mode`.
pub fn extract_emails(text: &str, mode: EmailMode) -> Vec<String> {
    mode.pattern(false)
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every `http://` or `https://` link in `text`.
pub fn extract_urls(text: &str) -> Vec<String> {
    patterns::URL_IN_TEXT
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_emails_in_order_with_duplicates() {
        let text = "Contact bob@example.com or ALICE@Example.org; cc bob@example.com.";
        assert_eq!(
            extract_emails(text, EmailMode::Default),
            vec!["bob@example.com", "ALICE@Example.org", "bob@example.com"]
        );
    }

    #[test]
    fn no_emails_yields_empty_list() {
        assert!(extract_emails("nothing to see here @ all", EmailMode::Default).is_empty());
    }

    #[test]
    fn rfc5322_mode_picks_up_quoted_local_parts() {
        let text = r#"write to "j..d"@example.com please"#;
        assert_eq!(
            extract_emails(text, EmailMode::Rfc5322),
            vec![r#""j..d"@example.com"#]
        );
        assert_eq!(
            extract_emails(text, EmailMode::Default),
            Vec::<String>::new()
        );
    }

    #[test]
    fn finds_urls_with_paths_and_queries() {
        let text = "See https://www.rust-lang.org/learn?x=1 and http://example.com, or ftp://nope.org";
        assert_eq!(
            extract_urls(text),
            vec!["https://www.rust-lang.org/learn?x=1", "http://example.com"]
        );
    }
}
