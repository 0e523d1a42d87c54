//! Compiled regex constants
//!
//! Every pattern is compiled once on first use through `once_cell::sync::Lazy`
//! and shared read-only afterwards. The email grammars are assembled from the
//! same fragments for the anchored (validation) and unanchored (extraction)
//! variants so the two can never drift apart.

use once_cell::sync::Lazy;
use regex::Regex;

/// One dot-free run of the unquoted local part
const LOCAL_ATOM: &str = r"[a-z0-9!#$%&'*+/=?^_`{|}~\-]+";

/// Alphanumeric label, hyphens only inside
const DOMAIN_LABEL: &str = r"[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?";

/// Quoted local part, e.g. `"john doe"`
const QUOTED_LOCAL: &str =
    r#""(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*""#;

/// Bracketed domain literal: an IPv4 literal or a `tag:content` address literal
const DOMAIN_LITERAL: &str = concat!(
    r"\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
    r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?",
    r"|[a-z0-9\-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)",
    r"\]"
);

fn default_email_body() -> String {
    format!(r"{LOCAL_ATOM}(?:\.{LOCAL_ATOM})*@(?:{DOMAIN_LABEL}\.)+{DOMAIN_LABEL}")
}

fn rfc5322_email_body() -> String {
    format!(
        r"(?:{LOCAL_ATOM}(?:\.{LOCAL_ATOM})*|{QUOTED_LOCAL})@(?:(?:{DOMAIN_LABEL}\.)+{DOMAIN_LABEL}|{DOMAIN_LITERAL})"
    )
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

pub static DEFAULT_EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(&format!("(?i){}", default_email_body())));

pub static DEFAULT_EMAIL_ANCHORED: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\A(?:{})\z", default_email_body())));

pub static RFC5322_EMAIL: Lazy<Regex> =
    Lazy::new(|| compile(&format!("(?i){}", rfc5322_email_body())));

pub static RFC5322_EMAIL_ANCHORED: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\A(?:{})\z", rfc5322_email_body())));

/// `http(s)://` links embedded in free text
pub static URL_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"https?://(?:www\.)?[\-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,63}\b",
        r"[\-a-zA-Z0-9()@:%_+.~#?&/=]*"
    ))
});

/// A whole string that is a single `http(s)://` URL
pub static URL_ANCHORED: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"(?i)\Ahttps?://",
        r"(?:(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])\.?",
        r"|localhost",
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)\z"
    ))
});

/// Six hex pairs joined consistently by `:` or by `-`
pub static MAC_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\A(?:(?:[0-9a-f]{2}:){5}|(?:[0-9a-f]{2}-){5})[0-9a-f]{2}\z")
});

pub static DIGIT: Lazy<Regex> = Lazy::new(|| compile(r"\d"));

/// `HTTPServer` -> `HTTP Server`
pub static ACRONYM_BOUNDARY: Lazy<Regex> = Lazy::new(|| compile(r"(\p{Lu})(\p{Lu}\p{Ll})"));

/// `helloWorld` -> `hello World`, `v2Beta` -> `v2 Beta`
pub static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| compile(r"([\p{Ll}\d])(\p{Lu})"));

pub static CASE_SEPARATORS: Lazy<Regex> = Lazy::new(|| compile(r"[_\-\s]+"));
