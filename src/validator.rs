//! Whole-string format checks
//!
//! Predicates answer `false` for well-formed input that merely doesn't match;
//! only [`validate_filename`] reports failures as errors, one message per rule.

use crate::common::char_len;
use crate::error::{TextError, TextResult};
use crate::patterns;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Which email grammar to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailMode {
    /// Dot-atom local part and hostname domain
    #[default]
    Default,
    /// Adds quoted local parts and bracketed domain literals
    Rfc5322,
}

impl EmailMode {
    pub(crate) fn pattern(self, anchored: bool) -> &'static Regex {
        match (self, anchored) {
            (EmailMode::Default, false) => &patterns::DEFAULT_EMAIL,
            (EmailMode::Default, true) => &patterns::DEFAULT_EMAIL_ANCHORED,
            (EmailMode::Rfc5322, false) => &patterns::RFC5322_EMAIL,
            (EmailMode::Rfc5322, true) => &patterns::RFC5322_EMAIL_ANCHORED,
        }
    }
}

impl FromStr for EmailMode {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(EmailMode::Default),
            "rfc5322" => Ok(EmailMode::Rfc5322),
            other => Err(TextError::value_error(format!(
                "Unknown mode: '{other}'. Available modes are 'default' and 'rfc5322'."
            ))),
        }
    }
}

/// Address family accepted by [`is_ip`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpVersion {
    #[default]
    #[serde(rename = "4")]
    V4,
    #[serde(rename = "6")]
    V6,
    #[serde(rename = "any")]
    Any,
}

impl FromStr for IpVersion {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "4" => Ok(IpVersion::V4),
            "6" => Ok(IpVersion::V6),
            "any" => Ok(IpVersion::Any),
            other => Err(TextError::value_error(format!(
                "Unknown version: '{other}'. Supported: '4', '6', 'any'."
            ))),
        }
    }
}

const FORBIDDEN_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const MAX_FILENAME_LENGTH: usize = 255;

pub fn is_email(text: &str, mode: EmailMode) -> bool {
    mode.pattern(true).is_match(text)
}

/// True for the empty string and strings made only of whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Check that `name` is a portable filename.
///
/// Rejects names that are empty or longer than 255 chars, contain one of
/// `< > : " / \ | ? *` or a control character, use a reserved device name as
/// their stem (`CON`, `COM1`, `lpt9.txt`, ...), or end with a space or period.
pub fn validate_filename(name: &str) -> TextResult<()> {
    let length = char_len(name);
    if length == 0 || length > MAX_FILENAME_LENGTH {
        return Err(TextError::value_error(format!(
            "Filename length must be between 1 and {MAX_FILENAME_LENGTH} characters (got {length})."
        )));
    }

    if let Some(c) = name
        .chars()
        .find(|c| FORBIDDEN_FILENAME_CHARS.contains(c) || (*c as u32) < 32)
    {
        return Err(TextError::value_error(format!(
            "Filename contains an invalid character: {c:?}."
        )));
    }

    let stem = name.split('.').next().unwrap_or_default().to_uppercase();
    if RESERVED_DEVICE_NAMES.contains(&stem.as_str()) {
        return Err(TextError::value_error(format!(
            "Filename uses the reserved device name '{stem}'."
        )));
    }

    if name.ends_with(' ') || name.ends_with('.') {
        return Err(TextError::value_error(
            "Filename cannot end with a space or a period.",
        ));
    }

    Ok(())
}

/// True when the trimmed text is a single `http://` or `https://` URL.
pub fn is_url(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && patterns::URL_ANCHORED.is_match(text)
}

pub fn has_digits(text: &str) -> bool {
    patterns::DIGIT.is_match(text)
}

/// Parse-based address check; malformed input is simply `false`.
pub fn is_ip(text: &str, version: IpVersion) -> bool {
    let v4 = || text.parse::<Ipv4Addr>().is_ok();
    let v6 = || text.parse::<Ipv6Addr>().is_ok();
    match version {
        IpVersion::V4 => v4(),
        IpVersion::V6 => v6(),
        IpVersion::Any => v4() || v6(),
    }
}

pub fn is_mac_address(text: &str) -> bool {
    patterns::MAC_ADDRESS.is_match(text)
}
