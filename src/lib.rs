//! # textlib
//!
//! Stateless text utilities: statistics, slugs, truncation, case conversion,
//! padding, masking, stripping, CSV-style parsing, and validation/extraction of
//! emails, URLs, IP and MAC addresses.
//!
//! Every operation is a pure function over its arguments. Regex patterns are
//! compiled once, lazily, and shared read-only, so all functions are safe to
//! call from any thread.
//!
//! Modules:
//! - [analyzer]: counts and word-aligned diffs
//! - [extractor]: emails and links found inside free text
//! - [validator]: whole-string format checks
//! - [formatter]: string-to-string transforms
//! - [parser]: delimited text to header-keyed rows
//! - [config]: layered defaults for optional parameters
//! - [dispatch]: name + JSON arguments entry point for untyped callers

pub mod analyzer;
pub mod common;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod parser;
pub mod patterns;
pub mod validator;

pub use analyzer::{stats, word_diff, TextStats, WordDiffEntry};
pub use config::{load_defaults, Loader, TextConfig};
pub use dispatch::Dispatcher;
pub use error::{TextError, TextResult};
pub use extractor::{extract_emails, extract_urls};
pub use formatter::{
    convert_case, initials, mask_email, mask_middle, mask_text, pad_text, remove_all_whitespace,
    remove_digits, remove_lines_containing, remove_newlines, remove_punctuation, slugify,
    truncate, CaseStyle, PadSide, SlugOptions, TruncateOptions,
};
pub use parser::{parse_csv, CsvRow};
pub use validator::{
    has_digits, is_blank, is_email, is_ip, is_mac_address, is_url, validate_filename, EmailMode,
    IpVersion,
};
