//! Untyped entry point for callers holding JSON instead of Rust values.
//!
//! Operations are looked up by name and receive their parameters as a JSON
//! object keyed by snake_case parameter name:
//!
//!     invoke("truncate", {"text": "The quick fox", "max_length": 7})
//!     invoke("is_ip", {"text": "::1", "version": "6"})
//!
//! This is the one place where argument *types* are checked at runtime: a
//! missing parameter or a value of the wrong JSON type is a [`TextError::Type`].
//! Value constraints (negative indices, multi-char fill strings, unknown modes)
//! are [`TextError::Value`], exactly as in the typed API. Optional parameters
//! that are absent or `null` fall back to the dispatcher's [`TextConfig`].

use crate::analyzer::{stats, word_diff};
use crate::config::TextConfig;
use crate::common::single_char;
use crate::error::{TextError, TextResult};
use crate::extractor::{extract_emails, extract_urls};
use crate::formatter::{
    convert_case, initials, mask_email, mask_middle, mask_text, pad_text, remove_all_whitespace,
    remove_digits, remove_lines_containing, remove_newlines, remove_punctuation, slugify,
    truncate, SlugOptions, TruncateOptions,
};
use crate::parser::parse_csv;
use crate::validator::{
    has_digits, is_blank, is_email, is_ip, is_mac_address, is_url, validate_filename,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

type Handler = fn(&Dispatcher, &Args) -> TextResult<Value>;

static OPERATIONS: &[(&str, Handler)] = &[
    ("stats", op_stats),
    ("word_diff", op_word_diff),
    ("extract_emails", op_extract_emails),
    ("extract_urls", op_extract_urls),
    ("is_email", op_is_email),
    ("is_blank", op_is_blank),
    ("validate_filename", op_validate_filename),
    ("is_url", op_is_url),
    ("has_digits", op_has_digits),
    ("is_ip", op_is_ip),
    ("is_mac_address", op_is_mac_address),
    ("slugify", op_slugify),
    ("truncate", op_truncate),
    ("initials", op_initials),
    ("convert_case", op_convert_case),
    ("pad_text", op_pad_text),
    ("mask_text", op_mask_text),
    ("mask_middle", op_mask_middle),
    ("mask_email", op_mask_email),
    ("remove_punctuation", op_remove_punctuation),
    ("remove_newlines", op_remove_newlines),
    ("remove_all_whitespace", op_remove_all_whitespace),
    ("remove_digits", op_remove_digits),
    ("remove_lines_containing", op_remove_lines_containing),
    ("parse_csv", op_parse_csv),
];

/// Runs named operations with JSON arguments, filling gaps from a [`TextConfig`].
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: TextConfig,
}

impl Dispatcher {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// All operation names (sorted)
    pub fn operations() -> Vec<&'static str> {
        let mut names: Vec<_> = OPERATIONS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }

    /// Run `operation` with `args`, which must be a JSON object.
    pub fn invoke(&self, operation: &str, args: &Value) -> TextResult<Value> {
        let (_, handler) = OPERATIONS
            .iter()
            .find(|(name, _)| *name == operation)
            .ok_or_else(|| {
                TextError::value_error(format!("Unknown operation: '{operation}'."))
            })?;

        let args = Args::new(args)?;
        tracing::debug!(operation, params = args.map.len(), "invoking text operation");
        handler(self, &args)
    }
}

/// Borrowed view over a JSON argument object with typed accessors.
struct Args<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Args<'a> {
    fn new(value: &'a Value) -> TextResult<Self> {
        value
            .as_object()
            .map(|map| Args { map })
            .ok_or_else(|| TextError::type_error("Arguments must be a JSON object."))
    }

    /// The value of `name`, treating `null` like an absent key.
    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|value| !value.is_null())
    }

    fn missing(name: &str) -> TextError {
        TextError::type_error(format!("Missing required argument '{name}'."))
    }

    fn str(&self, name: &str) -> TextResult<&'a str> {
        self.opt_str(name)?.ok_or_else(|| Self::missing(name))
    }

    fn opt_str(&self, name: &str) -> TextResult<Option<&'a str>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(TextError::type_error(format!(
                "Input '{name}' must be a string."
            ))),
        }
    }

    fn opt_bool(&self, name: &str) -> TextResult<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(TextError::type_error(format!(
                "Input '{name}' must be a boolean."
            ))),
        }
    }

    fn opt_char(&self, name: &str) -> TextResult<Option<char>> {
        self.opt_str(name)?
            .map(|s| {
                single_char(s).ok_or_else(|| {
                    TextError::value_error(format!(
                        "Input '{name}' must be exactly one character."
                    ))
                })
            })
            .transpose()
    }

    fn opt_parse<T: FromStr<Err = TextError>>(&self, name: &str) -> TextResult<Option<T>> {
        self.opt_str(name)?.map(|s| s.parse::<T>()).transpose()
    }

    fn int(&self, name: &str) -> TextResult<i64> {
        let value = self.get(name).ok_or_else(|| Self::missing(name))?;
        value.as_i64().ok_or_else(|| {
            TextError::type_error(format!("Input '{name}' must be an integer."))
        })
    }

    /// A required integer that must be zero or positive.
    fn index(&self, name: &str) -> TextResult<usize> {
        usize::try_from(self.int(name)?).map_err(|_| {
            TextError::value_error(format!("Input '{name}' must be zero or positive."))
        })
    }
}

fn to_json<T: Serialize>(value: T) -> TextResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| TextError::value_error(format!("Result could not be encoded: {e}")))
}

fn op_stats(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    to_json(stats(args.str("text")?))
}

fn op_word_diff(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    let diff = word_diff(
        args.str("left")?,
        args.str("right")?,
        args.opt_str("separators")?,
    )?;
    to_json(diff)
}

fn op_extract_emails(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let mode = args.opt_parse("mode")?.unwrap_or(d.config.email.mode);
    to_json(extract_emails(text, mode))
}

fn op_extract_urls(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    to_json(extract_urls(args.str("text")?))
}

fn op_is_email(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let mode = args.opt_parse("mode")?.unwrap_or(d.config.email.mode);
    Ok(Value::Bool(is_email(text, mode)))
}

fn op_is_blank(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::Bool(is_blank(args.str("text")?)))
}

fn op_validate_filename(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    validate_filename(args.str("text")?)?;
    Ok(Value::Bool(true))
}

fn op_is_url(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::Bool(is_url(args.str("text")?)))
}

fn op_has_digits(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::Bool(has_digits(args.str("text")?)))
}

fn op_is_ip(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let version = args.opt_parse("version")?.unwrap_or(d.config.ip.version);
    Ok(Value::Bool(is_ip(text, version)))
}

fn op_is_mac_address(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::Bool(is_mac_address(args.str("text")?)))
}

fn op_slugify(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let defaults = d.config.slug_options();
    let options = SlugOptions {
        lowercase: args.opt_bool("lowercase")?.unwrap_or(defaults.lowercase),
        separator: match args.opt_char("sep")? {
            Some(sep) => sep,
            None => args.opt_char("separator")?.unwrap_or(defaults.separator),
        },
    };
    Ok(Value::String(slugify(text, &options)?))
}

fn op_truncate(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let max_length = usize::try_from(args.int("max_length")?).map_err(|_| {
        TextError::value_error("Input 'max_length' must be a positive integer.")
    })?;
    let defaults = d.config.truncate_options();
    let options = TruncateOptions {
        suffix: args
            .opt_str("suffix")?
            .map(str::to_string)
            .unwrap_or(defaults.suffix),
        preserve_words: args
            .opt_bool("preserve_words")?
            .unwrap_or(defaults.preserve_words),
        boundaries: args
            .opt_str("boundaries")?
            .map(str::to_string)
            .unwrap_or(defaults.boundaries),
    };
    Ok(Value::String(truncate(text, max_length, &options)?))
}

fn op_initials(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::String(initials(args.str("text")?)))
}

fn op_convert_case(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let style = args.opt_parse("mode")?.unwrap_or(d.config.case.style);
    Ok(Value::String(convert_case(text, style)))
}

fn op_pad_text(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    // A negative width never pads, same as any width below the text length
    let width = usize::try_from(args.int("width")?).unwrap_or(0);
    let fill = args.opt_char("fill_char")?.unwrap_or(d.config.pad.fill);
    let side = args.opt_parse("side")?.unwrap_or(d.config.pad.side);
    Ok(Value::String(pad_text(text, width, fill, side)))
}

fn op_mask_text(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let start = args.index("start")?;
    let end = args.index("end")?;
    let mask = args.opt_char("mask_char")?.unwrap_or(d.config.mask.fill);
    Ok(Value::String(mask_text(text, start, end, mask)?))
}

fn op_mask_middle(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let keep_start = args.index("keep_start")?;
    let keep_end = args.index("keep_end")?;
    let mask = args.opt_char("mask_char")?.unwrap_or(d.config.mask.fill);
    Ok(Value::String(mask_middle(text, keep_start, keep_end, mask)))
}

fn op_mask_email(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let mask = args.opt_char("mask_char")?.unwrap_or(d.config.mask.fill);
    Ok(Value::String(mask_email(text, mask)?))
}

fn op_remove_punctuation(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::String(remove_punctuation(args.str("text")?)))
}

fn op_remove_newlines(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let replace_with = args
        .opt_str("replace_with")?
        .unwrap_or(d.config.newlines.replace_with.as_str());
    Ok(Value::String(remove_newlines(text, replace_with)))
}

fn op_remove_all_whitespace(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::String(remove_all_whitespace(args.str("text")?)))
}

fn op_remove_digits(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    Ok(Value::String(remove_digits(args.str("text")?)))
}

fn op_remove_lines_containing(_: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let target = args.str("target")?;
    Ok(Value::String(remove_lines_containing(text, target)))
}

fn op_parse_csv(d: &Dispatcher, args: &Args) -> TextResult<Value> {
    let text = args.str("text")?;
    let separator = args
        .opt_str("separator")?
        .unwrap_or(d.config.csv.separator.as_str());
    to_json(parse_csv(text, separator)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invoke(operation: &str, args: Value) -> TextResult<Value> {
        Dispatcher::default().invoke(operation, &args)
    }

    #[test]
    fn lists_every_operation_sorted() {
        let names = Dispatcher::operations();
        assert_eq!(names.len(), OPERATIONS.len());
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(names.contains(&"parse_csv"));
    }

    #[test]
    fn wrong_json_type_is_type_error() {
        let err = invoke("is_email", json!({"text": 123})).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.message(), "Input 'text' must be a string.");
    }

    #[test]
    fn missing_argument_is_type_error() {
        assert!(invoke("stats", json!({})).unwrap_err().is_type_error());
        assert!(invoke("stats", json!(["text"])).unwrap_err().is_type_error());
    }

    #[test]
    fn unknown_operation_is_value_error() {
        assert!(invoke("reverse", json!({"text": "a"}))
            .unwrap_err()
            .is_value_error());
    }

    #[test]
    fn optional_arguments_fall_back_to_config() {
        assert_eq!(
            invoke("pad_text", json!({"text": "ab", "width": 4})).unwrap(),
            json!("ab__")
        );
        assert_eq!(
            invoke("pad_text", json!({"text": "ab", "width": 4, "side": null})).unwrap(),
            json!("ab__")
        );
    }

    #[test]
    fn slugify_takes_sep_before_separator_alias() {
        assert_eq!(
            invoke("slugify", json!({"text": "a b", "sep": "_", "separator": "."})).unwrap(),
            json!("a_b")
        );
        assert!(invoke("slugify", json!({"text": "a b", "sep": "ab"}))
            .unwrap_err()
            .is_value_error());
    }

    #[test]
    fn multi_char_fill_is_value_error() {
        let err = invoke("pad_text", json!({"text": "ab", "width": 4, "fill_char": "--"}))
            .unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn negative_indices_are_value_errors() {
        let err = invoke("mask_text", json!({"text": "abc", "start": -1, "end": 2})).unwrap_err();
        assert!(err.is_value_error());
        let err = invoke("truncate", json!({"text": "abc", "max_length": -3})).unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn fractional_index_is_type_error() {
        let err = invoke("mask_text", json!({"text": "abc", "start": 0.5, "end": 2})).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn validate_filename_returns_true_or_error() {
        assert_eq!(
            invoke("validate_filename", json!({"text": "notes.md"})).unwrap(),
            json!(true)
        );
        assert!(invoke("validate_filename", json!({"text": "AUX"}))
            .unwrap_err()
            .is_value_error());
    }
}
