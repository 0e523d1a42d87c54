//! Case conversion between snake, constant, kebab, camel and pascal styles.

use crate::error::TextError;
use crate::patterns::{ACRONYM_BOUNDARY, CASE_SEPARATORS, WORD_BOUNDARY};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `hello_world`
    #[default]
    Snake,
    /// `HELLO_WORLD`
    Constant,
    /// `hello-world`
    Kebab,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
}

impl FromStr for CaseStyle {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "snake" => Ok(CaseStyle::Snake),
            "constant" => Ok(CaseStyle::Constant),
            "kebab" => Ok(CaseStyle::Kebab),
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            other => Err(TextError::value_error(format!(
                "Unknown style: '{other}'. Supported: snake, constant, kebab, camel, pascal"
            ))),
        }
    }
}

/// Re-case `text` into `style`.
///
/// Words are found at `_`, `-` and whitespace runs, at lower-to-upper
/// transitions, and where an acronym meets a capitalized word
/// (`HTTPServer` -> `http`, `server`).
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    let words = split_words(text);
    if words.is_empty() {
        return String::new();
    }

    match style {
        CaseStyle::Snake => words.join("_"),
        CaseStyle::Constant => words.join("_").to_uppercase(),
        CaseStyle::Kebab => words.join("-"),
        CaseStyle::Camel => {
            let mut out = words[0].clone();
            out.extend(words[1..].iter().map(|w| capitalize(w)));
            out
        }
        CaseStyle::Pascal => words.iter().map(|w| capitalize(w)).collect(),
    }
}

/// Lowercased words of `text`, empty ones dropped.
fn split_words(text: &str) -> Vec<String> {
    let spaced = ACRONYM_BOUNDARY.replace_all(text, "$1 $2");
    let spaced = WORD_BOUNDARY.replace_all(&spaced, "$1 $2");
    CASE_SEPARATORS
        .split(&spaced)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_acronyms_from_words() {
        assert_eq!(convert_case("HTTPServer", CaseStyle::Snake), "http_server");
        assert_eq!(
            convert_case("parseHTTPResponse", CaseStyle::Kebab),
            "parse-http-response"
        );
    }

    #[test]
    fn converts_between_styles() {
        assert_eq!(convert_case("hello_world", CaseStyle::Pascal), "HelloWorld");
        assert_eq!(convert_case("hello-world", CaseStyle::Camel), "helloWorld");
        assert_eq!(convert_case("helloWorld", CaseStyle::Constant), "HELLO_WORLD");
        assert_eq!(convert_case("Hello World", CaseStyle::Kebab), "hello-world");
        assert_eq!(convert_case("version2Beta", CaseStyle::Snake), "version2_beta");
    }

    #[test]
    fn separator_runs_collapse() {
        assert_eq!(convert_case("__a--b  c__", CaseStyle::Snake), "a_b_c");
    }

    #[test]
    fn nothing_to_convert_gives_empty_string() {
        assert_eq!(convert_case("", CaseStyle::Camel), "");
        assert_eq!(convert_case(" _-_ ", CaseStyle::Pascal), "");
    }

    #[test]
    fn style_parsing() {
        assert_eq!("PASCAL".parse::<CaseStyle>().unwrap(), CaseStyle::Pascal);
        assert!("title".parse::<CaseStyle>().unwrap_err().is_value_error());
    }
}
