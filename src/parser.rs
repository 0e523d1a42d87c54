//! CSV-like parsing into header-keyed rows.
//!
//! This is deliberately simple delimited-text splitting: no quoting, no escapes.
//! The first line is the header; rows whose cell count differs from the
//! header's are skipped.

use crate::common::split_lines;
use crate::error::{TextError, TextResult};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data row, keyed by header name in header order.
///
/// Duplicate header names share a single entry: it keeps the position of the
/// first occurrence and the value of the last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    cells: Vec<(String, String)>,
}

impl CsvRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `header` to `value`, overwriting an earlier value for the same header.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        let header = header.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == header) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = CsvRow::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}

impl Serialize for CsvRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parse delimited text into rows.
///
/// The text is trimmed first; fewer than two lines (header plus data) gives no
/// rows. Every cell is trimmed of surrounding whitespace.
pub fn parse_csv(text: &str, separator: &str) -> TextResult<Vec<CsvRow>> {
    if separator.is_empty() {
        return Err(TextError::value_error(
            "Input 'separator' must not be empty.",
        ));
    }

    let lines = split_lines(text.trim());
    if lines.len() < 2 {
        return Ok(Vec::new());
    }

    let header = split_cells(lines[0], separator);
    let rows = lines[1..]
        .iter()
        .enumerate()
        .filter_map(|(offset, line)| {
            let values = split_cells(line, separator);
            if values.len() != header.len() {
                tracing::trace!(
                    line = offset + 2,
                    expected = header.len(),
                    found = values.len(),
                    "dropping row with mismatched cell count"
                );
                return None;
            }
            Some(header.iter().copied().zip(values).collect::<CsvRow>())
        })
        .collect();

    Ok(rows)
}

fn split_cells<'a>(line: &'a str, separator: &str) -> Vec<&'a str> {
    line.split(separator).map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> CsvRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn parses_header_and_rows() {
        let rows = parse_csv("name, age\n Ada , 36\nAlan,41\n", ",").unwrap();
        assert_eq!(
            rows,
            vec![
                row(&[("name", "Ada"), ("age", "36")]),
                row(&[("name", "Alan"), ("age", "41")]),
            ]
        );
    }

    #[test]
    fn drops_rows_with_wrong_cell_count() {
        let rows = parse_csv("a,b\n1,2\n3", ",").unwrap();
        assert_eq!(rows, vec![row(&[("a", "1"), ("b", "2")])]);
    }

    #[test]
    fn header_only_gives_no_rows() {
        assert!(parse_csv("a,b", ",").unwrap().is_empty());
        assert!(parse_csv("  \n a,b \n ", ",").unwrap().is_empty());
        assert!(parse_csv("", ",").unwrap().is_empty());
    }

    #[test]
    fn custom_separator() {
        let rows = parse_csv("x;y\r\n1;2", ";").unwrap();
        assert_eq!(rows[0].get("x"), Some("1"));
        assert_eq!(rows[0].get("y"), Some("2"));
    }

    #[test]
    fn duplicate_headers_keep_last_value_in_first_position() {
        let rows = parse_csv("k,v,k\n1,2,3", ",").unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].headers().collect::<Vec<_>>(), vec!["k", "v"]);
        assert_eq!(rows[0].get("k"), Some("3"));
    }

    #[test]
    fn empty_separator_is_value_error() {
        assert!(parse_csv("a\nb", "").unwrap_err().is_value_error());
    }
}
