//! CSV tokenizing and raw row records
//!
//! Published sheet exports arrive as CSV text. This is deliberately not a
//! general CSV library: it covers exactly what the exports produce. `,`
//! delimiters, `"`-quoted fields with `""` escapes, embedded delimiters
//! and newlines inside quotes, LF or CRLF record ends.

use std::collections::HashMap;

use crate::normalize::normalize_number;
use crate::{Error, Result};

/// One data row keyed by header name.
///
/// Headers are kept verbatim (some carry leading spaces); when the sheet
/// repeats a header the rightmost column wins, which is how the observed
/// exports duplicate their fiscal columns.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Build a row from explicit header/cell pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> RawRow
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        RawRow {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw cell under an exact header, untrimmed.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    /// First alias with a non-blank value, trimmed. Empty when none has.
    pub fn text(&self, aliases: &[impl AsRef<str>]) -> String {
        self.optional_text(aliases).unwrap_or_default()
    }

    /// Like [`text`](RawRow::text), with a sentinel for the blank case.
    pub fn text_or(&self, aliases: &[impl AsRef<str>], default: &str) -> String {
        self.optional_text(aliases)
            .unwrap_or_else(|| default.to_string())
    }

    /// First alias with a non-blank value, trimmed.
    pub fn optional_text(&self, aliases: &[impl AsRef<str>]) -> Option<String> {
        aliases.iter().find_map(|alias| {
            self.cells
                .get(alias.as_ref())
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
    }

    /// First alias resolved through the numeric normalizer; a missing or
    /// blank cell is 0.
    pub fn number(&self, aliases: &[impl AsRef<str>]) -> f64 {
        self.optional_text(aliases)
            .map(|v| normalize_number(&v))
            .unwrap_or(0.0)
    }
}

/// Split CSV text into records of fields.
pub fn parse_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => record.push(std::mem::take(&mut field)),
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                _ => field.push(c),
            }
        }
    }

    // Final record when the input has no trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

/// Parse CSV text into header-keyed rows.
///
/// The first record is the header row; records whose cells are all blank
/// are dropped. Fails with [`Error::Sheet`] when there is no header row
/// at all.
pub fn parse_rows(input: &str) -> Result<Vec<RawRow>> {
    let mut records = parse_records(input).into_iter();
    let headers = records
        .next()
        .ok_or_else(|| Error::Sheet("sheet export has no header row".to_string()))?;

    let rows = records
        .filter(|record| record.iter().any(|cell| !cell.trim().is_empty()))
        .map(|record| {
            let mut cells = HashMap::new();
            for (header, cell) in headers.iter().zip(record) {
                // Rightmost duplicate header wins.
                cells.insert(header.clone(), cell);
            }
            RawRow { cells }
        })
        .collect();

    Ok(rows)
}
