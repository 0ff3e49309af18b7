//! Minimal flat-CSV codec
//!
//! Parses flat CSV text into ordered field-name/value rows and serializes
//! rows back to text. The format is deliberately minimal: cells are split on
//! the comma character with no quoting or escaping support, and there is no
//! fail path - a ragged row zips against the header positionally, missing
//! cells become empty strings and extra cells are dropped. The domain's field
//! values are assumed not to contain commas or line breaks; this codec must
//! not be silently upgraded to a quoting CSV format, because exported bytes
//! are part of the data contract with the upstream files.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::FlatRecord;

/// One parsed CSV row: field names zipped to cell values, in header order
///
/// Field order matters - serialization emits the first row's field names as
/// the header. Lookups are linear, which is fine at catalog scale (a row has
/// at most a dozen fields).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Get a field value by name, `None` if the row has no such field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Append a field, keeping insertion order
    pub fn push(&mut self, name: String, value: String) {
        self.fields.push((name, value));
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Row {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parse flat CSV text into rows
///
/// The first line is the header and defines field names in order; every
/// subsequent line is split on `,`, each cell trimmed of surrounding
/// whitespace, and zipped against the header names positionally. A row with
/// fewer cells than headers gets empty strings for the missing fields.
///
/// There is no error path. Embedded commas or quoting produce misaligned
/// fields rather than a failure.
pub fn parse(text: &str) -> Vec<Row> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = cells.get(i).map(|cell| cell.trim()).unwrap_or("");
                    (header.to_string(), value.to_string())
                })
                .collect()
        })
        .collect()
}

/// Serialize rows back to flat CSV text
///
/// The first row's field names become the header; every row (including later
/// ones with different fields) emits values in that fixed order, substituting
/// the empty string for absent fields. Values are joined by `,` with no
/// escaping, rows by `\n` with no trailing newline. An empty input serializes
/// to empty text.
pub fn serialize(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.field_names().collect();

    let mut out = vec![headers.join(",")];
    for row in rows {
        let line = headers
            .iter()
            .map(|header| row.get(header).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(",");
        out.push(line);
    }
    out.join("\n")
}

/// Parse flat CSV text directly into typed records
///
/// Header names that match a record field populate it; unmatched headers are
/// ignored and unmatched fields stay empty.
pub fn parse_records<R: FlatRecord>(text: &str) -> Vec<R> {
    parse(text)
        .iter()
        .map(|row| {
            let mut record = R::default();
            for name in R::FIELDS {
                if let Some(value) = row.get(name) {
                    // Names come from FIELDS, so the set cannot fail.
                    let _ = record.set_field(name, value.to_string());
                }
            }
            record
        })
        .collect()
}

/// Serialize typed records to flat CSV text in declared field order
pub fn serialize_records<R: FlatRecord>(records: &[R]) -> String {
    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            R::FIELDS
                .iter()
                .map(|name| {
                    let value = record.field(name).unwrap_or("");
                    (name.to_string(), value.to_string())
                })
                .collect()
        })
        .collect();
    serialize(&rows)
}
