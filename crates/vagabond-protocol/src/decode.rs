//! Line decoder.

use crate::escape::unescape;
use crate::record::Record;
use thiserror::Error;

/// Separator between the top-level columns of a record.
pub const FIELD_SEPARATOR: char = ',';

/// Reasons a line could not be decoded into a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line was empty or whitespace only.
    #[error("empty line")]
    Empty,

    /// The line had fewer than the three mandatory columns.
    #[error("expected at least 3 comma-separated columns, found {found}")]
    TooFewFields {
        /// Number of columns present
        found: usize,
    },
}

/// Decode one line of machine-readable output.
///
/// The first three columns are the timestamp, target and type; the remaining
/// columns become [`Record::fields`] after [`unescape`]. A trailing line
/// terminator is ignored.
///
/// # Errors
///
/// Returns a [`DecodeError`] for empty lines and lines with fewer than three
/// columns. Never panics.
pub fn decode_line(line: &str) -> Result<Record, DecodeError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut columns = line.split(FIELD_SEPARATOR);
    let (Some(timestamp), Some(target), Some(kind)) =
        (columns.next(), columns.next(), columns.next())
    else {
        return Err(DecodeError::TooFewFields {
            found: line.split(FIELD_SEPARATOR).count(),
        });
    };

    Ok(Record {
        timestamp: timestamp.to_string(),
        target: target.to_string(),
        kind: kind.to_string(),
        fields: columns.map(unescape).collect(),
    })
}
