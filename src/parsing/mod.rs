//! Line parsers for alignment and classification files.
//!
//! Every parser takes one raw line and returns:
//!
//! - `Ok(Some(record))` for a usable alignment or classification
//! - `Ok(None)` for lines that carry nothing to map (headers, unmapped reads,
//!   unclassified reads, short map lines)
//! - `Err(ParseError)` for lines that claim to be records but are malformed
//!   (missing columns, non-numeric coordinates, broken CIGAR strings)
//!
//! ## Supported Formats
//!
//! | Format     | Query  | Subject | Skipped lines                  |
//! |------------|--------|---------|--------------------------------|
//! | map        | col 1  | col 2   | fewer than 2 columns           |
//! | b6o        | qseqid | sseqid  | none                           |
//! | sam        | QNAME  | RNAME   | `@` headers, `RNAME == *`      |
//! | kraken     | col 2  | col 3   | status other than `C`          |
//! | centrifuge | readID | seqID   | the `readID` header            |
//!
//! ## Example
//!
//! ```rust
//! use aln_chunker::core::types::AlignFormat;
//! use aln_chunker::parsing::{detect::infer_format, parse_line};
//!
//! let line = "read1\t83\tchr1\t100\t60\t50M\t=\t300\t250\tACGT\tIIII\n";
//! let format = infer_format(line).unwrap();
//! assert_eq!(format, AlignFormat::Sam);
//!
//! let record = parse_line(format, line).unwrap().unwrap();
//! assert_eq!(record.query, "read1/1");
//! assert_eq!(record.end, Some(149));
//! ```

use std::str::FromStr;
use thiserror::Error;

use crate::core::record::Record;
use crate::core::types::AlignFormat;

pub mod blast;
pub mod centrifuge;
pub mod cigar;
pub mod detect;
pub mod kraken;
pub mod map;
pub mod sam;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing {field} (column {column}, line has {found} columns)")]
    MissingField {
        field: &'static str,
        column: usize,
        found: usize,
    },

    #[error("Invalid {field} value: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid CIGAR string '{cigar}': {reason}")]
    InvalidCigar { cigar: String, reason: String },
}

/// Parse one line with the parser for `format`
///
/// # Errors
///
/// Returns a `ParseError` if the line looks like a record of `format` but a
/// required column is missing or malformed.
pub fn parse_line(format: AlignFormat, line: &str) -> Result<Option<Record>, ParseError> {
    match format {
        AlignFormat::Map => Ok(map::parse_map_line(line)),
        AlignFormat::B6o => blast::parse_b6o_line(line),
        AlignFormat::Sam => sam::parse_sam_line(line),
        AlignFormat::Kraken => kraken::parse_kraken_line(line),
        AlignFormat::Centrifuge => centrifuge::parse_centrifuge_line(line),
    }
}

/// Split a line into tab-separated columns, ignoring trailing whitespace
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.trim_end().split('\t').collect()
}

/// Get a required column (0-based index, reported 1-based)
pub(crate) fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    fields.get(index).copied().ok_or(ParseError::MissingField {
        field: name,
        column: index + 1,
        found: fields.len(),
    })
}

/// Get a required column and parse it as a number
pub(crate) fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    name: &'static str,
) -> Result<T, ParseError> {
    let value = field(fields, index, name)?;
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field: name,
        value: value.to_string(),
    })
}
