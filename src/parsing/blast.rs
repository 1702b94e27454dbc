//! BLAST tabular output (`-outfmt 6`, "b6o").
//!
//! Standard columns:
//!
//! ```text
//! qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore
//! ```
//!
//! Hits on the minus strand report `sstart > send`; the range is normalized so
//! that `start <= end`.

use crate::core::record::Record;
use crate::parsing::{field, parse_field, split_fields, ParseError};

/// Parse a line of BLAST tabular output
///
/// # Errors
///
/// Returns `ParseError::MissingField` if the line has fewer than 12 columns, or
/// `ParseError::InvalidNumber` if `length`, `sstart`, `send` or `bitscore` is
/// not a number.
pub fn parse_b6o_line(line: &str) -> Result<Option<Record>, ParseError> {
    let fields = split_fields(line);

    let qseqid = field(&fields, 0, "qseqid")?;
    let sseqid = field(&fields, 1, "sseqid")?;
    let length: u64 = parse_field(&fields, 3, "length")?;
    let bitscore: f64 = parse_field(&fields, 11, "bitscore")?;
    let sstart: u64 = parse_field(&fields, 8, "sstart")?;
    let send: u64 = parse_field(&fields, 9, "send")?;

    let (start, end) = if sstart <= send {
        (sstart, send)
    } else {
        (send, sstart)
    };

    Ok(Some(
        Record::new(qseqid, sseqid)
            .with_score(bitscore)
            .with_length(length)
            .with_range(start, end),
    ))
}
