//! Kraken/Kraken2 per-read output.
//!
//! ```text
//! C/U  sequence ID  taxonomy ID  length  LCA mapping
//! ```
//!
//! Only classified (`C`) reads map to a taxon; everything else is skipped.

use crate::core::record::Record;
use crate::parsing::{field, split_fields, ParseError};

/// Parse a line of Kraken output into (sequence ID, taxonomy ID)
///
/// # Errors
///
/// Returns `ParseError::MissingField` if a classified line lacks the sequence
/// or taxonomy ID column.
pub fn parse_kraken_line(line: &str) -> Result<Option<Record>, ParseError> {
    let fields = split_fields(line);

    if fields.first() != Some(&"C") {
        return Ok(None);
    }

    let read = field(&fields, 1, "sequence ID")?;
    let taxid = field(&fields, 2, "taxonomy ID")?;

    Ok(Some(Record::new(read, taxid)))
}
