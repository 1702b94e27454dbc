//! Centrifuge per-read classification output.
//!
//! ```text
//! readID  seqID  taxID  score  2ndBestScore  hitLength  queryLength  numMatches
//! ```
//!
//! The file starts with a header row beginning with `readID`.

use crate::core::record::Record;
use crate::parsing::{field, parse_field, split_fields, ParseError};

/// Parse a line of Centrifuge output into (readID, seqID, score, hitLength)
///
/// # Errors
///
/// Returns `ParseError::MissingField` if a column up to `hitLength` is absent,
/// or `ParseError::InvalidNumber` if `score` or `hitLength` is not an integer.
pub fn parse_centrifuge_line(line: &str) -> Result<Option<Record>, ParseError> {
    if line.starts_with("readID") {
        return Ok(None);
    }

    let fields = split_fields(line);
    let read = field(&fields, 0, "readID")?;
    let seq = field(&fields, 1, "seqID")?;
    let score: i64 = parse_field(&fields, 3, "score")?;
    let hit_length: u64 = parse_field(&fields, 5, "hitLength")?;

    #[allow(clippy::cast_precision_loss)] // Centrifuge scores are far below 2^52
    let score = score as f64;

    Ok(Some(
        Record::new(read, seq)
            .with_score(score)
            .with_length(hit_length),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_centrifuge_line() {
        let line = "read1\tNZ_CP009072.1\t562\t4225\t0\t80\t150\t1\n";
        let record = parse_centrifuge_line(line).unwrap().unwrap();
        assert_eq!(record.query, "read1");
        assert_eq!(record.subject, "NZ_CP009072.1");
        assert_eq!(record.score, Some(4225.0));
        assert_eq!(record.length, Some(80));
        assert!(record.start.is_none());
    }

    #[test]
    fn test_header_skipped() {
        let header = "readID\tseqID\ttaxID\tscore\t2ndBestScore\thitLength\tqueryLength\tnumMatches\n";
        assert!(parse_centrifuge_line(header).unwrap().is_none());
    }

    #[test]
    fn test_unclassified_row_is_still_a_record() {
        let line = "read2\tunclassified\t0\t0\t0\t0\t150\t1\n";
        let record = parse_centrifuge_line(line).unwrap().unwrap();
        assert_eq!(record.subject, "unclassified");
    }

    #[test]
    fn test_non_integer_score() {
        let line = "read1\tseq\t562\t42.5\t0\t80\t150\t1\n";
        assert!(matches!(
            parse_centrifuge_line(line),
            Err(ParseError::InvalidNumber { field: "score", .. })
        ));
    }
}
