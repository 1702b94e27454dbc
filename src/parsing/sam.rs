//! SAM alignment lines.
//!
//! Columns used:
//!
//! | Column | Name  | Use                                       |
//! |--------|-------|-------------------------------------------|
//! | 1      | QNAME | query, with a mate suffix when paired     |
//! | 2      | FLAG  | 0x40 / 0x80 select the `/1` / `/2` suffix |
//! | 3      | RNAME | subject; `*` means unmapped               |
//! | 4      | POS   | 1-based start                             |
//! | 6      | CIGAR | aligned length and reference span         |
//!
//! Header lines (`@HD`, `@SQ`, `@PG`, ...) and unmapped reads yield no record.

use noodles::sam::alignment::record::Flags;

use crate::core::record::Record;
use crate::parsing::cigar::cigar_lengths;
use crate::parsing::{field, parse_field, split_fields, ParseError};

/// Parse a SAM alignment line
///
/// # Errors
///
/// Returns `ParseError::MissingField` if a used column is absent,
/// `ParseError::InvalidNumber` for a non-numeric `POS` or `FLAG`, or
/// `ParseError::InvalidCigar` for an unreadable CIGAR string.
pub fn parse_sam_line(line: &str) -> Result<Option<Record>, ParseError> {
    if line.starts_with('@') {
        return Ok(None);
    }

    let fields = split_fields(line);
    let qname = field(&fields, 0, "QNAME")?;
    let rname = field(&fields, 2, "RNAME")?;

    if rname == "*" {
        return Ok(None);
    }

    let pos: u64 = parse_field(&fields, 3, "POS")?;
    let lengths = cigar_lengths(field(&fields, 5, "CIGAR")?)?;
    let query = mate_name(qname, &fields)?;
    let end = pos.saturating_add(lengths.span).saturating_sub(1);

    Ok(Some(
        Record::new(query, rname)
            .with_length(lengths.aligned)
            .with_range(pos, end),
    ))
}

/// Append `/1` or `/2` to a paired read name unless it already carries one
fn mate_name(qname: &str, fields: &[&str]) -> Result<String, ParseError> {
    if qname.ends_with("/1") || qname.ends_with("/2") {
        return Ok(qname.to_string());
    }

    let flags = Flags::from(parse_field::<u16>(fields, 1, "FLAG")?);
    let name = if flags.is_first_segment() {
        format!("{qname}/1")
    } else if flags.is_last_segment() {
        format!("{qname}/2")
    } else {
        qname.to_string()
    };

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sam_line(qname: &str, flag: u16, rname: &str, pos: u64, cigar: &str) -> String {
        format!("{qname}\t{flag}\t{rname}\t{pos}\t60\t{cigar}\t=\t1\t0\tACGT\tIIII\tAS:i:-3\n")
    }

    #[test]
    fn test_parse_sam_line() {
        let line = sam_line("r1", 0, "G000006925", 1001, "10M2D40M");
        let record = parse_sam_line(&line).unwrap().unwrap();
        assert_eq!(record.query, "r1");
        assert_eq!(record.subject, "G000006925");
        assert_eq!(record.score, None);
        assert_eq!(record.length, Some(50));
        assert_eq!(record.start, Some(1001));
        assert_eq!(record.end, Some(1052));
    }

    #[test]
    fn test_header_lines_skipped() {
        assert!(parse_sam_line("@HD\tVN:1.6\tSO:unsorted\n").unwrap().is_none());
        assert!(parse_sam_line("@SQ\tSN:chr1\tLN:1000\n").unwrap().is_none());
        assert!(parse_sam_line("@PG\tID:bowtie2\n").unwrap().is_none());
    }

    #[test]
    fn test_unmapped_skipped() {
        let line = sam_line("r1", 4, "*", 0, "*");
        assert!(parse_sam_line(&line).unwrap().is_none());
    }

    #[test]
    fn test_end_saturates_at_zero() {
        let record = parse_sam_line(&sam_line("r1", 0, "G1", 0, "*")).unwrap().unwrap();
        assert_eq!(record.length, Some(0));
        assert_eq!(record.start, Some(0));
        assert_eq!(record.end, Some(0));
    }

    #[test]
    fn test_missing_cigar_gives_empty_range() {
        // No reference span: end is one before start
        let record = parse_sam_line(&sam_line("r1", 0, "G1", 5, "*")).unwrap().unwrap();
        assert_eq!(record.length, Some(0));
        assert_eq!(record.start, Some(5));
        assert_eq!(record.end, Some(4));
    }

    #[test]
    fn test_mate_suffix_from_flag() {
        // 0x40 (first segment) with paired/proper/mate-reverse bits
        let record = parse_sam_line(&sam_line("r1", 99, "G1", 1, "5M")).unwrap().unwrap();
        assert_eq!(record.query, "r1/1");

        // 0x80 (last segment)
        let record = parse_sam_line(&sam_line("r1", 147, "G1", 1, "5M")).unwrap().unwrap();
        assert_eq!(record.query, "r1/2");

        // Neither bit
        let record = parse_sam_line(&sam_line("r1", 16, "G1", 1, "5M")).unwrap().unwrap();
        assert_eq!(record.query, "r1");
    }

    #[test]
    fn test_first_segment_wins_when_both_bits_set() {
        let record = parse_sam_line(&sam_line("r1", 192, "G1", 1, "5M")).unwrap().unwrap();
        assert_eq!(record.query, "r1/1");
    }

    #[test]
    fn test_existing_suffix_kept() {
        let record = parse_sam_line(&sam_line("r1/2", 65, "G1", 1, "5M")).unwrap().unwrap();
        assert_eq!(record.query, "r1/2");
    }

    #[test]
    fn test_existing_suffix_skips_flag_parsing() {
        let line = "r1/1\tnot-a-flag\tG1\t1\t60\t5M\t*\t0\t0\tACGTA\tIIIII\n";
        let record = parse_sam_line(line).unwrap().unwrap();
        assert_eq!(record.query, "r1/1");
    }

    #[test]
    fn test_invalid_position() {
        let line = "r1\t0\tG1\tabc\t60\t5M\t*\t0\t0\tACGTA\tIIIII\n";
        assert!(matches!(
            parse_sam_line(line),
            Err(ParseError::InvalidNumber { field: "POS", .. })
        ));
    }

    #[test]
    fn test_invalid_cigar() {
        let line = sam_line("r1", 0, "G1", 1, "5Z");
        assert!(matches!(
            parse_sam_line(&line),
            Err(ParseError::InvalidCigar { .. })
        ));
    }
}
