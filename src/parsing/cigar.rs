//! CIGAR string lengths.
//!
//! Only two numbers are needed downstream: how many bases are aligned
//! (`M`, `=`, `X`) and how much of the reference the alignment covers
//! (aligned bases plus `D` and `N`). Insertions, clips and padding (`I`, `S`,
//! `H`, `P`) consume no reference and are skipped.

use crate::parsing::ParseError;

/// Lengths derived from a CIGAR string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CigarLengths {
    /// Bases covered by `M`, `=` and `X` operations
    pub aligned: u64,
    /// Reference bases consumed: `aligned` plus `D` and `N` operations
    pub span: u64,
}

/// Compute aligned and reference-span lengths from a CIGAR string
///
/// `*` (no CIGAR available) yields zero lengths.
///
/// # Errors
///
/// Returns `ParseError::InvalidCigar` for an unknown operation, a counted
/// operation without a length, or lengths that overflow `u64`.
pub fn cigar_lengths(cigar: &str) -> Result<CigarLengths, ParseError> {
    if cigar == "*" {
        return Ok(CigarLengths::default());
    }

    let mut aligned: u64 = 0;
    let mut skipped: u64 = 0;
    let mut count: Option<u64> = None;

    for c in cigar.chars() {
        if let Some(digit) = c.to_digit(10) {
            let next = count
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(u64::from(digit)))
                .ok_or_else(|| invalid(cigar, "operation length overflows"))?;
            count = Some(next);
            continue;
        }

        match c {
            'M' | '=' | 'X' => aligned = add(cigar, aligned, count, c)?,
            'D' | 'N' => skipped = add(cigar, skipped, count, c)?,
            // Length is irrelevant for these, so it is not validated either
            'I' | 'H' | 'P' | 'S' => {}
            _ => return Err(invalid(cigar, &format!("unknown operation '{c}'"))),
        }
        count = None;
    }

    let span = aligned
        .checked_add(skipped)
        .ok_or_else(|| invalid(cigar, "reference span overflows"))?;

    Ok(CigarLengths { aligned, span })
}

fn add(cigar: &str, total: u64, count: Option<u64>, op: char) -> Result<u64, ParseError> {
    let count = count.ok_or_else(|| invalid(cigar, &format!("operation '{op}' has no length")))?;
    total
        .checked_add(count)
        .ok_or_else(|| invalid(cigar, "operation length overflows"))
}

fn invalid(cigar: &str, reason: &str) -> ParseError {
    ParseError::InvalidCigar {
        cigar: cigar.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths(cigar: &str) -> (u64, u64) {
        let l = cigar_lengths(cigar).unwrap();
        (l.aligned, l.span)
    }

    #[test]
    fn test_match_only() {
        assert_eq!(lengths("150M"), (150, 150));
        assert_eq!(lengths("50M25M"), (75, 75));
        assert_eq!(lengths("10=1X10="), (21, 21));
    }

    #[test]
    fn test_deletions_extend_span_only() {
        assert_eq!(lengths("30M2D20M"), (50, 52));
        assert_eq!(lengths("10M1000N10M5D1M"), (21, 1026));
    }

    #[test]
    fn test_clips_and_insertions_are_ignored() {
        assert_eq!(lengths("5S20M3I20M10H"), (40, 40));
        assert_eq!(lengths("2P8M"), (8, 8));
    }

    #[test]
    fn test_multi_digit_lengths() {
        assert_eq!(lengths("1234M56D"), (1234, 1290));
    }

    #[test]
    fn test_unavailable_cigar() {
        assert_eq!(lengths("*"), (0, 0));
        assert_eq!(lengths(""), (0, 0));
    }

    #[test]
    fn test_unknown_operation() {
        let err = cigar_lengths("10M5Q").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCigar { .. }));
    }

    #[test]
    fn test_counted_operation_without_length() {
        assert!(cigar_lengths("M").is_err());
        assert!(cigar_lengths("10MD").is_err());
        // Uncounted operations may omit the length
        assert_eq!(lengths("S10M"), (10, 10));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert!(cigar_lengths("99999999999999999999M").is_err());
        assert!(cigar_lengths("18446744073709551615M1M").is_err());
    }
}
