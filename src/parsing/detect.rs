use crate::core::types::{AlignFormat, FormatError};

/// Infer the record format from the first line of a file
///
/// Checks, first match wins:
///
/// 1. first whitespace-delimited token is `@HD` → SAM (header)
/// 2. exactly 2 tab-separated columns → map
/// 3. 12+ columns with columns 4-10 numeric → b6o
/// 4. 11+ columns with columns 2, 4 and 5 numeric → SAM (alignment line)
///
/// Kraken and Centrifuge output is never inferred; those formats must be
/// requested explicitly.
///
/// # Errors
///
/// Returns `FormatError::Undetermined` when none of the checks match.
pub fn infer_format(line: &str) -> Result<AlignFormat, FormatError> {
    if line.split_whitespace().next() == Some("@HD") {
        return Ok(AlignFormat::Sam);
    }

    let row: Vec<&str> = line.trim_end().split('\t').collect();

    if row.len() == 2 {
        return Ok(AlignFormat::Map);
    }

    if row.len() >= 12 && row[3..10].iter().all(|f| is_digits(f)) {
        return Ok(AlignFormat::B6o);
    }

    if row.len() >= 11 && [1, 3, 4].iter().all(|&i| is_digits(row[i])) {
        return Ok(AlignFormat::Sam);
    }

    Err(FormatError::Undetermined)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
