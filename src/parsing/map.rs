use crate::core::record::Record;

/// Parse a line of a simple `query <TAB> subject` map
///
/// Columns after the second are ignored. Lines with fewer than two columns
/// yield no record.
#[must_use]
pub fn parse_map_line(line: &str) -> Option<Record> {
    let mut fields = line.trim_end().splitn(3, '\t');
    let query = fields.next()?;
    let subject = fields.next()?;
    Some(Record::new(query, subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map_line() {
        let record = parse_map_line("read1\tG000005825\n").unwrap();
        assert_eq!(record, Record::new("read1", "G000005825"));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let record = parse_map_line("read1\tG1\tsome\tnotes\n").unwrap();
        assert_eq!(record.subject, "G1");
        assert!(record.score.is_none());
    }

    #[test]
    fn test_single_column_is_skipped() {
        assert!(parse_map_line("read1\n").is_none());
        assert!(parse_map_line("read1\t\n").is_none());
        assert!(parse_map_line("").is_none());
    }
}
