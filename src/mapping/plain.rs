use std::collections::HashMap;

use crate::core::types::AlignFormat;
use crate::mapping::{Mapper, QueryMap};
use crate::parsing::{parse_line, ParseError};

/// Mapper that keeps only (query, subject) pairs
///
/// Scores and coordinates are dropped. Subjects are kept in arrival order
/// until the flush, which collapses them into a set per query.
#[derive(Debug, Default)]
pub struct PlainMapper {
    map: HashMap<String, Vec<String>>,
}

impl PlainMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mapper for PlainMapper {
    type Hit = (String, String);
    type Chunk = QueryMap;

    fn parse(&self, line: &str, format: AlignFormat) -> Result<Option<Self::Hit>, ParseError> {
        Ok(parse_line(format, line)?.map(|record| (record.query, record.subject)))
    }

    fn append(&mut self, (query, subject): Self::Hit) {
        self.map.entry(query).or_default().push(subject);
    }

    fn flush(&mut self) -> QueryMap {
        std::mem::take(&mut self.map)
            .into_iter()
            .map(|(query, subjects)| (query, subjects.into_iter().collect()))
            .collect()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_returns_query_and_subject() {
        let mapper = PlainMapper::new();
        let line = "S1/1\tNC_1\t100\t100\t0\t0\t1\t100\t225\t324\t1.2e-30\t345\n";
        let hit = mapper.parse(line, AlignFormat::B6o).unwrap();
        assert_eq!(hit, Some(("S1/1".to_string(), "NC_1".to_string())));
    }

    #[test]
    fn test_parse_does_not_change_state() {
        let mapper = PlainMapper::new();
        assert!(mapper.parse("q1\ts1\n", AlignFormat::Map).unwrap().is_some());
        assert!(mapper.parse("U\tr1\t0\n", AlignFormat::Kraken).unwrap().is_none());
        assert!(mapper.is_empty());
    }

    #[test]
    fn test_append_keeps_arrival_order() {
        let mut mapper = PlainMapper::new();
        for subject in ["s2", "s1", "s2"] {
            mapper.append(("q1".to_string(), subject.to_string()));
        }
        assert_eq!(
            mapper.map["q1"],
            ["s2".to_string(), "s1".to_string(), "s2".to_string()]
        );
    }

    #[test]
    fn test_flush_deduplicates_and_resets() {
        let mut mapper = PlainMapper::new();
        mapper.append(("q1".to_string(), "s1".to_string()));
        mapper.append(("q1".to_string(), "s1".to_string()));
        mapper.append(("q2".to_string(), "s3".to_string()));
        assert_eq!(mapper.len(), 2);

        let chunk = mapper.flush();
        assert_eq!(chunk.len(), 2);
        assert_eq!(chunk["q1"], HashSet::from(["s1".to_string()]));
        assert!(mapper.is_empty());
        assert!(mapper.flush().is_empty());
    }
}
