/// One alignment or classification, normalized across formats
///
/// Only `query` and `subject` are always present. The remaining fields are
/// filled in by the formats that carry them:
///
/// | Format     | score | length | start | end |
/// |------------|-------|--------|-------|-----|
/// | map        |       |        |       |     |
/// | b6o        | yes   | yes    | yes   | yes |
/// | sam        |       | yes    | yes   | yes |
/// | kraken     |       |        |       |     |
/// | centrifuge | yes   | yes    |       |     |
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Query (read) identifier
    pub query: String,

    /// Subject (reference or taxon) identifier
    pub subject: String,

    pub score: Option<f64>,

    /// Aligned length
    pub length: Option<u64>,

    /// 1-based start on the subject
    pub start: Option<u64>,

    /// 1-based inclusive end on the subject; `start - 1` for a SAM record
    /// whose CIGAR consumes no reference
    pub end: Option<u64>,
}

impl Record {
    #[must_use]
    pub fn new(query: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            subject: subject.into(),
            score: None,
            length: None,
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the subject range
    #[must_use]
    pub fn with_range(mut self, start: u64, end: u64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
}
