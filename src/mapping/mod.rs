//! Chunked query-to-subject mapping.
//!
//! Alignment files are too large to hold in memory, so they are read in
//! chunks. A [`Mapper`] accumulates parsed lines and hands out a snapshot on
//! every flush; [`ChunkStream`] drives a mapper over a line source and decides
//! where the chunk boundaries fall.
//!
//! Chunk boundaries are only placed where the query changes, so all hits of
//! one query always land in the same chunk, provided the file is grouped by
//! query (as aligner output is).
//!
//! ## Example
//!
//! ```rust
//! use aln_chunker::mapping::stream::{stream_chunks, StreamConfig};
//!
//! let data = "q1\ts1\nq1\ts2\nq2\ts3\n";
//! let config = StreamConfig::default().with_chunk_size(1);
//!
//! let chunks: Vec<_> = stream_chunks(data.as_bytes(), config)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0]["q1"].len(), 2);
//! assert!(chunks[1]["q2"].contains("s3"));
//! ```
//!
//! [`ChunkStream`]: stream::ChunkStream

use std::collections::{HashMap, HashSet};

use crate::core::record::Record;
use crate::core::types::AlignFormat;
use crate::parsing::ParseError;

pub mod plain;
pub mod stream;

/// Query identifier to the distinct subjects it was mapped to
pub type QueryMap = HashMap<String, HashSet<String>>;

/// A parsed line that belongs to a query
pub trait QueryHit {
    fn query(&self) -> &str;
}

impl QueryHit for Record {
    fn query(&self) -> &str {
        &self.query
    }
}

impl QueryHit for (String, String) {
    fn query(&self) -> &str {
        &self.0
    }
}

/// Accumulates parsed lines between flushes
///
/// The driver calls [`parse`](Mapper::parse) for every line and passes each
/// returned hit to [`append`](Mapper::append); hits that straddle a chunk
/// boundary are appended after the preceding [`flush`](Mapper::flush).
pub trait Mapper {
    /// What one line contributes
    type Hit: QueryHit;
    /// Snapshot returned by a flush
    type Chunk;

    /// Parse one line; `Ok(None)` means the line carries nothing to map
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for malformed lines.
    fn parse(&self, line: &str, format: AlignFormat) -> Result<Option<Self::Hit>, ParseError>;

    /// Add a hit to the current chunk
    fn append(&mut self, hit: Self::Hit);

    /// Return the current chunk and start an empty one
    fn flush(&mut self) -> Self::Chunk;

    /// Number of queries accumulated since the last flush
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
