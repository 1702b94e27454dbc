//! # aln-chunker
//!
//! A library for turning alignment and classification files into
//! query-to-subject maps, one bounded chunk at a time.
//!
//! Aligners and classifiers write one line per hit, and their output easily
//! runs to hundreds of millions of lines. `aln-chunker` reads such files
//! sequentially, groups subjects by query and hands out the grouping in
//! chunks, so memory stays bounded by the chunk size rather than the file.
//!
//! ## Features
//!
//! - **Format inference**: SAM, BLAST tabular and two-column maps are
//!   recognized from the first line
//! - **Five formats**: map, b6o, SAM, Kraken and Centrifuge
//! - **Query-safe chunking**: chunk boundaries fall only where the query
//!   changes, so no query is split across chunks
//! - **Explicit malformed-line policy**: abort (default) or skip with a warning
//!
//! ## Example
//!
//! ```rust
//! use aln_chunker::{stream_chunks, StreamConfig};
//!
//! let sam = "@HD\tVN:1.6\tSO:unsorted\n\
//!            r1\t99\tG1\t100\t42\t50M\t=\t300\t250\tACGT\tIIII\n\
//!            r1\t147\tG1\t300\t42\t50M\t=\t100\t-250\tACGT\tIIII\n\
//!            r2\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\tIIII\n";
//!
//! for chunk in stream_chunks(sam.as_bytes(), StreamConfig::default()).unwrap() {
//!     let chunk = chunk.unwrap();
//!     assert!(chunk["r1/1"].contains("G1"));
//!     assert!(chunk["r1/2"].contains("G1"));
//!     assert!(!chunk.contains_key("r2"));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Format tags and the normalized record type
//! - [`parsing`]: Format inference, per-format line parsers and CIGAR lengths
//! - [`mapping`]: Chunk accumulation and the streaming driver
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod mapping;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::record::Record;
pub use core::types::{AlignFormat, FormatError};
pub use mapping::plain::PlainMapper;
pub use mapping::stream::{
    stream_chunks, ChunkStream, MalformedPolicy, StreamConfig, StreamError,
};
pub use mapping::{Mapper, QueryMap};
pub use parsing::ParseError;
