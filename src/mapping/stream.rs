//! Streaming driver: reads lines, feeds a [`Mapper`], yields chunks.
//!
//! The stream is lazy. Each call to `next()` reads just far enough to produce
//! one chunk. A chunk is cut once at least `chunk_size` records have been
//! accumulated *and* the query changes, so a long run of one query makes its
//! chunk larger rather than splitting the query in two. After the input is
//! exhausted one final chunk is yielded, even if it is empty.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::types::{AlignFormat, FormatError};
use crate::mapping::plain::PlainMapper;
use crate::mapping::{Mapper, QueryHit};
use crate::parsing::detect::infer_format;
use crate::parsing::ParseError;

/// Default number of records per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 1_000_000;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,

    #[error("Malformed line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// What to do with a line that fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop the stream with [`StreamError::Malformed`]
    #[default]
    Abort,
    /// Log a warning and treat the line like a header or unmapped read
    Skip,
}

/// Options for a streaming pass
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Record format; inferred from the first line when `None`
    pub format: Option<AlignFormat>,
    /// Approximate number of records per chunk
    pub chunk_size: usize,
    pub malformed: MalformedPolicy,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            format: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            malformed: MalformedPolicy::default(),
        }
    }
}

impl StreamConfig {
    #[must_use]
    pub fn with_format(mut self, format: AlignFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    #[must_use]
    pub fn with_malformed(mut self, malformed: MalformedPolicy) -> Self {
        self.malformed = malformed;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// First line not read yet
    Init,
    Streaming(AlignFormat),
    /// Input exhausted or a fatal error seen; keeps the format if one was settled
    Done(Option<AlignFormat>),
}

/// Lazy sequence of chunks built from a line source
pub struct ChunkStream<I, M> {
    lines: I,
    mapper: M,
    config: StreamConfig,
    state: State,
    /// Physical lines read, for error messages
    line_num: usize,
    /// Records accumulated over the whole stream
    records: usize,
    /// Record count at which the next chunk may be cut
    threshold: usize,
    last_query: Option<String>,
    chunks: usize,
    skipped: usize,
}

/// Stream chunks of a [`PlainMapper`] from a buffered reader
///
/// # Errors
///
/// Returns `StreamError::InvalidChunkSize` if `config.chunk_size` is zero.
pub fn stream_chunks<R: BufRead>(
    reader: R,
    config: StreamConfig,
) -> Result<ChunkStream<io::Lines<R>, PlainMapper>, StreamError> {
    ChunkStream::new(reader.lines(), PlainMapper::new(), config)
}

impl<I, S, M> ChunkStream<I, M>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
    M: Mapper,
{
    /// Create a stream over `lines`, accumulating into `mapper`
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidChunkSize` if `config.chunk_size` is zero.
    pub fn new(lines: I, mapper: M, config: StreamConfig) -> Result<Self, StreamError> {
        if config.chunk_size == 0 {
            return Err(StreamError::InvalidChunkSize);
        }

        Ok(Self {
            lines,
            mapper,
            threshold: config.chunk_size,
            config,
            state: State::Init,
            line_num: 0,
            records: 0,
            last_query: None,
            chunks: 0,
            skipped: 0,
        })
    }

    /// Format in use; `None` until the first line has been read
    #[must_use]
    pub fn format(&self) -> Option<AlignFormat> {
        match self.state {
            State::Init => None,
            State::Streaming(format) => Some(format),
            State::Done(format) => format,
        }
    }

    /// Records accumulated so far
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Chunks yielded so far
    #[must_use]
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Malformed lines skipped under [`MalformedPolicy::Skip`]
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read the first line, settle the format and seed the mapper
    fn start(&mut self) -> Result<Option<AlignFormat>, StreamError> {
        let Some(line) = self.lines.next().transpose()? else {
            debug!("Input is empty");
            self.state = State::Done(None);
            return Ok(None);
        };
        self.line_num = 1;
        let line = line.as_ref();

        let format = if let Some(format) = self.config.format {
            debug!(format = %format, "Using requested format");
            format
        } else {
            let format = infer_format(line)?;
            debug!(format = %format, "Inferred format from first line");
            format
        };
        self.state = State::Streaming(format);

        if let Some(hit) = self.parse(line, format)? {
            self.last_query = Some(hit.query().to_string());
            self.records = 1;
            self.mapper.append(hit);
        }

        Ok(Some(format))
    }

    fn parse(&mut self, line: &str, format: AlignFormat) -> Result<Option<M::Hit>, StreamError> {
        match self.mapper.parse(line, format) {
            Ok(hit) => Ok(hit),
            Err(source) => match self.config.malformed {
                MalformedPolicy::Abort => Err(StreamError::Malformed {
                    line: self.line_num,
                    source,
                }),
                MalformedPolicy::Skip => {
                    warn!(line = self.line_num, error = %source, "Skipping malformed line");
                    self.skipped += 1;
                    Ok(None)
                }
            },
        }
    }

    fn flush(&mut self) -> M::Chunk {
        self.chunks += 1;
        debug!(
            chunk = self.chunks,
            queries = self.mapper.len(),
            records = self.records,
            "Flushing chunk"
        );
        self.mapper.flush()
    }

    fn advance(&mut self) -> Result<Option<M::Chunk>, StreamError> {
        let format = match self.state {
            State::Init => match self.start()? {
                Some(format) => format,
                None => return Ok(None),
            },
            State::Streaming(format) => format,
            State::Done(_) => return Ok(None),
        };

        while let Some(line) = self.lines.next() {
            let line = line?;
            self.line_num += 1;

            let Some(hit) = self.parse(line.as_ref(), format)? else {
                continue;
            };

            // Records accumulated before this one
            let seen = self.records;
            self.records += 1;

            let mut chunk = None;
            if self.last_query.as_deref() != Some(hit.query()) {
                if seen >= self.threshold {
                    chunk = Some(self.flush());
                    self.threshold = seen.saturating_add(self.config.chunk_size);
                }
                self.last_query = Some(hit.query().to_string());
            }
            self.mapper.append(hit);

            if chunk.is_some() {
                return Ok(chunk);
            }
        }

        self.state = State::Done(Some(format));
        let chunk = self.flush();
        info!(
            lines = self.line_num,
            records = self.records,
            chunks = self.chunks,
            skipped = self.skipped,
            "Finished reading alignments"
        );
        Ok(Some(chunk))
    }
}

impl<I, S, M> Iterator for ChunkStream<I, M>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
    M: Mapper,
{
    type Item = Result<M::Chunk, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(chunk) => chunk.map(Ok),
            Err(e) => {
                // Nothing is yielded after a fatal error
                self.state = State::Done(self.format());
                Some(Err(e))
            }
        }
    }
}
