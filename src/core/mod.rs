//! Core data types shared by the parsers and the chunked mapper.
//!
//! - [`AlignFormat`]: the closed set of supported record formats
//! - [`FormatError`]: failures selecting a format (undetermined or unknown code)
//! - [`Record`]: one parsed line, normalized across formats
//!
//! [`AlignFormat`]: types::AlignFormat
//! [`FormatError`]: types::FormatError
//! [`Record`]: record::Record

pub mod record;
pub mod types;
