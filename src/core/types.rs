use serde::Serialize;
use std::str::FromStr;

/// Record format of an alignment or classification file
///
/// The format is fixed for a whole stream: it is either supplied by the caller
/// or inferred once from the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignFormat {
    /// Two-column `query <TAB> subject` map
    Map,
    /// BLAST tabular output (`-outfmt 6`)
    B6o,
    /// Sequence Alignment/Map text
    Sam,
    /// Kraken/Kraken2 per-read classification
    Kraken,
    /// Centrifuge per-read classification
    Centrifuge,
}

/// Errors that can occur while selecting a format
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Cannot determine alignment file format from its first line")]
    Undetermined,
    #[error("Invalid format code: \"{0}\"")]
    Unsupported(String),
}

impl AlignFormat {
    /// Short code accepted by [`FromStr`] and printed by the CLI
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::B6o => "b6o",
            Self::Sam => "sam",
            Self::Kraken => "kraken",
            Self::Centrifuge => "centrifuge",
        }
    }

    /// Get the display name for this format
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Map => "Simple Map",
            Self::B6o => "BLAST Tabular",
            Self::Sam => "SAM",
            Self::Kraken => "Kraken",
            Self::Centrifuge => "Centrifuge",
        }
    }
}

impl std::fmt::Display for AlignFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AlignFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "map" | "plain" | "tsv" => Ok(Self::Map),
            "b6o" | "blast" => Ok(Self::B6o),
            "sam" => Ok(Self::Sam),
            "kraken" => Ok(Self::Kraken),
            "centrifuge" => Ok(Self::Centrifuge),
            _ => Err(FormatError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMATS: [AlignFormat; 5] = [
        AlignFormat::Map,
        AlignFormat::B6o,
        AlignFormat::Sam,
        AlignFormat::Kraken,
        AlignFormat::Centrifuge,
    ];

    #[test]
    fn test_format_codes_round_trip() {
        for format in FORMATS {
            assert_eq!(format.code().parse::<AlignFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_serializes_as_code() {
        for format in FORMATS {
            assert_eq!(
                serde_json::to_value(format).unwrap(),
                serde_json::Value::String(format.code().to_string())
            );
        }
    }

    #[test]
    fn test_format_aliases() {
        assert_eq!("BLAST".parse::<AlignFormat>(), Ok(AlignFormat::B6o));
        assert_eq!("plain".parse::<AlignFormat>(), Ok(AlignFormat::Map));
        assert_eq!(" Sam ".parse::<AlignFormat>(), Ok(AlignFormat::Sam));
    }

    #[test]
    fn test_unsupported_format_code() {
        assert_eq!(
            "bam".parse::<AlignFormat>(),
            Err(FormatError::Unsupported("bam".to_string()))
        );
    }
}
