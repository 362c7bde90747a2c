//! Error types for the GPX parser library.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for GPX operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading or parsing GPX data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while reading the source, with the source path attached
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document has no recognizable track point structure
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// A track point failed to parse in strict mode (`ordinal` is 1-based)
    #[error("trackpoint {ordinal}: {source}")]
    Trackpoint {
        ordinal: usize,
        #[source]
        source: PointError,
    },

    /// Every track point was rejected
    #[error("no valid trackpoints found")]
    NoValidTrackpoints,

    /// The XML parser rejected the document
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The XML parser requires UTF-8 input
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Structural,
    Trackpoint,
    EmptyResult,
    Xml,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::Structural(_) => ErrorKind::Structural,
            Error::Trackpoint { .. } => ErrorKind::Trackpoint,
            Error::NoValidTrackpoints => ErrorKind::EmptyResult,
            Error::Xml(_) | Error::Utf8(_) => ErrorKind::Xml,
        }
    }
}

/// Document-level failures. No points are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("no track points found")]
    NoTrackpoints,

    #[error("missing lat/lon quote marking")]
    MissingQuoteMarking,
}

/// Which value of a track point an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
    Elevation,
}

impl Field {
    /// Attribute or tag name used in GPX for this field.
    pub fn xml_name(self) -> &'static str {
        match self {
            Field::Latitude => "lat",
            Field::Longitude => "lon",
            Field::Elevation => "ele",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Latitude => write!(f, "latitude"),
            Field::Longitude => write!(f, "longitude"),
            Field::Elevation => write!(f, "elevation"),
        }
    }
}

/// Failure to extract one value from a track point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointError {
    #[error("missing {0} ({name} attribute)", name = .0.xml_name())]
    MissingAttribute(Field),

    #[error("missing {name} quotemark", name = .0.xml_name())]
    MissingQuotemark(Field),

    #[error("invalid {field} number {text:?}: {source}")]
    InvalidNumber {
        field: Field,
        text: String,
        #[source]
        source: lexical_core::Error,
    },

    #[error("missing elevation tag")]
    MissingElevationTag,

    #[error("invalid elevation syntax")]
    InvalidElevationSyntax,
}
