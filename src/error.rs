//! Error types for the mime-tree crate.

use std::io;
use thiserror::Error;

/// Failure to parse a media type string.
///
/// Parsing is pure, so every variant is terminal: retrying the same input
/// yields the same error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input, or its part before the first `;`, is empty.
    #[error("empty media type")]
    EmptyInput,

    /// No `/` separates the top-level type from the subtype.
    #[error("missing '/' between type and subtype")]
    MalformedTree,

    /// A parameter has no `=` or an empty key.
    #[error("malformed parameter")]
    MalformedParameter,
}

/// The main error type for registry configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading a MIME database
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A media type failed to parse
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Extension without a leading dot
    #[error("Invalid extension: {0:?} missing leading dot")]
    InvalidExtension(String),

    /// Extension mapped to a MIME key the registry does not know
    #[error("Unknown MIME key: {0}")]
    UnknownMime(String),
}

/// Specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, Error>;
