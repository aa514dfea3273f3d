//! Errors raised while converting a story export.
//!
//! Every error is fatal: the conversion either runs to completion or aborts
//! with the first failure. There is no per-passage skip-and-continue mode and
//! no partial output document.

use std::fmt;
use std::io;

/// Errors that can occur during story conversion.
#[derive(Debug)]
pub enum ConvertError {
    /// A source artifact could not be read.
    InputRead { path: String, source: io::Error },
    /// The export document does not contain a `tw-storydata` root element.
    GraphShape(String),
    /// The chapter-metadata document is not a valid JSON object of the
    /// expected shape.
    MetaDecode { path: String, reason: String },
    /// A passage's inline metadata token is not a valid JSON object.
    MalformedMetadata { passage_id: String, reason: String },
    /// A passage contains a `[[...]]` token missing its `|` separator.
    MalformedLink { passage_id: String, token: String },
    /// A passage node's `tags` attribute is missing or not a plain integer.
    InvalidChapterTag { passage_id: String, tag: String },
    /// The assembled document could not be written to the sink.
    OutputWrite { path: String, source: io::Error },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InputRead { path, source } => {
                write!(f, "Cannot read input '{}': {}", path, source)
            }
            ConvertError::GraphShape(msg) => write!(f, "Malformed story export: {}", msg),
            ConvertError::MetaDecode { path, reason } => {
                write!(f, "Cannot decode metadata document '{}': {}", path, reason)
            }
            ConvertError::MalformedMetadata { passage_id, reason } => {
                write!(f, "Malformed metadata in passage '{}': {}", passage_id, reason)
            }
            ConvertError::MalformedLink { passage_id, token } => {
                write!(f, "Malformed link '{}' in passage '{}'", token, passage_id)
            }
            ConvertError::InvalidChapterTag { passage_id, tag } => {
                write!(
                    f,
                    "Passage '{}' has invalid chapter tag '{}': expected a plain integer",
                    passage_id, tag
                )
            }
            ConvertError::OutputWrite { path, source } => {
                write!(f, "Cannot write output '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InputRead { source, .. } => Some(source),
            ConvertError::OutputWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}
