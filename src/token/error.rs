use thiserror::Error;

/// Why a compact token could not be decoded.
///
/// `part` is 1-based: 1 is the header, 2 the payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Invalid token specified: expected 3 parts separated by '.', found {found}")]
    SegmentCount { found: usize },

    #[error("Invalid token specified: invalid base64 for part #{part} ({reason})")]
    Base64 { part: usize, reason: String },

    #[error("Invalid token specified: part #{part} is not valid UTF-8")]
    Utf8 { part: usize },

    #[error("Invalid token specified: invalid json for part #{part} ({reason})")]
    Json { part: usize, reason: String },

    #[error("Invalid token specified: part #{part} is not a JSON object")]
    NotAnObject { part: usize },
}
