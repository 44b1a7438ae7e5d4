/// Core error types for Ripple
use thiserror::Error;

/// Result type alias using `RippleError`
pub type Result<T> = std::result::Result<T, RippleError>;

/// Core error type for Ripple
#[derive(Error, Debug)]
pub enum RippleError {
    /// Input file does not exist or is unreadable
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// No decoder is available for this file extension
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The container header was rejected by the decoder
    #[error("Open error: {0}")]
    Open(String),

    /// Sample decoding errors
    #[error("Decode error: {0}")]
    Decode(String),

    /// Metadata tag extraction errors
    #[error("Tag error: {0}")]
    Tag(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl RippleError {
    /// Create an open error
    pub fn open(msg: impl Into<String>) -> Self {
        Self::Open(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a tag error
    pub fn tag(msg: impl Into<String>) -> Self {
        Self::Tag(msg.into())
    }

    /// Create an unsupported format error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
