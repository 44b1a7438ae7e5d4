//! Error types for the import pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The decoder rejected the file (missing, unreadable, or malformed
    /// header). No session exists after this error.
    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Tag extraction error: {0}")]
    Tag(String),

    #[error("Core error: {0}")]
    Core(#[from] ripple_core::RippleError),
}

impl From<ImportError> for ripple_core::RippleError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Io(e) => Self::Io(e),
            ImportError::FileNotFound(msg) => Self::FileNotFound(msg),
            ImportError::UnsupportedFormat(msg) => Self::UnsupportedFormat(msg),
            ImportError::OpenFailed(msg) => Self::Open(msg),
            ImportError::Decode(msg) => Self::Decode(msg),
            ImportError::Tag(msg) => Self::Tag(msg),
            ImportError::Core(e) => e,
        }
    }
}
