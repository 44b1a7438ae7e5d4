//! Ripple Core
//!
//! Platform-agnostic types, traits, and error handling for the Ripple
//! WavPack import pipeline.
//!
//! This crate provides the foundational building blocks shared by the import
//! pipeline and its host:
//! - **Data Types**: `StreamProperties`, `SampleFormat`, `ChannelBuffer`,
//!   `ImportStatus`, `TagDictionary`
//! - **Core Traits**: `DecodeSession`, `SessionFactory`, `ProgressMonitor`,
//!   `TagStore`
//! - **Error Handling**: Unified `RippleError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use ripple_core::types::{ChannelBuffer, SampleFormat};
//!
//! // Bit depth decides the sample format for the whole import session
//! let format = SampleFormat::from_bits_per_sample(24);
//! assert_eq!(format, SampleFormat::Int24);
//!
//! // Allocate one empty buffer per channel, in decoder channel order
//! let channels = ChannelBuffer::allocate(2, format, 44_100);
//! assert_eq!(channels.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RippleError};
pub use traits::{
    DecodeSession, OpenOptions, ProgressMonitor, ProgressResponse, SessionFactory, TagStore,
};

// Export all types
pub use types::{
    // Audio types
    ChannelBuffer, ChannelSamples, SampleFormat, StreamProperties,
    // Import session types
    ImportStatus,
    // Tag types
    TagDialect, TagDictionary, TAG_YEAR,
};
