//! Core data types for the import pipeline

mod audio;
mod import;
mod tags;

pub use audio::{ChannelBuffer, ChannelSamples, SampleFormat, StreamProperties};
pub use import::ImportStatus;
pub use tags::{TagDialect, TagDictionary, TAG_YEAR};
