//! Ripple WavPack Importer
//!
//! This crate turns one WavPack container into per-channel sample buffers
//! plus a populated tag store, with cooperative progress reporting and
//! cancellation.
//!
//! # Features
//!
//! - Format probing via a host-injected decoder capability
//! - Block-wise pull decoding with bulk deinterleaving
//! - Cooperative stop/cancel, observed once per decoded block
//! - APE/ID3v1 tag normalization into an external tag store
//! - Explicit extension registry populated once at startup
//! - Uniform "format unsupported" stub when the decoder library is absent
//!
//! # Architecture
//!
//! - `registry`: extension -> plugin lookup, no global singleton
//! - `plugin`: WavPack format probe and the unusable stub
//! - `session`: the sample decode loop and terminal status policy
//! - `tags`: tag mapper with dialect-aware value normalization
//! - `progress`: stock progress monitor implementations
//!
//! # Example
//!
//! ```rust,no_run
//! use ripple_import::{
//!     register_wavpack, DecodeCapability, ImportPlugin, ImporterRegistry, NoProgress,
//! };
//! use ripple_core::TagDictionary;
//! use std::path::Path;
//!
//! # fn example(factory: std::sync::Arc<dyn ripple_core::SessionFactory>)
//! # -> ripple_core::Result<()> {
//! let mut registry = ImporterRegistry::new();
//! register_wavpack(&mut registry, DecodeCapability::Available(factory));
//!
//! let path = Path::new("/music/track.wv");
//! let plugin = registry.for_path(path).expect("wv is registered");
//!
//! let mut tags = TagDictionary::new();
//! let outcome = plugin.open(path)?.import(&mut NoProgress, &mut tags)?;
//! println!("{}", outcome.summary.summary_text());
//! # Ok(())
//! # }
//! ```

mod error;

// Core modules
pub mod plugin;
pub mod progress;
pub mod registry;
pub mod session;
pub mod tags;

pub use error::ImportError;
pub use plugin::{
    register_wavpack, DecodeCapability, ImportPlugin, UnsupportedImportPlugin,
    WavpackImportPlugin, WAVPACK_DESCRIPTION, WAVPACK_EXTENSIONS,
};
pub use progress::{ControlHandle, FlagMonitor, NoProgress};
pub use registry::ImporterRegistry;
pub use session::{ImportOutcome, ImportSession, ImportSummary, FRAMES_PER_BLOCK};
pub use tags::map_tags;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
