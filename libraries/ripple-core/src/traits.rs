/// Core traits for Ripple
use crate::error::Result;
use crate::types::{StreamProperties, TagDialect};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Open decode session over one WavPack container
///
/// This is the opaque decoding capability consumed by the import pipeline.
/// Implementers wrap a decoder context opened on a single file; the context
/// is released exactly once, when the session is dropped. The trait mirrors
/// the pull-based surface the pipeline needs:
/// 1. **Stream queries**: `properties()` for channel count, rate, bit depth
/// 2. **Sample pull**: `unpack()` fills an interleaved `i32` block
/// 3. **Tag queries**: indexed key/value length and retrieval calls
pub trait DecodeSession: Send {
    /// Stream properties probed from the container header
    ///
    /// Immutable for the lifetime of the session.
    fn properties(&self) -> StreamProperties;

    /// Unpack up to `max_frames` frames of interleaved samples into `out`
    ///
    /// `out` must hold at least `max_frames * channels` words. Each word is
    /// one sample: integer formats are stored directly, float streams store
    /// the IEEE-754 bit pattern in the integer word.
    ///
    /// Returns the number of whole frames produced; `0` signals end of
    /// stream. A corrupt or truncated stream ends early rather than erroring.
    fn unpack(&mut self, out: &mut [i32], max_frames: u32) -> u32;

    /// Decoder's own completion estimate in `0.0..=1.0`
    ///
    /// May be negative when the decoder cannot estimate progress.
    fn progress(&self) -> f64;

    /// Which tag dialect the container carries, if any
    fn tag_dialect(&self) -> TagDialect;

    /// Number of metadata tag items in the tag block
    fn tag_item_count(&self) -> usize;

    /// Byte length of the tag key at `index`, or `None` when out of range
    fn tag_key_len(&self, index: usize) -> Option<usize>;

    /// Read the tag key at `index` into `buf`, returning bytes written
    fn read_tag_key(&self, index: usize, buf: &mut [u8]) -> usize;

    /// Byte length of the value stored under `key`
    ///
    /// APE dialect values may contain embedded NUL separators; the length
    /// covers the full multi-value byte range.
    fn tag_value_len(&self, key: &[u8]) -> usize;

    /// Read the value stored under `key` into `buf`, returning bytes written
    fn read_tag_value(&self, key: &[u8], buf: &mut [u8]) -> usize;
}

/// Factory opening decode sessions by path
///
/// Injected by the host at startup; this is where the actual decoder library
/// binding lives. The import pipeline never parses the bitstream itself.
pub trait SessionFactory: Send + Sync {
    /// Open `path` and probe its header
    ///
    /// On success the returned session owns the decoder context. On failure
    /// nothing usable is returned and no resource is left open.
    ///
    /// # Errors
    /// Returns an error when the file is unreadable or the header is not a
    /// recognized container.
    fn open(&self, path: &Path, options: &OpenOptions) -> Result<Box<dyn DecodeSession>>;
}

/// Options applied when opening a decode session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOptions {
    /// Use the optional correction side-file (`.wvc`) when present
    pub use_correction_file: bool,

    /// Treat paths as UTF-8 when handing them to the decoder
    pub utf8_paths: bool,

    /// Parse the metadata tag block while opening
    pub parse_tags: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            use_correction_file: true,
            utf8_paths: true,
            parse_tags: true,
        }
    }
}

/// Response from a progress poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressResponse {
    /// Keep decoding
    Continue,
    /// Stop and keep what was decoded so far
    Stopped,
    /// Abort and discard everything
    Cancelled,
}

/// Cooperative progress reporting and cancellation polling
///
/// Wraps whatever host-side progress/cancel UI exists. Purely advisory:
/// implementations never perform I/O on behalf of the decode loop. The loop
/// polls once per decoded block, so cancellation latency is bounded by one
/// block's decode time.
pub trait ProgressMonitor {
    /// Report completion fractions and learn whether to keep going
    ///
    /// `fraction` is the decoder's own progress metric (`0.0..=1.0`);
    /// `scale` is the secondary phase fraction, fixed at `1.0` for this
    /// import path (the two-phase contract is kept for symmetry with other
    /// import paths).
    fn poll(&mut self, fraction: f64, scale: f64) -> ProgressResponse;
}

/// External tag store populated by the tag mapper
///
/// The host owns the store; the pipeline only clears and upserts. Keys are
/// matched exactly - normalization happens before storage, in the mapper.
pub trait TagStore {
    /// Remove all entries
    fn clear(&mut self);

    /// Whether an entry exists under exactly `key`
    fn contains(&self, key: &str) -> bool;

    /// Insert or overwrite the entry under `key`
    fn set(&mut self, key: &str, value: &str);
}
