//! Import plugins: the WavPack format probe and the unusable stub
//!
//! A plugin owns the format-probe step: it validates the path, asks the
//! injected [`SessionFactory`] to open and probe the container, and wraps the
//! resulting decode session in an [`ImportSession`] ready to run. Which
//! plugin serves the `.wv` extension is decided once at startup from the
//! [`DecodeCapability`] - when the decoding library is unavailable the whole
//! import path is replaced uniformly by the stub, never left half-wired.

use crate::session::ImportSession;
use crate::{ImportError, Result};
use ripple_core::{OpenOptions, SampleFormat, SessionFactory, StreamProperties};
use std::path::Path;
use std::sync::Arc;

/// Extensions served by the WavPack import path
pub const WAVPACK_EXTENSIONS: &[&str] = &["wv"];

/// Human-readable format description
pub const WAVPACK_DESCRIPTION: &str = "WavPack files";

const WAVPACK_PLUGIN_ID: &str = "libwavpack";

/// One import format: probes a file and yields a ready-to-run session
pub trait ImportPlugin: Send + Sync {
    /// Stable plugin identifier
    fn id(&self) -> &'static str;

    /// Human-readable format description
    fn description(&self) -> &'static str;

    /// File extensions (lowercase, without dot) this plugin serves
    fn extensions(&self) -> &'static [&'static str];

    /// Open `path` and probe its stream properties
    ///
    /// On success the returned session owns the open decoder context; no
    /// partial state is observable on failure.
    fn open(&self, path: &Path) -> Result<ImportSession>;
}

/// WavPack import plugin backed by an injected decoder capability
pub struct WavpackImportPlugin {
    factory: Arc<dyn SessionFactory>,
    options: OpenOptions,
}

impl WavpackImportPlugin {
    /// Create a plugin with default open options (correction side-file,
    /// UTF-8 paths, and tag parsing all enabled)
    pub fn new(factory: Arc<dyn SessionFactory>) -> Self {
        Self::with_options(factory, OpenOptions::default())
    }

    /// Create a plugin with explicit open options
    pub fn with_options(factory: Arc<dyn SessionFactory>, options: OpenOptions) -> Self {
        Self { factory, options }
    }

    fn validate(properties: &StreamProperties) -> Result<()> {
        if properties.channels == 0 {
            return Err(ImportError::OpenFailed(
                "stream declares zero channels".to_string(),
            ));
        }
        if properties.sample_rate == 0 {
            return Err(ImportError::OpenFailed(
                "stream declares zero sample rate".to_string(),
            ));
        }
        Ok(())
    }
}

impl ImportPlugin for WavpackImportPlugin {
    fn id(&self) -> &'static str {
        WAVPACK_PLUGIN_ID
    }

    fn description(&self) -> &'static str {
        WAVPACK_DESCRIPTION
    }

    fn extensions(&self) -> &'static [&'static str] {
        WAVPACK_EXTENSIONS
    }

    fn open(&self, path: &Path) -> Result<ImportSession> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let session = self
            .factory
            .open(path, &self.options)
            .map_err(|e| ImportError::OpenFailed(e.to_string()))?;

        let properties = session.properties();
        Self::validate(&properties)?;

        let format = SampleFormat::from_bits_per_sample(properties.bits_per_sample);
        tracing::debug!(
            path = %path.display(),
            channels = properties.channels,
            sample_rate = properties.sample_rate,
            bits = properties.bits_per_sample,
            ?format,
            "opened WavPack stream"
        );

        Ok(ImportSession::new(session, properties, format))
    }
}

/// Stub plugin registered when the decoding library is unavailable
///
/// Keeps the extension claimed so the host can answer "format unsupported"
/// instead of falling through to a crashing or missing code path.
pub struct UnsupportedImportPlugin {
    description: &'static str,
    extensions: &'static [&'static str],
}

impl UnsupportedImportPlugin {
    /// Create a stub claiming `extensions`
    pub fn new(description: &'static str, extensions: &'static [&'static str]) -> Self {
        Self {
            description,
            extensions,
        }
    }
}

impl ImportPlugin for UnsupportedImportPlugin {
    fn id(&self) -> &'static str {
        "unsupported"
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn open(&self, path: &Path) -> Result<ImportSession> {
        Err(ImportError::UnsupportedFormat(format!(
            "{} ({})",
            self.description,
            path.display()
        )))
    }
}

/// Whether the WavPack decoding library was available at startup
///
/// Selected once during process initialization; both arms register a plugin
/// implementing the same probe/decode/extract-tags contract.
pub enum DecodeCapability {
    /// Decoder library present; sessions come from this factory
    Available(Arc<dyn SessionFactory>),
    /// Decoder library absent; imports report "format unsupported"
    Unavailable,
}

/// Register the WavPack import path according to the capability
pub fn register_wavpack(registry: &mut crate::ImporterRegistry, capability: DecodeCapability) {
    match capability {
        DecodeCapability::Available(factory) => {
            registry.register(Arc::new(WavpackImportPlugin::new(factory)));
        }
        DecodeCapability::Unavailable => {
            registry.register(Arc::new(UnsupportedImportPlugin::new(
                WAVPACK_DESCRIPTION,
                WAVPACK_EXTENSIONS,
            )));
        }
    }
}
