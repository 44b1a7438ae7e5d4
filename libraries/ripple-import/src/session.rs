//! Sample decode loop - pulls interleaved blocks, deinterleaves into
//! per-channel buffers, drives the progress monitor, and decides the
//! terminal status

use crate::tags::map_tags;
use crate::Result;
use ripple_core::{
    ChannelBuffer, DecodeSession, ImportStatus, ProgressMonitor, ProgressResponse, SampleFormat,
    StreamProperties, TagStore,
};
use serde::{Deserialize, Serialize};

/// Frames pulled per decode block
///
/// Bounds both the working buffer (channels x block x 4 bytes) and the
/// cancellation latency, which is at most one block's decode time.
pub const FRAMES_PER_BLOCK: u32 = 100_000;

/// An open import session: one probed file, ready to decode
///
/// Owns the decode session exclusively; the decoder context is released
/// exactly once when the `ImportSession` is dropped, whichever way the
/// import ends.
pub struct ImportSession {
    session: Box<dyn DecodeSession>,
    properties: StreamProperties,
    format: SampleFormat,
}

impl ImportSession {
    pub(crate) fn new(
        session: Box<dyn DecodeSession>,
        properties: StreamProperties,
        format: SampleFormat,
    ) -> Self {
        Self {
            session,
            properties,
            format,
        }
    }

    /// Stream properties probed at open time
    pub fn properties(&self) -> &StreamProperties {
        &self.properties
    }

    /// Sample format selected for this session
    ///
    /// Fixed before the first block is decoded; every channel buffer the
    /// import produces uses it.
    pub fn sample_format(&self) -> SampleFormat {
        self.format
    }

    /// Run the import to its terminal status
    ///
    /// Decodes block by block, polling `monitor` after each block. On a
    /// Success or Stopped outcome the flushed channel buffers are handed
    /// over in `ImportOutcome::channels` and the tag mapper populates
    /// `tags`; on Failed or Cancelled the buffers are discarded and `tags`
    /// is left untouched.
    ///
    /// Consumes the session: the decoder context is released when this
    /// returns, on every path.
    pub fn import(
        mut self,
        monitor: &mut dyn ProgressMonitor,
        tags: &mut dyn TagStore,
    ) -> Result<ImportOutcome> {
        let channel_count = self.properties.channels as usize;
        let mut channels = ChannelBuffer::allocate(
            self.properties.channels,
            self.format,
            self.properties.sample_rate,
        );

        let mut interleaved = vec![0i32; channel_count * FRAMES_PER_BLOCK as usize];
        let mut frames_decoded: u64 = 0;
        let mut response = ProgressResponse::Continue;

        loop {
            let frames = self.session.unpack(&mut interleaved, FRAMES_PER_BLOCK) as usize;
            if frames == 0 {
                break;
            }

            let block = &interleaved[..frames * channel_count];
            for (offset, channel) in channels.iter_mut().enumerate() {
                channel.extend_raw(block.iter().skip(offset).step_by(channel_count).copied())?;
            }

            frames_decoded += frames as u64;
            response = monitor.poll(self.session.progress(), 1.0);
            if response != ProgressResponse::Continue {
                break;
            }
        }

        let status = match response {
            ProgressResponse::Cancelled => ImportStatus::Cancelled,
            ProgressResponse::Stopped => ImportStatus::Stopped,
            ProgressResponse::Continue => {
                match self.properties.declared_frames() {
                    // End of stream before the declared total: truncated or
                    // corrupt input
                    Some(declared) if frames_decoded < declared => {
                        tracing::warn!(
                            declared,
                            frames_decoded,
                            "stream ended before declared frame count"
                        );
                        ImportStatus::Failed
                    }
                    _ => ImportStatus::Success,
                }
            }
        };

        if status.delivers_buffers() {
            for channel in &mut channels {
                channel.flush();
            }
        } else {
            channels.clear();
        }

        // Tag policy: a Failed or Cancelled session leaves the host's tag
        // store untouched
        let tags_mapped = if status.delivers_buffers() {
            map_tags(self.session.as_ref(), tags)?
        } else {
            0
        };

        let summary = ImportSummary {
            status,
            channel_count: self.properties.channels,
            sample_rate: self.properties.sample_rate,
            format: self.format,
            frames_decoded,
            tags_mapped,
        };
        tracing::debug!(?status, frames_decoded, tags_mapped, "import finished");

        Ok(ImportOutcome {
            status,
            channels,
            summary,
        })
    }
}

/// Terminal result of one import session
#[derive(Debug)]
pub struct ImportOutcome {
    /// Terminal status
    pub status: ImportStatus,

    /// Flushed per-channel buffers in channel-index order
    ///
    /// Empty unless `status.delivers_buffers()`.
    pub channels: Vec<ChannelBuffer>,

    /// Serializable summary for host display
    pub summary: ImportSummary,
}

/// Summary of an import session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Terminal status
    pub status: ImportStatus,

    /// Channels in the stream
    pub channel_count: u16,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Sample format the buffers were decoded into
    pub format: SampleFormat,

    /// Frames appended before the import ended
    pub frames_decoded: u64,

    /// Tag items written to the tag store
    pub tags_mapped: usize,
}

impl ImportSummary {
    /// One-line human-readable summary
    pub fn summary_text(&self) -> String {
        format!(
            "Import {:?}: {} frames, {} channel(s) at {} Hz ({:?}), {} tag(s)",
            self.status,
            self.frames_decoded,
            self.channel_count,
            self.sample_rate,
            self.format,
            self.tags_mapped
        )
    }
}
