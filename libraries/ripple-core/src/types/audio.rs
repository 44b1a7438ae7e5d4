/// Audio stream and sample buffer types
use crate::error::{Result, RippleError};
use serde::{Deserialize, Serialize};

/// Properties probed from a container header
///
/// Immutable once probed; the import session carries one copy for its whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamProperties {
    /// Number of channels (>= 1)
    pub channels: u16,

    /// Sample rate in Hz (> 0)
    pub sample_rate: u32,

    /// Bits per sample as declared by the stream
    pub bits_per_sample: u16,

    /// Bytes per sample as declared by the stream
    pub bytes_per_sample: u16,

    /// Total declared frame count; `None` when the stream does not declare it
    pub total_frames: Option<u64>,
}

impl StreamProperties {
    /// The declared frame count, treating a declared zero as unknown
    pub fn declared_frames(&self) -> Option<u64> {
        self.total_frames.filter(|&frames| frames > 0)
    }
}

/// Storage format for decoded samples
///
/// Selected once from the stream's bit depth and fixed for the whole import
/// session; every channel buffer of a session shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// 16-bit signed integer samples
    Int16,
    /// 24-bit signed integer samples, stored in `i32`
    Int24,
    /// 32-bit IEEE-754 float samples
    Float32,
}

impl SampleFormat {
    /// Map a stream bit depth to the session sample format
    ///
    /// `<= 16` bits decode to `Int16`, 17-24 bits to `Int24`, anything wider
    /// to `Float32`.
    pub fn from_bits_per_sample(bits: u16) -> Self {
        if bits <= 16 {
            Self::Int16
        } else if bits <= 24 {
            Self::Int24
        } else {
            Self::Float32
        }
    }
}

/// Typed sample storage for one channel
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelSamples {
    /// 16-bit integer samples
    Int16(Vec<i16>),
    /// 24-bit integer samples widened to `i32`
    Int24(Vec<i32>),
    /// 32-bit float samples
    Float32(Vec<f32>),
}

impl ChannelSamples {
    fn new(format: SampleFormat) -> Self {
        match format {
            SampleFormat::Int16 => Self::Int16(Vec::new()),
            SampleFormat::Int24 => Self::Int24(Vec::new()),
            SampleFormat::Float32 => Self::Float32(Vec::new()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Int16(samples) => samples.len(),
            Self::Int24(samples) => samples.len(),
            Self::Float32(samples) => samples.len(),
        }
    }

    fn shrink_to_fit(&mut self) {
        match self {
            Self::Int16(samples) => samples.shrink_to_fit(),
            Self::Int24(samples) => samples.shrink_to_fit(),
            Self::Float32(samples) => samples.shrink_to_fit(),
        }
    }

    /// Append one raw decoder word in this storage's format
    ///
    /// Integer formats use the low bits of the word; float streams carry the
    /// IEEE-754 bit pattern inside the word.
    fn push_raw(&mut self, word: i32) {
        match self {
            Self::Int16(samples) => samples.push(word as i16),
            Self::Int24(samples) => samples.push(word),
            Self::Float32(samples) => samples.push(f32::from_bits(word as u32)),
        }
    }
}

/// Decoded samples for one channel, in the session's `SampleFormat`
///
/// Exclusively owned by the decode loop until the import finishes; on a
/// Success or Stopped outcome ownership of the whole channel group transfers
/// to the host, in channel-index order. `flush()` seals the buffer - it
/// commits the tail, trims spare capacity, and refuses further appends.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelBuffer {
    format: SampleFormat,
    sample_rate: u32,
    samples: ChannelSamples,
    sealed: bool,
}

impl ChannelBuffer {
    /// Create one empty buffer
    pub fn new(format: SampleFormat, sample_rate: u32) -> Self {
        Self {
            format,
            sample_rate,
            samples: ChannelSamples::new(format),
            sealed: false,
        }
    }

    /// Allocate `count` empty buffers sharing one format and rate
    ///
    /// Pure construction; the order of the returned buffers matches the
    /// decoder's channel-interleaving order, since the decode loop writes by
    /// position.
    pub fn allocate(count: u16, format: SampleFormat, sample_rate: u32) -> Vec<Self> {
        (0..count).map(|_| Self::new(format, sample_rate)).collect()
    }

    /// The buffer's sample format
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// The buffer's sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples appended so far
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been appended
    pub fn is_empty(&self) -> bool {
        self.samples.len() == 0
    }

    /// Whether the buffer has been flushed
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Borrow the typed sample storage
    pub fn samples(&self) -> &ChannelSamples {
        &self.samples
    }

    /// Append this channel's samples from an interleaved block
    ///
    /// `words` yields the raw decoder words for this channel in arrival
    /// order (the caller strides over the interleaved block).
    ///
    /// # Errors
    /// Returns an error if the buffer was already flushed.
    pub fn extend_raw(&mut self, words: impl Iterator<Item = i32>) -> Result<()> {
        if self.sealed {
            return Err(RippleError::invalid_input("append after flush"));
        }
        for word in words {
            self.samples.push_raw(word);
        }
        Ok(())
    }

    /// Finalize the buffer for consumption
    ///
    /// Commits the buffered tail, releases spare capacity, and seals the
    /// buffer against further appends. Idempotent.
    pub fn flush(&mut self) {
        self.samples.shrink_to_fit();
        self.sealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_depth_maps_to_sample_format_at_boundaries() {
        assert_eq!(SampleFormat::from_bits_per_sample(8), SampleFormat::Int16);
        assert_eq!(SampleFormat::from_bits_per_sample(16), SampleFormat::Int16);
        assert_eq!(SampleFormat::from_bits_per_sample(17), SampleFormat::Int24);
        assert_eq!(SampleFormat::from_bits_per_sample(24), SampleFormat::Int24);
        assert_eq!(
            SampleFormat::from_bits_per_sample(25),
            SampleFormat::Float32
        );
        assert_eq!(
            SampleFormat::from_bits_per_sample(32),
            SampleFormat::Float32
        );
    }

    #[test]
    fn allocate_creates_empty_buffers_in_order() {
        let channels = ChannelBuffer::allocate(4, SampleFormat::Int16, 48_000);
        assert_eq!(channels.len(), 4);
        for channel in &channels {
            assert!(channel.is_empty());
            assert!(!channel.is_sealed());
            assert_eq!(channel.format(), SampleFormat::Int16);
            assert_eq!(channel.sample_rate(), 48_000);
        }
    }

    #[test]
    fn int16_narrows_to_low_word() {
        let mut buffer = ChannelBuffer::new(SampleFormat::Int16, 44_100);
        buffer.extend_raw([-32768, 0, 32767].into_iter()).unwrap();
        assert_eq!(
            buffer.samples(),
            &ChannelSamples::Int16(vec![-32768, 0, 32767])
        );
    }

    #[test]
    fn float32_reinterprets_word_bits() {
        let mut buffer = ChannelBuffer::new(SampleFormat::Float32, 44_100);
        let words = [1.0f32, -0.5, 0.25].map(|s| s.to_bits() as i32);
        buffer.extend_raw(words.into_iter()).unwrap();
        assert_eq!(
            buffer.samples(),
            &ChannelSamples::Float32(vec![1.0, -0.5, 0.25])
        );
    }

    #[test]
    fn flush_seals_against_further_appends() {
        let mut buffer = ChannelBuffer::new(SampleFormat::Int24, 96_000);
        buffer.extend_raw([1, 2, 3].into_iter()).unwrap();
        buffer.flush();
        assert!(buffer.is_sealed());
        assert_eq!(buffer.len(), 3);
        assert!(buffer.extend_raw([4].into_iter()).is_err());
        // Flushing twice is fine
        buffer.flush();
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn declared_zero_frames_counts_as_unknown() {
        let mut properties = StreamProperties {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            bytes_per_sample: 2,
            total_frames: Some(0),
        };
        assert_eq!(properties.declared_frames(), None);
        properties.total_frames = Some(10);
        assert_eq!(properties.declared_frames(), Some(10));
        properties.total_frames = None;
        assert_eq!(properties.declared_frames(), None);
    }
}
