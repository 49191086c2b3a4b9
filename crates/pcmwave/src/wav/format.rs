//! WAV file format parameters.

use crate::config::WaveConfig;
use crate::error::{WaveError, WaveResult};

/// Size of the canonical header that precedes the data bytes.
pub const HEADER_SIZE: usize = 44;

/// Bytes of the RIFF chunk body that precede the data bytes.
///
/// "WAVE" (4) + fmt chunk (8 + 16) + data chunk header (8).
pub const RIFF_OVERHEAD: u32 = 36;

/// Size of the PCM `fmt ` chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

/// Audio format code for integer PCM.
pub const FORMAT_PCM: u16 = 1;

/// WAV file format parameters derived from a validated [`WaveConfig`].
///
/// Fields are private so every `WavFormat` carries a channel count, rate and
/// width whose derived header fields fit their on-disk widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl From<&WaveConfig> for WavFormat {
    fn from(config: &WaveConfig) -> Self {
        Self {
            channels: config.channels(),
            sample_rate: config.sample_rate(),
            bits_per_sample: config.bits_per_sample(),
        }
    }
}

impl WavFormat {
    /// Validates the parameters and builds a format.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> WaveResult<Self> {
        WaveConfig::new(channels, sample_rate, bits_per_sample).map(|config| Self::from(&config))
    }

    /// Number of channels (1 = mono, 2 = stereo).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bits per sample (8, 16, 24 or 32).
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Size of the data chunk for `sample_count` interleaved samples.
    ///
    /// Fails when the data chunk or the enclosing RIFF size would not fit in
    /// a 32-bit field.
    pub fn data_size(&self, sample_count: usize) -> WaveResult<u32> {
        sample_count
            .checked_mul(self.bytes_per_sample() as usize)
            .and_then(|bytes| u32::try_from(bytes).ok())
            .filter(|&bytes| self.riff_size(bytes).is_some())
            .ok_or(WaveError::DataTooLarge {
                samples: sample_count,
                bits: self.bits_per_sample,
            })
    }

    /// Value of the RIFF `ChunkSize` field for a data chunk of `data_size`.
    ///
    /// None when the sum does not fit in 32 bits.
    pub fn riff_size(&self, data_size: u32) -> Option<u32> {
        RIFF_OVERHEAD.checked_add(data_size)
    }
}
