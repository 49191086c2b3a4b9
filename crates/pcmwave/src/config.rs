//! Encoder configuration.
//!
//! A [`WaveConfig`] fixes the logical PCM format (channel count, sample rate
//! and bit depth) for the lifetime of one encoder. It can only be obtained
//! through a validating path, so every header field derived from it fits its
//! on-disk width and divides evenly into bytes.
//!
//! Defaults when a field is omitted:
//!
//! | Field             | Default |
//! |-------------------|---------|
//! | `channels`        | 1       |
//! | `sample_rate`     | 44100   |
//! | `bits_per_sample` | 16      |

use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};

/// Default channel count.
pub const DEFAULT_CHANNELS: u16 = 1;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default bit depth.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// PCM sample widths the encoder can pack.
pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

fn default_channels() -> u16 {
    DEFAULT_CHANNELS
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_bits_per_sample() -> u16 {
    DEFAULT_BITS_PER_SAMPLE
}

/// Unvalidated options object as it appears in JSON.
#[derive(Debug, Clone, Deserialize)]
struct RawWaveConfig {
    #[serde(default = "default_channels")]
    channels: u16,
    #[serde(default = "default_sample_rate", alias = "sampleRate")]
    sample_rate: u32,
    #[serde(default = "default_bits_per_sample", alias = "bitsPerSample")]
    bits_per_sample: u16,
}

impl TryFrom<RawWaveConfig> for WaveConfig {
    type Error = WaveError;

    fn try_from(raw: RawWaveConfig) -> WaveResult<Self> {
        WaveConfig::new(raw.channels, raw.sample_rate, raw.bits_per_sample)
    }
}

/// Validated PCM format configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWaveConfig")]
pub struct WaveConfig {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl WaveConfig {
    /// Creates a configuration, rejecting combinations that cannot be
    /// represented in a canonical PCM header.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> WaveResult<Self> {
        let config = Self {
            channels,
            sample_rate,
            bits_per_sample,
        };
        if let Err(err) = config.validate() {
            log::debug!("rejected wave configuration {:?}: {}", config, err);
            return Err(err);
        }
        Ok(config)
    }

    /// 16-bit mono at the given sample rate.
    pub fn mono(sample_rate: u32) -> WaveResult<Self> {
        Self::new(1, sample_rate, DEFAULT_BITS_PER_SAMPLE)
    }

    /// 16-bit stereo at the given sample rate.
    pub fn stereo(sample_rate: u32) -> WaveResult<Self> {
        Self::new(2, sample_rate, DEFAULT_BITS_PER_SAMPLE)
    }

    /// Parses an options object such as `{"channels": 2, "sampleRate": 8000}`.
    ///
    /// Omitted fields take their defaults.
    pub fn from_json(json: &str) -> WaveResult<Self> {
        let raw: RawWaveConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Returns a copy with a different channel count.
    pub fn with_channels(self, channels: u16) -> WaveResult<Self> {
        Self::new(channels, self.sample_rate, self.bits_per_sample)
    }

    /// Returns a copy with a different sample rate.
    pub fn with_sample_rate(self, sample_rate: u32) -> WaveResult<Self> {
        Self::new(self.channels, sample_rate, self.bits_per_sample)
    }

    /// Returns a copy with a different bit depth.
    pub fn with_bits_per_sample(self, bits_per_sample: u16) -> WaveResult<Self> {
        Self::new(self.channels, self.sample_rate, bits_per_sample)
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Frames per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Width of one sample in bits.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    fn validate(&self) -> WaveResult<()> {
        if self.channels == 0 {
            return Err(WaveError::InvalidChannels {
                channels: self.channels,
            });
        }
        if self.sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bits_per_sample) {
            return Err(WaveError::UnsupportedBitDepth {
                bits: self.bits_per_sample,
            });
        }

        let block_align = u32::from(self.bits_per_sample / 8) * u32::from(self.channels);
        if block_align > u32::from(u16::MAX) {
            return Err(WaveError::invalid_format(format!(
                "block align {} does not fit in 16 bits",
                block_align
            )));
        }
        if self.sample_rate.checked_mul(block_align).is_none() {
            return Err(WaveError::invalid_format(format!(
                "byte rate {} * {} does not fit in 32 bits",
                self.sample_rate, block_align
            )));
        }

        Ok(())
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = WaveConfig::default();
        assert_eq!(config.channels(), 1);
        assert_eq!(config.sample_rate(), 44100);
        assert_eq!(config.bits_per_sample(), 16);
    }

    #[test]
    fn test_presets() {
        let mono = WaveConfig::mono(22050).unwrap();
        assert_eq!(mono.channels(), 1);
        assert_eq!(mono.sample_rate(), 22050);

        let stereo = WaveConfig::stereo(48000).unwrap();
        assert_eq!(stereo.channels(), 2);
        assert_eq!(stereo.bits_per_sample(), 16);
    }

    #[test]
    fn test_rejects_zero_channels() {
        let err = WaveConfig::new(0, 44100, 16).unwrap_err();
        assert!(matches!(err, WaveError::InvalidChannels { channels: 0 }));
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let err = WaveConfig::new(1, 0, 16).unwrap_err();
        assert!(matches!(err, WaveError::InvalidSampleRate { rate: 0 }));
    }

    #[test]
    fn test_rejects_unsupported_bit_depths() {
        for bits in [0, 1, 4, 12, 20, 64] {
            let err = WaveConfig::new(1, 44100, bits).unwrap_err();
            assert!(
                matches!(err, WaveError::UnsupportedBitDepth { .. }),
                "{} bits should be rejected",
                bits
            );
        }
    }

    #[test]
    fn test_accepts_supported_bit_depths() {
        for bits in SUPPORTED_BIT_DEPTHS {
            assert!(WaveConfig::new(2, 44100, bits).is_ok());
        }
    }

    #[test]
    fn test_rejects_block_align_overflow() {
        let err = WaveConfig::new(u16::MAX, 8000, 32).unwrap_err();
        assert!(matches!(err, WaveError::InvalidFormat { .. }));
    }

    #[test]
    fn test_rejects_byte_rate_overflow() {
        let err = WaveConfig::new(8, u32::MAX / 4, 32).unwrap_err();
        assert!(matches!(err, WaveError::InvalidFormat { .. }));
    }

    #[test]
    fn test_with_methods_revalidate() {
        let config = WaveConfig::default();
        assert_eq!(config.with_channels(2).unwrap().channels(), 2);
        assert_eq!(config.with_sample_rate(8000).unwrap().sample_rate(), 8000);
        assert_eq!(config.with_bits_per_sample(8).unwrap().bits_per_sample(), 8);
        assert!(config.with_bits_per_sample(7).is_err());
    }

    #[test]
    fn test_from_json_camel_case() {
        let config =
            WaveConfig::from_json(r#"{"channels": 2, "sampleRate": 8000, "bitsPerSample": 8}"#)
                .unwrap();
        assert_eq!(config, WaveConfig::new(2, 8000, 8).unwrap());
    }

    #[test]
    fn test_from_json_snake_case() {
        let config = WaveConfig::from_json(r#"{"sample_rate": 22050, "bits_per_sample": 24}"#)
            .unwrap();
        assert_eq!(config, WaveConfig::new(1, 22050, 24).unwrap());
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = WaveConfig::from_json("{}").unwrap();
        assert_eq!(config, WaveConfig::default());
    }

    #[test]
    fn test_from_json_validates() {
        let err = WaveConfig::from_json(r#"{"channels": 0}"#).unwrap_err();
        assert!(matches!(err, WaveError::InvalidChannels { .. }));

        let err = WaveConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, WaveError::Config(_)));
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let config = WaveConfig::new(2, 48000, 24).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: WaveConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let bad: Result<WaveConfig, _> = serde_json::from_str(r#"{"bits_per_sample": 12}"#);
        assert!(bad.is_err());
    }
}
