//! The PCM container encoder.
//!
//! An encoder owns a fixed [`WaveConfig`] and an optional sample buffer.
//! The buffer starts out absent; `encode` on an absent buffer is an error,
//! while an empty buffer yields a valid file with a zero-length data chunk.
//!
//! # Example
//!
//! ```
//! use pcmwave::{WaveConfig, WaveEncoder};
//!
//! let config = WaveConfig::new(2, 44100, 8)?;
//! let mut encoder = WaveEncoder::new(config);
//! encoder.set_data(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let bytes = encoder.encode()?;
//! assert_eq!(bytes.len(), 54);
//! assert!(encoder.to_data_uri()?.starts_with("data:audio/wav;base64,"));
//! # Ok::<(), pcmwave::WaveError>(())
//! ```
//!
//! Instances are not synchronized. Share one across threads only behind a
//! lock of the caller's choosing.

use crate::config::WaveConfig;
use crate::error::{WaveError, WaveResult};
use crate::text::{data_uri, Base64Text, TextEncoder, WAV_MIME};
use crate::wav::format::{WavFormat, HEADER_SIZE};
use crate::wav::pack::SamplePacker;
use crate::wav::pcm::compute_pcm_hash;
use crate::wav::result::EncodedWave;
use crate::wav::writer::write_header;

/// Serializes interleaved integer samples into a RIFF/WAVE PCM file.
#[derive(Debug, Clone, Default)]
pub struct WaveEncoder {
    config: WaveConfig,
    samples: Option<Vec<i32>>,
}

impl WaveEncoder {
    /// Creates an encoder with no sample buffer.
    pub fn new(config: WaveConfig) -> Self {
        Self {
            config,
            samples: None,
        }
    }

    /// The configuration this encoder was built with.
    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Replaces the sample buffer.
    ///
    /// Samples are interleaved by channel and are written in the order given;
    /// the encoder does not regroup them into frames.
    pub fn set_data(&mut self, samples: impl Into<Vec<i32>>) {
        let samples = samples.into();
        log::trace!("sample buffer replaced: {} samples", samples.len());
        self.samples = Some(samples);
    }

    /// Drops the sample buffer, returning the encoder to its initial state.
    pub fn clear_data(&mut self) {
        self.samples = None;
    }

    /// Whether a buffer (possibly empty) has been set.
    pub fn has_data(&self) -> bool {
        self.samples.is_some()
    }

    /// The current buffer, if one has been set.
    pub fn samples(&self) -> Option<&[i32]> {
        self.samples.as_deref()
    }

    fn require_samples(&self) -> WaveResult<&[i32]> {
        self.samples.as_deref().ok_or(WaveError::MissingData)
    }

    /// Encodes the current buffer as a complete WAV file image.
    pub fn encode(&self) -> WaveResult<Vec<u8>> {
        let samples = self.require_samples()?;
        let format = WavFormat::from(&self.config);
        let data_size = format.data_size(samples.len())?;

        let mut bytes = Vec::with_capacity(HEADER_SIZE + data_size as usize);
        write_header(&mut bytes, &format, data_size)?;
        SamplePacker::from(&format).pack_into(samples, &mut bytes);

        log::debug!(
            "encoded {} samples ({} ch, {} Hz, {} bit) into {} bytes",
            samples.len(),
            format.channels(),
            format.sample_rate(),
            format.bits_per_sample(),
            bytes.len()
        );

        Ok(bytes)
    }

    /// Encodes the current buffer as a `data:audio/wav;base64,` URI.
    pub fn to_data_uri(&self) -> WaveResult<String> {
        self.to_data_uri_with(&Base64Text)
    }

    /// Encodes the current buffer as a data URI using the given text codec.
    pub fn to_data_uri_with<T: TextEncoder + ?Sized>(&self, text: &T) -> WaveResult<String> {
        let bytes = self.encode()?;
        Ok(data_uri(WAV_MIME, &bytes, text))
    }

    /// Encodes the current buffer and returns it with summary metadata.
    pub fn render(&self) -> WaveResult<EncodedWave> {
        let bytes = self.encode()?;
        let sample_count = self.require_samples()?.len();
        let pcm_hash = compute_pcm_hash(&bytes)
            .ok_or_else(|| WaveError::invalid_format("encoded file has no data chunk"))?;

        Ok(EncodedWave {
            bytes,
            pcm_hash,
            channels: self.config.channels(),
            sample_rate: self.config.sample_rate(),
            bits_per_sample: self.config.bits_per_sample(),
            frames: sample_count / usize::from(self.config.channels()),
        })
    }
}
