//! Rendered WAV output with summary metadata.

use crate::text::{data_uri, Base64Text, TextEncoder, WAV_MIME};

use super::pcm::extract_pcm_data;

/// A rendered WAV file together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWave {
    /// Complete WAV file bytes.
    pub bytes: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of complete frames (samples per channel).
    pub frames: usize,
}

impl EncodedWave {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    /// The PCM payload of the data chunk, empty if `bytes` is not a WAV file.
    pub fn pcm_data(&self) -> &[u8] {
        extract_pcm_data(&self.bytes).unwrap_or_default()
    }

    /// Renders the file as a `data:audio/wav;base64,` URI.
    pub fn to_data_uri(&self) -> String {
        self.to_data_uri_with(&Base64Text)
    }

    /// Renders the file as a data URI using the given text codec.
    pub fn to_data_uri_with<T: TextEncoder + ?Sized>(&self, text: &T) -> String {
        data_uri(WAV_MIME, &self.bytes, text)
    }
}
