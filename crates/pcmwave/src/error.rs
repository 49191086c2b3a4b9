//! Error types for the WAV encoder.

use thiserror::Error;

/// Result type for encoder operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// Errors that can occur while configuring or running the encoder.
#[derive(Debug, Error)]
pub enum WaveError {
    /// `encode` was called before any sample buffer was assigned.
    #[error("no sample data has been set")]
    MissingData,

    /// Channel count of zero.
    #[error("invalid channel count: {channels}")]
    InvalidChannels {
        /// The rejected channel count.
        channels: u16,
    },

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Bit depth outside the supported PCM widths.
    #[error("unsupported bits per sample: {bits} (expected 8, 16, 24 or 32)")]
    UnsupportedBitDepth {
        /// The rejected bit depth.
        bits: u16,
    },

    /// A derived header field does not fit its on-disk width.
    #[error("invalid format: {message}")]
    InvalidFormat {
        /// Error message.
        message: String,
    },

    /// The data chunk would overflow the 32-bit RIFF size fields.
    #[error("sample data too large: {samples} samples at {bits} bits")]
    DataTooLarge {
        /// Number of samples in the buffer.
        samples: usize,
        /// Bits per sample.
        bits: u16,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Malformed `data:` URI.
    #[error("invalid data URI: {message}")]
    InvalidDataUri {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid data URI error.
    pub fn invalid_data_uri(message: impl Into<String>) -> Self {
        Self::InvalidDataUri {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            WaveError::MissingData => "WAVE_001",
            WaveError::InvalidChannels { .. } => "WAVE_002",
            WaveError::InvalidSampleRate { .. } => "WAVE_003",
            WaveError::UnsupportedBitDepth { .. } => "WAVE_004",
            WaveError::InvalidFormat { .. } => "WAVE_005",
            WaveError::DataTooLarge { .. } => "WAVE_006",
            WaveError::Config(_) => "WAVE_007",
            WaveError::InvalidDataUri { .. } => "WAVE_008",
            WaveError::Io(_) => "WAVE_009",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "wave"
    }

    /// Returns true for errors caused by a rejected configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            WaveError::InvalidChannels { .. }
                | WaveError::InvalidSampleRate { .. }
                | WaveError::UnsupportedBitDepth { .. }
                | WaveError::InvalidFormat { .. }
                | WaveError::Config(_)
        )
    }
}
