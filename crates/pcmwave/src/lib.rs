//! pcmwave
//!
//! Encodes an in-memory sequence of PCM samples as a RIFF/WAVE file and
//! renders the result as an embeddable `data:audio/wav;base64,` URI.
//!
//! # Overview
//!
//! The flow is fixed: build a [`WaveConfig`], hand it to a [`WaveEncoder`],
//! supply the interleaved samples with [`WaveEncoder::set_data`], then call
//! [`WaveEncoder::encode`] for the bytes or [`WaveEncoder::to_data_uri`] for
//! the text form. Encoding never mutates the encoder and is byte-for-byte
//! deterministic.
//!
//! # Example
//!
//! ```
//! use pcmwave::{quantize, WaveConfig, WaveEncoder};
//!
//! let config = WaveConfig::from_json(r#"{"channels": 1, "sampleRate": 8000}"#)?;
//! let tone: Vec<f64> = (0..8000)
//!     .map(|i| (i as f64 * 440.0 * std::f64::consts::TAU / 8000.0).sin())
//!     .collect();
//!
//! let mut encoder = WaveEncoder::new(config);
//! encoder.set_data(quantize(&tone, config.bits_per_sample()));
//!
//! let uri = encoder.to_data_uri()?;
//! assert!(uri.starts_with("data:audio/wav;base64,"));
//! # Ok::<(), pcmwave::WaveError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`config`] - Validated format configuration and defaults
//! - [`encoder`] - The stateful encoder
//! - [`error`] - Error type and codes
//! - [`text`] - Data URI rendering and the text codec seam
//! - [`wav`] - Header arithmetic, sample packing and container writing

pub mod config;
pub mod encoder;
pub mod error;
pub mod text;
pub mod wav;

// Re-export main types at crate root
pub use config::WaveConfig;
pub use encoder::WaveEncoder;
pub use error::{WaveError, WaveResult};
pub use text::{parse_data_uri, Base64Text, TextEncoder, DATA_URI_PREFIX};
pub use wav::{quantize, EncodedWave, SamplePacker, WavFormat};
