//! Deterministic RIFF/WAVE writer.
//!
//! This module writes canonical 44-byte-header PCM WAV files with no
//! timestamps or variable metadata, so identical input always yields
//! identical bytes. The hash of the PCM data can be used to compare renders.
//!
//! Submodules:
//! - [`format`]: header field arithmetic
//! - [`pack`]: bit-width-parameterized sample packing
//! - [`writer`]: container serialization
//! - [`pcm`]: read-back and hashing of the data chunk
//! - [`result`]: rendered output summary

pub mod format;
pub mod pack;
pub mod pcm;
pub mod result;
pub mod writer;


pub use format::{WavFormat, HEADER_SIZE};
pub use pack::{quantize, SamplePacker};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::EncodedWave;
pub use writer::{write_header, write_wav, write_wav_to_vec};
