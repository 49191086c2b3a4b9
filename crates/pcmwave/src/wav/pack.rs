//! Packing integer samples into little-endian PCM bytes.
//!
//! The packer is parameterized by bit width rather than having one code path
//! per depth. Each sample is reduced modulo `2^bits` and its low `bits / 8`
//! bytes are written least significant first, so a negative value lands as
//! its two's-complement bit pattern and oversized values wrap.

use std::io::{self, Write};

use crate::error::{WaveError, WaveResult};

use super::format::WavFormat;

/// Writes samples of a fixed bit width as little-endian unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePacker {
    bytes_per_sample: usize,
}

impl SamplePacker {
    /// Creates a packer for `bits_per_sample`-wide samples.
    ///
    /// Widths other than 8, 16, 24 and 32 are rejected.
    pub fn new(bits_per_sample: u16) -> WaveResult<Self> {
        if !matches!(bits_per_sample, 8 | 16 | 24 | 32) {
            return Err(WaveError::UnsupportedBitDepth {
                bits: bits_per_sample,
            });
        }
        Ok(Self {
            bytes_per_sample: usize::from(bits_per_sample / 8),
        })
    }

    /// Number of bytes each packed sample occupies.
    pub fn bytes_per_sample(&self) -> usize {
        self.bytes_per_sample
    }

    /// Little-endian bytes of one sample, truncated to the packer's width.
    #[inline]
    fn sample_bytes(&self, sample: i32) -> [u8; 4] {
        (sample as u32).to_le_bytes()
    }

    /// Appends packed samples to `out`.
    pub fn pack_into(&self, samples: &[i32], out: &mut Vec<u8>) {
        out.reserve(samples.len() * self.bytes_per_sample);
        for &sample in samples {
            out.extend_from_slice(&self.sample_bytes(sample)[..self.bytes_per_sample]);
        }
    }

    /// Packs samples into a new byte vector.
    pub fn pack(&self, samples: &[i32]) -> Vec<u8> {
        let mut out = Vec::with_capacity(samples.len() * self.bytes_per_sample);
        self.pack_into(samples, &mut out);
        out
    }

    /// Streams packed samples to a writer.
    pub fn write_samples<W: Write>(&self, writer: &mut W, samples: &[i32]) -> io::Result<()> {
        for &sample in samples {
            writer.write_all(&self.sample_bytes(sample)[..self.bytes_per_sample])?;
        }
        Ok(())
    }
}

impl From<&WavFormat> for SamplePacker {
    fn from(format: &WavFormat) -> Self {
        Self {
            bytes_per_sample: usize::from(format.bytes_per_sample()),
        }
    }
}

/// Converts normalized f64 samples to the integer domain of a PCM width.
///
/// Samples are expected to be in range [-1.0, 1.0]. Values outside this range
/// will be clipped. 8-bit PCM is unsigned with silence at 128; wider depths
/// are signed and symmetric around 0 (full scale maps to `±(2^(bits-1) - 1)`).
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
/// * `bits_per_sample` - Target width (8, 16, 24 or 32)
///
/// # Returns
/// Integer samples ready for [`SamplePacker`]
pub fn quantize(samples: &[f64], bits_per_sample: u16) -> Vec<i32> {
    let full_scale = ((1i64 << (bits_per_sample.clamp(8, 32) - 1)) - 1) as f64;
    let offset = if bits_per_sample == 8 { 128.0 } else { 0.0 };

    samples
        .iter()
        .map(|&sample| {
            // NaN clamps to NaN; treat it as silence
            let clipped = if sample.is_nan() {
                0.0
            } else {
                sample.clamp(-1.0, 1.0)
            };
            (clipped * full_scale + offset).round() as i32
        })
        .collect()
}
