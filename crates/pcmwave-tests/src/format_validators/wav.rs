//! WAV file format validator.

use super::FormatError;

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Value of the RIFF `ChunkSize` field.
    pub riff_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate (sample_rate * channels * bits_per_sample / 8).
    pub byte_rate: u32,
    /// Block alignment (channels * bits_per_sample / 8).
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the data chunk in bytes.
    pub data_size: u32,
    /// Offset of the first data byte.
    pub data_offset: usize,
    /// Number of complete frames (samples per channel).
    pub num_frames: usize,
}

/// Validate WAV file format and extract header information.
///
/// Parses the RIFF/WAVE header structure and validates:
/// - RIFF chunk identifier and size against the buffer length
/// - WAVE format identifier
/// - fmt sub-chunk with audio parameters
/// - data sub-chunk presence and bounds
///
/// # Arguments
/// * `data` - Raw bytes of the WAV file
///
/// # Returns
/// * `Ok(WavInfo)` - Successfully parsed WAV file information
/// * `Err(FormatError)` - Invalid or corrupted WAV file
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    const MIN_HEADER_SIZE: usize = 44;

    if data.len() < MIN_HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                MIN_HEADER_SIZE
            ),
        ));
    }

    if &data[0..4] != b"RIFF" {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Invalid RIFF header: expected 'RIFF', got {:?}",
                &data[0..4]
            ),
            0,
        ));
    }

    let riff_size = read_u32(data, 4);
    if riff_size as usize + 8 != data.len() {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "RIFF size {} does not match file length {}",
                riff_size,
                data.len()
            ),
            4,
        ));
    }

    if &data[8..12] != b"WAVE" {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Invalid WAVE format: expected 'WAVE', got {:?}",
                &data[8..12]
            ),
            8,
        ));
    }

    let mut offset = 12;
    let mut fmt: Option<[u8; 16]> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4) as usize;

        if chunk_id == b"fmt " {
            if chunk_size < 16 {
                return Err(FormatError::at_offset(
                    "WAV",
                    format!("fmt chunk too small: {} bytes", chunk_size),
                    offset,
                ));
            }
            if offset + 8 + 16 > data.len() {
                return Err(FormatError::at_offset("WAV", "Truncated fmt chunk", offset));
            }

            let mut body = [0u8; 16];
            body.copy_from_slice(&data[offset + 8..offset + 24]);
            fmt = Some(body);
        }

        if chunk_id == b"data" {
            let Some(fmt) = fmt else {
                return Err(FormatError::at_offset(
                    "WAV",
                    "data chunk found before fmt chunk",
                    offset,
                ));
            };

            let data_offset = offset + 8;
            if data_offset + chunk_size > data.len() {
                return Err(FormatError::at_offset(
                    "WAV",
                    format!("data chunk of {} bytes runs past end of file", chunk_size),
                    offset,
                ));
            }

            let block_align = u16::from_le_bytes([fmt[12], fmt[13]]);
            let num_frames = if block_align > 0 {
                chunk_size / block_align as usize
            } else {
                0
            };

            return Ok(WavInfo {
                riff_size,
                audio_format: u16::from_le_bytes([fmt[0], fmt[1]]),
                channels: u16::from_le_bytes([fmt[2], fmt[3]]),
                sample_rate: u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]),
                byte_rate: u32::from_le_bytes([fmt[8], fmt[9], fmt[10], fmt[11]]),
                block_align,
                bits_per_sample: u16::from_le_bytes([fmt[14], fmt[15]]),
                data_size: chunk_size as u32,
                data_offset,
                num_frames,
            });
        }

        // Move to next chunk (chunks are word-aligned)
        let padded_size = (chunk_size + 1) & !1;
        offset += 8 + padded_size;
    }

    if fmt.is_none() {
        return Err(FormatError::new("WAV", "Missing fmt chunk"));
    }

    Err(FormatError::new("WAV", "Missing data chunk"))
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
