//! Core WAV container writing.

use std::io::{self, Write};

use super::format::{WavFormat, FMT_CHUNK_SIZE, FORMAT_PCM, HEADER_SIZE};

/// Writes the 44-byte canonical header for a data chunk of `data_size` bytes.
///
/// All multi-byte fields are little-endian. Fails with `InvalidInput` if
/// `data_size` leaves no room for the RIFF size field.
pub fn write_header<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    data_size: u32,
) -> io::Result<()> {
    // Total file size minus 8 bytes for RIFF header
    let file_size = format.riff_size(data_size).ok_or_else(size_limit_error)?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&FMT_CHUNK_SIZE.to_le_bytes())?;
    writer.write_all(&FORMAT_PCM.to_le_bytes())?;
    writer.write_all(&format.channels().to_le_bytes())?;
    writer.write_all(&format.sample_rate().to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample().to_le_bytes())?;

    // data chunk header
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    Ok(())
}

fn size_limit_error() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        "PCM data exceeds RIFF size limit",
    )
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Packed PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error. Fails with `InvalidInput` if
/// `pcm_data` does not fit in a 32-bit RIFF chunk.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| size_limit_error())?;

    write_header(writer, format, data_size)?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Packed PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}
