//! PCM data extraction and hashing utilities.

/// Extracts the `data` chunk payload from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only. Walks the RIFF
/// chunk list, so files carrying extra chunks before `data` are handled.
///
/// # Returns
/// PCM data if found, or None if the buffer is not a well-formed WAV file
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;

        if chunk_id == b"data" {
            return wav_data.get(body_start..body_end);
        }

        // Chunks are word aligned
        pos = body_end.saturating_add(chunk_size & 1);
    }

    None
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// # Returns
/// Hex digest of the data chunk, or None if the format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
