//! Text rendering of encoded bytes as `data:` URIs.
//!
//! The byte-to-text codec is a seam: anything implementing [`TextEncoder`]
//! can stand in for base64, which keeps the encoder testable with a trivial
//! codec.

use base64::Engine;

use crate::error::{WaveError, WaveResult};

/// MIME type of RIFF/WAVE audio.
pub const WAV_MIME: &str = "audio/wav";

/// Prefix of every WAV data URI produced by this crate.
pub const DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

/// A pure `bytes -> text` transform.
pub trait TextEncoder {
    /// Encodes `bytes` as text.
    fn encode_text(&self, bytes: &[u8]) -> String;
}

impl<F> TextEncoder for F
where
    F: Fn(&[u8]) -> String,
{
    fn encode_text(&self, bytes: &[u8]) -> String {
        self(bytes)
    }
}

/// Standard padded base64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Text;

impl TextEncoder for Base64Text {
    fn encode_text(&self, bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }
}

/// Builds `data:<mime>;base64,<payload>`.
pub fn data_uri<T: TextEncoder + ?Sized>(mime: &str, bytes: &[u8], text: &T) -> String {
    let payload = text.encode_text(bytes);
    let mut uri = String::with_capacity(mime.len() + payload.len() + 13);
    uri.push_str("data:");
    uri.push_str(mime);
    uri.push_str(";base64,");
    uri.push_str(&payload);
    uri
}

/// Decodes a `data:audio/wav;base64,` URI back to the file bytes.
pub fn parse_data_uri(uri: &str) -> WaveResult<Vec<u8>> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX).ok_or_else(|| {
        WaveError::invalid_data_uri(format!("expected prefix '{}'", DATA_URI_PREFIX))
    })?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| WaveError::invalid_data_uri(e.to_string()))
}
