//! Data URI decoding, independent of the encoder's own parser.

use base64::Engine;

use super::FormatError;

const PREFIX: &str = "data:audio/wav;base64,";

/// Strip the `data:audio/wav;base64,` prefix and decode the payload.
pub fn decode_wav_data_uri(uri: &str) -> Result<Vec<u8>, FormatError> {
    let payload = uri
        .strip_prefix(PREFIX)
        .ok_or_else(|| FormatError::new("data URI", format!("missing prefix '{}'", PREFIX)))?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| FormatError::new("data URI", e.to_string()))
}
