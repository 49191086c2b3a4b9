//! Encoder lifecycle tests: configure, set data, encode, render as text.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pcmwave-tests --test wave_encoder
//! ```

use pretty_assertions::assert_eq;

use pcmwave::{
    parse_data_uri, quantize, Base64Text, TextEncoder, WaveConfig, WaveEncoder, WaveError,
    DATA_URI_PREFIX,
};
use pcmwave_tests::determinism::verify_determinism;
use pcmwave_tests::format_validators::{decode_wav_data_uri, validate_wav};
use pcmwave_tests::init_logging;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn default_encoder_uses_documented_defaults() {
    let encoder = WaveEncoder::default();
    assert_eq!(encoder.config().channels(), 1);
    assert_eq!(encoder.config().sample_rate(), 44100);
    assert_eq!(encoder.config().bits_per_sample(), 16);
    assert!(!encoder.has_data());
}

#[test]
fn options_object_configuration() {
    let config: WaveConfig =
        serde_json::from_str(r#"{"channels": 2, "sampleRate": 8000, "bitsPerSample": 8}"#).unwrap();
    let mut encoder = WaveEncoder::new(config);
    encoder.set_data(vec![0, 0]);

    let info = validate_wav(&encoder.encode().unwrap()).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, 8000);
    assert_eq!(info.bits_per_sample, 8);
}

#[test]
fn rejected_configuration_never_reaches_encoder() {
    for json in [
        r#"{"channels": 0}"#,
        r#"{"sampleRate": 0}"#,
        r#"{"bitsPerSample": 12}"#,
        r#"{"channels": 65535, "bitsPerSample": 32}"#,
    ] {
        let err = WaveConfig::from_json(json).unwrap_err();
        assert!(err.is_configuration_error(), "{} -> {}", json, err);
    }
}

// ============================================================================
// Absent vs. empty buffer
// ============================================================================

#[test]
fn encode_before_set_data_is_missing_data() {
    let encoder = WaveEncoder::new(WaveConfig::new(1, 8000, 16).unwrap());

    let err = encoder.encode().unwrap_err();
    assert!(matches!(err, WaveError::MissingData));
    assert_eq!(err.code(), "WAVE_001");

    assert!(matches!(encoder.to_data_uri(), Err(WaveError::MissingData)));
}

#[test]
fn empty_buffer_encodes_header_only() {
    init_logging();
    let mut encoder = WaveEncoder::new(WaveConfig::new(1, 8000, 16).unwrap());
    encoder.set_data(Vec::<i32>::new());

    let wav = encoder.encode().unwrap();
    assert_eq!(wav.len(), 44);

    let info = validate_wav(&wav).unwrap();
    assert_eq!(info.riff_size, 36);
    assert_eq!(info.data_size, 0);
}

// ============================================================================
// Text rendering
// ============================================================================

#[test]
fn data_uri_has_wav_prefix() {
    let mut encoder = WaveEncoder::default();
    encoder.set_data(vec![91]);
    let uri = encoder.to_data_uri().unwrap();

    assert!(uri.starts_with("data:audio/wav;base64,"));
    assert!(uri.starts_with(DATA_URI_PREFIX));
}

#[test]
fn data_uri_decodes_to_encoded_bytes() {
    let mut encoder = WaveEncoder::new(WaveConfig::stereo(22050).unwrap());
    encoder.set_data(vec![-32768, 32767, 0, 1]);

    let uri = encoder.to_data_uri().unwrap();
    let bytes = encoder.encode().unwrap();

    assert_eq!(decode_wav_data_uri(&uri).unwrap(), bytes);
    assert_eq!(parse_data_uri(&uri).unwrap(), bytes);
}

#[test]
fn data_uri_payload_is_standard_base64() {
    let mut encoder = WaveEncoder::default();
    encoder.set_data(vec![1, 2, 3]);

    let uri = encoder.to_data_uri().unwrap();
    let expected = Base64Text.encode_text(&encoder.encode().unwrap());
    assert_eq!(&uri[DATA_URI_PREFIX.len()..], expected);
}

#[test]
fn injected_codec_receives_encoded_bytes() {
    struct Recording(std::cell::RefCell<Vec<u8>>);

    impl TextEncoder for Recording {
        fn encode_text(&self, bytes: &[u8]) -> String {
            self.0.borrow_mut().extend_from_slice(bytes);
            "payload".to_string()
        }
    }

    let mut encoder = WaveEncoder::new(WaveConfig::new(1, 8000, 8).unwrap());
    encoder.set_data(vec![128, 129]);

    let codec = Recording(Default::default());
    let uri = encoder.to_data_uri_with(&codec).unwrap();

    assert_eq!(uri, "data:audio/wav;base64,payload");
    assert_eq!(codec.0.into_inner(), encoder.encode().unwrap());
}

// ============================================================================
// Buffer replacement and determinism
// ============================================================================

#[test]
fn set_data_changes_output() {
    let mut encoder = WaveEncoder::default();
    encoder.set_data(vec![91]);
    let before = encoder.to_data_uri().unwrap();

    encoder.set_data(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let after = encoder.to_data_uri().unwrap();

    assert_ne!(before, after);
}

#[test]
fn set_data_discards_previous_buffer() {
    let mut encoder = WaveEncoder::new(WaveConfig::new(1, 8000, 8).unwrap());
    encoder.set_data(vec![1, 2, 3, 4]);
    encoder.set_data(vec![9]);

    let wav = encoder.encode().unwrap();
    assert_eq!(wav.len(), 45);
    assert_eq!(wav[44], 9);
}

#[test]
fn repeated_encodes_are_identical() {
    let mut encoder = WaveEncoder::new(WaveConfig::new(2, 44100, 24).unwrap());
    encoder.set_data((0..512).map(|i| i * 997 - 200_000).collect::<Vec<i32>>());

    verify_determinism(|| encoder.encode().unwrap(), 4).assert_deterministic();
    verify_determinism(|| encoder.to_data_uri().unwrap(), 3).assert_deterministic();
}

// ============================================================================
// Upstream sample producers
// ============================================================================

#[test]
fn quantized_tone_round_trips_through_validator() {
    init_logging();
    let config = WaveConfig::mono(8000).unwrap();
    let tone: Vec<f64> = (0..800)
        .map(|i| (i as f64 * 440.0 * std::f64::consts::TAU / 8000.0).sin())
        .collect();

    let mut encoder = WaveEncoder::new(config);
    encoder.set_data(quantize(&tone, config.bits_per_sample()));

    let wave = encoder.render().unwrap();
    assert_eq!(wave.frames, 800);
    assert!((wave.duration_seconds() - 0.1).abs() < 1e-12);

    let info = validate_wav(&wave.bytes).unwrap();
    assert_eq!(info.num_frames, 800);

    let first = i16::from_le_bytes([wave.bytes[44], wave.bytes[45]]);
    assert_eq!(first, 0);
}

#[test]
fn interleaving_is_preserved() {
    let mut encoder = WaveEncoder::new(WaveConfig::stereo(44100).unwrap());
    // L R L R
    encoder.set_data(vec![100, -100, 200, -200]);

    let wav = encoder.encode().unwrap();
    let samples: Vec<i16> = wav[44..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(samples, vec![100, -100, 200, -200]);
}
