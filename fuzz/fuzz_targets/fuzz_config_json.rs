#![no_main]

use libfuzzer_sys::fuzz_target;
use pcmwave::{WaveConfig, WaveEncoder};

// Any config that parses must encode a structurally valid file.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = WaveConfig::from_json(text) else {
        return;
    };

    let samples: Vec<i32> = data.iter().map(|&b| i32::from(b) - 128).collect();
    let mut encoder = WaveEncoder::new(config);
    encoder.set_data(samples);

    let wav = encoder.encode().expect("validated config must encode");
    let data_size = data.len() * usize::from(config.bits_per_sample() / 8);
    assert_eq!(wav.len(), 44 + data_size);
    assert_eq!(pcmwave::wav::extract_pcm_data(&wav).map(<[u8]>::len), Some(data_size));
});
