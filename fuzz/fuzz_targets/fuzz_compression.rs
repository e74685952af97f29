#![no_main]

use crosshair_share::utils::compression::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Roundtrip must hold for anything under the output cap
    let compressed = compress(data);
    if data.len() <= 64 * 1024 {
        assert_eq!(decompress(&compressed).ok().as_deref(), Some(data));
    }

    // Raw decompression of hostile input must respect the cap and not panic
    if let Ok(out) = decompress(data) {
        assert!(out.len() <= 64 * 1024);
    }
});
