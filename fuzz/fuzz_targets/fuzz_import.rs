#![no_main]

use crosshair_share::core::profile::OPACITY_RANGE;
use crosshair_share::utils::base64url;
use crosshair_share::ShareCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = ShareCodec::new();

    // Arbitrary text as a token
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(profile) = codec.import(text) {
            assert!(profile.opacity >= OPACITY_RANGE.0 && profile.opacity <= OPACITY_RANGE.1);
        }
    }

    // Arbitrary bytes behind a well-formed transport layer
    let token = format!("CCX1-{}", base64url::encode(data));
    let _ = codec.import(&token);
});
