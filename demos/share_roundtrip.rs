//! Example: Sharing a crosshair profile as a share code
//!
//! Exports each preset, imports it back into a second collection and shows
//! what happens with a damaged code.
//!
//! Run with: `cargo run --example share_roundtrip`

#![allow(clippy::uninlined_format_args)]

use crosshair_share::config::LoggingConfig;
use crosshair_share::utils::logging::init_logging;
use crosshair_share::{ProfileCollection, ShareCodec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::default())?;

    let codec = ShareCodec::new();
    let mut mine = ProfileCollection::with_presets();
    let mut theirs = ProfileCollection::with_presets();

    println!("=== Share Code Demo ===\n");

    for index in 0..mine.len() {
        mine.select(index);
        let token = mine.export_selected(&codec);
        println!("{}", mine.selected().name);
        println!("   - Share code ({} chars): {}", token.len(), token);

        let imported = theirs.import_token(&codec, &token)?;
        println!("   - Imported as: {}", theirs.profiles()[imported].name);
        println!();
    }

    let damaged = "CCX1-H4sIAAAAAAAACq";
    match codec.import(damaged) {
        Ok(profile) => println!("Unexpectedly imported {:?}", profile),
        Err(e) => println!("Damaged code rejected ({:?}): {}", e.kind(), e),
    }

    Ok(())
}
