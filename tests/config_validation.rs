//! Integration tests for configuration loading and validation

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crosshair_share::config::{
    CodecConfig, CompressionConfig, LimitsConfig, LoggingConfig, MAX_DECOMPRESSED_SIZE,
    MAX_TOKEN_BYTES,
};
use crosshair_share::{ErrorKind, Profile, ShareCodec};
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = CodecConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_defaults_match_contract() {
    let config = CodecConfig::default();
    assert_eq!(config.limits.max_token_bytes, MAX_TOKEN_BYTES);
    assert_eq!(config.limits.max_decompressed_bytes, MAX_DECOMPRESSED_SIZE);
    assert_eq!(config.compression.level, 9);
    assert_eq!(config.logging.log_level, Level::INFO);
}

#[test]
fn test_zero_limits() {
    let config = CodecConfig {
        limits: LimitsConfig {
            max_token_bytes: 0,
            max_decompressed_bytes: 0,
        },
        ..CodecConfig::default()
    };

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Max token bytes must be greater than 0")));
    assert!(errors
        .iter()
        .any(|e| e.contains("Max decompressed bytes must be greater than 0")));
}

#[test]
fn test_token_ceiling_above_decompressed_ceiling() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.limits.max_token_bytes = 100_000;
    });

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("cannot be larger than max decompressed bytes")));
}

#[test]
fn test_excessive_decompressed_ceiling() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.limits.max_decompressed_bytes = 64 * 1024 * 1024;
    });

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Max decompressed bytes too large")));
}

#[test]
fn test_invalid_compression_level() {
    let config = CodecConfig {
        compression: CompressionConfig { level: 12 },
        ..CodecConfig::default()
    };

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Invalid compression level")));
}

#[test]
fn test_logging_requires_an_output() {
    let config = CodecConfig {
        logging: LoggingConfig {
            log_to_console: false,
            ..LoggingConfig::default()
        },
        ..CodecConfig::default()
    };

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("At least one logging output")));
}

#[test]
fn test_file_logging_requires_path() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.logging.log_to_file = true;
        c.logging.log_file_path = None;
    });

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("log_file_path must be specified")));
}

#[test]
fn test_long_app_name() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.logging.app_name = "a".repeat(65);
    });

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("Application name too long")));
}

#[test]
fn test_validate_strict_reports_all_errors() {
    let config = CodecConfig::default_with_overrides(|c| {
        c.limits.max_token_bytes = 0;
        c.compression.level = 99;
    });

    let err = config.validate_strict().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    let message = err.to_string();
    assert!(message.contains("Max token bytes"));
    assert!(message.contains("Invalid compression level"));
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = CodecConfig::from_toml(
        r#"
        [limits]
        max_token_bytes = 4096

        [logging]
        log_level = "debug"
        "#,
    )
    .expect("Partial TOML should parse");

    assert_eq!(config.limits.max_token_bytes, 4096);
    assert_eq!(config.limits.max_decompressed_bytes, MAX_DECOMPRESSED_SIZE);
    assert_eq!(config.compression.level, 9);
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert_eq!(config.logging.app_name, "crosshair-share");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = CodecConfig::from_toml("[limits\nmax_token_bytes = ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = CodecConfig::from_toml("[logging]\nlog_level = \"loud\"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("share.toml");

    let original = CodecConfig::default_with_overrides(|c| {
        c.compression.level = 6;
        c.limits.max_token_bytes = 2048;
    });
    original.save_to_file(&path).expect("save");

    let loaded = CodecConfig::from_file(&path).expect("load");
    assert_eq!(loaded, original);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = CodecConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_example_config_parses() {
    let example = CodecConfig::example_config();
    assert!(example.contains("max_token_bytes"));
    let parsed = CodecConfig::from_toml(&example).expect("example should parse");
    assert_eq!(parsed, CodecConfig::default());
}

#[test]
fn test_codec_uses_configured_level() {
    let stored = ShareCodec::with_config(CodecConfig::default_with_overrides(|c| {
        c.compression.level = 0;
    }))
    .unwrap();
    let best = ShareCodec::new();

    let profile = Profile::cs_classic();
    let stored_token = stored.export(&profile);
    let best_token = best.export(&profile);
    assert!(stored_token.len() > best_token.len());
    assert_eq!(best.import(&stored_token).unwrap(), profile);
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

/// Serializes tests that touch the process environment.
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

const ENV_VARS: [&str; 4] = [
    "CROSSHAIR_SHARE_MAX_TOKEN_BYTES",
    "CROSSHAIR_SHARE_MAX_DECOMPRESSED_BYTES",
    "CROSSHAIR_SHARE_COMPRESSION_LEVEL",
    "CROSSHAIR_SHARE_LOG_LEVEL",
];

/// Run `check` with exactly `vars` set, restoring a clean environment after.
fn with_env<F>(vars: &[(&str, &str)], check: F)
where
    F: FnOnce(),
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    for name in ENV_VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(check));

    for name in ENV_VARS {
        std::env::remove_var(name);
    }
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

#[test]
fn test_from_env_without_overrides_is_default() {
    with_env(&[], || {
        assert_eq!(CodecConfig::from_env().unwrap(), CodecConfig::default());
    });
}

#[test]
fn test_from_env_applies_overrides() {
    with_env(
        &[
            ("CROSSHAIR_SHARE_MAX_TOKEN_BYTES", "4096"),
            ("CROSSHAIR_SHARE_MAX_DECOMPRESSED_BYTES", "32768"),
            ("CROSSHAIR_SHARE_COMPRESSION_LEVEL", "3"),
            ("CROSSHAIR_SHARE_LOG_LEVEL", "debug"),
        ],
        || {
            let config = CodecConfig::from_env().expect("valid overrides");
            assert_eq!(config.limits.max_token_bytes, 4096);
            assert_eq!(config.limits.max_decompressed_bytes, 32768);
            assert_eq!(config.compression.level, 3);
            assert_eq!(config.logging.log_level, Level::DEBUG);
            assert!(config.validate().is_empty());
        },
    );
}

#[test]
fn test_from_env_unparseable_values() {
    let cases = [
        ("CROSSHAIR_SHARE_MAX_TOKEN_BYTES", "lots"),
        ("CROSSHAIR_SHARE_MAX_DECOMPRESSED_BYTES", "-1"),
        ("CROSSHAIR_SHARE_COMPRESSION_LEVEL", "abc"),
        ("CROSSHAIR_SHARE_LOG_LEVEL", "loud"),
    ];

    for (name, value) in cases {
        with_env(&[(name, value)], || {
            let err = CodecConfig::from_env().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config, "{name}={value}");
            assert!(err.to_string().contains(name), "{err}");
        });
    }
}

#[test]
fn test_from_env_out_of_range_level_caught_by_validate() {
    with_env(&[("CROSSHAIR_SHARE_COMPRESSION_LEVEL", "42")], || {
        let config = CodecConfig::from_env().expect("42 parses as u32");
        assert_eq!(config.compression.level, 42);

        let errors = config.validate();
        assert!(errors
            .iter()
            .any(|e| e.contains("Invalid compression level: 42")));
        assert_eq!(
            ShareCodec::with_config(config).unwrap_err().kind(),
            ErrorKind::Config
        );
    });
}
