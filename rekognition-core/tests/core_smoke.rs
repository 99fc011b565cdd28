use rekognition_core::{config::CoreConfig, logging, Blob, Timestamp};
use std::{env, fs};

#[test]
fn config_default_is_valid_and_roundtrip_file() {
    let cfg = CoreConfig::default();
    assert!(cfg.validate().is_ok());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    cfg.write_to_file(&path).unwrap();
    let s = fs::read_to_string(&path).unwrap();
    assert!(s.contains("log_level"));
    let loaded = CoreConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg, loaded);
}

#[test]
fn config_env_override_and_validation() {
    // Preserve and restore environment variables to avoid leaking state between tests
    let old_level = env::var("REKOGNITION_LOG_LEVEL").ok();
    let old_ansi = env::var("REKOGNITION_LOG_ANSI").ok();

    env::set_var("REKOGNITION_LOG_LEVEL", "debug");
    env::set_var("REKOGNITION_LOG_ANSI", "true");
    let cfg = CoreConfig::from_env().unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert!(cfg.log_ansi);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "log_level='rekognition_sdk=loud'\n").unwrap();
    let err = CoreConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err}").contains("invalid log_level"));

    match old_level {
        Some(v) => env::set_var("REKOGNITION_LOG_LEVEL", v),
        None => env::remove_var("REKOGNITION_LOG_LEVEL"),
    }
    match old_ansi {
        Some(v) => env::set_var("REKOGNITION_LOG_ANSI", v),
        None => env::remove_var("REKOGNITION_LOG_ANSI"),
    }
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "log_ansi = true\n").unwrap();
    let cfg = CoreConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.log_ansi);
}

#[test]
fn logging_init_only_once() {
    let cfg = CoreConfig::default();
    let first = logging::init(&cfg);
    let second = logging::init(&cfg);
    assert!(first.is_ok());
    assert!(second.is_err());
}

#[test]
fn primitives_convert_from_std_types() {
    let blob = Blob::from(&b"abc"[..]);
    assert_eq!(blob.len(), 3);
    let ts = Timestamp::from(chrono::DateTime::<chrono::Utc>::from_timestamp_millis(42_123).unwrap());
    assert_eq!(ts.epoch_seconds(), 42.123);
}
