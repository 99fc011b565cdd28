use rekognition_sdk::SdkConfig;
use std::{env, fs};

#[test]
fn sdk_config_defaults_are_sane() {
    let d = SdkConfig::default();
    assert_eq!(d.endpoint, "https://rekognition.us-east-1.amazonaws.com");
    assert_eq!(d.region, "us-east-1");
    assert!(d.request_timeout_ms >= 1_000);
}

#[test]
fn sdk_config_file_roundtrip_and_partial_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sdk.toml");
    let cfg = SdkConfig::for_region("ap-northeast-1");
    cfg.write_to_file(&path).unwrap();
    assert_eq!(SdkConfig::load_from_file(&path).unwrap(), cfg);

    fs::write(&path, "request_timeout_ms = 2500\n").unwrap();
    let partial = SdkConfig::load_from_file(&path).unwrap();
    assert_eq!(partial.request_timeout_ms, 2500);
    assert_eq!(partial.endpoint, SdkConfig::default_endpoint());

    fs::write(&path, "endpoint = 'ftp://nope'\n").unwrap();
    let err = SdkConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("endpoint must be an http(s) URL"));
}

#[test]
fn sdk_config_env_overrides() {
    // Preserve and restore environment variables to avoid leaking state between tests
    let keys = ["REKOGNITION_REGION", "REKOGNITION_ENDPOINT", "REKOGNITION_TIMEOUT_MS"];
    let saved: Vec<_> = keys.iter().map(|k| env::var(k).ok()).collect();

    env::set_var("REKOGNITION_REGION", "eu-central-1");
    env::remove_var("REKOGNITION_ENDPOINT");
    env::set_var("REKOGNITION_TIMEOUT_MS", "1500");
    let cfg = SdkConfig::from_env().unwrap();
    assert_eq!(cfg.endpoint, "https://rekognition.eu-central-1.amazonaws.com");
    assert_eq!(cfg.request_timeout_ms, 1500);

    env::set_var("REKOGNITION_ENDPOINT", "http://localhost:4566");
    assert_eq!(SdkConfig::from_env().unwrap().endpoint, "http://localhost:4566");

    env::set_var("REKOGNITION_TIMEOUT_MS", "soon");
    assert!(SdkConfig::from_env().is_err());

    for (key, value) in keys.iter().zip(saved) {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }
}
