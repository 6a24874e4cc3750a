// Config file round trips on disk

use eatnow::config::{Config, DEFAULT_BASE_URL};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.api.base_url = "http://10.0.0.5:8000".to_string();
    config.api.timeout_secs = 3;
    config.results.reveal_delay_ms = 500;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.reveal_delay(), Duration::from_millis(500));

    let client = loaded.client_config(None);
    assert_eq!(client.base_url, "http://10.0.0.5:8000");
    assert_eq!(client.timeout, Duration::from_secs(3));
}

#[test]
fn test_hand_written_file_with_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\ntimeout_secs = 30\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(loaded.api.timeout_secs, 30);
    assert_eq!(loaded.results.reveal_delay_ms, 2000);
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}
