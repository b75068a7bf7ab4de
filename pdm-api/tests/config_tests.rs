//! Unit tests for configuration resolution
//!
//! Covers the per-key priority chain (CLI/env, TOML file, default), the
//! required goals URL, and file-handling edge cases.
//!
//! Note: tests that manipulate environment variables are marked with
//! #[serial] so they never race each other.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pdm_api::config::{
    Args, Config, DEFAULT_CACHE_TTL_SECS, DEFAULT_CORS_ORIGIN, DEFAULT_PORT,
};
use serial_test::serial;

/// Args carrying only the required goals URL
fn base_args() -> Args {
    Args {
        goals_sheet_url: Some("https://example.test/goals.csv".to_string()),
        ..Args::default()
    }
}

/// An empty config file, pinned so the user's real one is never read
fn empty_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("pdm-api.toml");
    std::fs::write(&path, "").expect("Should write config file");
    path
}

#[test]
fn test_defaults_applied_when_nothing_configured() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = base_args();
    args.config = Some(empty_config(&dir));

    let config = Config::resolve(&args).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    assert_eq!(config.cache_ttl, Duration::from_secs(DEFAULT_CACHE_TTL_SECS));
    assert_eq!(config.goals_sheet_url, "https://example.test/goals.csv");
    assert_eq!(config.secretariats_sheet_url, None);
}

#[test]
fn test_toml_file_supplies_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdm-api.toml");
    std::fs::write(
        &path,
        r#"
port = 4100
cors_origin = "https://plan.example.test"
goals_sheet_url = "https://example.test/from-toml.csv"
secretariats_sheet_url = "https://example.test/secretariats.csv"
cache_ttl_secs = 60
"#,
    )
    .unwrap();

    let args = Args {
        config: Some(path),
        ..Args::default()
    };
    let config = Config::resolve(&args).unwrap();
    assert_eq!(config.port, 4100);
    assert_eq!(config.cors_origin, "https://plan.example.test");
    assert_eq!(config.goals_sheet_url, "https://example.test/from-toml.csv");
    assert_eq!(
        config.secretariats_sheet_url.as_deref(),
        Some("https://example.test/secretariats.csv")
    );
    assert_eq!(config.cache_ttl, Duration::from_secs(60));
}

#[test]
fn test_cli_beats_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdm-api.toml");
    std::fs::write(
        &path,
        "port = 4100\ngoals_sheet_url = \"https://example.test/from-toml.csv\"\n",
    )
    .unwrap();

    let mut args = base_args();
    args.config = Some(path);
    args.port = Some(8080);

    let config = Config::resolve(&args).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.goals_sheet_url, "https://example.test/goals.csv");
}

#[test]
fn test_missing_goals_url_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = Args {
        config: Some(empty_config(&dir)),
        ..Args::default()
    };

    let err = Config::resolve(&args).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("PDM_GOALS_SHEET_URL"), "got: {message}");
}

#[test]
fn test_explicitly_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = base_args();
    args.config = Some(dir.path().join("no-such.toml"));

    assert!(Config::resolve(&args).is_err());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdm-api.toml");
    std::fs::write(&path, "port = not-a-number\n").unwrap();

    let mut args = base_args();
    args.config = Some(path);

    assert!(Config::resolve(&args).is_err());
}

#[test]
fn test_trailing_slash_stripped_from_cors_origin() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = base_args();
    args.config = Some(empty_config(&dir));
    args.cors_origin = Some("http://localhost:3000/".to_string());

    let config = Config::resolve(&args).unwrap();
    assert_eq!(config.cors_origin, "http://localhost:3000");
}

#[test]
fn test_blank_secretariats_url_treated_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = base_args();
    args.config = Some(empty_config(&dir));
    args.secretariats_sheet_url = Some("   ".to_string());

    let config = Config::resolve(&args).unwrap();
    assert_eq!(config.secretariats_sheet_url, None);
}

#[test]
#[serial]
fn test_env_vars_feed_the_arguments() {
    env::set_var("PDM_PORT", "8123");
    env::set_var("PDM_GOALS_SHEET_URL", "https://example.test/env.csv");

    let args = Args::try_parse_from(["pdm-api"]).unwrap();
    assert_eq!(args.port, Some(8123));
    assert_eq!(
        args.goals_sheet_url.as_deref(),
        Some("https://example.test/env.csv")
    );

    env::remove_var("PDM_PORT");
    env::remove_var("PDM_GOALS_SHEET_URL");
}

#[test]
#[serial]
fn test_cli_flag_beats_env_var() {
    env::set_var("PDM_PORT", "8123");

    let args = Args::try_parse_from(["pdm-api", "--port", "9000"]).unwrap();
    assert_eq!(args.port, Some(9000));

    env::remove_var("PDM_PORT");
}
