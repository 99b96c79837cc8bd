#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::discovery::CONFIG_FILE_NAME;
use crate::host::{CliHost, SETTING_CONFIG, SETTING_CONFIG_PATH};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn explicit_path_wins_over_everything() {
    let tmp = TempDir::new().unwrap();
    let explicit = tmp.path().join("custom.json");
    fs::write(&explicit, "{}").unwrap();
    fs::write(tmp.path().join(CONFIG_FILE_NAME), "{}").unwrap();

    let host = CliHost::new()
        .with_setting(SETTING_CONFIG_PATH, json!(explicit.display().to_string()))
        .with_setting(SETTING_CONFIG, json!({"quotes": "single"}));

    let source = ConfigSource::select(&host, tmp.path(), None).unwrap();
    assert_eq!(source, ConfigSource::Explicit(explicit));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let host = CliHost::new().with_setting(SETTING_CONFIG_PATH, json!("/no/such/file.json"));
    assert!(matches!(
        ConfigSource::from_host(&host),
        Err(ConfigError::ExplicitMissing(_))
    ));
}

#[test]
fn inline_config_beats_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE_NAME), "{}").unwrap();

    let host = CliHost::new().with_setting(SETTING_CONFIG, json!({"quotes": "double"}));
    let source = ConfigSource::select(&host, tmp.path(), None).unwrap();
    assert_eq!(source, ConfigSource::Inline(json!({"quotes": "double"})));
}

#[test]
fn inline_config_must_be_an_object() {
    let host = CliHost::new().with_setting(SETTING_CONFIG, json!(["not", "an", "object"]));
    assert!(matches!(
        ConfigSource::from_host(&host),
        Err(ConfigError::InlineNotObject)
    ));
}

#[test]
fn discovery_runs_without_overrides() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join(CONFIG_FILE_NAME);
    fs::write(&config, "{}").unwrap();

    let source = ConfigSource::select(&CliHost::new(), tmp.path(), None).unwrap();
    assert_eq!(source, ConfigSource::Discovered(config));
}

#[test]
fn falls_back_to_engine_default() {
    let tmp = TempDir::new().unwrap();
    let source = ConfigSource::select(&CliHost::new(), tmp.path(), Some(tmp.path())).unwrap();
    assert_eq!(source, ConfigSource::Default);
}

#[test]
fn engine_arg_forms() {
    assert_eq!(ConfigSource::Default.engine_arg(), "");
    assert_eq!(
        ConfigSource::Explicit("/a/b.json".into()).engine_arg(),
        "/a/b.json"
    );
    assert_eq!(
        ConfigSource::Inline(json!({"a": 1})).engine_arg(),
        r#"{"a":1}"#
    );
}

#[test]
fn display_forms_for_dry_run_output() {
    assert_eq!(ConfigSource::Default.to_string(), "<default>");
    assert_eq!(ConfigSource::Inline(json!({})).to_string(), "<inline>");
    assert_eq!(
        ConfigSource::Discovered("/p/.csscomb.json".into()).to_string(),
        "/p/.csscomb.json"
    );
}

#[test]
fn starter_config_is_valid_json() {
    let value: serde_json::Value = serde_json::from_str(STARTER_CONFIG).unwrap();
    assert!(value.is_object());
}
