// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Narrow host abstraction for settings and the active file.
//!
//! The config selector and the engine only ever need two things from
//! whatever is hosting them: a setting looked up by key, and the path of
//! the file currently being processed. Keeping that surface this small is
//! what lets the same resolution code serve the CLI and any future editor
//! integration.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Inline configuration object (the engine's options, passed through).
pub const SETTING_CONFIG: &str = "config";
/// Explicit path to a configuration file; bypasses discovery.
pub const SETTING_CONFIG_PATH: &str = "config-path";
/// Explicit path to the Node binary.
pub const SETTING_NODE_PATH: &str = "node-path";

/// The two capabilities a host must provide.
pub trait Host {
    /// Look up a setting by key.
    fn setting(&self, key: &str) -> Option<Value>;

    /// Path of the file currently being processed, if there is one.
    fn current_file(&self) -> Option<&Path>;
}

/// Host implementation backed by parsed CLI flags and environment.
#[derive(Debug, Default, Clone)]
pub struct CliHost {
    settings: serde_json::Map<String, Value>,
    current_file: Option<PathBuf>,
}

impl CliHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(mut self, key: &str, value: Value) -> Self {
        self.settings.insert(key.to_string(), value);
        self
    }

    pub fn with_current_file(mut self, path: PathBuf) -> Self {
        self.current_file = Some(path);
        self
    }

    /// Build the host from parsed CLI flags and environment.
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self, serde_json::Error> {
        let mut host = Self::new();
        if let Some(path) = &cli.config {
            host = host
                .with_setting(SETTING_CONFIG_PATH, Value::String(path.display().to_string()));
        }
        if let Some(json) = &cli.config_json {
            host = host.with_setting(SETTING_CONFIG, serde_json::from_str(json)?);
        }
        if let Some(node) = &cli.node_path {
            host =
                host.with_setting(SETTING_NODE_PATH, Value::String(node.display().to_string()));
        }
        Ok(host)
    }
}

impl Host for CliHost {
    fn setting(&self, key: &str) -> Option<Value> {
        self.settings.get(key).cloned()
    }

    fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
