// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Configuration source selection.
//!
//! The engine accepts its options as a file path or as literal JSON; this
//! module decides which one it gets. Precedence: explicit path > inline
//! JSON > discovered `.csscomb.json` > the engine's built-in preset. The
//! JSON itself is opaque here and passed through unmodified.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::discovery;
use crate::host::{Host, SETTING_CONFIG, SETTING_CONFIG_PATH};

/// Where the engine's configuration comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Explicit path supplied by the caller; bypasses discovery.
    Explicit(PathBuf),
    /// Inline JSON object, passed through unmodified.
    Inline(Value),
    /// Nearest `.csscomb.json` found by walking ancestor directories.
    Discovered(PathBuf),
    /// Nothing found; the engine falls back to its built-in preset.
    Default,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    ExplicitMissing(PathBuf),

    #[error("inline config must be a JSON object")]
    InlineNotObject,
}

impl ConfigSource {
    /// The explicit or inline source carried in host settings, if any.
    ///
    /// These are invocation-wide: when present, per-file discovery is
    /// skipped entirely.
    pub fn from_host(host: &dyn Host) -> Result<Option<Self>, ConfigError> {
        if let Some(value) = host.setting(SETTING_CONFIG_PATH) {
            let path = PathBuf::from(value.as_str().unwrap_or_default());
            if !path.is_file() {
                return Err(ConfigError::ExplicitMissing(path));
            }
            return Ok(Some(ConfigSource::Explicit(path)));
        }

        if let Some(value) = host.setting(SETTING_CONFIG) {
            if !value.is_object() {
                return Err(ConfigError::InlineNotObject);
            }
            return Ok(Some(ConfigSource::Inline(value)));
        }

        Ok(None)
    }

    /// Select the configuration for files under `start_dir`.
    pub fn select(
        host: &dyn Host,
        start_dir: &Path,
        home: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(fixed) = Self::from_host(host)? {
            return Ok(fixed);
        }

        Ok(match discovery::find_config(start_dir, home) {
            Some(path) => ConfigSource::Discovered(path),
            None => ConfigSource::Default,
        })
    }

    /// Argument form handed to the engine bridge: a path, compact JSON
    /// text, or the empty string for the built-in preset.
    pub fn engine_arg(&self) -> String {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
                path.display().to_string()
            }
            ConfigSource::Inline(value) => value.to_string(),
            ConfigSource::Default => String::new(),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Inline(_) => f.write_str("<inline>"),
            ConfigSource::Default => f.write_str("<default>"),
        }
    }
}

/// Starter configuration written by `combfmt init`.
pub const STARTER_CONFIG: &str = r#"{
    "remove-empty-rulesets": true,
    "always-semicolon": true,
    "color-case": "lower",
    "block-indent": "    ",
    "color-shorthand": true,
    "element-case": "lower",
    "leading-zero": false,
    "quotes": "single",
    "space-before-colon": "",
    "space-after-colon": " ",
    "space-before-combinator": " ",
    "space-after-combinator": " ",
    "space-between-declarations": "\n",
    "space-before-opening-brace": " ",
    "space-after-opening-brace": "\n",
    "space-after-selector-delimiter": "\n",
    "space-before-selector-delimiter": "",
    "space-before-closing-brace": "\n",
    "strip-spaces": true,
    "unitless-zero": true,
    "vendor-prefix-align": true
}
"#;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
