// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Config file discovery.
//!
//! Walks from a file's directory up toward the filesystem root looking for
//! `.csscomb.json`, stopping at the user's home directory.

use std::path::{Path, PathBuf};

/// Name of the project-level configuration file.
pub const CONFIG_FILE_NAME: &str = ".csscomb.json";

/// Find `.csscomb.json` starting from `start_dir` and walking up.
///
/// The walk stops with `None` at `home` (project config lookup never
/// escapes the user's home directory) or at the filesystem root,
/// whichever comes first. The root check matters for start directories
/// that are not under `home` at all, such as another drive or a network
/// mount; without it the walk would never hit the home boundary.
///
/// Probe failures (unreadable directories) count as not-found for that
/// level and the walk continues upward.
pub fn find_config(start_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    // An empty start directory is caller error; refuse it outright
    // instead of probing whatever the process cwd happens to be.
    if start_dir.as_os_str().is_empty() {
        tracing::warn!("config discovery invoked with an empty start directory");
        return None;
    }

    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        // is_file also rejects a directory that happens to carry the name
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found config");
            return Some(candidate);
        }

        // Stop at the home directory
        if home.is_some_and(|h| current == h) {
            return None;
        }

        // Move up one directory; at the root there is nowhere left to go.
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// The home directory used as the walk boundary: `HOME` when set, the
/// platform lookup otherwise.
pub fn home_boundary() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from).or_else(dirs::home_dir)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
