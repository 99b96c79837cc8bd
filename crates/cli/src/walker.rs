// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Stylesheet file collection.
//!
//! Expands directory arguments into the stylesheet files beneath them,
//! respecting gitignore rules, skipping hidden entries, and filtering by
//! user-supplied exclude globs.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::syntax::Syntax;

/// Walker options; all of these mirror CLI switches.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth to descend, `None` for unlimited.
    pub max_depth: Option<usize>,
    /// Exclude globs; a bare name matches that path component anywhere.
    pub exclude_patterns: Vec<String>,
    /// Respect `.gitignore` files.
    pub git_ignore: bool,
    /// Skip hidden files and directories.
    pub skip_hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            exclude_patterns: Vec::new(),
            git_ignore: true,
            skip_hidden: true,
        }
    }
}

/// Walks a directory tree collecting files with a stylesheet extension.
pub struct StylesheetWalker {
    config: WalkerConfig,
    excludes: GlobSet,
}

impl StylesheetWalker {
    pub fn new(config: WalkerConfig) -> Result<Self, globset::Error> {
        let excludes = build_excludes(&config.exclude_patterns)?;
        Ok(Self { config, excludes })
    }

    /// Collect stylesheet files under `root`, sorted by path.
    pub fn collect(&self, root: &Path) -> Vec<PathBuf> {
        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(self.config.git_ignore)
            .hidden(self.config.skip_hidden)
            .follow_links(false)
            .max_depth(self.config.max_depth);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if Syntax::from_path(&path).is_none() {
                continue;
            }
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if self.excludes.is_match(relative) {
                continue;
            }
            files.push(path);
        }

        files.sort();
        files
    }
}

fn build_excludes(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if pattern.contains('/') {
            builder.add(Glob::new(pattern)?);
        } else {
            // Bare names match the component at any depth.
            builder.add(Glob::new(&format!("**/{pattern}"))?);
            builder.add(Glob::new(&format!("**/{pattern}/**"))?);
            builder.add(Glob::new(pattern)?);
        }
    }
    builder.build()
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
