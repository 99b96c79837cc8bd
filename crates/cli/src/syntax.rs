// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Stylesheet syntax identification.
//!
//! The engine needs to be told which dialect it is formatting; detection
//! goes by file extension only. Text arriving on stdin has no extension
//! and defaults to plain CSS unless overridden on the command line.

use std::fmt;
use std::path::Path;

/// Stylesheet dialects understood by the formatting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Syntax {
    Css,
    Scss,
    Sass,
    Less,
}

impl Syntax {
    /// Identifier passed to the engine on its command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Syntax::Css => "css",
            Syntax::Scss => "scss",
            Syntax::Sass => "sass",
            Syntax::Less => "less",
        }
    }

    /// Detect the syntax of a file from its extension (case-insensitive).
    ///
    /// Returns `None` for unknown or missing extensions; callers decide
    /// whether that means "skip the file" or "fall back to css".
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "css" => Some(Syntax::Css),
            "scss" => Some(Syntax::Scss),
            "sass" => Some(Syntax::Sass),
            "less" => Some(Syntax::Less),
            _ => None,
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
