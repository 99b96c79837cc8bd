//! Parallel format runner with per-file error isolation.
//!
//! Files fan out on rayon. One file's engine failure is recorded as a
//! failed outcome and does not stop the rest of the run.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::ConfigSource;
use crate::discovery;
use crate::engine::Engine;
use crate::syntax::Syntax;

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output differed and the file was rewritten.
    Formatted,
    /// Output was identical; the file was left untouched.
    Unchanged,
    /// The file was not formatted (unrecognized extension).
    Skipped(String),
    /// Engine or I/O error for this file.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-run options for the format runner.
pub struct RunnerConfig {
    /// Format every file as this syntax instead of detecting per file.
    pub syntax_override: Option<Syntax>,
    /// Invocation-wide config (explicit or inline); skips discovery.
    pub fixed_config: Option<ConfigSource>,
    /// Home directory boundary for per-file discovery.
    pub home: Option<PathBuf>,
}

pub struct FormatRunner {
    engine: Engine,
    config: RunnerConfig,
}

impl FormatRunner {
    pub fn new(engine: Engine, config: RunnerConfig) -> Self {
        Self { engine, config }
    }

    /// Format all files in place, in parallel. Results come back sorted
    /// by path for deterministic output.
    pub fn run(&self, files: &[PathBuf]) -> Vec<FileResult> {
        let mut results: Vec<FileResult> = files
            .par_iter()
            .map(|path| FileResult {
                path: path.clone(),
                outcome: self.format_one(path),
            })
            .collect();

        results.sort_by(|a, b| a.path.cmp(&b.path));
        results
    }

    fn format_one(&self, path: &Path) -> Outcome {
        let syntax = match self.config.syntax_override.or_else(|| Syntax::from_path(path)) {
            Some(syntax) => syntax,
            None => return Outcome::Skipped("unrecognized extension".to_string()),
        };

        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => return Outcome::Failed(format!("read failed: {err}")),
        };

        let dir = path.parent().unwrap_or(Path::new("."));
        let config = match &self.config.fixed_config {
            Some(fixed) => fixed.clone(),
            None => match discovery::find_config(dir, self.config.home.as_deref()) {
                Some(found) => ConfigSource::Discovered(found),
                None => ConfigSource::Default,
            },
        };

        match self.engine.format(&source, syntax, &config, dir) {
            Ok(formatted) if formatted == source => Outcome::Unchanged,
            Ok(formatted) => match std::fs::write(path, &formatted) {
                Ok(()) => Outcome::Formatted,
                Err(err) => Outcome::Failed(format!("write failed: {err}")),
            },
            Err(err) => Outcome::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
