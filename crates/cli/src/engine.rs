// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! External formatting engine invocation.
//!
//! The actual formatting is done by CSScomb running under Node.js; this
//! module owns that subprocess boundary. The JavaScript bridge is embedded
//! in the binary and materialized to a temporary file per invocation, so
//! an installed `combfmt` has no payload directory to keep track of.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::ConfigSource;
use crate::error::EngineError;
use crate::host::{Host, SETTING_NODE_PATH};
use crate::syntax::Syntax;

const BRIDGE_JS: &str = include_str!("assets/comb.js");

/// Handle on the external engine: knows which Node binary to run.
pub struct Engine {
    node: PathBuf,
}

impl Engine {
    pub fn new(node: PathBuf) -> Self {
        Self { node }
    }

    /// Build an engine from host settings; `node-path` overrides the
    /// default of `node` looked up on PATH.
    pub fn from_host(host: &dyn Host) -> Self {
        let node = host
            .setting(SETTING_NODE_PATH)
            .and_then(|v| v.as_str().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("node"));
        Self::new(node)
    }

    /// Run source text through CSScomb.
    ///
    /// `dir` is the directory the bridge resolves a project-local csscomb
    /// installation from, normally the formatted file's directory.
    pub fn format(
        &self,
        source: &str,
        syntax: Syntax,
        config: &ConfigSource,
        dir: &Path,
    ) -> Result<String, EngineError> {
        if source.is_empty() {
            return Ok(String::new());
        }

        let mut bridge = tempfile::Builder::new()
            .prefix("combfmt-bridge-")
            .suffix(".js")
            .tempfile()?;
        bridge.write_all(BRIDGE_JS.as_bytes())?;

        tracing::debug!(
            node = %self.node.display(),
            syntax = %syntax,
            dir = %dir.display(),
            "invoking engine"
        );

        let mut child = Command::new(&self.node)
            .arg(bridge.path())
            .arg(syntax.as_str())
            .arg(config.engine_arg())
            .arg(dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => EngineError::NodeNotFound,
                _ => EngineError::Spawn {
                    program: self.node.display().to_string(),
                    source: e,
                },
            })?;

        // Feed stdin from a helper thread; writing inline can deadlock
        // once both the stdin and stdout pipes fill up.
        let stdin = child.stdin.take();
        let bytes = source.as_bytes().to_vec();
        let writer = std::thread::spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(&bytes) {
                    // The engine may exit before draining stdin.
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                    other => other,
                }
            } else {
                Ok(())
            }
        });

        let output = child.wait_with_output()?;
        if let Ok(res) = writer.join() {
            res?;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(EngineError::Engine { stderr });
        }
        // A clean exit that produced no output but wrote a diagnostic is
        // still a failure; the engine prints errors to stderr.
        if stdout.is_empty() && !stderr.is_empty() {
            return Err(EngineError::Engine { stderr });
        }

        Ok(stdout)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
