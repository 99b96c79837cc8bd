// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Engine error taxonomy and process exit codes.

use thiserror::Error;

/// Errors produced while driving the external formatting engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The Node binary could not be found at all.
    #[error(
        "Couldn't find Node.js. Make sure it's in your $PATH by running \
         `node -v` in your command-line, or point --node-path at the binary."
    )]
    NodeNotFound,

    /// The Node binary exists but failed to launch.
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but reported a diagnostic instead of output.
    #[error("csscomb error:\n{stderr}")]
    Engine { stderr: String },

    #[error("i/o error while formatting: {0}")]
    Io(#[from] std::io::Error),
}

/// Process exit codes: 0 clean run, 1 per-file failures, 2 usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Failures,
    Usage,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failures => 1,
            ExitCode::Usage => 2,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
