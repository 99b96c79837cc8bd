// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Run result reporting.

mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use serde::Serialize;
use termcolor::WriteColor;

use crate::runner::{FileResult, Outcome};

/// Summary counts over a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub formatted: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn tally(results: &[FileResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.outcome {
                Outcome::Formatted => summary.formatted += 1,
                Outcome::Unchanged => summary.unchanged += 1,
                Outcome::Skipped(_) => summary.skipped += 1,
                Outcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Renders run results to a writer.
pub trait Reporter {
    fn emit(&self, out: &mut dyn WriteColor, results: &[FileResult]) -> anyhow::Result<()>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
