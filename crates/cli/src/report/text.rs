// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Text format report output.

use std::io::Write;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::runner::{FileResult, Outcome};

use super::{Reporter, Summary};

/// Human-readable per-file lines plus a summary.
pub struct TextReporter;

fn tag_color(outcome: &Outcome) -> Option<Color> {
    match outcome {
        Outcome::Formatted => Some(Color::Green),
        Outcome::Unchanged => None,
        Outcome::Skipped(_) => Some(Color::Yellow),
        Outcome::Failed(_) => Some(Color::Red),
    }
}

fn tag(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Formatted => "formatted",
        Outcome::Unchanged => "unchanged",
        Outcome::Skipped(_) => "skipped",
        Outcome::Failed(_) => "failed",
    }
}

impl Reporter for TextReporter {
    fn emit(&self, out: &mut dyn WriteColor, results: &[FileResult]) -> anyhow::Result<()> {
        for result in results {
            let mut spec = ColorSpec::new();
            spec.set_fg(tag_color(&result.outcome));
            out.set_color(&spec)?;
            write!(out, "{:>9}", tag(&result.outcome))?;
            out.reset()?;

            write!(out, " {}", result.path.display())?;
            match &result.outcome {
                Outcome::Skipped(reason) | Outcome::Failed(reason) => {
                    writeln!(out, ": {}", reason.lines().next().unwrap_or(reason.as_str()))?;
                }
                _ => writeln!(out)?,
            }
        }

        let summary = Summary::tally(results);
        writeln!(
            out,
            "\n{} formatted, {} unchanged, {} skipped, {} failed",
            summary.formatted, summary.unchanged, summary.skipped, summary.failed
        )?;
        Ok(())
    }
}
