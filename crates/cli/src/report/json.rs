// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! JSON format report output, for editor integrations.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use termcolor::WriteColor;

use crate::runner::{FileResult, Outcome};

use super::{Reporter, Summary};

/// Machine-readable report: a `files` array plus a `summary` object.
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a Path,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl<'a> JsonFile<'a> {
    fn from_result(result: &'a FileResult) -> Self {
        let (status, detail) = match &result.outcome {
            Outcome::Formatted => ("formatted", None),
            Outcome::Unchanged => ("unchanged", None),
            Outcome::Skipped(reason) => ("skipped", Some(reason.as_str())),
            Outcome::Failed(reason) => ("failed", Some(reason.as_str())),
        };
        Self { path: &result.path, status, detail }
    }
}

impl Reporter for JsonReporter {
    fn emit(&self, out: &mut dyn WriteColor, results: &[FileResult]) -> anyhow::Result<()> {
        let report = JsonReport {
            files: results.iter().map(JsonFile::from_result).collect(),
            summary: Summary::tally(results),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}
