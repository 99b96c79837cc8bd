// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! `combfmt config` command implementation.
//!
//! Discovery dry-run: prints the configuration the engine would see for
//! a file or directory, without formatting anything.

use std::path::PathBuf;

use anyhow::Context;

use combfmt::cli::{Cli, ConfigArgs};
use combfmt::config::ConfigSource;
use combfmt::discovery;
use combfmt::error::ExitCode;
use combfmt::host::CliHost;

pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let host = CliHost::from_cli(cli).context("invalid --config-json")?;

    let cwd = std::env::current_dir()?;
    let target: PathBuf = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };
    if !target.exists() {
        anyhow::bail!("no such file or directory: {}", target.display());
    }

    // For a file argument, discovery starts in its directory.
    let start_dir = if target.is_file() {
        target.parent().unwrap_or(&target).to_path_buf()
    } else {
        target
    };

    let source = ConfigSource::select(&host, &start_dir, discovery::home_boundary().as_deref())?;
    println!("{source}");
    Ok(ExitCode::Success)
}
