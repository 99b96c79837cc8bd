// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! `combfmt init` command implementation.

use anyhow::Context;

use combfmt::cli::InitArgs;
use combfmt::config::STARTER_CONFIG;
use combfmt::discovery::CONFIG_FILE_NAME;
use combfmt::error::ExitCode;

/// Write a starter `.csscomb.json` into the current directory.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    std::fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::Success)
}
