// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! `combfmt fmt` command implementation.
//!
//! Three shapes of invocation: filter stdin to stdout, print a single
//! file to stdout with `--stdout`, or format files and directories in
//! place (the default).

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use termcolor::StandardStream;

use combfmt::cli::{Cli, FmtArgs, OutputFormat};
use combfmt::config::ConfigSource;
use combfmt::discovery;
use combfmt::engine::Engine;
use combfmt::error::ExitCode;
use combfmt::host::{CliHost, Host};
use combfmt::report::{JsonReporter, Reporter, Summary, TextReporter};
use combfmt::runner::{FormatRunner, RunnerConfig};
use combfmt::syntax::Syntax;
use combfmt::walker::{StylesheetWalker, WalkerConfig};

pub fn run(cli: &Cli, args: &FmtArgs) -> anyhow::Result<ExitCode> {
    let host = CliHost::from_cli(cli).context("invalid --config-json")?;

    let stdin_mode =
        args.paths.is_empty() || (args.paths.len() == 1 && args.paths[0].as_os_str() == "-");
    if stdin_mode {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return format_single(&host, args, &source, None);
    }

    let cwd = std::env::current_dir()?;
    let paths: Vec<PathBuf> = args
        .paths
        .iter()
        .map(|p| if p.is_absolute() { p.clone() } else { cwd.join(p) })
        .collect();

    if args.stdout {
        let [path] = paths.as_slice() else {
            anyhow::bail!("--stdout takes exactly one file");
        };
        if !path.is_file() {
            anyhow::bail!("not a file: {}", path.display());
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let host = host.clone().with_current_file(path.clone());
        return format_single(&host, args, &source, Some(path));
    }

    let walker = StylesheetWalker::new(WalkerConfig {
        max_depth: Some(args.max_depth),
        exclude_patterns: args.exclude.clone(),
        ..WalkerConfig::default()
    })?;

    // Directories expand to the stylesheets beneath them; explicit file
    // arguments are taken as-is and reported if unrecognized.
    let mut files = Vec::new();
    for path in &paths {
        if path.is_dir() {
            files.extend(walker.collect(path));
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            anyhow::bail!("no such file or directory: {}", path.display());
        }
    }
    files.sort();
    files.dedup();

    let fixed_config = ConfigSource::from_host(&host)?;
    let runner = FormatRunner::new(
        Engine::from_host(&host),
        RunnerConfig {
            syntax_override: args.syntax,
            fixed_config,
            home: discovery::home_boundary(),
        },
    );
    let results = runner.run(&files);

    let mut out = StandardStream::stdout(args.color.stdout_choice());
    let reporter: Box<dyn Reporter> = match args.output {
        OutputFormat::Text => Box::new(TextReporter),
        OutputFormat::Json => Box::new(JsonReporter),
    };
    reporter.emit(&mut out, &results)?;

    let summary = Summary::tally(&results);
    Ok(if summary.failed > 0 { ExitCode::Failures } else { ExitCode::Success })
}

/// Format one buffer (stdin, or a single file with `--stdout`) and print
/// the result. Engine diagnostics go to stderr and exit with code 1.
fn format_single(
    host: &CliHost,
    args: &FmtArgs,
    source: &str,
    path: Option<&Path>,
) -> anyhow::Result<ExitCode> {
    let syntax = match (args.syntax, path) {
        (Some(syntax), _) => syntax,
        (None, Some(path)) => Syntax::from_path(path).with_context(|| {
            format!("cannot detect syntax of {}; pass --syntax", path.display())
        })?,
        // An unsaved buffer with no other signal is treated as plain CSS.
        (None, None) => Syntax::Css,
    };

    let dir = match host.current_file().and_then(Path::parent) {
        Some(parent) => parent.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let config = ConfigSource::select(host, &dir, discovery::home_boundary().as_deref())?;
    match Engine::from_host(host).format(source, syntax, &config, &dir) {
        Ok(formatted) => {
            std::io::stdout().write_all(formatted.as_bytes())?;
            Ok(ExitCode::Success)
        }
        Err(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::Failures)
        }
    }
}
