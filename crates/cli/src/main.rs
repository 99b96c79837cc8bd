// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

use clap::{CommandFactory, Parser};

use combfmt::cli::{Cli, Command};
use combfmt::error::ExitCode;

mod cmd_config;
mod cmd_fmt;
mod cmd_init;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Fmt(args) => cmd_fmt::run(&cli, args),
        Command::Config(args) => cmd_config::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "combfmt",
                &mut std::io::stdout(),
            );
            Ok(ExitCode::Success)
        }
    };

    match result {
        Ok(code) => std::process::ExitCode::from(code.code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::ExitCode::from(ExitCode::Usage.code())
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "combfmt=debug" } else { "combfmt=warn" };
    let filter =
        EnvFilter::try_from_env("COMBFMT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
