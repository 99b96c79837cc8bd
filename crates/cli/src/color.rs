// SPDX-License-Identifier: MIT
// Copyright (c) 2026 combfmt contributors

//! Color output mode handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// When to emit ANSI colors on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a termcolor choice for stdout. `Auto` disables color
    /// when stdout is not a terminal or `NO_COLOR` is set.
    pub fn stdout_choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
