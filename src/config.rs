//! Command-line configuration. Nothing is read from disk; the flags only pick
//! the starting catalog, output coloring, and log verbosity.

use std::io;

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;

/// When to colorize status lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => io::stdout().is_tty(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Menu-driven catalog for a small library.
#[derive(Debug, Parser)]
#[command(name = "library-catalog", version, about)]
pub struct Args {
    /// Start with an empty catalog instead of the ten seed books.
    #[arg(long)]
    pub empty: bool,

    /// Colorize success and failure messages.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log catalog activity to stderr at debug level (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "library_catalog=debug"
        } else {
            "library_catalog=warn"
        }
    }

    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            color: self.color.enabled(),
        }
    }
}

/// Settings the menu session needs once arguments are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub color: bool,
}
