//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{ColorChoice, Config};
use crate::diff::DiffMode;
use crate::render::{ColorMode, Painter};

/// Short usage line printed when the snapshot paths are missing.
pub const USAGE: &str = "usage: snapdiff <front.bin> <back.bin> [-v]";

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("SNAPDIFF_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SNAPDIFF_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "snapdiff")]
#[command(version = VERSION)]
#[command(about = "Compare two terminal screen snapshots cell by cell")]
#[command(
    long_about = "Compare two binary screen snapshots (front and back buffer dumps) \
cell by cell.\n\n\
By default contiguous differing cells are grouped into runs: each run prints a \
'diff at' header followed by the front and back spans in their original colors. \
With -v every differing cell is listed on its own line together with its colors, \
style bits and character."
)]
pub struct Cli {
    /// Front buffer snapshot
    #[arg(value_name = "FRONT")]
    pub front: Option<PathBuf>,

    /// Back buffer snapshot
    #[arg(value_name = "BACK")]
    pub back: Option<PathBuf>,

    /// -v (or --verbose) lists every differing cell; anything else is ignored
    #[arg(value_name = "MODE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub trailing: Vec<String>,

    /// When to use color escapes [default: from config, else always]
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Exit right away instead of waiting for enter
    #[arg(long)]
    pub no_pause: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Both snapshot paths, if given.
    pub fn paths(&self) -> Option<(&Path, &Path)> {
        match (&self.front, &self.back) {
            (Some(front), Some(back)) => Some((front.as_path(), back.as_path())),
            _ => None,
        }
    }

    /// Only the argument right after the paths selects the mode.
    pub fn mode(&self) -> DiffMode {
        match self.trailing.first().map(String::as_str) {
            Some("-v" | "--verbose") => DiffMode::Verbose,
            _ => DiffMode::Runs,
        }
    }

    /// Trailing arguments that do not select a mode.
    pub fn ignored_args(&self) -> &[String] {
        match self.mode() {
            DiffMode::Verbose => &self.trailing[1..],
            DiffMode::Runs => &self.trailing,
        }
    }

    /// Whether to wait for enter after the report.
    pub fn pause(&self, config: &Config) -> bool {
        !self.no_pause && config.output.pause
    }

    /// Effective color choice: flag, then config.
    pub fn color_choice(&self, config: &Config) -> ColorChoice {
        self.color.unwrap_or(config.output.color)
    }

    /// Build the painter for stdout.
    pub fn painter(&self, config: &Config) -> Painter {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let mode = resolve_color(
            self.color_choice(config),
            atty::is(atty::Stream::Stdout),
            no_color,
        );
        Painter::new(mode)
    }
}

/// Decide the color mode from the user's choice and the environment.
pub fn resolve_color(choice: ColorChoice, stdout_is_tty: bool, no_color: bool) -> ColorMode {
    match choice {
        ColorChoice::Always => ColorMode::Truecolor,
        ColorChoice::Never => ColorMode::Plain,
        ColorChoice::Auto if stdout_is_tty && !no_color => ColorMode::Truecolor,
        ColorChoice::Auto => ColorMode::Plain,
    }
}
