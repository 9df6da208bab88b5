//! CLI argument parsing for themecfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::ConfigFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Config file read by every command when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "theme.config.yaml";

/// themecfg: load and validate utility-CSS theme configuration.
///
/// A theme config declares color palettes, breakpoints, the dark-mode
/// strategy and the source globs the CSS build tool scans for class names.
#[derive(Parser, Debug)]
#[command(name = "themecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for themecfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the reference theme config.
    ///
    /// Refuses to overwrite an existing file unless --force is given.
    Init(InitArgs),

    /// Load and validate a theme config.
    ///
    /// Prints a summary and any warnings. Exits non-zero on schema,
    /// value, or I/O errors; warnings never fail the check.
    Check(ConfigArgs),

    /// Print the normalized config.
    Show(ShowArgs),

    /// List every palette color as `<path> <value>`.
    Colors(ConfigArgs),

    /// List breakpoints ordered by width.
    Screens(ConfigArgs),
}

/// Selects the config file to load.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Path to the theme config (YAML or JSON).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub path: PathBuf,

    /// Output format. Defaults to the one implied by the file extension.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Yaml)]
    pub format: FormatArg,
}

/// Serialization format accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for ConfigFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => ConfigFormat::Yaml,
            FormatArg::Json => ConfigFormat::Json,
        }
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
