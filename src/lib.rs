//! themecfg: typed loader and validator for utility-CSS theme configuration.
//!
//! A theme config declares the scan mode, the dark-mode strategy, the source
//! globs scanned for class names, breakpoints, color palettes and plugins.
//! [`config::Config::load`] parses a YAML or JSON file into an immutable,
//! validated value; problems are reported as [`error::ThemeError`] naming
//! the offending file or field path.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod validate;
