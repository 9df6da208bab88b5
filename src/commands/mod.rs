//! Command implementations for themecfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command renders its output to a string first so the
//! text can be tested without capturing stdout.

mod check;
mod colors;
mod init;
mod screens;
mod show;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Colors(args) => colors::cmd_colors(args),
        Command::Screens(args) => screens::cmd_screens(args),
    }
}
