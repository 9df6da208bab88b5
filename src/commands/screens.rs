//! Implementation of the `themecfg screens` command.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;

/// Execute the `themecfg screens` command.
pub fn cmd_screens(args: ConfigArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    print!("{}", render_screens(&config));
    Ok(())
}

/// Breakpoints narrowest first, followed by any `theme.extend` additions
/// in the same order.
pub fn render_screens(config: &Config) -> String {
    let mut out = String::new();
    for (name, width) in config.theme.screens_by_width() {
        out.push_str(&format!("{:<6} {}\n", name, width));
    }
    for (name, width) in config.theme.extend.screens_by_width() {
        out.push_str(&format!("{:<6} {} (extend)\n", name, width));
    }
    out
}
