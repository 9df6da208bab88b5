//! Implementation of the `themecfg check` command.

use crate::cli::ConfigArgs;
use crate::config::{ColorValue, Config, ConfigWarning};
use crate::error::Result;
use std::fmt::Write;
use std::path::Path;

/// Execute the `themecfg check` command.
///
/// Load errors propagate (and set the exit code); warnings are printed but
/// the check still succeeds.
pub fn cmd_check(args: ConfigArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let warnings = config.warnings();
    print!("{}", render_report(&args.config, &config, &warnings));
    Ok(())
}

/// Render the check summary.
pub fn render_report(path: &Path, config: &Config, warnings: &[ConfigWarning]) -> String {
    let shaded = config
        .colors
        .values()
        .filter(|value| matches!(value, ColorValue::Shaded(_)))
        .count();
    let extend = &config.theme.extend;

    let mut out = String::new();
    let _ = writeln!(out, "Theme config: {}", path.display());
    let _ = writeln!(out, "  mode:      {}", config.mode.as_str());
    let _ = writeln!(out, "  darkMode:  {}", config.dark_mode);
    let _ = writeln!(out, "  content:   {} pattern(s)", config.content.len());
    let _ = writeln!(out, "  screens:   {}", config.theme.screens.len());
    let _ = writeln!(
        out,
        "  colors:    {} ({} shaded, {} flat)",
        config.colors.len(),
        shaded,
        config.colors.len() - shaded
    );
    if !extend.is_empty() {
        let _ = writeln!(
            out,
            "  extend:    {} screen(s), {} color(s)",
            extend.screens.len(),
            extend.colors.len()
        );
    }
    let _ = writeln!(out, "  plugins:   {}", config.plugins.len());
    let _ = writeln!(out);

    if warnings.is_empty() {
        let _ = writeln!(out, "OK: no problems found.");
    } else {
        let _ = writeln!(out, "Warnings ({}):", warnings.len());
        for warning in warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }
    out
}
