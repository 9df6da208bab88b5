//! Implementation of the `themecfg colors` command.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;

/// Execute the `themecfg colors` command.
pub fn cmd_colors(args: ConfigArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    print!("{}", render_colors(&config));
    Ok(())
}

/// One `<path> <value>` line per color leaf, paths padded to align values.
pub fn render_colors(config: &Config) -> String {
    let leaves = config.color_leaves();
    let width = leaves.iter().map(|(path, _)| path.len()).max().unwrap_or(0);

    leaves
        .iter()
        .map(|(path, value)| format!("{:width$}  {}\n", path, value, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_shades_in_numeric_order() {
        let yaml = r##"
content: []
colors:
  pri:
    "900": "#1e3a8a"
    "50": "#eff6ff"
    "500": "#3b82f6"
  dark: "#030712"
"##;
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(
            render_colors(&config),
            "dark     #030712\n\
             pri.50   #eff6ff\n\
             pri.500  #3b82f6\n\
             pri.900  #1e3a8a\n"
        );
    }

    #[test]
    fn empty_palette_renders_nothing() {
        let config = Config::from_yaml("content: []").unwrap();
        assert_eq!(render_colors(&config), "");
    }
}
