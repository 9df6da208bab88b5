//! Implementation of the `themecfg init` command.
//!
//! Writes the reference theme (the `sm`..`2xl` breakpoints, the `pri`/`sec`
//! palettes, `light`/`dark`, selector dark mode) to disk.

use crate::cli::InitArgs;
use crate::config::{Config, ConfigFormat};
use crate::error::{Result, ThemeError};
use crate::fs::atomic_write_file;
use std::path::Path;
use tracing::info;

/// Execute the `themecfg init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let format = args
        .format
        .map(ConfigFormat::from)
        .unwrap_or_else(|| ConfigFormat::from_path(&args.path));

    write_reference_config(&args.path, format, args.force)?;

    println!("Wrote reference theme config to {}", args.path.display());
    Ok(())
}

/// Write `Config::default()` to `path`.
///
/// Fails with a usage error if the file exists and `force` is not set.
pub fn write_reference_config(path: &Path, format: ConfigFormat, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ThemeError::Usage(format!(
            "'{}' already exists; pass --force to overwrite it",
            path.display()
        )));
    }

    let rendered = Config::default().to_format(format)?;
    atomic_write_file(path, &rendered)?;

    info!(path = %path.display(), ?format, "wrote reference theme config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_yaml_that_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.config.yaml");

        write_reference_config(&path, ConfigFormat::Yaml, false).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn writes_json_that_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.json");

        write_reference_config(&path, ConfigFormat::Json, false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"darkMode\": \"selector\""));
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.config.yaml");
        std::fs::write(&path, "content: []\n").unwrap();

        let err = write_reference_config(&path, ConfigFormat::Yaml, false).unwrap_err();
        assert!(matches!(err, ThemeError::Usage(_)));
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content: []\n");
    }

    #[test]
    fn overwrites_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.config.yaml");
        std::fs::write(&path, "content: []\n").unwrap();

        write_reference_config(&path, ConfigFormat::Yaml, true).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
