//! Theme configuration model for themecfg.
//!
//! This module defines the Config struct that represents a utility-CSS theme
//! config file (YAML or JSON). It rejects unknown fields, fills defaults for
//! optional fields, and validates colors, breakpoints, content globs and
//! plugin references at load time.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{Config, Theme, ThemeExtend};
pub use types::{ColorValue, ConfigFormat, ConfigWarning, DarkMode, Mode};
