//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Theme configuration consumed by the utility-CSS build tool.
///
/// Field names follow the tool's schema exactly (`darkMode`, `theme.extend`,
/// ...). Unknown fields are rejected. `content` is the only required field;
/// every other field falls back to an empty or default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Class-name scan strategy.
    #[serde(default)]
    pub mode: Mode,

    /// How dark-mode variants are activated.
    #[serde(default)]
    pub dark_mode: DarkMode,

    /// Glob patterns of source files scanned for class names.
    pub content: Vec<String>,

    #[serde(default)]
    pub theme: Theme,

    /// Palette: color name to a flat color or a shade table.
    #[serde(default, deserialize_with = "unique_keys")]
    pub colors: BTreeMap<String, ColorValue>,

    /// Plugin references, in load order.
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// The `theme` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Additions layered on top of the tool's defaults.
    #[serde(default)]
    pub extend: ThemeExtend,

    /// Breakpoint name to width (`640px`, `48rem`, ...).
    #[serde(default, deserialize_with = "unique_keys")]
    pub screens: BTreeMap<String, String>,
}

/// The `theme.extend` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeExtend {
    #[serde(
        default,
        deserialize_with = "unique_keys",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub screens: BTreeMap<String, String>,

    #[serde(
        default,
        deserialize_with = "unique_keys",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub colors: BTreeMap<String, ColorValue>,
}

impl ThemeExtend {
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty() && self.colors.is_empty()
    }
}

impl Default for Config {
    /// The reference theme written by `themecfg init`.
    fn default() -> Self {
        Self {
            mode: Mode::All,
            dark_mode: DarkMode::Selector(None),
            content: default_content(),
            theme: Theme {
                extend: ThemeExtend::default(),
                screens: default_screens(),
            },
            colors: default_colors(),
            plugins: Vec::new(),
        }
    }
}
