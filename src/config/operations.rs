//! Config loading, validation, and utility operations.

use super::model::{Config, Theme, ThemeExtend};
use super::types::{ColorValue, ConfigFormat, ConfigWarning};
use crate::error::{Result, ThemeError};
use crate::validate::{ContentMatcher, parse_color, parse_length};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Source label used in errors when parsing from a string.
const INLINE_SOURCE: &str = "<input>";

impl Config {
    /// Load config from a YAML or JSON file.
    ///
    /// The format is chosen by extension (`.json` is JSON, anything else is
    /// YAML). Validation warnings are logged, not returned; call
    /// [`Config::warnings`] to inspect them.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ThemeError::Io)` - File could not be read
    /// * `Err(ThemeError::Schema)` - Unknown/missing field or bad enum value
    /// * `Err(ThemeError::Value)` - A color, length, glob or plugin failed validation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        let source = path.display().to_string();

        let config = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => parse_json(&content, &source)?,
            ConfigFormat::Yaml => parse_yaml(&content, &source)?,
        };

        config.checked(&source)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, INLINE_SOURCE)?.checked(INLINE_SOURCE)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json, INLINE_SOURCE)?.checked(INLINE_SOURCE)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ThemeError::Serialize(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Serialize config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ThemeError::Serialize(format!("failed to serialize config to JSON: {}", e)))
    }

    /// Serialize in the given format.
    pub fn to_format(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => self.to_yaml(),
            ConfigFormat::Json => self.to_json().map(|mut json| {
                json.push('\n');
                json
            }),
        }
    }

    /// Validate config values and return the first error found.
    ///
    /// Validation rules:
    /// - breakpoint names are non-empty and widths parse as `<number>(px|em|rem)`
    /// - every color leaf is a hex, `rgb()`/`rgba()` or named color
    /// - every content pattern compiles as a glob
    /// - plugin references are non-empty
    pub fn validate(&self) -> Result<()> {
        validate_screens("theme.screens", &self.theme.screens)?;
        validate_screens("theme.extend.screens", &self.theme.extend.screens)?;
        validate_palette("colors", &self.colors)?;
        validate_palette("theme.extend.colors", &self.theme.extend.colors)?;

        ContentMatcher::compile(&self.content)?;

        for (idx, plugin) in self.plugins.iter().enumerate() {
            if plugin.trim().is_empty() {
                return Err(ThemeError::value(
                    format!("plugins[{}]", idx),
                    "plugin reference must be non-empty",
                ));
            }
        }

        Ok(())
    }

    /// Non-fatal findings: empty content, duplicated palettes, odd shade keys.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.content.is_empty() {
            warnings.push(ConfigWarning::EmptyContent);
        }

        let shaded: Vec<(&String, &BTreeMap<String, String>)> = self
            .colors
            .iter()
            .filter_map(|(name, value)| match value {
                ColorValue::Shaded(shades) => Some((name, shades)),
                ColorValue::Flat(_) => None,
            })
            .collect();

        for (i, (first, first_shades)) in shaded.iter().enumerate() {
            for (second, second_shades) in &shaded[i + 1..] {
                if !first_shades.is_empty() && first_shades == second_shades {
                    warnings.push(ConfigWarning::DuplicatePalette {
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }

        for (section, palette) in [
            ("colors", &self.colors),
            ("theme.extend.colors", &self.theme.extend.colors),
        ] {
            for (name, value) in palette {
                if let ColorValue::Shaded(shades) = value {
                    for step in shades.keys() {
                        if step != "DEFAULT" && step.parse::<u32>().is_err() {
                            warnings.push(ConfigWarning::NonNumericShade {
                                path: format!("{}.{}.{}", section, name, step),
                            });
                        }
                    }
                }
            }
        }

        warnings
    }

    /// Compile the content patterns for path matching.
    pub fn content_matcher(&self) -> Result<ContentMatcher> {
        ContentMatcher::compile(&self.content)
    }

    /// Look up a color by `name` or `name.shade` (e.g. `pri.500`).
    ///
    /// Values are returned exactly as written in the config.
    pub fn resolve_color(&self, reference: &str) -> Option<&str> {
        let (name, shade) = match reference.split_once('.') {
            Some((name, shade)) => (name, Some(shade)),
            None => (reference, None),
        };
        self.colors.get(name)?.get(shade)
    }

    /// Every color leaf as `(path, value)`, palettes by name and shades
    /// lightest to darkest.
    pub fn color_leaves(&self) -> Vec<(String, &str)> {
        let mut leaves = Vec::new();
        for (name, value) in &self.colors {
            match value {
                ColorValue::Flat(color) => leaves.push((name.clone(), color.as_str())),
                ColorValue::Shaded(_) => {
                    for (step, color) in value.shades() {
                        leaves.push((format!("{}.{}", name, step), color));
                    }
                }
            }
        }
        leaves
    }

    /// Run validation and log warnings for a freshly parsed config.
    fn checked(self, source: &str) -> Result<Self> {
        self.validate().inspect_err(|e| {
            debug!(source, error = %e, "theme config failed validation");
        })?;

        for warning in self.warnings() {
            warn!(source, %warning, "theme config warning");
        }

        debug!(
            source,
            screens = self.theme.screens.len(),
            colors = self.colors.len(),
            content_patterns = self.content.len(),
            "loaded theme config"
        );
        Ok(self)
    }
}

impl Theme {
    /// Breakpoints ordered by width (em/rem at 16px). Entries that do not
    /// parse sort last, by name.
    pub fn screens_by_width(&self) -> Vec<(&str, &str)> {
        order_by_width(&self.screens)
    }
}

impl ThemeExtend {
    /// Extension breakpoints, ordered the same way as [`Theme::screens_by_width`].
    pub fn screens_by_width(&self) -> Vec<(&str, &str)> {
        order_by_width(&self.screens)
    }
}

fn order_by_width(screens: &BTreeMap<String, String>) -> Vec<(&str, &str)> {
    let mut ordered: Vec<(&str, &str, Option<f64>)> = screens
        .iter()
        .map(|(name, width)| {
            let px = parse_length(width).ok().map(|len| len.to_px());
            (name.as_str(), width.as_str(), px)
        })
        .collect();

    ordered.sort_by(|a, b| match (a.2, b.2) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.0.cmp(b.0)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.0.cmp(b.0),
    });

    ordered
        .into_iter()
        .map(|(name, width, _)| (name, width))
        .collect()
}

fn parse_yaml(yaml: &str, source: &str) -> Result<Config> {
    serde_yaml::from_str(yaml).map_err(|e| ThemeError::schema(source, e.to_string()))
}

fn parse_json(json: &str, source: &str) -> Result<Config> {
    serde_json::from_str(json).map_err(|e| ThemeError::schema(source, e.to_string()))
}

fn validate_screens(section: &str, screens: &BTreeMap<String, String>) -> Result<()> {
    for (name, width) in screens {
        if name.trim().is_empty() {
            return Err(ThemeError::value(section, "breakpoint name must be non-empty"));
        }
        parse_length(width)
            .map_err(|e| ThemeError::value(format!("{}.{}", section, name), e.to_string()))?;
    }
    Ok(())
}

fn validate_palette(section: &str, palette: &BTreeMap<String, ColorValue>) -> Result<()> {
    for (name, value) in palette {
        if name.trim().is_empty() {
            return Err(ThemeError::value(section, "color name must be non-empty"));
        }
        match value {
            ColorValue::Flat(color) => {
                parse_color(color).map_err(|e| {
                    ThemeError::value(format!("{}.{}", section, name), e.to_string())
                })?;
            }
            ColorValue::Shaded(shades) => {
                for (step, color) in shades {
                    parse_color(color).map_err(|e| {
                        ThemeError::value(format!("{}.{}.{}", section, name, step), e.to_string())
                    })?;
                }
            }
        }
    }
    Ok(())
}
