//! Configuration types and defaults for themecfg.
//!
//! This module defines the enums, the palette value shape, warnings, and the
//! reference theme values used by `Config::default()`.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

/// Class-name scan strategy of the consuming build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scan every content source on each build (default).
    #[default]
    All,
    /// Rescan only sources that changed since the last build.
    Incremental,
}

impl Mode {
    /// Parse a mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "incremental" => Some(Self::Incremental),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Incremental => "incremental",
        }
    }
}

const DARK_MODE_STRATEGIES: &[&str] = &["media", "selector", "class"];

/// How dark-mode variants are activated.
///
/// Written as a plain string (`"media"`, `"selector"`, `"class"`). The
/// selector and class strategies also accept `["selector", "<selector>"]` to
/// name a custom activating selector such as `[data-theme="dark"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DarkMode {
    /// Follow the OS preference via `prefers-color-scheme` (default).
    #[default]
    Media,
    /// Activate when an ancestor matches a selector (`.dark` unless overridden).
    Selector(Option<String>),
    /// Legacy name for class-based activation.
    Class(Option<String>),
}

impl DarkMode {
    /// Build a strategy from its name and optional custom selector.
    pub fn from_parts(name: &str, selector: Option<String>) -> Result<Self, String> {
        if selector.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(format!("the `{}` darkMode selector must be non-empty", name));
        }
        match (name, selector) {
            ("media", None) => Ok(Self::Media),
            ("media", Some(_)) => {
                Err("the `media` darkMode strategy does not take a selector".to_string())
            }
            ("selector", selector) => Ok(Self::Selector(selector)),
            ("class", selector) => Ok(Self::Class(selector)),
            (other, _) => Err(format!(
                "unknown darkMode strategy `{}`, expected one of `media`, `selector`, `class`",
                other
            )),
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            DarkMode::Media => "media",
            DarkMode::Selector(_) => "selector",
            DarkMode::Class(_) => "class",
        }
    }

    /// The custom selector, if one was configured.
    pub fn custom_selector(&self) -> Option<&str> {
        match self {
            DarkMode::Media => None,
            DarkMode::Selector(selector) | DarkMode::Class(selector) => selector.as_deref(),
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.custom_selector() {
            Some(selector) => write!(f, "{} ({})", self.strategy(), selector),
            None => f.write_str(self.strategy()),
        }
    }
}

impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.custom_selector() {
            None => serializer.serialize_str(self.strategy()),
            Some(selector) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(self.strategy())?;
                seq.serialize_element(selector)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for DarkMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DarkModeVisitor;

        impl<'de> Visitor<'de> for DarkModeVisitor {
            type Value = DarkMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a darkMode strategy name or a [strategy, selector] pair")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<DarkMode, E> {
                if !DARK_MODE_STRATEGIES.contains(&v) {
                    return Err(E::unknown_variant(v, DARK_MODE_STRATEGIES));
                }
                DarkMode::from_parts(v, None).map_err(E::custom)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DarkMode, A::Error> {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let selector: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                if !DARK_MODE_STRATEGIES.contains(&name.as_str()) {
                    return Err(de::Error::unknown_variant(&name, DARK_MODE_STRATEGIES));
                }
                DarkMode::from_parts(&name, Some(selector)).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(DarkModeVisitor)
    }
}

/// A palette entry: one color, or a table of shade steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Flat(String),
    Shaded(BTreeMap<String, String>),
}

impl ColorValue {
    /// Build a shaded palette from `(step, color)` pairs.
    pub fn shaded(table: &[(&str, &str)]) -> Self {
        ColorValue::Shaded(
            table
                .iter()
                .map(|(step, color)| (step.to_string(), color.to_string()))
                .collect(),
        )
    }

    /// Look up a shade step; a flat color only answers to `None`.
    pub fn get(&self, shade: Option<&str>) -> Option<&str> {
        match (self, shade) {
            (ColorValue::Flat(color), None) => Some(color),
            (ColorValue::Shaded(shades), Some(step)) => shades.get(step).map(String::as_str),
            _ => None,
        }
    }

    /// Shade steps ordered lightest to darkest: numeric keys by value, then
    /// any other keys by name. A flat color yields nothing.
    pub fn shades(&self) -> Vec<(&str, &str)> {
        let ColorValue::Shaded(shades) = self else {
            return Vec::new();
        };
        let mut ordered: Vec<(&str, &str)> = shades
            .iter()
            .map(|(step, color)| (step.as_str(), color.as_str()))
            .collect();
        ordered.sort_by_key(|(step, _)| match step.parse::<u32>() {
            Ok(n) => (0, n, String::new()),
            Err(_) => (1, 0, step.to_string()),
        });
        ordered
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorValueVisitor;

        impl<'de> Visitor<'de> for ColorValueVisitor {
            type Value = ColorValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a color string or a map of shade steps to color strings")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ColorValue, E> {
                Ok(ColorValue::Flat(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ColorValue, A::Error> {
                let mut shades = BTreeMap::new();
                while let Some(ShadeKey(step)) = map.next_key()? {
                    if shades.contains_key(&step) {
                        return Err(de::Error::custom(format!(
                            "duplicate shade step `{}`",
                            step
                        )));
                    }
                    let color: String = map.next_value()?;
                    shades.insert(step, color);
                }
                Ok(ColorValue::Shaded(shades))
            }
        }

        deserializer.deserialize_any(ColorValueVisitor)
    }
}

/// Shade step key; YAML writes `500:` as an integer, so accept both.
struct ShadeKey(String);

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade step such as \"500\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
                Ok(ShadeKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
                Ok(ShadeKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeKey, E> {
                Ok(ShadeKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

/// Deserialize a string-keyed map, rejecting repeated keys instead of
/// keeping the last value.
pub(crate) fn unique_keys<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeysVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeysVisitor<V> {
        type Value = BTreeMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with unique keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = BTreeMap::new();
            while let Some(key) = map.next_key::<String>()? {
                if entries.contains_key(&key) {
                    return Err(de::Error::custom(format!("duplicate key `{}`", key)));
                }
                let value: V = map.next_value()?;
                entries.insert(key, value);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
}

/// Serialization format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything but `.json` is read
    /// as YAML, which also accepts plain JSON documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A non-fatal finding about a loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `content` lists no patterns, so the generated stylesheet is empty.
    EmptyContent,
    /// Two shaded palettes have byte-identical shade tables.
    DuplicatePalette { first: String, second: String },
    /// A shade step that is neither numeric nor `DEFAULT`.
    NonNumericShade { path: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::EmptyContent => {
                f.write_str("content has no patterns; the generated stylesheet will be empty")
            }
            ConfigWarning::DuplicatePalette { first, second } => write!(
                f,
                "palettes '{}' and '{}' have identical shades; '{}' may be a placeholder copy",
                first, second, second
            ),
            ConfigWarning::NonNumericShade { path } => write!(
                f,
                "shade step at {} is not numeric (expected 50-950 or DEFAULT)",
                path
            ),
        }
    }
}

/// Shade table shared by the reference `pri` and `sec` palettes.
pub const BLUE_SHADES: &[(&str, &str)] = &[
    ("50", "#eff6ff"),
    ("100", "#dbeafe"),
    ("200", "#bfdbfe"),
    ("300", "#93c5fd"),
    ("400", "#60a5fa"),
    ("500", "#3b82f6"),
    ("600", "#2563eb"),
    ("700", "#1d4ed8"),
    ("800", "#1e40af"),
    ("900", "#1e3a8a"),
    ("950", "#172554"),
];

/// Default content patterns: Rust/HTML/CSS sources and built HTML.
pub fn default_content() -> Vec<String> {
    vec![
        "./src/**/*.{rs,html,css}".to_string(),
        "./dist/**/*.html".to_string(),
    ]
}

/// Default breakpoints, smallest to largest.
pub fn default_screens() -> BTreeMap<String, String> {
    [
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("2xl", "1536px"),
    ]
    .into_iter()
    .map(|(name, width)| (name.to_string(), width.to_string()))
    .collect()
}

/// Default palette. `pri` and `sec` share [`BLUE_SHADES`] until a distinct
/// secondary palette is chosen.
pub fn default_colors() -> BTreeMap<String, ColorValue> {
    default_colors_with(BLUE_SHADES, BLUE_SHADES)
}

/// Palette with the given primary and secondary shade tables.
pub fn default_colors_with(
    primary: &[(&str, &str)],
    secondary: &[(&str, &str)],
) -> BTreeMap<String, ColorValue> {
    let mut colors = BTreeMap::new();
    colors.insert("pri".to_string(), ColorValue::shaded(primary));
    colors.insert("sec".to_string(), ColorValue::shaded(secondary));
    colors.insert("light".to_string(), ColorValue::Flat("#f3f4f6".to_string()));
    colors.insert("dark".to_string(), ColorValue::Flat("#030712".to_string()));
    colors
}
