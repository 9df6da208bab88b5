//! Color literal grammar.
//!
//! Accepted forms:
//! - `#rgb`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)`, `rgba(r, g, b, a)` and the space form `rgb(r g b / a)`,
//!   channels as 0-255 numbers or 0-100% percentages, alpha as 0-1 or a percentage
//! - CSS named colors and the keywords `transparent`, `currentColor`, `inherit`
//!
//! Parsing only checks the literal; the original string is what gets stored.
//! Surrounding whitespace is rejected, as it is for lengths.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("Invalid hex regex")
});

static RGB_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:rgba?)\(\s*([^,\s]+)\s*,\s*([^,\s]+)\s*,\s*([^,\s]+)\s*(?:,\s*([^,\s)]+)\s*)?\)$",
    )
    .expect("Invalid rgb regex")
});

static RGB_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:rgba?)\(\s*([^,\s/]+)\s+([^,\s/]+)\s+([^,\s/)]+)\s*(?:/\s*([^,\s)]+)\s*)?\)$")
        .expect("Invalid rgb regex")
});

/// CSS keywords accepted alongside named colors.
const COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor", "inherit"];

/// CSS Color Module Level 4 named colors.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet",
    "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// A syntactically valid color literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorLiteral {
    /// Hex digits without the leading `#` (3, 6, or 8 of them).
    Hex(String),
    /// Functional notation, channels and alpha as written.
    Rgb {
        channels: [Channel; 3],
        alpha: Option<Channel>,
    },
    /// Named color or keyword, lowercased.
    Named(String),
}

/// One numeric component of an `rgb()` color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Number(f64),
    Percent(f64),
}

/// Why a string is not a color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color value is empty")]
    Empty,
    #[error("'{0}' has leading or trailing whitespace")]
    Whitespace(String),
    #[error("'{0}' is not a #rgb, #rrggbb or #rrggbbaa hex color")]
    BadHex(String),
    #[error("'{literal}' has an out-of-range or non-numeric component '{component}'")]
    BadComponent { literal: String, component: String },
    #[error("'{0}' is not a hex, rgb()/rgba() or named color")]
    Unrecognized(String),
}

/// Parse a color literal.
pub fn parse_color(input: &str) -> Result<ColorLiteral, ColorParseError> {
    if input.trim().is_empty() {
        return Err(ColorParseError::Empty);
    }
    if input.trim() != input {
        return Err(ColorParseError::Whitespace(input.to_string()));
    }
    let value = input;

    if value.starts_with('#') {
        return match HEX_RE.captures(value) {
            Some(caps) => Ok(ColorLiteral::Hex(caps[1].to_string())),
            None => Err(ColorParseError::BadHex(value.to_string())),
        };
    }

    if let Some(caps) = RGB_COMMA_RE
        .captures(value)
        .or_else(|| RGB_SPACE_RE.captures(value))
    {
        let channel = |idx: usize| parse_channel(&caps[idx], 255.0, value);
        let channels = [channel(1)?, channel(2)?, channel(3)?];
        let alpha = match caps.get(4) {
            Some(m) => Some(parse_channel(m.as_str(), 1.0, value)?),
            None => None,
        };
        return Ok(ColorLiteral::Rgb { channels, alpha });
    }

    let lowered = value.to_ascii_lowercase();
    if NAMED_COLORS.binary_search(&lowered.as_str()).is_ok()
        || COLOR_KEYWORDS.contains(&lowered.as_str())
    {
        return Ok(ColorLiteral::Named(lowered));
    }

    Err(ColorParseError::Unrecognized(value.to_string()))
}

/// Returns true if `input` is a valid color literal.
pub fn is_valid_color(input: &str) -> bool {
    parse_color(input).is_ok()
}

fn parse_channel(raw: &str, max: f64, literal: &str) -> Result<Channel, ColorParseError> {
    let bad = || ColorParseError::BadComponent {
        literal: literal.to_string(),
        component: raw.to_string(),
    };

    if let Some(number) = raw.strip_suffix('%') {
        let pct: f64 = number.parse().map_err(|_| bad())?;
        if !(0.0..=100.0).contains(&pct) {
            return Err(bad());
        }
        return Ok(Channel::Percent(pct));
    }

    let n: f64 = raw.parse().map_err(|_| bad())?;
    if !n.is_finite() || !(0.0..=max).contains(&n) {
        return Err(bad());
    }
    Ok(Channel::Number(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_sorted_for_binary_search() {
        let mut sorted = NAMED_COLORS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, NAMED_COLORS);
    }

    #[test]
    fn accepts_hex_forms() {
        assert_eq!(parse_color("#fff"), Ok(ColorLiteral::Hex("fff".to_string())));
        assert_eq!(
            parse_color("#3b82f6"),
            Ok(ColorLiteral::Hex("3b82f6".to_string()))
        );
        assert!(is_valid_color("#3B82F6"));
        assert!(is_valid_color("#3b82f680"));
    }

    #[test]
    fn rejects_bad_hex() {
        for input in ["#ff", "#ffff", "#fffff", "#1234567", "#ggg", "#", "#3b82f6 extra"] {
            assert!(
                matches!(parse_color(input), Err(ColorParseError::BadHex(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_rgb_functions() {
        assert!(is_valid_color("rgb(59, 130, 246)"));
        assert!(is_valid_color("rgba(59, 130, 246, 0.5)"));
        assert!(is_valid_color("rgb(59 130 246)"));
        assert!(is_valid_color("rgb(59 130 246 / 50%)"));
        assert!(is_valid_color("rgb(100%, 0%, 50%)"));
        assert!(is_valid_color("RGB(0,0,0)"));

        assert_eq!(
            parse_color("rgba(1, 2, 3, 0.25)"),
            Ok(ColorLiteral::Rgb {
                channels: [Channel::Number(1.0), Channel::Number(2.0), Channel::Number(3.0)],
                alpha: Some(Channel::Number(0.25)),
            })
        );
    }

    #[test]
    fn rejects_out_of_range_rgb_components() {
        assert!(matches!(
            parse_color("rgb(256, 0, 0)"),
            Err(ColorParseError::BadComponent { .. })
        ));
        assert!(matches!(
            parse_color("rgba(0, 0, 0, 1.5)"),
            Err(ColorParseError::BadComponent { .. })
        ));
        assert!(matches!(
            parse_color("rgb(0, 0, 101%)"),
            Err(ColorParseError::BadComponent { .. })
        ));
        assert!(matches!(
            parse_color("rgb(a, b, c)"),
            Err(ColorParseError::BadComponent { .. })
        ));
    }

    #[test]
    fn rejects_malformed_rgb_syntax() {
        assert!(!is_valid_color("rgb(1, 2)"));
        assert!(!is_valid_color("rgb(1, 2, 3"));
        assert!(!is_valid_color("hsl(0, 0%, 0%)"));
    }

    #[test]
    fn accepts_named_colors_case_insensitively() {
        assert_eq!(parse_color("red"), Ok(ColorLiteral::Named("red".to_string())));
        assert!(is_valid_color("RebeccaPurple"));
        assert!(is_valid_color("transparent"));
        assert!(is_valid_color("currentColor"));
        assert!(is_valid_color("inherit"));
    }

    #[test]
    fn rejects_unknown_names_and_empty() {
        assert_eq!(parse_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert!(matches!(
            parse_color("blurple"),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(!is_valid_color("3b82f6"));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        for input in [" #3b82f6", "#3b82f6 ", "\tred", "rgb(0, 0, 0)\n"] {
            assert_eq!(
                parse_color(input),
                Err(ColorParseError::Whitespace(input.to_string())),
                "{:?}",
                input
            );
        }
        assert!(is_valid_color("rgb( 0, 0, 0 )"));
    }
}
