//! Length grammar for breakpoint values: `<number><unit>`, unit one of px, em, rem.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)(px|em|rem)$").expect("Invalid length regex")
});

/// Pixels per `em`/`rem` when ordering mixed-unit breakpoints.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Length unit accepted in breakpoint values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
        }
    }
}

/// A parsed length such as `640px` or `48rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    /// Width in CSS pixels, assuming the default root font size.
    pub fn to_px(&self) -> f64 {
        match self.unit {
            LengthUnit::Px => self.value,
            LengthUnit::Em | LengthUnit::Rem => self.value * ROOT_FONT_SIZE_PX,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a length; expected <number><unit> with unit px, em or rem")]
pub struct LengthParseError(pub String);

/// Parse a breakpoint length.
pub fn parse_length(input: &str) -> Result<Length, LengthParseError> {
    let caps = LENGTH_RE
        .captures(input)
        .ok_or_else(|| LengthParseError(input.to_string()))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| LengthParseError(input.to_string()))?;
    let unit = match &caps[2] {
        "px" => LengthUnit::Px,
        "em" => LengthUnit::Em,
        _ => LengthUnit::Rem,
    };

    Ok(Length { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pixel_widths() {
        let len = parse_length("640px").unwrap();
        assert_eq!(len.value, 640.0);
        assert_eq!(len.unit, LengthUnit::Px);
        assert_eq!(len.to_px(), 640.0);
    }

    #[test]
    fn parses_relative_units() {
        let len = parse_length("48rem").unwrap();
        assert_eq!(len.unit, LengthUnit::Rem);
        assert_eq!(len.to_px(), 768.0);

        let len = parse_length("2.5em").unwrap();
        assert_eq!(len.unit, LengthUnit::Em);
        assert_eq!(len.to_px(), 40.0);

        assert_eq!(parse_length(".5rem").unwrap().value, 0.5);
    }

    #[test]
    fn rejects_missing_or_unknown_units() {
        for input in ["640", "640 px", "640pt", "40vw", "px", "-640px", "", " 640px", "6.4.0px"] {
            assert!(parse_length(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn error_message_names_the_value() {
        let err = parse_length("640").unwrap_err();
        assert!(err.to_string().contains("'640'"));
        assert!(err.to_string().contains("px, em or rem"));
    }

    #[test]
    fn display_round_trips_simple_values() {
        assert_eq!(parse_length("768px").unwrap().to_string(), "768px");
        assert_eq!(parse_length("0.5em").unwrap().to_string(), "0.5em");
    }
}
