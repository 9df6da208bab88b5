//! Validation grammars for theme config values.
//!
//! - Colors: hex, `rgb()`/`rgba()`, named colors
//! - Lengths: breakpoint widths in px, em or rem
//! - Content: glob patterns for source files scanned for class names

pub mod color;
pub mod content;
pub mod length;

pub use color::{ColorLiteral, ColorParseError, is_valid_color, parse_color};
pub use content::ContentMatcher;
pub use length::{Length, LengthParseError, LengthUnit, parse_length};
