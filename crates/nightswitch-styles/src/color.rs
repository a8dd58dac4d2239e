//! Color values for palette extensions.
//!
//! Palette colors are RGB hex strings in the two usual forms:
//!
//! - 6-digit: `"#1e293b"`
//! - 3-digit shorthand: `"#fff"` (each digit doubled)
//!
//! ```rust
//! use nightswitch_styles::Rgb;
//!
//! let slate = Rgb::parse("#1e293b").unwrap();
//! assert_eq!(slate.to_string(), "#1e293b");
//!
//! let white = Rgb::parse("#fff").unwrap();
//! assert_eq!(white, Rgb::new(255, 255, 255));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A true-color RGB value, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from components.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#hex` color string (3 or 6 digit).
    pub fn parse(s: &str) -> Result<Self, String> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color '{}': expected a leading '#'", s))?;

        // Length checks below are in bytes; a multibyte character would
        // land a slice on a non-char boundary.
        if !hex.is_ascii() {
            return Err(format!("Invalid color '{}': expected ASCII hex digits", s));
        }

        match hex.len() {
            3 => {
                let mut components = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c
                        .to_digit(16)
                        .ok_or_else(|| format!("Invalid hex digit '{}' in color '{}'", c, s))?
                        as u8;
                    components[i] = v * 16 + v;
                }
                Ok(Self::new(components[0], components[1], components[2]))
            }
            6 => {
                let parse_pair = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16)
                        .map_err(|_| format!("Invalid hex digits in color '{}'", s))
                };
                Ok(Self::new(
                    parse_pair(0..2)?,
                    parse_pair(2..4)?,
                    parse_pair(4..6)?,
                ))
            }
            n => Err(format!(
                "Invalid color '{}': expected 3 or 6 hex digits, got {}",
                s, n
            )),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}
