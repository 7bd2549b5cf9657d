//! Hex: the `#RRGGBB` byte-triplet form of an RGB color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::rgb::Rgb;
use crate::space::ColorSpace;

/// An RGB color as three bytes. Every constructor and mutator clamps into
/// [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex {
    red: u8,
    green: u8,
    blue: u8,
}

fn clamp_byte(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl Hex {
    /// Creates a color, clamping each channel into [0, 255].
    pub fn new(red: i32, green: i32, blue: i32) -> Hex {
        Hex {
            red: clamp_byte(red),
            green: clamp_byte(green),
            blue: clamp_byte(blue),
        }
    }

    pub const fn from_bytes(red: u8, green: u8, blue: u8) -> Hex {
        Hex { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn with_red(self, red: i32) -> Hex {
        Hex {
            red: clamp_byte(red),
            ..self
        }
    }

    pub fn with_green(self, green: i32) -> Hex {
        Hex {
            green: clamp_byte(green),
            ..self
        }
    }

    pub fn with_blue(self, blue: i32) -> Hex {
        Hex {
            blue: clamp_byte(blue),
            ..self
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        Rgb::clamped(
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Parses `#RGB` or `#RRGGBB`, with or without the `#`, case-insensitive.
    ///
    /// Shorthand is expanded by doubling each digit (`#1AF` is `#11AAFF`).
    pub fn parse(s: &str) -> Option<Hex> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Hex::from_bytes(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl ColorSpace for Hex {
    const EMPTY: Hex = Hex::from_bytes(0, 0, 0);

    fn to_rgb(&self) -> Rgb {
        Hex::to_rgb(self)
    }

    fn from_rgb(rgb: Rgb) -> Hex {
        rgb.to_hex()
    }

    /// Hex is already integral.
    fn rounded(&self) -> Hex {
        *self
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s).ok_or_else(|| ColorError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
