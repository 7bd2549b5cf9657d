//! RGB, the hub color model.
//!
//! Components are stored on the unit interval. `new` and `from_scaled` reject
//! out-of-range input; `clamped`, the mutators and every conversion clamp.

use std::fmt;

use crate::cmyk::Cmyk;
use crate::error::ColorError;
use crate::hex::Hex;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::numeric::{clamp, fmt_component, round_half_away, unit_to_byte, UNIT_PRECISION};
use crate::parse::{parse_function, Unit};
use crate::space::{impl_color_traits, ColorSpace};
use crate::xyz::{srgb_component_to_linear, Xyz, SRGB_TO_XYZ};

/// Brightness at or above which dark text is more legible than light text.
const CONTRAST_THRESHOLD: f64 = 130.0;

/// An sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
}

impl_color_traits!(Rgb { red, green, blue });

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    pub const WHITE: Rgb = Rgb {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    /// Creates a color from unit-interval components.
    ///
    /// Returns `ColorError::OutOfRange` if any component is below 0, above 1,
    /// or NaN.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Rgb, ColorError> {
        Ok(Rgb {
            red: ColorError::check_range("red", red, 0.0, 1.0)?,
            green: ColorError::check_range("green", green, 0.0, 1.0)?,
            blue: ColorError::check_range("blue", blue, 0.0, 1.0)?,
        })
    }

    /// Creates a color from 0–255 components.
    ///
    /// Returns `ColorError::OutOfRange` if any component is below 0 or above 255.
    pub fn from_scaled(red: i32, green: i32, blue: i32) -> Result<Rgb, ColorError> {
        let check = |component: &'static str, value: i32| {
            ColorError::check_range(component, f64::from(value), 0.0, 255.0).map(|v| v / 255.0)
        };
        Ok(Rgb {
            red: check("red", red)?,
            green: check("green", green)?,
            blue: check("blue", blue)?,
        })
    }

    /// Creates a color, clamping every component into [0, 1].
    pub fn clamped(red: f64, green: f64, blue: f64) -> Rgb {
        Rgb {
            red: clamp(red, 0.0, 1.0),
            green: clamp(green, 0.0, 1.0),
            blue: clamp(blue, 0.0, 1.0),
        }
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Red on the 0–255 scale, rounded half away from zero.
    pub fn scaled_red(&self) -> u8 {
        unit_to_byte(self.red)
    }

    /// Green on the 0–255 scale, rounded half away from zero.
    pub fn scaled_green(&self) -> u8 {
        unit_to_byte(self.green)
    }

    /// Blue on the 0–255 scale, rounded half away from zero.
    pub fn scaled_blue(&self) -> u8 {
        unit_to_byte(self.blue)
    }

    pub fn with_red(self, red: f64) -> Rgb {
        Rgb::clamped(red, self.green, self.blue)
    }

    pub fn with_green(self, green: f64) -> Rgb {
        Rgb::clamped(self.red, green, self.blue)
    }

    pub fn with_blue(self, blue: f64) -> Rgb {
        Rgb::clamped(self.red, self.green, blue)
    }

    /// Returns `(max, min, chroma, hue)` where hue is a fraction of a full
    /// turn in [0, 1).
    fn hue_and_chroma(&self) -> (f64, f64, f64, f64) {
        let (r, g, b) = (self.red, self.green, self.blue);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let sextant = if chroma == 0.0 {
            0.0
        } else if max == r {
            (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        (max, min, chroma, sextant / 6.0)
    }

    pub fn to_hsl(&self) -> Hsl {
        let (max, min, chroma, hue) = self.hue_and_chroma();
        let luminance = (max + min) / 2.0;
        let saturation = if chroma == 0.0 || luminance == 0.0 || luminance == 1.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * max - chroma - 1.0).abs())
        };
        Hsl::new(hue * 360.0, saturation * 100.0, luminance * 100.0)
    }

    pub fn to_hsv(&self) -> Hsv {
        let (max, _, chroma, hue) = self.hue_and_chroma();
        let saturation = if max == 0.0 { 0.0 } else { chroma / max };
        Hsv::new(hue, saturation, max)
    }

    pub fn to_cmyk(&self) -> Cmyk {
        let key = 1.0 - self.red.max(self.green).max(self.blue);
        let ink = 1.0 - key;
        if ink == 0.0 {
            return Cmyk::new(0.0, 0.0, 0.0, key);
        }
        Cmyk::new(
            (ink - self.red) / ink,
            (ink - self.green) / ink,
            (ink - self.blue) / ink,
            key,
        )
    }

    /// Converts to CIE XYZ (D65) on the 0–100 scale.
    pub fn to_xyz(&self) -> Xyz {
        let linear = [self.red, self.green, self.blue].map(srgb_component_to_linear);
        let [x, y, z] = SRGB_TO_XYZ.map(|row| {
            100.0 * (row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2])
        });
        Xyz::new(x, y, z)
    }

    pub fn to_hex(&self) -> Hex {
        Hex::from_bytes(self.scaled_red(), self.scaled_green(), self.scaled_blue())
    }

    /// Perceived brightness on the 0–255 scale.
    pub fn brightness(&self) -> f64 {
        let (r, g, b) = (self.red * 255.0, self.green * 255.0, self.blue * 255.0);
        (0.241 * r * r + 0.691 * g * g + 0.068 * b * b).sqrt()
    }

    /// Black or white, whichever reads better as text over this color.
    pub fn contrasting_text(&self) -> Rgb {
        if self.brightness() < CONTRAST_THRESHOLD {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }

    /// Parses `rgb(r, g, b)` with unit-interval components.
    ///
    /// Returns `None` on malformed input or any component outside [0, 1].
    pub fn parse(s: &str) -> Option<Rgb> {
        let [r, g, b] = parse_function(s, "rgb", [Unit::Number; 3])?;
        Rgb::new(r, g, b).ok()
    }

    /// Parses `rgb(R, G, B)` with 0–255 components.
    ///
    /// Returns `None` on malformed input or any component outside [0, 255].
    pub fn parse_scaled(s: &str) -> Option<Rgb> {
        let [r, g, b] = parse_function(s, "rgb", [Unit::Number; 3])?;
        if [r, g, b].iter().any(|c| !(0.0..=255.0).contains(c)) {
            return None;
        }
        Some(Rgb::clamped(r / 255.0, g / 255.0, b / 255.0))
    }

    /// Formats as `rgb(R, G, B)` with 0–255 integer components.
    pub fn to_scaled_string(&self) -> String {
        format!(
            "rgb({}, {}, {})",
            self.scaled_red(),
            self.scaled_green(),
            self.scaled_blue()
        )
    }
}

impl ColorSpace for Rgb {
    const EMPTY: Rgb = Rgb::BLACK;

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn from_rgb(rgb: Rgb) -> Rgb {
        rgb
    }

    fn rounded(&self) -> Rgb {
        Rgb::clamped(
            round_half_away(self.red, UNIT_PRECISION),
            round_half_away(self.green, UNIT_PRECISION),
            round_half_away(self.blue, UNIT_PRECISION),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(
            f,
            "rgb({}, {}, {})",
            fmt_component(r.red),
            fmt_component(r.green),
            fmt_component(r.blue)
        )
    }
}
