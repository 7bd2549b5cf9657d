//! HSV: stored on the unit interval, displayed in degrees and percent.

use std::fmt;

use crate::hsl::{sextant_components, Hsl};
use crate::numeric::{clamp, fmt_component, round_half_away, SCALED_PRECISION};
use crate::parse::{parse_function, Unit};
use crate::rgb::Rgb;
use crate::space::{impl_color_traits, ColorSpace};

/// An HSV color with hue, saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl_color_traits!(Hsv {
    hue,
    saturation,
    value
});

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Hsv {
        Hsv {
            hue: clamp(hue, 0.0, 1.0),
            saturation: clamp(saturation, 0.0, 1.0),
            value: clamp(value, 0.0, 1.0),
        }
    }

    /// Creates a color from hue in degrees and saturation, value in percent.
    pub fn from_scaled(hue: f64, saturation: f64, value: f64) -> Hsv {
        Hsv::new(hue / 360.0, saturation / 100.0, value / 100.0)
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Hue in degrees.
    pub fn scaled_hue(&self) -> f64 {
        self.hue * 360.0
    }

    /// Saturation in percent.
    pub fn scaled_saturation(&self) -> f64 {
        self.saturation * 100.0
    }

    /// Value in percent.
    pub fn scaled_value(&self) -> f64 {
        self.value * 100.0
    }

    pub fn with_hue(self, hue: f64) -> Hsv {
        Hsv::new(hue, self.saturation, self.value)
    }

    pub fn with_saturation(self, saturation: f64) -> Hsv {
        Hsv::new(self.hue, saturation, self.value)
    }

    pub fn with_value(self, value: f64) -> Hsv {
        Hsv::new(self.hue, self.saturation, value)
    }

    pub fn to_rgb(&self) -> Rgb {
        let chroma = self.value * self.saturation;
        let (r, g, b) = sextant_components(self.scaled_hue(), chroma);
        let m = self.value - chroma;
        Rgb::clamped(r + m, g + m, b + m)
    }

    /// Converts directly to HSL without going through RGB.
    pub fn to_hsl(&self) -> Hsl {
        let luminance = self.value * (1.0 - self.saturation / 2.0);
        let saturation = if luminance == 0.0 || luminance == 1.0 {
            0.0
        } else {
            (self.value - luminance) / luminance.min(1.0 - luminance)
        };
        Hsl::new(self.scaled_hue(), saturation * 100.0, luminance * 100.0)
    }

    /// Parses `hsv(h, s%, v%)` with hue in degrees. The `%` signs are optional.
    ///
    /// Returns `None` on malformed input or any component outside its range.
    pub fn parse(s: &str) -> Option<Hsv> {
        let [h, sat, val] = parse_function(s, "hsv", [Unit::Number, Unit::Percent, Unit::Percent])?;
        let in_range =
            (0.0..=360.0).contains(&h) && (0.0..=100.0).contains(&sat) && (0.0..=100.0).contains(&val);
        in_range.then(|| Hsv::from_scaled(h, sat, val))
    }
}

impl ColorSpace for Hsv {
    const EMPTY: Hsv = Hsv {
        hue: 0.0,
        saturation: 0.0,
        value: 0.0,
    };

    fn to_rgb(&self) -> Rgb {
        Hsv::to_rgb(self)
    }

    fn from_rgb(rgb: Rgb) -> Hsv {
        rgb.to_hsv()
    }

    /// Rounds on the displayed scale (degrees and percent, two decimals).
    fn rounded(&self) -> Hsv {
        Hsv::from_scaled(
            round_half_away(self.scaled_hue(), SCALED_PRECISION),
            round_half_away(self.scaled_saturation(), SCALED_PRECISION),
            round_half_away(self.scaled_value(), SCALED_PRECISION),
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            fmt_component(round_half_away(self.scaled_hue(), SCALED_PRECISION)),
            fmt_component(round_half_away(self.scaled_saturation(), SCALED_PRECISION)),
            fmt_component(round_half_away(self.scaled_value(), SCALED_PRECISION))
        )
    }
}
