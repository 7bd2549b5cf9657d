//! HSL: hue in degrees, saturation and luminance in percent.

use std::fmt;

use crate::hsv::Hsv;
use crate::numeric::{clamp, fmt_component, round_half_away, SCALED_PRECISION};
use crate::parse::{parse_function, Unit};
use crate::rgb::Rgb;
use crate::space::{impl_color_traits, ColorSpace};

/// An HSL color with hue in [0, 360] and saturation, luminance in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    luminance: f64,
}

impl_color_traits!(Hsl {
    hue,
    saturation,
    luminance
});

impl Hsl {
    /// Step used by the picker's lighter/darker buttons.
    pub const DEFAULT_STEP: f64 = 10.0;

    pub fn new(hue: f64, saturation: f64, luminance: f64) -> Hsl {
        Hsl {
            hue: clamp(hue, 0.0, 360.0),
            saturation: clamp(saturation, 0.0, 100.0),
            luminance: clamp(luminance, 0.0, 100.0),
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    pub fn with_hue(self, hue: f64) -> Hsl {
        Hsl::new(hue, self.saturation, self.luminance)
    }

    pub fn with_saturation(self, saturation: f64) -> Hsl {
        Hsl::new(self.hue, saturation, self.luminance)
    }

    pub fn with_luminance(self, luminance: f64) -> Hsl {
        Hsl::new(self.hue, self.saturation, luminance)
    }

    /// Raises luminance by `amount` percentage points, saturating at 100.
    pub fn lighter(self, amount: f64) -> Hsl {
        self.with_luminance(self.luminance + amount)
    }

    /// Lowers luminance by `amount` percentage points, saturating at 0.
    pub fn darker(self, amount: f64) -> Hsl {
        self.with_luminance(self.luminance - amount)
    }

    pub fn to_rgb(&self) -> Rgb {
        let s = self.saturation / 100.0;
        let l = self.luminance / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let (r, g, b) = sextant_components(self.hue, chroma);
        let m = l - chroma / 2.0;
        Rgb::clamped(r + m, g + m, b + m)
    }

    /// Converts directly to HSV without going through RGB.
    pub fn to_hsv(&self) -> Hsv {
        let s = self.saturation / 100.0;
        let l = self.luminance / 100.0;
        let value = l + s * l.min(1.0 - l);
        let saturation = if value == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - l / value)
        };
        Hsv::new(self.hue / 360.0, saturation, value)
    }

    /// Parses `hsl(h, s%, l%)`. The `%` signs are optional.
    ///
    /// Returns `None` on malformed input or any component outside its range.
    pub fn parse(s: &str) -> Option<Hsl> {
        let [h, sat, lum] = parse_function(s, "hsl", [Unit::Number, Unit::Percent, Unit::Percent])?;
        let in_range =
            (0.0..=360.0).contains(&h) && (0.0..=100.0).contains(&sat) && (0.0..=100.0).contains(&lum);
        in_range.then(|| Hsl::new(h, sat, lum))
    }
}

/// Splits `chroma` over the sextant containing `hue_degrees`, returning the
/// `(r, g, b)` contributions before the lightness offset is added.
///
/// A hue of exactly 360 is the same angle as 0 and is mapped there before the
/// sextant lookup.
pub(crate) fn sextant_components(hue_degrees: f64, chroma: f64) -> (f64, f64, f64) {
    let hue = if hue_degrees == 360.0 { 0.0 } else { hue_degrees };
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

    if (0.0..60.0).contains(&hue) {
        (chroma, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, chroma, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, chroma, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, chroma)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, chroma)
    } else if (300.0..360.0).contains(&hue) {
        (chroma, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    }
}

impl ColorSpace for Hsl {
    const EMPTY: Hsl = Hsl {
        hue: 0.0,
        saturation: 0.0,
        luminance: 0.0,
    };

    fn to_rgb(&self) -> Rgb {
        Hsl::to_rgb(self)
    }

    fn from_rgb(rgb: Rgb) -> Hsl {
        rgb.to_hsl()
    }

    fn rounded(&self) -> Hsl {
        Hsl::new(
            round_half_away(self.hue, SCALED_PRECISION),
            round_half_away(self.saturation, SCALED_PRECISION),
            round_half_away(self.luminance, SCALED_PRECISION),
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(
            f,
            "hsl({}, {}%, {}%)",
            fmt_component(r.hue),
            fmt_component(r.saturation),
            fmt_component(r.luminance)
        )
    }
}
