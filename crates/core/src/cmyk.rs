//! CMYK, the subtractive model. Stored on the unit interval, displayed in
//! percent.

use std::fmt;

use crate::numeric::{clamp, fmt_component, round_half_away, UNIT_PRECISION};
use crate::parse::{parse_function, Unit};
use crate::rgb::Rgb;
use crate::space::{impl_color_traits, ColorSpace};

/// Percent display keeps one decimal, i.e. the unit precision shifted by two.
const PERCENT_PRECISION: u32 = UNIT_PRECISION - 2;

/// A CMYK color with every component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

impl_color_traits!(Cmyk {
    cyan,
    magenta,
    yellow,
    key
});

impl Cmyk {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Cmyk {
        Cmyk {
            cyan: clamp(cyan, 0.0, 1.0),
            magenta: clamp(magenta, 0.0, 1.0),
            yellow: clamp(yellow, 0.0, 1.0),
            key: clamp(key, 0.0, 1.0),
        }
    }

    /// Creates a color from percentages.
    pub fn from_scaled(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Cmyk {
        Cmyk::new(cyan / 100.0, magenta / 100.0, yellow / 100.0, key / 100.0)
    }

    pub fn cyan(&self) -> f64 {
        self.cyan
    }

    pub fn magenta(&self) -> f64 {
        self.magenta
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }

    pub fn key(&self) -> f64 {
        self.key
    }

    pub fn scaled_cyan(&self) -> f64 {
        self.cyan * 100.0
    }

    pub fn scaled_magenta(&self) -> f64 {
        self.magenta * 100.0
    }

    pub fn scaled_yellow(&self) -> f64 {
        self.yellow * 100.0
    }

    pub fn scaled_key(&self) -> f64 {
        self.key * 100.0
    }

    pub fn with_cyan(self, cyan: f64) -> Cmyk {
        Cmyk::new(cyan, self.magenta, self.yellow, self.key)
    }

    pub fn with_magenta(self, magenta: f64) -> Cmyk {
        Cmyk::new(self.cyan, magenta, self.yellow, self.key)
    }

    pub fn with_yellow(self, yellow: f64) -> Cmyk {
        Cmyk::new(self.cyan, self.magenta, yellow, self.key)
    }

    pub fn with_key(self, key: f64) -> Cmyk {
        Cmyk::new(self.cyan, self.magenta, self.yellow, key)
    }

    pub fn to_rgb(&self) -> Rgb {
        let ink = 1.0 - self.key;
        Rgb::clamped(
            (1.0 - self.cyan) * ink,
            (1.0 - self.magenta) * ink,
            (1.0 - self.yellow) * ink,
        )
    }

    /// Parses `cmyk(c%, m%, y%, k%)`. The `%` signs are optional.
    ///
    /// Returns `None` on malformed input or any component outside [0, 100].
    pub fn parse(s: &str) -> Option<Cmyk> {
        let [c, m, y, k] = parse_function(s, "cmyk", [Unit::Percent; 4])?;
        if [c, m, y, k].iter().any(|v| !(0.0..=100.0).contains(v)) {
            return None;
        }
        Some(Cmyk::from_scaled(c, m, y, k))
    }
}

impl ColorSpace for Cmyk {
    const EMPTY: Cmyk = Cmyk {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        key: 0.0,
    };

    fn to_rgb(&self) -> Rgb {
        Cmyk::to_rgb(self)
    }

    fn from_rgb(rgb: Rgb) -> Cmyk {
        rgb.to_cmyk()
    }

    fn rounded(&self) -> Cmyk {
        Cmyk::new(
            round_half_away(self.cyan, UNIT_PRECISION),
            round_half_away(self.magenta, UNIT_PRECISION),
            round_half_away(self.yellow, UNIT_PRECISION),
            round_half_away(self.key, UNIT_PRECISION),
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = |v: f64| fmt_component(round_half_away(v * 100.0, PERCENT_PRECISION));
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            pct(self.cyan),
            pct(self.magenta),
            pct(self.yellow),
            pct(self.key)
        )
    }
}
