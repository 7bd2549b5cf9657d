//! CIE 1931 XYZ tristimulus values relative to the D65 white point.
//!
//! Values are on the 0–100 scale (Y = 100 for reference white). The
//! RGB ⇄ XYZ path is sRGB gamma (de)companding plus a fixed 3×3 matrix;
//! XYZ → Lab lives here too since Lab only ever talks to XYZ.

use std::fmt;

use crate::lab::{Lab, CIE_EPSILON, CIE_KAPPA};
use crate::numeric::{clamp, fmt_component, round_half_away, SCALED_PRECISION};
use crate::parse::{parse_function, Unit};
use crate::rgb::Rgb;
use crate::space::{impl_color_traits, ColorSpace};

pub const X_MAX: f64 = 95.0489;
pub const Y_MAX: f64 = 100.0;
pub const Z_MAX: f64 = 108.884;

/// D65 reference white used for the Lab transform.
pub const REFERENCE_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB (D65) to XYZ on the unit scale.
pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Exact inverse of [`SRGB_TO_XYZ`].
pub(crate) const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404548360214083, -1.5371388501025751, -0.4985315468684809],
    [-0.9692663898756537, 1.8760109288424913, 0.041556082346673524],
    [0.05564341960421366, -0.20402585426769815, 1.0572251624579287],
];

/// Applies inverse sRGB gamma to one component. Sign-preserving, so slightly
/// negative intermediates stay negative instead of producing NaN.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    let magnitude = c.abs();
    let linear = if magnitude <= 0.04045 {
        magnitude / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

/// Applies sRGB gamma to one linear component. Sign-preserving.
pub fn linear_component_to_srgb(c: f64) -> f64 {
    let magnitude = c.abs();
    let encoded = if magnitude <= 0.0031308 {
        magnitude * 12.92
    } else {
        1.055 * magnitude.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(c)
}

/// A CIE XYZ color, clamped to the D65 reference white bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl_color_traits!(Xyz { x, y, z });

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Xyz {
        Xyz {
            x: clamp(x, 0.0, X_MAX),
            y: clamp(y, 0.0, Y_MAX),
            z: clamp(z, 0.0, Z_MAX),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn with_x(self, x: f64) -> Xyz {
        Xyz::new(x, self.y, self.z)
    }

    pub fn with_y(self, y: f64) -> Xyz {
        Xyz::new(self.x, y, self.z)
    }

    pub fn with_z(self, z: f64) -> Xyz {
        Xyz::new(self.x, self.y, z)
    }

    /// Converts to sRGB, clamping out-of-gamut results into [0, 1].
    pub fn to_rgb(&self) -> Rgb {
        let xyz = [self.x / 100.0, self.y / 100.0, self.z / 100.0];
        let [r, g, b] = XYZ_TO_SRGB.map(|row| {
            linear_component_to_srgb(row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2])
        });
        Rgb::clamped(r, g, b)
    }

    pub fn to_lab(&self) -> Lab {
        let f = |value: f64, white: f64| {
            let t = value / white;
            if t > CIE_EPSILON {
                t.cbrt()
            } else {
                (CIE_KAPPA * t + 16.0) / 116.0
            }
        };
        let fx = f(self.x, REFERENCE_WHITE[0]);
        let fy = f(self.y, REFERENCE_WHITE[1]);
        let fz = f(self.z, REFERENCE_WHITE[2]);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Parses `xyz(x, y, z)`. Components outside the reference white bounds
    /// are clamped.
    pub fn parse(s: &str) -> Option<Xyz> {
        let [x, y, z] = parse_function(s, "xyz", [Unit::Number; 3])?;
        Some(Xyz::new(x, y, z))
    }
}

impl ColorSpace for Xyz {
    const EMPTY: Xyz = Xyz {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    fn to_rgb(&self) -> Rgb {
        Xyz::to_rgb(self)
    }

    fn from_rgb(rgb: Rgb) -> Xyz {
        rgb.to_xyz()
    }

    fn rounded(&self) -> Xyz {
        Xyz::new(
            round_half_away(self.x, SCALED_PRECISION),
            round_half_away(self.y, SCALED_PRECISION),
            round_half_away(self.z, SCALED_PRECISION),
        )
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(
            f,
            "xyz({}, {}, {})",
            fmt_component(r.x),
            fmt_component(r.y),
            fmt_component(r.z)
        )
    }
}
