//! CIE L*a*b* relative to D65. Lab converts only to and from XYZ; reaching
//! RGB always goes through [`Xyz`].

use std::fmt;

use crate::numeric::{clamp, fmt_component, round_half_away, SCALED_PRECISION};
use crate::parse::{parse_function, Unit};
use crate::rgb::Rgb;
use crate::space::{impl_color_traits, ColorSpace};
use crate::xyz::{Xyz, REFERENCE_WHITE};

/// (6/29)³, the boundary between the cube-root and linear segments.
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// (29/3)³, slope of the linear segment.
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

pub const A_MIN: f64 = -128.0;
pub const A_MAX: f64 = 127.0;
pub const B_MIN: f64 = -128.0;
pub const B_MAX: f64 = 127.0;

/// A CIE Lab color with L in [0, 100] and a, b in [-128, 127].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl_color_traits!(Lab { l, a, b });

impl Lab {
    pub fn new(l: f64, a: f64, b: f64) -> Lab {
        Lab {
            l: clamp(l, 0.0, 100.0),
            a: clamp(a, A_MIN, A_MAX),
            b: clamp(b, B_MIN, B_MAX),
        }
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn with_l(self, l: f64) -> Lab {
        Lab::new(l, self.a, self.b)
    }

    pub fn with_a(self, a: f64) -> Lab {
        Lab::new(self.l, a, self.b)
    }

    pub fn with_b(self, b: f64) -> Lab {
        Lab::new(self.l, self.a, b)
    }

    /// Inverts the Lab transform.
    ///
    /// X and Z pick their segment by testing f³ against epsilon, while Y tests
    /// L against kappa·epsilon. The two forms are equivalent in exact
    /// arithmetic and this is the CIE reference formulation.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let invert = |f: f64| {
            let cubed = f * f * f;
            if cubed > CIE_EPSILON {
                cubed
            } else {
                (116.0 * f - 16.0) / CIE_KAPPA
            }
        };
        let xr = invert(fx);
        let yr = if self.l > CIE_KAPPA * CIE_EPSILON {
            fy * fy * fy
        } else {
            self.l / CIE_KAPPA
        };
        let zr = invert(fz);

        Xyz::new(
            xr * REFERENCE_WHITE[0],
            yr * REFERENCE_WHITE[1],
            zr * REFERENCE_WHITE[2],
        )
    }

    /// Parses `lab(L, a, b)`, clamping components into range.
    pub fn parse(s: &str) -> Option<Lab> {
        let [l, a, b] = parse_function(s, "lab", [Unit::Number; 3])?;
        Some(Lab::new(l, a, b))
    }
}

impl ColorSpace for Lab {
    const EMPTY: Lab = Lab {
        l: 0.0,
        a: 0.0,
        b: 0.0,
    };

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn from_rgb(rgb: Rgb) -> Lab {
        rgb.to_xyz().to_lab()
    }

    fn rounded(&self) -> Lab {
        Lab::new(
            round_half_away(self.l, SCALED_PRECISION),
            round_half_away(self.a, SCALED_PRECISION),
            round_half_away(self.b, SCALED_PRECISION),
        )
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(
            f,
            "lab({}, {}, {})",
            fmt_component(r.l),
            fmt_component(r.a),
            fmt_component(r.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn kappa_times_epsilon_is_eight() {
        assert!(approx_eq(CIE_KAPPA * CIE_EPSILON, 8.0));
    }

    #[test]
    fn new_clamps_each_component() {
        let lo = Lab::new(-1.0, -200.0, -128.5);
        assert_eq!((lo.l(), lo.a(), lo.b()), (0.0, A_MIN, B_MIN));
        let hi = Lab::new(100.5, 127.01, 300.0);
        assert_eq!((hi.l(), hi.a(), hi.b()), (100.0, A_MAX, B_MAX));
    }

    #[test]
    fn mutators_replace_one_component() {
        let c = Lab::new(50.0, 10.0, -10.0);
        assert_eq!(c.with_l(60.0), Lab::new(60.0, 10.0, -10.0));
        assert_eq!(c.with_a(-5.0), Lab::new(50.0, -5.0, -10.0));
        assert_eq!(c.with_b(500.0), Lab::new(50.0, 10.0, B_MAX));
    }

    #[test]
    fn l_100_is_reference_white() {
        let xyz = Lab::new(100.0, 0.0, 0.0).to_xyz();
        assert!(approx_eq(xyz.x(), 95.047));
        assert!(approx_eq(xyz.y(), 100.0));
        assert!(approx_eq(xyz.z(), 108.883));
    }

    #[test]
    fn dark_l_uses_linear_y_branch() {
        // L = 4 is below kappa * epsilon = 8, so Y = L / kappa * 100.
        let xyz = Lab::new(4.0, 0.0, 0.0).to_xyz();
        assert!(approx_eq(xyz.y(), 4.0 / CIE_KAPPA * 100.0), "{xyz:?}");
    }

    #[test]
    fn y_branch_tests_l_not_fy_cubed() {
        // At exactly L = 8 the Y branch takes the linear segment.
        let xyz = Lab::new(8.0, 0.0, 0.0).to_xyz();
        assert!(approx_eq(xyz.y(), 8.0 / CIE_KAPPA * 100.0), "{xyz:?}");
    }

    #[test]
    fn empty_round_trips_to_black() {
        assert_eq!(Lab::EMPTY.to_rgb().rounded(), Rgb::BLACK);
        assert!(Lab::from_rgb(Rgb::BLACK).rounded().is_empty());
    }

    #[test]
    fn display_and_parse() {
        let c = Lab::new(53.2408, 80.0925, 67.2032);
        assert_eq!(c.to_string(), "lab(53.24, 80.09, 67.2)");
        assert_eq!(Lab::parse(&c.to_string()).unwrap(), c.rounded());
        assert_eq!(Lab::parse("LAB( 50 , -20 , 30 )").unwrap(), Lab::new(50.0, -20.0, 30.0));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Lab::parse("lab(50, a, 3)").is_none());
        assert!(Lab::parse("lab(50, 20%, 3)").is_none());
        assert!(Lab::parse("lab(50, 20, 3, 4)").is_none());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_round_trip_through_lab(r in 0.0_f64..=1.0, g in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let original = Rgb::new(r, g, b).unwrap();
                let back = Lab::from_rgb(original).to_rgb();
                prop_assert!((back.red() - r).abs() < 1e-5, "r: {} vs {}", back.red(), r);
                prop_assert!((back.green() - g).abs() < 1e-5, "g: {} vs {}", back.green(), g);
                prop_assert!((back.blue() - b).abs() < 1e-5, "b: {} vs {}", back.blue(), b);
            }

            #[test]
            fn parse_of_display_matches_rounded(l in 0.0_f64..=100.0, a in A_MIN..=A_MAX, b in B_MIN..=B_MAX) {
                let c = Lab::new(l, a, b);
                let text = c.to_string();
                let parsed = Lab::parse(&text).unwrap();
                let r = c.rounded();
                prop_assert!((parsed.l() - r.l()).abs() < 1e-9, "{text}");
                prop_assert!((parsed.a() - r.a()).abs() < 1e-9, "{text}");
                prop_assert!((parsed.b() - r.b()).abs() < 1e-9, "{text}");
                prop_assert_eq!(parsed.to_string(), text);
            }

            #[test]
            fn clamping_holds_for_any_input(l in -500.0_f64..500.0, a in -500.0_f64..500.0, b in -500.0_f64..500.0) {
                let c = Lab::new(l, a, b);
                prop_assert!((0.0..=100.0).contains(&c.l()));
                prop_assert!((A_MIN..=A_MAX).contains(&c.a()));
                prop_assert!((B_MIN..=B_MAX).contains(&c.b()));
            }
        }
    }
}
