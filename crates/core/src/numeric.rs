//! Rounding and clamping helpers shared by every color model.
//!
//! All display and comparison rounding uses round-half-away-from-zero. Binary
//! floating point cannot represent most decimal midpoints exactly (`0.585` is
//! stored as `0.58499999999999996...`), so a value within [`MIDPOINT_TOLERANCE`]
//! of a midpoint after scaling is treated as lying exactly on it.

/// Decimal places for components stored on the unit interval.
pub const UNIT_PRECISION: u32 = 3;

/// Decimal places for degree and percent scaled components.
pub const SCALED_PRECISION: u32 = 2;

const MIDPOINT_TOLERANCE: f64 = 1e-9;

/// Rounds `value` to `digits` decimal places, ties away from zero.
pub fn round_half_away(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    let whole = scaled.trunc();
    let frac = (scaled - whole).abs();
    let rounded = if (frac - 0.5).abs() < MIDPOINT_TOLERANCE {
        whole + scaled.signum()
    } else {
        scaled.round()
    };
    // `+ 0.0` turns a negative zero result into positive zero.
    rounded / scale + 0.0
}

/// Clamps `value` into `[min, max]`.
///
/// NaN collapses to `min` and negative zero to positive zero, so a clamped
/// component always has a single bit pattern per numeric value.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min + 0.0;
    }
    value.clamp(min, max) + 0.0
}

/// Rounds a unit-interval value onto the 0–255 scale.
pub fn unit_to_byte(value: f64) -> u8 {
    round_half_away(clamp(value, 0.0, 1.0) * 255.0, 0) as u8
}

/// Formats a component without trailing zeros (`1`, `0.5`, `206.57`).
pub(crate) fn fmt_component(value: f64) -> String {
    format!("{}", value + 0.0)
}
