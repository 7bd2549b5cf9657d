//! Error types for the swatch core.

use thiserror::Error;

/// Errors produced by strict construction, `FromStr`, and settings I/O.
///
/// Parsing through the `parse` helpers never produces one of these; they return
/// `None` instead so partially typed input can be treated as provisional.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A component passed to a strict constructor fell outside its domain.
    #[error("{component} out of range: {value} is not within [{min}, {max}]")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A color model name was not recognized.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A settings document was structurally valid JSON but semantically wrong.
    #[error("invalid settings: {0}")]
    Settings(String),

    /// Reading or writing a settings file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ColorError {
    /// Checks `value` against `[min, max]`, rejecting NaN as well.
    pub(crate) fn check_range(
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<f64, ColorError> {
        if value.is_nan() || value < min || value > max {
            return Err(ColorError::OutOfRange {
                component,
                value,
                min,
                max,
            });
        }
        Ok(value + 0.0)
    }
}
