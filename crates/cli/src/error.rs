//! Errors raised by `swatch` subcommands and the exit code each maps to.
//!
//! Exit codes:
//! - 0:  success
//! - 2:  clap rejected the arguments
//! - 10: the color text did not parse in any model, `--to` named an unknown
//!   model, or the settings file held an invalid `lightness_step`
//! - 11: the settings file could not be read or written
//! - 12: no color argument and no remembered color, or `--step` outside (0, 100]
//! - 13: JSON output could not be rendered

use std::fmt;
use swatch_core::ColorError;

#[derive(Debug)]
pub enum CliError {
    /// Parse, model lookup or settings validation failed in `swatch-core`.
    Color(ColorError),
    /// Reading or saving the `--settings` file failed; carries the path.
    Io(String),
    /// Missing color or out-of-range `--step`.
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_exit_code_is_10() {
        let err = CliError::Color(ColorError::InvalidColor("hsl(1a, 2, 3)".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("no color given".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_color_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(ColorError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_color_error_settings_routes_to_cli_color() {
        let cli_err = CliError::from(ColorError::Settings("lightness_step".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("lightness_step"));
    }

    #[test]
    fn from_color_error_unknown_model_routes_to_cli_color() {
        let cli_err = CliError::from(ColorError::UnknownModel("yuv".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("yuv"));
    }

    #[test]
    fn debug_names_the_variant() {
        let err = CliError::Input("step must be in (0, 100], got 0".into());
        assert!(format!("{err:?}").starts_with("Input("));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
