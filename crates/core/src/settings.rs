//! Persisted picker settings: the active model, the last color, and the
//! lighter/darker step.
//!
//! Settings are stored as JSON. [`Settings::from_json`] is lenient: each field
//! that is missing or has the wrong type falls back to its default, so a
//! settings file written by an older or newer version still loads.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ColorError;
use crate::hsl::Hsl;
use crate::model::{AnyColor, ColorModel};
use crate::picker::PickerState;
use crate::rgb::Rgb;

/// Picker settings as persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub active_model: ColorModel,
    pub last_color: Option<AnyColor>,
    pub lightness_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_model: ColorModel::Rgb,
            last_color: None,
            lightness_step: Hsl::DEFAULT_STEP,
        }
    }
}

/// Extracts an `f64` from `value[name]`, returning `default` if missing or wrong type.
fn field_f64(value: &Value, name: &str, default: f64) -> f64 {
    value.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a string slice from `value[name]`, if present and a string.
fn field_str<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value.get(name).and_then(Value::as_str)
}

impl Settings {
    /// Builds settings from a JSON value, field by field.
    ///
    /// Unknown model names and unparseable colors are logged and replaced by
    /// their defaults. Never fails.
    pub fn from_json(value: &Value) -> Settings {
        let defaults = Settings::default();

        let active_model = match field_str(value, "active_model") {
            Some(name) => ColorModel::from_name(name).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring active_model");
                defaults.active_model
            }),
            None => defaults.active_model,
        };

        let last_color = field_str(value, "last_color").and_then(|s| {
            let parsed = AnyColor::parse(s);
            if parsed.is_none() {
                warn!(last_color = s, "ignoring unparseable last_color");
            }
            parsed
        });

        Settings {
            active_model,
            last_color,
            lightness_step: field_f64(value, "lightness_step", defaults.lightness_step),
        }
    }

    /// Checks that the lightness step is a usable percentage.
    pub fn validate(&self) -> Result<(), ColorError> {
        if !self.lightness_step.is_finite()
            || self.lightness_step <= 0.0
            || self.lightness_step > 100.0
        {
            return Err(ColorError::Settings(format!(
                "lightness_step must be in (0, 100], got {}",
                self.lightness_step
            )));
        }
        Ok(())
    }

    /// Loads settings from `path`.
    ///
    /// A missing file yields the defaults. Malformed JSON is an error; a
    /// well-formed document is read leniently with [`Settings::from_json`].
    pub fn load(path: &Path) -> Result<Settings, ColorError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(ColorError::Io(format!("{}: {e}", path.display()))),
        };
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| ColorError::Settings(format!("{}: {e}", path.display())))?;
        let settings = Settings::from_json(&value);
        settings.validate()?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Writes settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ColorError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::Settings(e.to_string()))?;
        fs::write(path, json).map_err(|e| ColorError::Io(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Remembers `color` as the last active color.
    pub fn record(&mut self, color: AnyColor) {
        self.last_color = Some(color);
    }

    /// Builds the picker state these settings describe. Without a last color
    /// the picker starts on the empty sentinel.
    pub fn to_picker_state(&self) -> PickerState {
        let color = self.last_color.unwrap_or(AnyColor::Rgb(Rgb::BLACK));
        PickerState::new(color, self.active_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_settings_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.lightness_step, 10.0);
        assert!(s.last_color.is_none());
    }

    #[test]
    fn from_json_reads_every_field() {
        let s = Settings::from_json(&json!({
            "active_model": "hsl",
            "last_color": "#2196F3",
            "lightness_step": 5
        }));
        assert_eq!(s.active_model, ColorModel::Hsl);
        assert_eq!(s.last_color, AnyColor::parse("#2196F3"));
        assert_eq!(s.lightness_step, 5.0);
    }

    #[test]
    fn from_json_falls_back_per_field() {
        let s = Settings::from_json(&json!({
            "active_model": "yuv",
            "last_color": "hsl(255a, 100, 30)",
            "lightness_step": "big"
        }));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn from_json_non_object_gives_defaults() {
        assert_eq!(Settings::from_json(&json!("nope")), Settings::default());
        assert_eq!(Settings::from_json(&json!(null)), Settings::default());
    }

    #[test]
    fn validate_rejects_bad_step() {
        for step in [0.0, -1.0, 101.0, f64::NAN] {
            let s = Settings {
                lightness_step: step,
                ..Settings::default()
            };
            assert!(s.validate().is_err(), "step {step} accepted");
        }
    }

    #[test]
    fn json_round_trip() {
        let mut s = Settings::default();
        s.active_model = ColorModel::Lab;
        s.record(AnyColor::Rgb(Rgb::from_scaled(116, 58, 111).unwrap()));
        let json = serde_json::to_string(&s).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.active_model, ColorModel::Lab);
        assert_eq!(
            restored.last_color.map(|c| c.to_rgb().to_hex()),
            s.last_color.map(|c| c.to_rgb().to_hex())
        );
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut s = Settings::default();
        s.active_model = ColorModel::Cmyk;
        s.record(AnyColor::parse("#C0FFEE").unwrap());
        s.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, s);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn load_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(ColorError::Settings(_))));
    }

    #[test]
    fn load_rejects_invalid_step() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step.json");
        fs::write(&path, r#"{"lightness_step": 0}"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn to_picker_state_uses_last_color_and_model() {
        let mut s = Settings::default();
        assert!(s.to_picker_state().color().is_empty());

        s.active_model = ColorModel::Hex;
        s.record(AnyColor::parse("#FF0000").unwrap());
        let state = s.to_picker_state();
        assert_eq!(state.active_model(), ColorModel::Hex);
        assert_eq!(state.active_color().to_string(), "#FF0000");
    }
}
