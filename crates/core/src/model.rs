//! Model registry: maps model names to color types and dispatches over a
//! value of any model.
//!
//! Front ends (the CLI, a picker UI) work with colors whose model is only
//! known at runtime. [`ColorModel`] names a model; [`AnyColor`] holds a value
//! of any model and delegates [`ColorSpace`] methods to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cmyk::Cmyk;
use crate::error::ColorError;
use crate::hex::Hex;
use crate::hsl::Hsl;
use crate::hsv::Hsv;
use crate::lab::Lab;
use crate::rgb::Rgb;
use crate::space::ColorSpace;
use crate::xyz::Xyz;

/// All available model names, in display order.
const MODEL_NAMES: &[&str] = &["rgb", "hex", "hsl", "hsv", "cmyk", "xyz", "lab"];

/// The seven supported color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Hex,
    Hsl,
    Hsv,
    Cmyk,
    Xyz,
    Lab,
}

impl ColorModel {
    pub const ALL: [ColorModel; 7] = [
        ColorModel::Rgb,
        ColorModel::Hex,
        ColorModel::Hsl,
        ColorModel::Hsv,
        ColorModel::Cmyk,
        ColorModel::Xyz,
        ColorModel::Lab,
    ];

    /// Looks up a model by name, case-insensitively.
    ///
    /// Returns `ColorError::UnknownModel` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<ColorModel, ColorError> {
        ColorModel::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ColorError::UnknownModel(name.to_string()))
    }

    /// Returns a slice of all recognized model names.
    pub fn list_names() -> &'static [&'static str] {
        MODEL_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Hex => "hex",
            ColorModel::Hsl => "hsl",
            ColorModel::Hsv => "hsv",
            ColorModel::Cmyk => "cmyk",
            ColorModel::Xyz => "xyz",
            ColorModel::Lab => "lab",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorModel::from_name(s)
    }
}

/// A color value in any of the seven models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyColor {
    Rgb(Rgb),
    Hex(Hex),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmyk(Cmyk),
    Xyz(Xyz),
    Lab(Lab),
}

impl AnyColor {
    /// Parses a color in any model's canonical form.
    ///
    /// The model is picked from the keyword before the parenthesis; strings
    /// without one are tried as hex. `rgb(...)` is read as unit components
    /// first and falls back to the 0–255 form, so `rgb(1, 1, 1)` is white and
    /// `rgb(33, 150, 243)` is Material blue.
    pub fn parse(s: &str) -> Option<AnyColor> {
        let trimmed = s.trim();
        let Some(open) = trimmed.find('(') else {
            return Hex::parse(trimmed).map(AnyColor::Hex);
        };
        let keyword = trimmed[..open].trim();
        match ColorModel::from_name(keyword).ok()? {
            ColorModel::Rgb => Rgb::parse(trimmed)
                .or_else(|| Rgb::parse_scaled(trimmed))
                .map(AnyColor::Rgb),
            ColorModel::Hex => None,
            ColorModel::Hsl => Hsl::parse(trimmed).map(AnyColor::Hsl),
            ColorModel::Hsv => Hsv::parse(trimmed).map(AnyColor::Hsv),
            ColorModel::Cmyk => Cmyk::parse(trimmed).map(AnyColor::Cmyk),
            ColorModel::Xyz => Xyz::parse(trimmed).map(AnyColor::Xyz),
            ColorModel::Lab => Lab::parse(trimmed).map(AnyColor::Lab),
        }
    }

    /// Like [`AnyColor::parse`], but reads `rgb(...)` on the 0–255 scale
    /// only, so `rgb(1, 1, 1)` is near-black. Other models parse as usual.
    pub fn parse_scaled(s: &str) -> Option<AnyColor> {
        let trimmed = s.trim();
        match Rgb::parse_scaled(trimmed) {
            Some(rgb) => Some(AnyColor::Rgb(rgb)),
            None => AnyColor::parse(trimmed).filter(|c| c.model() != ColorModel::Rgb),
        }
    }

    pub fn model(&self) -> ColorModel {
        match self {
            AnyColor::Rgb(_) => ColorModel::Rgb,
            AnyColor::Hex(_) => ColorModel::Hex,
            AnyColor::Hsl(_) => ColorModel::Hsl,
            AnyColor::Hsv(_) => ColorModel::Hsv,
            AnyColor::Cmyk(_) => ColorModel::Cmyk,
            AnyColor::Xyz(_) => ColorModel::Xyz,
            AnyColor::Lab(_) => ColorModel::Lab,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            AnyColor::Rgb(c) => *c,
            AnyColor::Hex(c) => c.to_rgb(),
            AnyColor::Hsl(c) => c.to_rgb(),
            AnyColor::Hsv(c) => c.to_rgb(),
            AnyColor::Cmyk(c) => c.to_rgb(),
            AnyColor::Xyz(c) => c.to_rgb(),
            AnyColor::Lab(c) => c.to_xyz().to_rgb(),
        }
    }

    pub fn to_hex(&self) -> Hex {
        match self {
            AnyColor::Hex(c) => *c,
            other => other.to_rgb().to_hex(),
        }
    }

    /// HSV converts to HSL directly; other models go through RGB.
    pub fn to_hsl(&self) -> Hsl {
        match self {
            AnyColor::Hsl(c) => *c,
            AnyColor::Hsv(c) => c.to_hsl(),
            other => other.to_rgb().to_hsl(),
        }
    }

    /// HSL converts to HSV directly; other models go through RGB.
    pub fn to_hsv(&self) -> Hsv {
        match self {
            AnyColor::Hsv(c) => *c,
            AnyColor::Hsl(c) => c.to_hsv(),
            other => other.to_rgb().to_hsv(),
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            AnyColor::Cmyk(c) => *c,
            other => other.to_rgb().to_cmyk(),
        }
    }

    /// Lab converts to XYZ directly; other models go through RGB.
    pub fn to_xyz(&self) -> Xyz {
        match self {
            AnyColor::Xyz(c) => *c,
            AnyColor::Lab(c) => c.to_xyz(),
            other => other.to_rgb().to_xyz(),
        }
    }

    /// Every model reaches Lab through XYZ.
    pub fn to_lab(&self) -> Lab {
        match self {
            AnyColor::Lab(c) => *c,
            other => other.to_xyz().to_lab(),
        }
    }

    /// Converts to `model`, taking the direct path where one exists
    /// (HSL ⇄ HSV, XYZ ⇄ Lab) and going through RGB otherwise.
    pub fn to_model(&self, model: ColorModel) -> AnyColor {
        match model {
            ColorModel::Rgb => AnyColor::Rgb(self.to_rgb()),
            ColorModel::Hex => AnyColor::Hex(self.to_hex()),
            ColorModel::Hsl => AnyColor::Hsl(self.to_hsl()),
            ColorModel::Hsv => AnyColor::Hsv(self.to_hsv()),
            ColorModel::Cmyk => AnyColor::Cmyk(self.to_cmyk()),
            ColorModel::Xyz => AnyColor::Xyz(self.to_xyz()),
            ColorModel::Lab => AnyColor::Lab(self.to_lab()),
        }
    }

    /// Builds `model`'s representation of an RGB color.
    pub fn from_rgb(rgb: Rgb, model: ColorModel) -> AnyColor {
        AnyColor::Rgb(rgb).to_model(model)
    }

    /// True if the wrapped value is its model's empty sentinel.
    pub fn is_empty(&self) -> bool {
        match self {
            AnyColor::Rgb(c) => c.is_empty(),
            AnyColor::Hex(c) => c.is_empty(),
            AnyColor::Hsl(c) => c.is_empty(),
            AnyColor::Hsv(c) => c.is_empty(),
            AnyColor::Cmyk(c) => c.is_empty(),
            AnyColor::Xyz(c) => c.is_empty(),
            AnyColor::Lab(c) => c.is_empty(),
        }
    }
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyColor::Rgb(c) => fmt::Display::fmt(c, f),
            AnyColor::Hex(c) => fmt::Display::fmt(c, f),
            AnyColor::Hsl(c) => fmt::Display::fmt(c, f),
            AnyColor::Hsv(c) => fmt::Display::fmt(c, f),
            AnyColor::Cmyk(c) => fmt::Display::fmt(c, f),
            AnyColor::Xyz(c) => fmt::Display::fmt(c, f),
            AnyColor::Lab(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl FromStr for AnyColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnyColor::parse(s).ok_or_else(|| ColorError::InvalidColor(s.to_string()))
    }
}

impl Serialize for AnyColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AnyColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
