#![deny(unsafe_code)]
//! Core types for the swatch color picker.
//!
//! Provides the seven color models (`Rgb`, `Hex`, `Hsl`, `Hsv`, `Cmyk`, `Xyz`, `Lab`),
//! the `ColorSpace` trait that routes conversions through RGB, the `AnyColor`
//! tagged union, the observable `PickerState`, and persisted `Settings`.

pub mod cmyk;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod model;
pub mod numeric;
pub mod picker;
pub mod rgb;
pub mod settings;
pub mod space;
pub mod xyz;

mod parse;

pub use cmyk::Cmyk;
pub use error::ColorError;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use model::{AnyColor, ColorModel};
pub use picker::{ColorEvent, ColorObserver, FieldChange, PickerState, SubscriptionId};
pub use rgb::Rgb;
pub use settings::Settings;
pub use space::ColorSpace;
pub use xyz::Xyz;
