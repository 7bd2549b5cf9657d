//! The [`ColorSpace`] trait shared by every color model.

use crate::rgb::Rgb;

/// Behaviour common to all seven color models.
///
/// RGB is the hub: any model can reach any other through
/// [`ColorSpace::convert`], which composes `to_rgb` and `from_rgb`. Models
/// with a cheaper direct path (HSL ⇄ HSV, XYZ ⇄ Lab) expose it as an inherent
/// method as well.
pub trait ColorSpace: Copy + PartialEq {
    /// Sentinel for "no color chosen yet". All components at zero.
    const EMPTY: Self;

    /// Converts this color to RGB.
    fn to_rgb(&self) -> Rgb;

    /// Builds this model's representation of an RGB color.
    fn from_rgb(rgb: Rgb) -> Self;

    /// Returns a copy with every component rounded to the model's display
    /// precision, ties away from zero.
    fn rounded(&self) -> Self;

    /// True if this value is the [`ColorSpace::EMPTY`] sentinel.
    fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Converts to any other model by way of RGB.
    fn convert<T: ColorSpace>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// Implements `Eq`, `Hash`, `FromStr`, `Serialize` and `Deserialize` for a
/// color type whose components are all `f64`.
///
/// Constructors guarantee components are never NaN and never negative zero,
/// so hashing the bit patterns is consistent with `PartialEq`. Serde uses the
/// canonical string form produced by `Display` and accepted by `parse`.
macro_rules! impl_color_traits {
    ($ty:ident { $($field:ident),+ }) => {
        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $( std::hash::Hash::hash(&self.$field.to_bits(), state); )+
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::ColorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::parse(s).ok_or_else(|| $crate::error::ColorError::InvalidColor(s.to_string()))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_color_traits;
