// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the bridge's valid range of 0-254.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Brightness level on the bridge scale (0-254).
///
/// The Hue bridge uses 0-254 for the `bri` field, where 0 is the dimmest
/// setting a light supports (not off) and 254 is full brightness.
///
/// # Examples
///
/// ```
/// use lumen_lib::types::Brightness;
///
/// // Create a brightness at 200
/// let bri = Brightness::new(200).unwrap();
/// assert_eq!(bri.value(), 200);
///
/// // Use predefined values
/// assert_eq!(Brightness::MIN.value(), 0);
/// assert_eq!(Brightness::MAX.value(), 254);
///
/// // Invalid values return error
/// assert!(Brightness::new(255).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value.
    pub const MIN: Self = Self(0);

    /// Maximum brightness value.
    pub const MAX: Self = Self(254);

    /// Neutral brightness used as the fixed fallback when neither a label
    /// nor a configured default applies.
    pub const NEUTRAL: Self = Self(150);

    /// Creates a new brightness value.
    ///
    /// # Arguments
    ///
    /// * `value` - The brightness level (0-254)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 254.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_lib::types::Brightness;
    ///
    /// let bri = Brightness::new(127).unwrap();
    /// assert_eq!(bri.value(), 127);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if value > 254 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 254,
                actual: value,
            });
        }
        // Safe: value <= 254 fits in u8
        Ok(Self(value as u8))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// Values above 254 are clamped to 254.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_lib::types::Brightness;
    ///
    /// let bri = Brightness::clamped(255);
    /// assert_eq!(bri.value(), 254);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn clamped(value: u16) -> Self {
        // Safe: value <= 254 fits in u8
        if value > 254 { Self(254) } else { Self(value as u8) }
    }

    /// Returns the brightness level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f32 {
        f32::from(self.0) / 254.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/254", self.0)
    }
}

impl TryFrom<u16> for Brightness {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for u16 {
    fn from(value: Brightness) -> Self {
        Self::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in [0u16, 1, 127, 150, 254] {
            let bri = Brightness::new(v).unwrap();
            assert_eq!(u16::from(bri.value()), v);
        }
    }

    #[test]
    fn brightness_invalid_value() {
        assert!(Brightness::new(255).is_err());
        assert!(Brightness::new(1000).is_err());
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(100).value(), 100);
        assert_eq!(Brightness::clamped(255).value(), 254);
        assert_eq!(Brightness::clamped(9999).value(), 254);
    }

    #[test]
    fn brightness_as_fraction() {
        assert!((Brightness::MIN.as_fraction() - 0.0).abs() < f32::EPSILON);
        assert!((Brightness::MAX.as_fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn brightness_serializes_as_number() {
        let bri = Brightness::new(200).unwrap();
        assert_eq!(serde_json::to_value(bri).unwrap(), serde_json::json!(200));
    }

    #[test]
    fn brightness_deserializes_with_validation() {
        let bri: Brightness = serde_json::from_str("150").unwrap();
        assert_eq!(bri, Brightness::NEUTRAL);

        let result: Result<Brightness, _> = serde_json::from_str("300");
        assert!(result.is_err());
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
        assert!(Brightness::new(100).unwrap() < Brightness::new(200).unwrap());
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(200).unwrap().to_string(), "200/254");
    }
}
