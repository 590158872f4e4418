// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color point in CIE xy space.
//!
//! Hue lights address color through the CIE 1931 chromaticity diagram: a
//! pair of coordinates in [0, 1]. The bridge clips points outside a lamp's
//! gamut to the nearest reachable color, so the only hard constraint this
//! type enforces is the coordinate range itself.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// A color point in CIE xy space.
///
/// Serializes as the two-element array the bridge expects for the `xy`
/// field, e.g. `[0.3227, 0.329]`.
///
/// # Examples
///
/// ```
/// use lumen_lib::types::XyColor;
///
/// let red = XyColor::new(0.675, 0.322).unwrap();
/// assert_eq!(red.x(), 0.675);
/// assert_eq!(red.y(), 0.322);
///
/// // Coordinates outside [0, 1] return error
/// assert!(XyColor::new(1.2, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyColor {
    x: f64,
    y: f64,
}

impl XyColor {
    /// Creates a new color point.
    ///
    /// # Arguments
    ///
    /// * `x` - The x chromaticity coordinate (0.0-1.0)
    /// * `y` - The y chromaticity coordinate (0.0-1.0)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidCoordinate` if either coordinate is
    /// outside [0, 1] or not a finite number.
    pub fn new(x: f64, y: f64) -> Result<Self, ValueError> {
        if !x.is_finite() || !(0.0..=1.0).contains(&x) {
            return Err(ValueError::InvalidCoordinate { axis: 'x', value: x });
        }
        if !y.is_finite() || !(0.0..=1.0).contains(&y) {
            return Err(ValueError::InvalidCoordinate { axis: 'y', value: y });
        }
        Ok(Self { x, y })
    }

    /// Returns the x chromaticity coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y chromaticity coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the coordinates as a two-element array.
    #[must_use]
    pub const fn as_pair(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for XyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Serialize for XyColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_pair().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for XyColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Self::new(x, y).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_valid_coordinates() {
        let color = XyColor::new(0.3227, 0.329).unwrap();
        assert_eq!(color.as_pair(), [0.3227, 0.329]);
    }

    #[test]
    fn xy_boundary_coordinates() {
        assert!(XyColor::new(0.0, 0.0).is_ok());
        assert!(XyColor::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn xy_invalid_coordinates() {
        assert!(XyColor::new(-0.1, 0.5).is_err());
        assert!(XyColor::new(0.5, 1.1).is_err());
        assert!(XyColor::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn xy_serializes_as_array() {
        let color = XyColor::new(0.675, 0.322).unwrap();
        assert_eq!(
            serde_json::to_value(color).unwrap(),
            serde_json::json!([0.675, 0.322])
        );
    }

    #[test]
    fn xy_deserializes_from_array() {
        let color: XyColor = serde_json::from_str("[0.409, 0.518]").unwrap();
        assert_eq!(color.x(), 0.409);
        assert_eq!(color.y(), 0.518);
    }

    #[test]
    fn xy_deserialize_rejects_out_of_range() {
        let result: Result<XyColor, _> = serde_json::from_str("[1.5, 0.3]");
        assert!(result.is_err());
    }

    #[test]
    fn xy_display() {
        let color = XyColor::new(0.5, 0.25).unwrap();
        assert_eq!(color.to_string(), "(0.5, 0.25)");
    }
}
