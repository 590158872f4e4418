// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The settings store.
//!
//! A [`Settings`] value is loaded once from a JSON document at startup and
//! is read-only afterwards. Construction is strict: an unreadable file, a
//! malformed document, or a typed entry outside its valid range (a color
//! coordinate above 1.0, a brightness above 254) is a fatal
//! [`ConfigError`]. Lookups are the opposite: a label or key the document
//! does not contain falls back to a default rather than failing. The only
//! lookup that can fail is [`Settings::color_coordinates`], because an
//! undefined color has no usable default.
//!
//! There is no global instance. Construct a `Settings` in the application
//! entry point and pass it by reference to the collaborators that need it.
//!
//! # Document format
//!
//! ```json
//! {
//!     "bridge_ip": "192.168.1.2",
//!     "app_key": "lumen-app-key",
//!     "color_coordinates": {
//!         "RED": [0.675, 0.322],
//!         "WHITE": [0.3227, 0.329]
//!     },
//!     "brightness_levels": { "DIM": 100, "NEUTRAL": 150, "BRIGHT": 200 },
//!     "default_brightness": 150,
//!     "transition_times": { "NONE": 0, "SHORT": 4, "LONG": 40 }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::types::{Brightness, TransitionTime, XyColor};

/// Label used when a brightness level cannot be matched to any threshold.
pub const DEFAULT_BRIGHTNESS_LABEL: &str = "NEUTRAL";

/// The typed tables the store resolves labels against.
///
/// Missing tables deserialize to empty maps so that lookups fall through to
/// their defaults instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
struct Tables {
    #[serde(default)]
    color_coordinates: HashMap<String, XyColor>,
    #[serde(default)]
    brightness_levels: HashMap<String, Brightness>,
    #[serde(default)]
    default_brightness: Option<Brightness>,
    #[serde(default)]
    transition_times: HashMap<String, TransitionTime>,
}

/// Read-only application settings backed by a JSON document.
///
/// # Examples
///
/// ```
/// use lumen_lib::Settings;
/// use lumen_lib::types::Brightness;
///
/// let settings = Settings::from_json(r#"{
///     "brightness_levels": { "BRIGHT": 200 },
///     "default_brightness": 150
/// }"#).unwrap();
///
/// assert_eq!(settings.brightness("BRIGHT").value(), 200);
/// // Unknown labels fall back to the configured default
/// assert_eq!(settings.brightness("UNKNOWN").value(), 150);
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    document: Map<String, Value>,
    tables: Tables,
}

impl Settings {
    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid
    /// JSON, or contains a typed entry outside its valid range. Callers are
    /// expected to treat this as fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(document) = value else {
            return Err(ConfigError::NotAnObject);
        };
        let tables: Tables = serde_json::from_value(Value::Object(document.clone()))?;
        Ok(Self { document, tables })
    }

    /// Retrieves a setting by key, returning the supplied default if the
    /// key is absent or has an incompatible shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_lib::Settings;
    ///
    /// let settings = Settings::from_json(r#"{ "bridge_ip": "10.0.0.2" }"#).unwrap();
    ///
    /// assert_eq!(settings.get("bridge_ip", String::new()), "10.0.0.2");
    /// assert_eq!(settings.get("poll_seconds", 30_u32), 30);
    /// ```
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.document
            .get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or(default)
    }

    /// Returns the configured bridge address, if any.
    #[must_use]
    pub fn bridge_ip(&self) -> Option<&str> {
        self.document.get("bridge_ip").and_then(Value::as_str)
    }

    /// Returns the configured application key, if any.
    #[must_use]
    pub fn app_key(&self) -> Option<&str> {
        self.document.get("app_key").and_then(Value::as_str)
    }

    /// Resolves a color label to its xy coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UndefinedColor`] if the document does not
    /// define the color. Unlike the other lookups there is no default to
    /// fall back to here.
    pub fn color_coordinates(&self, name: &str) -> Result<XyColor, ConfigError> {
        self.tables
            .color_coordinates
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UndefinedColor(name.to_string()))
    }

    /// Resolves a brightness label.
    ///
    /// Falls back to the configured `default_brightness`, then to
    /// [`Brightness::NEUTRAL`] when the document configures neither.
    #[must_use]
    pub fn brightness(&self, label: &str) -> Brightness {
        self.tables
            .brightness_levels
            .get(label)
            .copied()
            .or(self.tables.default_brightness)
            .unwrap_or(Brightness::NEUTRAL)
    }

    /// Returns the configured default brightness, if any.
    #[must_use]
    pub fn default_brightness(&self) -> Option<Brightness> {
        self.tables.default_brightness
    }

    /// Resolves a transition-time label, falling back to an instant
    /// transition when the label is absent.
    #[must_use]
    pub fn transition_time(&self, label: &str) -> TransitionTime {
        self.tables
            .transition_times
            .get(label)
            .copied()
            .unwrap_or(TransitionTime::ZERO)
    }

    /// Maps a raw brightness level to the label whose threshold is nearest
    /// without exceeding the value.
    ///
    /// Ties between labels with equal thresholds favor the
    /// lexicographically higher label. When no threshold applies (every
    /// configured level is above the value, or the table is empty) the
    /// result is [`DEFAULT_BRIGHTNESS_LABEL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_lib::Settings;
    ///
    /// let settings = Settings::from_json(r#"{
    ///     "brightness_levels": { "DIM": 100, "BRIGHT": 200 }
    /// }"#).unwrap();
    ///
    /// assert_eq!(settings.brightness_label_for(150), "DIM");
    /// assert_eq!(settings.brightness_label_for(220), "BRIGHT");
    /// assert_eq!(settings.brightness_label_for(50), "NEUTRAL");
    /// ```
    #[must_use]
    pub fn brightness_label_for(&self, level: u8) -> &str {
        let mut entries: Vec<(&str, Brightness)> = self
            .tables
            .brightness_levels
            .iter()
            .map(|(label, threshold)| (label.as_str(), *threshold))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)));

        entries
            .into_iter()
            .find(|(_, threshold)| level >= threshold.value())
            .map_or(DEFAULT_BRIGHTNESS_LABEL, |(label, _)| label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings::from_json(
            r#"{
                "bridge_ip": "192.168.1.2",
                "app_key": "testkey",
                "color_coordinates": {
                    "RED": [0.675, 0.322],
                    "WHITE": [0.3227, 0.329]
                },
                "brightness_levels": { "DIM": 100, "BRIGHT": 200 },
                "default_brightness": 150,
                "transition_times": { "NONE": 0, "SHORT": 4, "LONG": 40 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn get_returns_stored_value() {
        let settings = sample();
        assert_eq!(
            settings.get("bridge_ip", String::new()),
            "192.168.1.2".to_string()
        );
    }

    #[test]
    fn get_returns_default_for_absent_key() {
        let settings = sample();
        assert_eq!(settings.get("no_such_key", 42_u32), 42);
        assert_eq!(
            settings.get("missing", "fallback".to_string()),
            "fallback".to_string()
        );
    }

    #[test]
    fn bridge_accessors() {
        let settings = sample();
        assert_eq!(settings.bridge_ip(), Some("192.168.1.2"));
        assert_eq!(settings.app_key(), Some("testkey"));

        let empty = Settings::from_json("{}").unwrap();
        assert_eq!(empty.bridge_ip(), None);
    }

    #[test]
    fn color_coordinates_defined() {
        let settings = sample();
        let red = settings.color_coordinates("RED").unwrap();
        assert_eq!(red.as_pair(), [0.675, 0.322]);
    }

    #[test]
    fn color_coordinates_undefined_fails() {
        let settings = sample();
        let result = settings.color_coordinates("MAGENTA");
        assert!(matches!(result, Err(ConfigError::UndefinedColor(name)) if name == "MAGENTA"));
    }

    #[test]
    fn brightness_known_label() {
        let settings = sample();
        assert_eq!(settings.brightness("BRIGHT").value(), 200);
        assert_eq!(settings.brightness("DIM").value(), 100);
    }

    #[test]
    fn brightness_unknown_label_uses_configured_default() {
        let settings = sample();
        assert_eq!(settings.brightness("UNKNOWN").value(), 150);
    }

    #[test]
    fn brightness_unknown_label_without_default_uses_neutral() {
        let settings = Settings::from_json(r#"{ "brightness_levels": {} }"#).unwrap();
        assert_eq!(settings.brightness("UNKNOWN"), Brightness::NEUTRAL);
    }

    #[test]
    fn transition_time_known_label() {
        let settings = sample();
        assert_eq!(settings.transition_time("SHORT").decis(), 4);
        assert_eq!(settings.transition_time("LONG").decis(), 40);
    }

    #[test]
    fn transition_time_unknown_label_is_zero() {
        let settings = sample();
        assert_eq!(settings.transition_time("UNKNOWN"), TransitionTime::ZERO);
    }

    #[test]
    fn brightness_label_nearest_threshold_not_exceeding() {
        let settings = sample();
        assert_eq!(settings.brightness_label_for(150), "DIM");
        assert_eq!(settings.brightness_label_for(200), "BRIGHT");
        assert_eq!(settings.brightness_label_for(254), "BRIGHT");
        assert_eq!(settings.brightness_label_for(100), "DIM");
    }

    #[test]
    fn brightness_label_below_all_thresholds() {
        let settings = sample();
        assert_eq!(settings.brightness_label_for(50), DEFAULT_BRIGHTNESS_LABEL);
    }

    #[test]
    fn brightness_label_tie_favors_higher_label() {
        let settings = Settings::from_json(
            r#"{ "brightness_levels": { "ALPHA": 100, "OMEGA": 100 } }"#,
        )
        .unwrap();
        assert_eq!(settings.brightness_label_for(120), "OMEGA");
    }

    #[test]
    fn malformed_json_fails_at_load() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn non_object_root_fails_at_load() {
        assert!(matches!(
            Settings::from_json("[1, 2, 3]"),
            Err(ConfigError::NotAnObject)
        ));
    }

    #[test]
    fn out_of_range_brightness_fails_at_load() {
        let result = Settings::from_json(r#"{ "brightness_levels": { "TOO_HIGH": 400 } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn out_of_gamut_color_fails_at_load() {
        let result =
            Settings::from_json(r#"{ "color_coordinates": { "BAD": [1.5, 0.3] } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_fails_at_load() {
        let result = Settings::load("/nonexistent/config.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
