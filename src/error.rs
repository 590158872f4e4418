// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Lumen` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: configuration loading, value validation, protocol communication,
//! reply parsing, and commands the bridge rejects.
//!
//! Configuration errors split along a deliberate line: loading a settings
//! document fails loudly ([`ConfigError`] from [`Settings::load`]), while
//! looking up a label that is not in the document falls back to a default
//! and never produces an error. The one exception is a color lookup, which
//! has no sensible default.
//!
//! [`Settings::load`]: crate::settings::Settings::load

use std::path::PathBuf;

use thiserror::Error;

pub use crate::response::ApiError;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when controlling
/// lights through a Hue bridge.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while loading or resolving configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a bridge reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The bridge accepted the request but reported an error item.
    #[error("bridge error: {0}")]
    Api(#[from] ApiError),
}

/// Errors related to configuration loading and resolution.
///
/// The load-time variants are fatal at startup: an unreadable or malformed
/// settings document aborts construction of the
/// [`Settings`](crate::settings::Settings) store. The remaining variants are
/// raised later, when a lookup has no usable fallback: an undefined color
/// label, or a missing bridge address or application key at
/// [`Bridge::from_settings`](crate::Bridge::from_settings) time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON, or a typed entry is
    /// out of range.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration root is not a JSON object.
    #[error("configuration root must be a JSON object")]
    NotAnObject,

    /// A color label was looked up that the document does not define.
    #[error("color {0:?} is not defined in color_coordinates")]
    UndefinedColor(String),

    /// The document has no `bridge_ip` entry.
    #[error("configuration has no bridge_ip")]
    MissingBridgeAddress,

    /// The document has no `app_key` entry.
    #[error("configuration has no app_key")]
    MissingAppKey,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A chromaticity coordinate is outside [0, 1].
    #[error("{axis} coordinate {value} is out of range [0.0, 1.0]")]
    InvalidCoordinate {
        /// The axis that failed validation.
        axis: char,
        /// The actual coordinate that was provided.
        value: f64,
    },
}

/// Errors related to HTTP communication with the bridge.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the bridge failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing bridge replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected reply format.
    #[error("unexpected reply format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 254,
            actual: 300,
        };
        assert_eq!(err.to_string(), "value 300 is out of range [0, 254]");
    }

    #[test]
    fn coordinate_error_display() {
        let err = ValueError::InvalidCoordinate {
            axis: 'x',
            value: 1.5,
        };
        assert_eq!(err.to_string(), "x coordinate 1.5 is out of range [0.0, 1.0]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::OutOfRange {
            min: 0,
            max: 254,
            actual: 255,
        };
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::OutOfRange { .. })));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UndefinedColor("MAGENTA".to_string());
        assert_eq!(
            err.to_string(),
            "color \"MAGENTA\" is not defined in color_coordinates"
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnexpectedFormat("reply is not an array".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected reply format: reply is not an array"
        );
    }
}
