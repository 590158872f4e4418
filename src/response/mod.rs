// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed bridge replies.
//!
//! The bridge answers every command with HTTP 200 and a JSON array; each
//! element reports either a `success` or an `error` for one attribute of
//! the request. A rejected command therefore has to be detected in the
//! body, not in the status code:
//!
//! ```json
//! [
//!     {"success": {"/groups/0/action/on": true}},
//!     {"error": {"type": 201, "address": "/groups/0/action/bri",
//!                "description": "parameter, bri, is not modifiable."}}
//! ]
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ParseError;

/// Error kind the bridge reports for an unauthorized application key.
pub const ERROR_KIND_UNAUTHORIZED: u16 = 1;

/// Error kind the bridge reports for an unavailable resource.
pub const ERROR_KIND_RESOURCE_UNAVAILABLE: u16 = 3;

/// An error item from a bridge reply.
///
/// # Examples
///
/// ```
/// use lumen_lib::response::ApiError;
///
/// let err: ApiError = serde_json::from_str(r#"{
///     "type": 3,
///     "address": "/groups/99/action",
///     "description": "resource, /groups/99, not available"
/// }"#).unwrap();
///
/// assert_eq!(err.kind, 3);
/// assert!(!err.is_unauthorized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Error)]
#[error("{description} (type {kind} at {address})")]
pub struct ApiError {
    /// The bridge's numeric error type.
    #[serde(rename = "type")]
    pub kind: u16,
    /// The resource address the error refers to.
    pub address: String,
    /// Human-readable description from the bridge.
    pub description: String,
}

impl ApiError {
    /// Returns true if the error indicates an unauthorized application key.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ERROR_KIND_UNAUTHORIZED
    }
}

/// One item of a bridge reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyItem {
    /// The attribute was applied.
    Success(Value),
    /// The attribute was rejected.
    Error(ApiError),
}

impl ReplyItem {
    /// Returns the success payload, if this item is a success.
    #[must_use]
    pub fn success(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns the error, if this item is an error.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(err),
        }
    }
}

/// A parsed bridge reply.
///
/// # Examples
///
/// ```
/// use lumen_lib::response::BridgeReply;
///
/// let reply = BridgeReply::parse(
///     r#"[{"success": {"/groups/0/action/on": true}}]"#
/// ).unwrap();
///
/// assert!(reply.is_success());
/// assert_eq!(reply.items().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BridgeReply {
    items: Vec<ReplyItem>,
}

impl BridgeReply {
    /// Parses a reply from the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body is not the expected JSON array.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let items: Vec<ReplyItem> = serde_json::from_str(body)?;
        Ok(Self { items })
    }

    /// Returns all reply items.
    #[must_use]
    pub fn items(&self) -> &[ReplyItem] {
        &self.items
    }

    /// Returns the first error item, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&ApiError> {
        self.items.iter().find_map(ReplyItem::error)
    }

    /// Returns true if no item is an error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.first_error().is_none()
    }

    /// Returns an iterator over the success payloads.
    pub fn successes(&self) -> impl Iterator<Item = &Value> {
        self.items.iter().filter_map(ReplyItem::success)
    }
}
