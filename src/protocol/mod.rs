// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for communicating with a Hue bridge.
//!
//! The bridge exposes a REST API rooted at `/api/<app key>/`; this module
//! provides the HTTP implementation used to send commands and receive
//! replies. Each command is one independent request with no retries and no
//! connection state beyond the pooling `reqwest` does internally.

mod http;

pub use http::{HttpClient, HttpClientBuilder, HttpConfig};

use crate::command::{Command, CommandMethod};
use crate::error::{ParseError, ProtocolError};
use crate::response::BridgeReply;

/// Raw response from a bridge command.
#[derive(Debug, Clone)]
pub struct BridgeResponse {
    body: String,
}

impl BridgeResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as the bridge's success/error reply array.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not a reply array.
    pub fn reply(&self) -> Result<BridgeReply, ParseError> {
        BridgeReply::parse(&self.body)
    }

    /// Parses the body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports that can send commands to a Hue bridge.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a command to the bridge and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails to send or receive.
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<BridgeResponse, ProtocolError>;

    /// Sends a raw request to a resource path below the application root.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails.
    async fn send_raw(
        &self,
        method: CommandMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<BridgeResponse, ProtocolError>;
}
