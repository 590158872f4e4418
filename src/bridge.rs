// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level handle for a Hue bridge.
//!
//! A [`Bridge`] exclusively owns its transport and checks every reply for
//! error items, so callers see a rejected command as an [`Error::Api`]
//! instead of having to inspect the reply array themselves.
//!
//! Discovery and the link-button pairing flow are out of scope; the
//! application key is supplied up front, either directly or through the
//! settings document.

use crate::command::{Command, GroupAction, GroupCommand};
use crate::error::{ConfigError, Error};
use crate::protocol::{HttpClient, HttpConfig, Protocol};
use crate::response::BridgeReply;
use crate::settings::Settings;
use crate::types::GroupId;

/// A Hue bridge that can be controlled over a [`Protocol`].
///
/// # Examples
///
/// ```no_run
/// use lumen_lib::command::GroupAction;
/// use lumen_lib::types::{GroupId, TransitionTime};
/// use lumen_lib::Bridge;
///
/// # async fn example() -> lumen_lib::Result<()> {
/// let bridge = Bridge::http("192.168.1.2", "lumen-app-key").build()?;
///
/// let action = GroupAction::turn_on().with_transition(TransitionTime::from_decis(4));
/// bridge.set_group(GroupId::all(), &action).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bridge<P: Protocol = HttpClient> {
    protocol: P,
}

impl Bridge<HttpClient> {
    /// Creates a builder for an HTTP bridge connection.
    #[must_use]
    pub fn http(host: impl Into<String>, app_key: impl Into<String>) -> BridgeBuilder {
        BridgeBuilder {
            config: HttpConfig::new(host, app_key),
        }
    }

    /// Creates a bridge from the settings document's `bridge_ip` and
    /// `app_key` entries.
    ///
    /// # Errors
    ///
    /// Returns error if either entry is missing or the client cannot be
    /// created.
    pub fn from_settings(settings: &Settings) -> Result<Self, Error> {
        let host = settings
            .bridge_ip()
            .ok_or(ConfigError::MissingBridgeAddress)?;
        let app_key = settings.app_key().ok_or(ConfigError::MissingAppKey)?;
        Ok(Self::new(HttpClient::new(host, app_key)?))
    }
}

impl<P: Protocol> Bridge<P> {
    /// Creates a bridge over an existing transport.
    #[must_use]
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Sends a command and surfaces bridge-reported errors.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the reply cannot be parsed, or
    /// the reply contains an error item.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<BridgeReply, Error> {
        let response = self.protocol.send_command(command).await?;
        let reply = response.reply()?;
        if let Some(err) = reply.first_error() {
            return Err(Error::Api(err.clone()));
        }
        Ok(reply)
    }

    /// Applies an action to a light group.
    ///
    /// One network write per call; the bridge applies the fields the action
    /// carries and leaves the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the bridge rejects the action.
    pub async fn set_group(
        &self,
        group: GroupId,
        action: &GroupAction,
    ) -> Result<BridgeReply, Error> {
        tracing::debug!(group = %group, ?action, "Setting group action");
        self.send_command(&GroupCommand::set(group, action.clone()))
            .await
    }

    /// Queries a group's attributes and current state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the bridge reports an error item,
    /// or the state cannot be parsed.
    pub async fn query_group(&self, group: GroupId) -> Result<serde_json::Value, Error> {
        let response = self
            .protocol
            .send_command(&GroupCommand::query(group))
            .await?;
        // The bridge reports query failures as a 200 with an error-item
        // array; a genuine state object does not parse as a reply.
        if let Ok(reply) = response.reply() {
            if let Some(err) = reply.first_error() {
                return Err(Error::Api(err.clone()));
            }
        }
        Ok(response.parse()?)
    }
}

/// Builder for an HTTP [`Bridge`].
#[derive(Debug)]
pub struct BridgeBuilder {
    config: HttpConfig,
}

impl BridgeBuilder {
    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.config = self.config.with_https();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Builds the bridge.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<Bridge<HttpClient>, Error> {
        Ok(Bridge::new(self.config.into_client()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_settings_requires_bridge_ip() {
        let settings = Settings::from_json(r#"{ "app_key": "k" }"#).unwrap();
        let result = Bridge::from_settings(&settings);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingBridgeAddress))
        ));
    }

    #[test]
    fn from_settings_requires_app_key() {
        let settings = Settings::from_json(r#"{ "bridge_ip": "192.168.1.2" }"#).unwrap();
        let result = Bridge::from_settings(&settings);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingAppKey))
        ));
    }

    #[test]
    fn from_settings_builds_with_both_entries() {
        let settings = Settings::from_json(
            r#"{ "bridge_ip": "192.168.1.2", "app_key": "testkey" }"#,
        )
        .unwrap();
        assert!(Bridge::from_settings(&settings).is_ok());
    }

    #[test]
    fn builder_options_chain() {
        let bridge = Bridge::http("192.168.1.2", "testkey")
            .with_port(8080)
            .with_timeout(std::time::Duration::from_secs(5))
            .build();
        assert!(bridge.is_ok());
    }
}
