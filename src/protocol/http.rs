// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Hue bridge REST API.

use std::time::Duration;

use reqwest::Client;

use crate::command::{Command, CommandMethod};
use crate::error::ProtocolError;
use crate::protocol::{BridgeResponse, Protocol};

// ============================================================================
// HttpConfig - Connection parameters for a bridge
// ============================================================================

/// Configuration for connecting to a Hue bridge over HTTP.
///
/// This is a simple configuration struct that holds connection parameters.
/// The bridge's v1 API is stateless - each command is an independent
/// request.
///
/// # Examples
///
/// ```
/// use lumen_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.2", "lumen-app-key");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.2", "lumen-app-key")
///     .with_port(8080)
///     .with_https()
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    app_key: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified bridge.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the bridge
    /// * `app_key` - The registered application key
    #[must_use]
    pub fn new(host: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            app_key: app_key.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the application key.
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            app_key: self.app_key,
            client,
        })
    }
}

// ============================================================================
// HttpClient - Internal HTTP client implementation
// ============================================================================

/// HTTP client for communicating with a Hue bridge.
///
/// Uses the bridge's REST endpoint `/api/<app key>/<resource>` for sending
/// commands.
///
/// # Examples
///
/// ```no_run
/// use lumen_lib::protocol::{HttpClient, Protocol};
/// use lumen_lib::command::{GroupAction, GroupCommand};
/// use lumen_lib::types::GroupId;
///
/// # async fn example() -> lumen_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.2", "lumen-app-key")?;
/// let cmd = GroupCommand::set(GroupId::all(), GroupAction::turn_on());
/// let response = client.send_command(&cmd).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    app_key: String,
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified bridge.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the bridge
    /// * `app_key` - The registered application key
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(
        host: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, ProtocolError> {
        let host = host.into();
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(HttpConfig::DEFAULT_TIMEOUT)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            base_url,
            app_key: app_key.into(),
            client,
        })
    }

    /// Returns the base URL of the bridge.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL for a resource path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/api/{}/{}", self.base_url, self.app_key, path)
    }
}

impl Protocol for HttpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<BridgeResponse, ProtocolError> {
        self.send_raw(command.method(), &command.path(), command.body().as_ref())
            .await
    }

    async fn send_raw(
        &self,
        method: CommandMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<BridgeResponse, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(url = %url, ?method, "Sending bridge request");

        let request = match method {
            CommandMethod::Get => self.client.get(&url),
            CommandMethod::Put => {
                let request = self.client.put(&url);
                match body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };

        let response = request.send().await.map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received bridge reply");

        Ok(BridgeResponse::new(body))
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    host: Option<String>,
    app_key: Option<String>,
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bridge address.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the application key.
    #[must_use]
    pub fn app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if host or app key is not set or client creation fails.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let host = self
            .host
            .ok_or_else(|| ProtocolError::InvalidAddress("host is required".to_string()))?;
        let app_key = self
            .app_key
            .ok_or_else(|| ProtocolError::InvalidAddress("app key is required".to_string()))?;

        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(HttpConfig::DEFAULT_TIMEOUT))
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            app_key,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_for_group_action() {
        let client = HttpClient::new("192.168.1.2", "testkey").unwrap();
        let url = client.build_url("groups/0/action");
        assert_eq!(url, "http://192.168.1.2/api/testkey/groups/0/action");
    }

    #[test]
    fn build_url_with_https() {
        let client = HttpClient::new("https://192.168.1.2", "testkey").unwrap();
        assert_eq!(client.base_url(), "https://192.168.1.2");
    }

    #[test]
    fn builder_missing_host() {
        let result = HttpClientBuilder::new().app_key("key").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_missing_app_key() {
        let result = HttpClientBuilder::new().host("192.168.1.2").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_with_all_options() {
        let client = HttpClientBuilder::new()
            .host("192.168.1.2")
            .app_key("testkey")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://192.168.1.2");
    }

    // =========================================================================
    // HttpConfig tests
    // =========================================================================

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.2", "testkey");
        assert_eq!(config.host(), "192.168.1.2");
        assert_eq!(config.app_key(), "testkey");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_with_https() {
        let config = HttpConfig::new("192.168.1.2", "testkey").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 443); // Port should change to 443
    }

    #[test]
    fn http_config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.2", "testkey")
            .with_port(8443)
            .with_https();
        assert_eq!(config.port(), 8443); // Port should stay as explicitly set
    }

    #[test]
    fn http_config_base_url() {
        assert_eq!(
            HttpConfig::new("192.168.1.2", "k").base_url(),
            "http://192.168.1.2"
        );
        assert_eq!(
            HttpConfig::new("192.168.1.2", "k").with_port(8080).base_url(),
            "http://192.168.1.2:8080"
        );
        assert_eq!(
            HttpConfig::new("192.168.1.2", "k").with_https().base_url(),
            "https://192.168.1.2"
        );
    }

    #[test]
    fn http_config_into_client() {
        let config = HttpConfig::new("192.168.1.2", "testkey");
        let client = config.into_client().unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.2");
        assert_eq!(
            client.build_url("groups/0"),
            "http://192.168.1.2/api/testkey/groups/0"
        );
    }
}
