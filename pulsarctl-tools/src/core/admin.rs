// Copyright 2023 The Pulsarctl Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Admin client builder
//!
//! [`AdminBuilder`] is a fluent builder for the HTTP admin gateway. Values not set on
//! the builder fall back to [`ClusterConfig::default`].

use pulsarctl_common::ClusterConfig;
use pulsarctl_error::CtlResult;
use tracing::debug;

use crate::admin::HttpPulsarAdmin;

/// Builder for creating and configuring admin clients
///
/// # Examples
///
/// ```rust,no_run
/// use pulsarctl_tools::core::admin::AdminBuilder;
///
/// let admin = AdminBuilder::new()
///     .web_service_url("https://pulsar.example.com:8443")
///     .token("my-token")
///     .timeout_millis(5000)
///     .build()?;
/// # Ok::<(), pulsarctl_error::CtlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminBuilder {
    web_service_url: Option<String>,
    token: Option<String>,
    tls_allow_insecure: Option<bool>,
    timeout_millis: Option<u64>,
}

impl AdminBuilder {
    /// Create a new builder with default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fully resolved configuration
    pub fn from_config(config: &ClusterConfig) -> Self {
        Self {
            web_service_url: Some(config.web_service_url.clone()),
            token: config.auth_token.clone(),
            tls_allow_insecure: Some(config.tls_allow_insecure),
            timeout_millis: Some(config.request_timeout_ms),
        }
    }

    /// Set the admin service URL, e.g. `http://localhost:8080`
    #[inline]
    pub fn web_service_url(mut self, url: impl Into<String>) -> Self {
        self.web_service_url = Some(url.into());
        self
    }

    /// Set the bearer token sent with every request
    #[inline]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[inline]
    pub fn tls_allow_insecure(mut self, allow: bool) -> Self {
        self.tls_allow_insecure = Some(allow);
        self
    }

    /// Set timeout in milliseconds
    #[inline]
    pub fn timeout_millis(mut self, timeout: u64) -> Self {
        self.timeout_millis = Some(timeout);
        self
    }

    /// Resolved configuration the client will be built from
    pub fn config(&self) -> ClusterConfig {
        let defaults = ClusterConfig::default();
        ClusterConfig {
            web_service_url: self.web_service_url.clone().unwrap_or(defaults.web_service_url),
            auth_token: self.token.clone().or(defaults.auth_token),
            tls_allow_insecure: self.tls_allow_insecure.unwrap_or(defaults.tls_allow_insecure),
            request_timeout_ms: self.timeout_millis.unwrap_or(defaults.request_timeout_ms),
        }
    }

    /// Build the admin client
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the URL is not an `http(s)` URL
    /// - the HTTP client cannot be created
    pub fn build(self) -> CtlResult<HttpPulsarAdmin> {
        let config = self.config();
        config.validate()?;
        debug!(url = %config.web_service_url, "building admin client");
        HttpPulsarAdmin::new(&config)
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::ErrorKind;

    use super::*;

    #[test]
    fn test_builder_configuration() {
        let builder = AdminBuilder::new()
            .web_service_url("http://127.0.0.1:8080")
            .token("secret")
            .tls_allow_insecure(true)
            .timeout_millis(5000);

        assert_eq!(builder.web_service_url, Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(builder.token, Some("secret".to_string()));
        assert_eq!(builder.tls_allow_insecure, Some(true));
        assert_eq!(builder.timeout_millis, Some(5000));
    }

    #[test]
    fn test_builder_default() {
        let config = AdminBuilder::default().config();
        assert_eq!(config, ClusterConfig::default());
    }

    #[test]
    fn test_builder_chaining() {
        let builder = AdminBuilder::new()
            .web_service_url("http://addr1:8080")
            .web_service_url("http://addr2:8080"); // Should override

        assert_eq!(builder.config().web_service_url, "http://addr2:8080");
    }

    #[test]
    fn test_builder_from_config() {
        let config = ClusterConfig {
            web_service_url: "https://pulsar:8443".to_string(),
            auth_token: Some("t".to_string()),
            tls_allow_insecure: true,
            request_timeout_ms: 100,
        };
        assert_eq!(AdminBuilder::from_config(&config).config(), config);
    }

    #[test]
    fn test_build() {
        let admin = AdminBuilder::new().web_service_url("http://127.0.0.1:8080").build().unwrap();
        assert_eq!(admin.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_build_rejects_non_http_url() {
        let err = AdminBuilder::new().web_service_url("pulsar://127.0.0.1:6650").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
