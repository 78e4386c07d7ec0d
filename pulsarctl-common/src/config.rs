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

//! Client configuration
//!
//! Settings are layered, later sources winning: built-in defaults, the config file,
//! `PULSARCTL_*` environment variables and finally global command-line flags.

use std::path::Path;
use std::path::PathBuf;

use config::Config;
use config::ConfigError;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use serde::Deserialize;

/// Connection settings for the cluster's admin service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterConfig {
    pub web_service_url: String,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub tls_allow_insecure: bool,
    pub request_timeout_ms: u64,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; unlike the default location it must exist.
    pub config_file: Option<PathBuf>,
    pub web_service_url: Option<String>,
    pub auth_token: Option<String>,
    pub tls_allow_insecure: Option<bool>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            web_service_url: Self::DEFAULT_WEB_SERVICE_URL.to_string(),
            auth_token: None,
            tls_allow_insecure: false,
            request_timeout_ms: Self::DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ClusterConfig {
    pub const DEFAULT_WEB_SERVICE_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
    pub const ENV_PREFIX: &'static str = "PULSARCTL";

    /// `$XDG_CONFIG_HOME/pulsarctl/config.toml` or the platform equivalent.
    pub fn default_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pulsarctl").join("config.toml"))
    }

    pub fn load(overrides: &ConfigOverrides) -> CtlResult<Self> {
        match &overrides.config_file {
            Some(path) => Self::load_from(Some(path), true, overrides),
            None => Self::load_from(Self::default_config_file().as_deref(), false, overrides),
        }
    }

    fn load_from(file: Option<&Path>, required: bool, overrides: &ConfigOverrides) -> CtlResult<Self> {
        let mut builder = Config::builder()
            .set_default("web_service_url", Self::DEFAULT_WEB_SERVICE_URL)
            .map_err(config_error)?
            .set_default("tls_allow_insecure", false)
            .map_err(config_error)?
            .set_default("request_timeout_ms", Self::DEFAULT_REQUEST_TIMEOUT_MS as i64)
            .map_err(config_error)?;
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(required));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(Self::ENV_PREFIX))
            .set_override_option("web_service_url", overrides.web_service_url.clone())
            .map_err(config_error)?
            .set_override_option("auth_token", overrides.auth_token.clone())
            .map_err(config_error)?
            .set_override_option("tls_allow_insecure", overrides.tls_allow_insecure)
            .map_err(config_error)?
            .build()
            .map_err(config_error)?;

        let config: ClusterConfig = settings.try_deserialize().map_err(config_error)?;
        config.validate()?;
        tracing::debug!("using admin service {}", config.web_service_url);
        Ok(config)
    }

    pub fn validate(&self) -> CtlResult<()> {
        let url = self.web_service_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CtlError::config(format!(
                "web_service_url '{url}' must start with http:// or https://"
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(CtlError::config("request_timeout_ms must be positive"));
        }
        Ok(())
    }
}

fn config_error(e: ConfigError) -> CtlError {
    CtlError::config(e.to_string())
}
