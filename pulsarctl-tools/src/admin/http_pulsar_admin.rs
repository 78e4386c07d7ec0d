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

//! Admin gateway speaking the cluster's REST admin API

use std::fmt;
use std::time::Duration;

use pulsarctl_common::ClusterConfig;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use pulsarctl_error::GatewayError;
use pulsarctl_error::NetworkError;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::multipart::Part;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::admin::api::FunctionConfig;
use crate::admin::api::TopicAutoCreationConfig;
use crate::admin::pulsar_admin::FunctionsAdmin;
use crate::admin::pulsar_admin::NamespacesAdmin;
use crate::admin::pulsar_admin::PulsarAdmin;
use crate::cmdutils::resource::FunctionName;
use crate::cmdutils::resource::NamespaceName;

const FUNCTIONS_PATH: [&str; 3] = ["admin", "v3", "functions"];
const NAMESPACES_PATH: [&str; 3] = ["admin", "v2", "namespaces"];

/// Package locations the service fetches itself instead of receiving an upload.
const REMOTE_PACKAGE_SCHEMES: [&str; 4] = ["http://", "https://", "function://", "sink://"];

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    reason: String,
}

pub struct HttpPulsarAdmin {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
    timeout_ms: u64,
}

impl HttpPulsarAdmin {
    pub fn new(config: &ClusterConfig) -> CtlResult<Self> {
        let base_url = Url::parse(config.web_service_url.trim())
            .map_err(|_| NetworkError::invalid_address(config.web_service_url.as_str()))?;
        if base_url.cannot_be_a_base() {
            return Err(NetworkError::invalid_address(config.web_service_url.as_str()).into());
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .danger_accept_invalid_certs(config.tls_allow_insecure)
            .user_agent(concat!("pulsarctl-rust/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NetworkError::connection_failed(base_url.as_str(), e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
            timeout_ms: config.request_timeout_ms,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, prefix: &[&str], segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base URLs are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(prefix).extend(segments);
        }
        url
    }

    fn function_endpoint(&self, name: &FunctionName, instance_id: Option<u32>, action: &str) -> Url {
        let instance = instance_id.map(|id| id.to_string());
        let mut segments = vec![name.tenant(), name.namespace(), name.name()];
        if let Some(instance) = instance.as_deref() {
            segments.push(instance);
        }
        segments.push(action);
        self.endpoint(&FUNCTIONS_PATH, &segments)
    }

    fn send(&self, request: RequestBuilder) -> CtlResult<Response> {
        let request = match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().map_err(|e| self.transport_error(e))?;
        tracing::trace!("{} {}", response.url(), response.status());
        Self::check_status(response)
    }

    fn check_status(response: Response) -> CtlResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        let reason = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.reason)
            .filter(|reason| !reason.is_empty())
            .unwrap_or_else(|| match body.trim() {
                "" => status.canonical_reason().unwrap_or("unknown error").to_string(),
                text => text.to_string(),
            });
        Err(GatewayError::new(status.as_u16(), reason).into())
    }

    fn transport_error(&self, e: reqwest::Error) -> CtlError {
        let addr = self.base_url.as_str();
        if e.is_timeout() {
            NetworkError::request_timeout(addr, self.timeout_ms).into()
        } else if e.is_connect() {
            NetworkError::connection_failed(addr, e.to_string()).into()
        } else {
            NetworkError::send_failed(addr, e.to_string()).into()
        }
    }

    fn get_json<T: DeserializeOwned + Default>(&self, url: Url) -> CtlResult<T> {
        tracing::debug!("GET {url}");
        let body = self
            .send(self.client.get(url))?
            .text()
            .map_err(|e| self.transport_error(e))?;
        match body.trim() {
            "" | "null" => Ok(T::default()),
            text => serde_json::from_str(text).map_err(|e| {
                CtlError::from(NetworkError::send_failed(
                    self.base_url.as_str(),
                    format!("invalid response body: {e}"),
                ))
            }),
        }
    }

    fn post(&self, url: Url) -> CtlResult<()> {
        tracing::debug!("POST {url}");
        self.send(self.client.post(url)).map(|_| ())
    }

    fn delete(&self, url: Url) -> CtlResult<()> {
        tracing::debug!("DELETE {url}");
        self.send(self.client.delete(url)).map(|_| ())
    }

    fn function_form(config: &FunctionConfig) -> CtlResult<Form> {
        let json = serde_json::to_string(config).map_err(|e| CtlError::internal(e.to_string()))?;
        let config_part = Part::text(json)
            .mime_str("application/json")
            .map_err(|e| CtlError::internal(e.to_string()))?;
        let form = Form::new().part("functionConfig", config_part);
        match config.package() {
            Some(pkg) if REMOTE_PACKAGE_SCHEMES.iter().any(|scheme| pkg.starts_with(scheme)) => {
                Ok(form.text("url", pkg.to_string()))
            }
            Some(pkg) => form
                .file("data", pkg)
                .map_err(|e| CtlError::invalid_argument(format!("Failed to read package '{pkg}': {e}"))),
            None => Ok(form),
        }
    }
}

impl fmt::Debug for HttpPulsarAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPulsarAdmin")
            .field("base_url", &self.base_url.as_str())
            .field("auth_token", &self.auth_token.as_ref().map(|_| "***"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl PulsarAdmin for HttpPulsarAdmin {
    fn functions(&self) -> &dyn FunctionsAdmin {
        self
    }

    fn namespaces(&self) -> &dyn NamespacesAdmin {
        self
    }
}

impl FunctionsAdmin for HttpPulsarAdmin {
    fn create_function(&self, config: &FunctionConfig) -> CtlResult<()> {
        let url = self.endpoint(&FUNCTIONS_PATH, &[&config.tenant, &config.namespace, &config.name]);
        tracing::debug!("POST {url}");
        let form = Self::function_form(config)?;
        self.send(self.client.post(url).multipart(form)).map(|_| ())
    }

    fn get_function(&self, name: &FunctionName) -> CtlResult<FunctionConfig> {
        let url = self.endpoint(&FUNCTIONS_PATH, &[name.tenant(), name.namespace(), name.name()]);
        tracing::debug!("GET {url}");
        self.send(self.client.get(url))?
            .json::<FunctionConfig>()
            .map_err(|e| self.transport_error(e))
    }

    fn list_functions(&self, namespace: &NamespaceName) -> CtlResult<Vec<String>> {
        let url = self.endpoint(&FUNCTIONS_PATH, &[namespace.tenant(), namespace.namespace()]);
        self.get_json(url)
    }

    fn delete_function(&self, name: &FunctionName) -> CtlResult<()> {
        self.delete(self.endpoint(&FUNCTIONS_PATH, &[name.tenant(), name.namespace(), name.name()]))
    }

    fn start_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()> {
        self.post(self.function_endpoint(name, instance_id, "start"))
    }

    fn stop_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()> {
        self.post(self.function_endpoint(name, instance_id, "stop"))
    }

    fn restart_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()> {
        self.post(self.function_endpoint(name, instance_id, "restart"))
    }
}

impl NamespacesAdmin for HttpPulsarAdmin {
    fn get_namespaces(&self, tenant: &str) -> CtlResult<Vec<String>> {
        self.get_json(self.endpoint(&NAMESPACES_PATH, &[tenant]))
    }

    fn get_topic_auto_creation(&self, namespace: &NamespaceName) -> CtlResult<TopicAutoCreationConfig> {
        self.get_json(self.endpoint(
            &NAMESPACES_PATH,
            &[namespace.tenant(), namespace.namespace(), "autoTopicCreation"],
        ))
    }

    fn set_topic_auto_creation(&self, namespace: &NamespaceName, config: &TopicAutoCreationConfig) -> CtlResult<()> {
        let url = self.endpoint(
            &NAMESPACES_PATH,
            &[namespace.tenant(), namespace.namespace(), "autoTopicCreation"],
        );
        tracing::debug!("POST {url}");
        self.send(self.client.post(url).json(config)).map(|_| ())
    }

    fn remove_topic_auto_creation(&self, namespace: &NamespaceName) -> CtlResult<()> {
        self.delete(self.endpoint(
            &NAMESPACES_PATH,
            &[namespace.tenant(), namespace.namespace(), "autoTopicCreation"],
        ))
    }
}
