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

//! CLI input validators
//!
//! Provides validation for command-line arguments

use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;

const MAX_SEGMENT_LEN: usize = 255;

fn validation_error(field: &str, reason: impl AsRef<str>) -> CtlError {
    CtlError::invalid_argument(format!("Validation failed for '{field}': {}", reason.as_ref()))
}

/// Validate one segment of a resource name (tenant, namespace or function name)
pub fn validate_segment(field: &str, value: &str) -> CtlResult<()> {
    if value.is_empty() {
        return Err(validation_error(field, "cannot be empty"));
    }

    if value.len() > MAX_SEGMENT_LEN {
        return Err(validation_error(
            field,
            format!("'{value}' exceeds maximum length of {MAX_SEGMENT_LEN} characters"),
        ));
    }

    if let Some(ch) = value.chars().find(|c| c.is_whitespace() || *c == '/') {
        return Err(validation_error(field, format!("'{value}' contains invalid character {ch:?}")));
    }

    Ok(())
}

/// Validate the admin service URL
///
/// # Format
/// `http://host:port` or `https://host:port`
pub fn validate_web_service_url(url: &str) -> CtlResult<()> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| validation_error("admin-service-url", format!("'{url}' must start with http:// or https://")))?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(validation_error("admin-service-url", format!("'{url}' has no host")));
    }

    Ok(())
}

/// Validate the number of instances of a function
pub fn validate_parallelism(parallelism: u32) -> CtlResult<()> {
    match parallelism {
        0 => Err(validation_error("parallelism", "must be positive, got 0")),
        n if n > 1024 => Err(validation_error(
            "parallelism",
            format!("exceeds maximum value of 1024, got {n}"),
        )),
        _ => Ok(()),
    }
}

/// Validate the default partition count of auto-created topics
pub fn validate_partitions(partitions: u32) -> CtlResult<()> {
    if partitions == 0 {
        return Err(validation_error("partitions", "must be positive, got 0"));
    }
    Ok(())
}

/// Validate a function instance id, which the admin service addresses as a number
pub fn validate_instance_id(instance_id: &str) -> CtlResult<()> {
    if instance_id.trim().is_empty() {
        return Err(validation_error("instance-id", "cannot be empty"));
    }
    instance_id
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| validation_error("instance-id", format!("'{instance_id}' is not a non-negative integer")))
}
