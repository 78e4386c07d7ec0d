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

//! Resource identifiers
//!
//! A function is addressed either by its fully qualified name (`tenant/namespace/name`)
//! or by the `--tenant`, `--namespace` and `--name` flags. Resolution is pure: it never
//! touches the network, so a well formed name that does not exist remotely still
//! resolves here and fails later at the admin service.

use std::fmt;
use std::str::FromStr;

use clap::Args;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;

use crate::cli::validators::validate_segment;

/// Returned when neither an FQFN nor a function name was supplied.
pub const MISSING_FUNCTION_NAME: &str =
    "you must specify a name for the function or a Fully Qualified Function Name (FQFN)";

pub const PUBLIC_TENANT: &str = "public";
pub const DEFAULT_NAMESPACE: &str = "default";

/// Canonical `tenant/namespace/name` identifier of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName {
    tenant: String,
    namespace: String,
    name: String,
}

impl FunctionName {
    pub fn new(tenant: &str, namespace: &str, name: &str) -> CtlResult<Self> {
        for (field, value) in [("tenant", tenant), ("namespace", namespace), ("name", name)] {
            if value.trim().is_empty() {
                return Err(CtlError::missing_identifier(MISSING_FUNCTION_NAME));
            }
            validate_segment(field, value)?;
        }
        Ok(Self {
            tenant: tenant.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    /// Parse `tenant/namespace/name`.
    pub fn parse_fqfn(fqfn: &str) -> CtlResult<Self> {
        let segments: Vec<&str> = fqfn.split('/').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.trim().is_empty()) {
            return Err(CtlError::invalid_argument(format!(
                "Fully qualified function name (FQFN) '{fqfn}' is invalid, expected tenant/namespace/name"
            )));
        }
        for (field, value) in ["tenant", "namespace", "name"].into_iter().zip(&segments) {
            validate_segment(field, value)?;
        }
        Ok(Self {
            tenant: segments[0].to_string(),
            namespace: segments[1].to_string(),
            name: segments[2].to_string(),
        })
    }

    /// Resolve either identifier form.
    ///
    /// A non-empty `fqfn` combined with any of the flags is rejected as ambiguous.
    /// Without an FQFN, `--name` is mandatory and an absent tenant or namespace falls back
    /// to `public/default`. Explicitly blank values are treated as missing.
    pub fn resolve(
        fqfn: Option<&str>,
        tenant: Option<&str>,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> CtlResult<Self> {
        match fqfn.filter(|f| !f.is_empty()) {
            Some(fqfn) => {
                if tenant.is_some() || namespace.is_some() || name.is_some() {
                    return Err(CtlError::invalid_argument(format!(
                        "the FQFN '{fqfn}' cannot be combined with --tenant, --namespace or --name"
                    )));
                }
                Self::parse_fqfn(fqfn)
            }
            None => {
                let name = name.ok_or_else(|| CtlError::missing_identifier(MISSING_FUNCTION_NAME))?;
                Self::new(
                    tenant.unwrap_or(PUBLIC_TENANT),
                    namespace.unwrap_or(DEFAULT_NAMESPACE),
                    name,
                )
            }
        }
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace_name(&self) -> NamespaceName {
        NamespaceName {
            tenant: self.tenant.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.tenant, self.namespace, self.name)
    }
}

impl FromStr for FunctionName {
    type Err = CtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_fqfn(s)
    }
}

/// Canonical `tenant/namespace` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceName {
    tenant: String,
    namespace: String,
}

impl NamespaceName {
    pub fn new(tenant: &str, namespace: &str) -> CtlResult<Self> {
        validate_segment("tenant", tenant)?;
        validate_segment("namespace", namespace)?;
        Ok(Self {
            tenant: tenant.to_string(),
            namespace: namespace.to_string(),
        })
    }

    pub fn parse(value: &str) -> CtlResult<Self> {
        match value.split('/').collect::<Vec<_>>().as_slice() {
            [tenant, namespace] if !tenant.is_empty() && !namespace.is_empty() => Self::new(tenant, namespace),
            _ => Err(CtlError::invalid_argument(format!(
                "The namespace name '{value}' is invalid, expected tenant/namespace"
            ))),
        }
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tenant, self.namespace)
    }
}

impl FromStr for NamespaceName {
    type Err = CtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Identifier flags shared by every function verb.
#[derive(Debug, Clone, Default, Args)]
pub struct FunctionNameArgs {
    /// Fully qualified function name
    #[arg(value_name = "FQFN", help = "The Fully Qualified Function Name (tenant/namespace/name)")]
    pub fqfn_positional: Option<String>,

    #[arg(
        long = "fqfn",
        value_name = "FQFN",
        help = "The Fully Qualified Function Name (tenant/namespace/name)"
    )]
    pub fqfn: Option<String>,

    #[arg(long = "tenant", help = "The tenant of the function")]
    pub tenant: Option<String>,

    #[arg(long = "namespace", help = "The namespace of the function")]
    pub namespace: Option<String>,

    #[arg(long = "name", help = "The name of the function")]
    pub name: Option<String>,
}

impl FunctionNameArgs {
    pub fn resolve(&self) -> CtlResult<FunctionName> {
        let fqfn = match (self.fqfn_positional.as_deref(), self.fqfn.as_deref()) {
            (Some(positional), Some(flag)) => {
                return Err(CtlError::invalid_argument(format!(
                    "the FQFN is specified twice ('{positional}' and --fqfn '{flag}')"
                )))
            }
            (positional, flag) => positional.or(flag),
        };
        FunctionName::resolve(
            fqfn,
            self.tenant.as_deref(),
            self.namespace.as_deref(),
            self.name.as_deref(),
        )
    }
}
