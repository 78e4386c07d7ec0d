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

//! Unified error system for the Pulsar admin client
//!
//! Errors are grouped by where they are detected: locally while binding arguments,
//! remotely by the admin service, or on the way to the admin service.

mod gateway;
mod network;

use std::io;

pub use gateway::GatewayError;
pub use network::NetworkError;
use thiserror::Error;

/// Coarse classification of a [`CtlError`].
///
/// `InvalidArgument` and `MissingIdentifier` are always detected before any remote
/// call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed FQFN, segment or flag combination
    InvalidArgument,
    /// Neither an FQFN nor a complete tenant/namespace/name was supplied
    MissingIdentifier,
    /// The admin service reports the referenced resource does not exist
    RemoteNotFound,
    /// The admin service refused the operation in the current resource state
    RemoteRejected,
    /// The admin service could not be reached
    TransportFailure,
    /// Rendering or writing command output failed
    Output,
    /// Client configuration could not be loaded or is invalid
    Config,
    /// Framework misuse, never caused by user input
    Internal,
}

/// Main error type for all admin client operations
#[derive(Debug, Error)]
pub enum CtlError {
    /// Transport level failures talking to the admin service
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Non-success responses returned by the admin service
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    MissingIdentifier { message: String },

    /// An error annotated with a resource specific prefix
    #[error("{prefix}: {source}")]
    Prefixed {
        prefix: String,
        #[source]
        source: Box<CtlError>,
    },

    #[error("Output error: {0}")]
    Output(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CtlError {
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[inline]
    pub fn missing_identifier(message: impl Into<String>) -> Self {
        Self::MissingIdentifier {
            message: message.into(),
        }
    }

    #[inline]
    pub fn gateway(code: u16, reason: impl Into<String>) -> Self {
        Self::Gateway(GatewayError::new(code, reason))
    }

    #[inline]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output(message.into())
    }

    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Prepend a descriptive prefix, keeping the kind of the wrapped error.
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self::Prefixed {
            prefix: prefix.into(),
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::TransportFailure,
            Self::Gateway(e) if e.is_not_found() => ErrorKind::RemoteNotFound,
            Self::Gateway(_) => ErrorKind::RemoteRejected,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            Self::Prefixed { source, .. } => source.kind(),
            Self::Output(_) | Self::Io(_) => ErrorKind::Output,
            Self::Config(_) => ErrorKind::Config,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True when the error was raised before contacting the admin service.
    pub fn is_local(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument | ErrorKind::MissingIdentifier)
    }

    /// Status code reported by the admin service, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Gateway(e) => Some(e.code()),
            Self::Prefixed { source, .. } => source.status_code(),
            _ => None,
        }
    }
}

impl From<std::fmt::Error> for CtlError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Output(e.to_string())
    }
}

/// Result type alias used across the admin client
pub type CtlResult<T> = std::result::Result<T, CtlError>;
