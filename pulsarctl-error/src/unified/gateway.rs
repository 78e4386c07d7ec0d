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

//! Errors reported by the remote admin service

use thiserror::Error;

/// A non-success response from the admin service.
///
/// The display form `code: <code> reason: <reason>` is forwarded to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("code: {code} reason: {reason}")]
pub struct GatewayError {
    code: u16,
    reason: String,
}

impl GatewayError {
    pub const NOT_FOUND: u16 = 404;

    #[inline]
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.code == Self::NOT_FOUND
    }
}
