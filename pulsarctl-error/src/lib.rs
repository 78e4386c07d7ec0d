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

//! # Pulsarctl Error Handling
//!
//! One error type, [`CtlError`], flows through every layer of the admin client:
//! argument binding, the admin gateway and output rendering. Each error carries a
//! structured [`ErrorKind`] alongside its user-facing message, so callers can branch
//! on the kind while the literal message text stays stable for tooling that matches
//! on substrings.
//!
//! ```rust
//! use pulsarctl_error::CtlError;
//! use pulsarctl_error::CtlResult;
//! use pulsarctl_error::ErrorKind;
//!
//! fn check_name(name: &str) -> CtlResult<()> {
//!     if name.is_empty() {
//!         return Err(CtlError::missing_identifier("you must specify a name"));
//!     }
//!     Ok(())
//! }
//! let err = check_name("").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingIdentifier);
//! ```

pub mod unified;

pub use unified::CtlError;
pub use unified::CtlResult;
pub use unified::ErrorKind;
pub use unified::GatewayError;
pub use unified::NetworkError;
