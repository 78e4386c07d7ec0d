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

//! Pulsarctl Tools - verb framework and admin CLI for Apache Pulsar
//!
//! This crate provides both:
//! - **Verb framework**: identifier resolution, command descriptors, argument binding
//! - **CLI**: the `pulsarctl-rust` binary built on top of it
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Global flags, config, completion     │
//! │  - Exit code and error reporting        │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │     Verbs (commands/, cmdutils/)        │
//! │  - Registry of resource groups          │
//! │  - Binding: name, namespace, FQFN       │
//! │  - Run functions per verb               │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Admin API (admin/)               │
//! │  - PulsarAdmin trait                    │
//! │  - HTTP and in-memory gateways          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library
//!
//! ```rust
//! use pulsarctl_tools::admin::MemoryPulsarAdmin;
//! use pulsarctl_tools::commands::list_namespaces_cmd;
//! use pulsarctl_tools::testing::Harness;
//!
//! let harness = Harness::new(MemoryPulsarAdmin::new());
//! let result = harness.invoke(&list_namespaces_cmd(), &["list", "public"]).unwrap();
//! assert_eq!(result.stdout, "public/default\n");
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! pulsarctl-rust --admin-service-url http://localhost:8080 functions start --fqfn public/default/f1
//! ```

// Admin client construction
pub mod core {
    //! Admin client construction
    //!
    //! - [`admin`] - Admin client builder

    pub mod admin;

    // Re-export error types from pulsarctl-error
    pub use pulsarctl_error::CtlError;
    pub use pulsarctl_error::CtlResult;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (JSON, YAML)
    //! - [`validators`] - Input validators

    pub mod formatters;
    pub mod validators;
}

// UI utilities for enhanced CLI experience
pub mod ui;

// Admin API layer
pub mod admin;

// Verb framework
pub mod cmdutils;

pub mod commands;

// Harness for running verbs in tests
pub mod testing;

// CLI entry point
pub mod pulsarctl_cli;
