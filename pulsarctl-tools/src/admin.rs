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

//! Admin gateway layer
//!
//! [`PulsarAdmin`] is the only way verbs reach the cluster. [`HttpPulsarAdmin`] talks
//! to a real admin service; [`MemoryPulsarAdmin`] keeps everything in process.

pub mod api;
pub mod http_pulsar_admin;
pub mod memory_pulsar_admin;
pub mod pulsar_admin;

pub use http_pulsar_admin::HttpPulsarAdmin;
pub use memory_pulsar_admin::MemoryPulsarAdmin;
pub use pulsar_admin::FunctionsAdmin;
pub use pulsar_admin::NamespacesAdmin;
pub use pulsar_admin::PulsarAdmin;
