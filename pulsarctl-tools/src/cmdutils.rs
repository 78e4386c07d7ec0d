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

//! Verb framework: identifiers, descriptors, binding and the command tree

pub mod descriptor;
pub mod registry;
pub mod render;
pub mod resource;
pub mod verb;

pub use descriptor::CommandDescriptor;
pub use registry::CommandRegistry;
pub use registry::ResourceGroup;
pub use resource::FunctionName;
pub use resource::NamespaceName;
pub use verb::IoStreams;
pub use verb::NameBinding;
pub use verb::VerbCmd;
pub use verb::VerbContext;
