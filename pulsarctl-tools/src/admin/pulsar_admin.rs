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

use pulsarctl_error::CtlResult;

use crate::admin::api::FunctionConfig;
use crate::admin::api::TopicAutoCreationConfig;
use crate::cmdutils::resource::FunctionName;
use crate::cmdutils::resource::NamespaceName;

/// The remote admin service, one accessor per resource family.
///
/// Every call is a single blocking request. Failures reported by the service come back
/// as [`pulsarctl_error::GatewayError`], unreachable services as
/// [`pulsarctl_error::NetworkError`].
pub trait PulsarAdmin {
    fn functions(&self) -> &dyn FunctionsAdmin;

    fn namespaces(&self) -> &dyn NamespacesAdmin;
}

#[cfg_attr(test, mockall::automock)]
pub trait FunctionsAdmin {
    fn create_function(&self, config: &FunctionConfig) -> CtlResult<()>;

    fn get_function(&self, name: &FunctionName) -> CtlResult<FunctionConfig>;

    fn list_functions(&self, namespace: &NamespaceName) -> CtlResult<Vec<String>>;

    fn delete_function(&self, name: &FunctionName) -> CtlResult<()>;

    /// Start every instance, or only `instance_id` when given.
    fn start_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()>;

    fn stop_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()>;

    fn restart_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()>;
}

#[cfg_attr(test, mockall::automock)]
pub trait NamespacesAdmin {
    fn get_namespaces(&self, tenant: &str) -> CtlResult<Vec<String>>;

    fn get_topic_auto_creation(&self, namespace: &NamespaceName) -> CtlResult<TopicAutoCreationConfig>;

    fn set_topic_auto_creation(&self, namespace: &NamespaceName, config: &TopicAutoCreationConfig) -> CtlResult<()>;

    fn remove_topic_auto_creation(&self, namespace: &NamespaceName) -> CtlResult<()>;
}
