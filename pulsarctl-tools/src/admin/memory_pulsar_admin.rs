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

//! In-process admin gateway
//!
//! Mirrors the admin service's observable behaviour (status codes and reasons) without
//! a cluster. The execution harness and the verb tests run against it.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;

use parking_lot::Mutex;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;

use crate::admin::api::FunctionConfig;
use crate::admin::api::TopicAutoCreationConfig;
use crate::admin::pulsar_admin::FunctionsAdmin;
use crate::admin::pulsar_admin::NamespacesAdmin;
use crate::admin::pulsar_admin::PulsarAdmin;
use crate::cmdutils::resource::FunctionName;
use crate::cmdutils::resource::NamespaceName;
use crate::cmdutils::resource::DEFAULT_NAMESPACE;
use crate::cmdutils::resource::PUBLIC_TENANT;

pub const OPERATION_NOT_PERMITTED: &str = "Operation not permitted";

struct MemoryFunction {
    config: FunctionConfig,
    running: Vec<bool>,
}

#[derive(Default)]
struct MemoryState {
    tenants: BTreeMap<String, BTreeSet<String>>,
    functions: BTreeMap<String, MemoryFunction>,
    auto_creation: HashMap<String, TopicAutoCreationConfig>,
    remote_calls: usize,
}

impl MemoryState {
    fn check_namespace(&self, tenant: &str, namespace: &str) -> CtlResult<()> {
        let namespaces = self
            .tenants
            .get(tenant)
            .ok_or_else(|| CtlError::gateway(404, "Tenant does not exist"))?;
        if !namespaces.contains(namespace) {
            return Err(CtlError::gateway(
                404,
                format!("Namespace ({tenant}/{namespace}) does not exist"),
            ));
        }
        Ok(())
    }

    fn function_mut(&mut self, name: &FunctionName) -> CtlResult<&mut MemoryFunction> {
        self.functions
            .get_mut(&name.to_string())
            .ok_or_else(|| CtlError::gateway(404, format!("Function {} doesn't exist", name.name())))
    }
}

pub struct MemoryPulsarAdmin {
    state: Mutex<MemoryState>,
}

impl Default for MemoryPulsarAdmin {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPulsarAdmin {
    /// A cluster holding only the `public/default` namespace.
    pub fn new() -> Self {
        let admin = Self {
            state: Mutex::new(MemoryState::default()),
        };
        admin.add_namespace(PUBLIC_TENANT, DEFAULT_NAMESPACE);
        admin
    }

    pub fn with_namespace(self, tenant: &str, namespace: &str) -> Self {
        self.add_namespace(tenant, namespace);
        self
    }

    pub fn add_namespace(&self, tenant: &str, namespace: &str) {
        self.state
            .lock()
            .tenants
            .entry(tenant.to_string())
            .or_default()
            .insert(namespace.to_string());
    }

    /// Number of gateway calls served so far.
    pub fn remote_calls(&self) -> usize {
        self.state.lock().remote_calls
    }

    pub fn function(&self, name: &FunctionName) -> Option<FunctionConfig> {
        self.state
            .lock()
            .functions
            .get(&name.to_string())
            .map(|f| f.config.clone())
    }

    /// Running flag of every instance of a function.
    pub fn running_instances(&self, name: &FunctionName) -> Option<Vec<bool>> {
        self.state
            .lock()
            .functions
            .get(&name.to_string())
            .map(|f| f.running.clone())
    }

    fn set_running(&self, name: &FunctionName, instance_id: Option<u32>, running: bool) -> CtlResult<()> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        let function = state.function_mut(name)?;
        match instance_id {
            None => function.running.iter_mut().for_each(|r| *r = running),
            Some(id) => {
                let slot = function
                    .running
                    .get_mut(id as usize)
                    .ok_or_else(|| CtlError::gateway(400, OPERATION_NOT_PERMITTED))?;
                *slot = running;
            }
        }
        Ok(())
    }
}

impl PulsarAdmin for MemoryPulsarAdmin {
    fn functions(&self) -> &dyn FunctionsAdmin {
        self
    }

    fn namespaces(&self) -> &dyn NamespacesAdmin {
        self
    }
}

impl FunctionsAdmin for MemoryPulsarAdmin {
    fn create_function(&self, config: &FunctionConfig) -> CtlResult<()> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.check_namespace(&config.tenant, &config.namespace)?;
        let key = config.fqfn();
        if state.functions.contains_key(&key) {
            return Err(CtlError::gateway(400, format!("Function {} already exists", config.name)));
        }
        if config.package().is_none() {
            return Err(CtlError::gateway(400, "Function package is not provided"));
        }
        state.functions.insert(
            key,
            MemoryFunction {
                config: config.clone(),
                running: vec![true; config.parallelism.max(1) as usize],
            },
        );
        Ok(())
    }

    fn get_function(&self, name: &FunctionName) -> CtlResult<FunctionConfig> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.function_mut(name).map(|f| f.config.clone())
    }

    fn list_functions(&self, namespace: &NamespaceName) -> CtlResult<Vec<String>> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.check_namespace(namespace.tenant(), namespace.namespace())?;
        let prefix = format!("{namespace}/");
        Ok(state
            .functions
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, f)| f.config.name.clone())
            .collect())
    }

    fn delete_function(&self, name: &FunctionName) -> CtlResult<()> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.function_mut(name)?;
        state.functions.remove(&name.to_string());
        Ok(())
    }

    fn start_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()> {
        self.set_running(name, instance_id, true)
    }

    fn stop_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()> {
        self.set_running(name, instance_id, false)
    }

    fn restart_function(&self, name: &FunctionName, instance_id: Option<u32>) -> CtlResult<()> {
        self.set_running(name, instance_id, true)
    }
}

impl NamespacesAdmin for MemoryPulsarAdmin {
    fn get_namespaces(&self, tenant: &str) -> CtlResult<Vec<String>> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        let namespaces = state
            .tenants
            .get(tenant)
            .ok_or_else(|| CtlError::gateway(404, "Tenant does not exist"))?;
        Ok(namespaces.iter().map(|ns| format!("{tenant}/{ns}")).collect())
    }

    fn get_topic_auto_creation(&self, namespace: &NamespaceName) -> CtlResult<TopicAutoCreationConfig> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.check_namespace(namespace.tenant(), namespace.namespace())?;
        Ok(state
            .auto_creation
            .get(&namespace.to_string())
            .cloned()
            .unwrap_or_default())
    }

    fn set_topic_auto_creation(&self, namespace: &NamespaceName, config: &TopicAutoCreationConfig) -> CtlResult<()> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.check_namespace(namespace.tenant(), namespace.namespace())?;
        state.auto_creation.insert(namespace.to_string(), config.clone());
        Ok(())
    }

    fn remove_topic_auto_creation(&self, namespace: &NamespaceName) -> CtlResult<()> {
        let mut state = self.state.lock();
        state.remote_calls += 1;
        state.check_namespace(namespace.tenant(), namespace.namespace())?;
        state.auto_creation.remove(&namespace.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::ErrorKind;

    use super::*;

    fn function(admin: &MemoryPulsarAdmin, fqfn: &str, parallelism: u32) -> FunctionName {
        let name = FunctionName::parse_fqfn(fqfn).unwrap();
        let mut config = FunctionConfig::new(&name);
        config.jar = Some("api-examples.jar".to_string());
        config.parallelism = parallelism;
        admin.create_function(&config).unwrap();
        name
    }

    #[test]
    fn test_start_stop_instances() {
        let admin = MemoryPulsarAdmin::new();
        let name = function(&admin, "public/default/f1", 2);

        admin.stop_function(&name, None).unwrap();
        assert_eq!(admin.running_instances(&name), Some(vec![false, false]));

        admin.start_function(&name, Some(1)).unwrap();
        assert_eq!(admin.running_instances(&name), Some(vec![false, true]));
    }

    #[test]
    fn test_unknown_instance_is_rejected() {
        let admin = MemoryPulsarAdmin::new();
        let name = function(&admin, "public/default/f1", 1);
        let err = admin.start_function(&name, Some(12345678)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteRejected);
        assert!(err.to_string().contains(OPERATION_NOT_PERMITTED));
    }

    #[test]
    fn test_missing_function() {
        let admin = MemoryPulsarAdmin::new();
        let name = FunctionName::parse_fqfn("public/default/not-exist").unwrap();
        let err = admin.stop_function(&name, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteNotFound);
        assert_eq!(err.to_string(), "code: 404 reason: Function not-exist doesn't exist");
    }

    #[test]
    fn test_create_in_missing_namespace() {
        let admin = MemoryPulsarAdmin::new();
        let name = FunctionName::parse_fqfn("public/missing/f1").unwrap();
        let mut config = FunctionConfig::new(&name);
        config.jar = Some("api-examples.jar".to_string());
        let err = admin.create_function(&config).unwrap_err();
        assert_eq!(err.to_string(), "code: 404 reason: Namespace (public/missing) does not exist");
    }

    #[test]
    fn test_list_functions_is_scoped_to_namespace() {
        let admin = MemoryPulsarAdmin::new().with_namespace("public", "other");
        function(&admin, "public/default/a", 1);
        function(&admin, "public/other/b", 1);
        let ns = NamespaceName::parse("public/default").unwrap();
        assert_eq!(admin.list_functions(&ns).unwrap(), vec!["a".to_string()]);
        assert_eq!(admin.remote_calls(), 3);
    }
}
