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

use std::fmt;
use std::str::FromStr;

use pulsarctl_error::CtlError;
use serde::Deserialize;
use serde::Serialize;

use crate::cmdutils::resource::FunctionName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionRuntime {
    Java,
    Python,
    Go,
}

/// Function definition as exchanged with the admin service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfig {
    pub tenant: String,
    pub namespace: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<FunctionRuntime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go: Option<String>,
}

fn default_parallelism() -> u32 {
    1
}

impl FunctionConfig {
    pub fn new(name: &FunctionName) -> Self {
        Self {
            tenant: name.tenant().to_string(),
            namespace: name.namespace().to_string(),
            name: name.name().to_string(),
            class_name: None,
            inputs: Vec::new(),
            output: None,
            parallelism: default_parallelism(),
            runtime: None,
            jar: None,
            py: None,
            go: None,
        }
    }

    pub fn fqfn(&self) -> String {
        format!("{}/{}/{}", self.tenant, self.namespace, self.name)
    }

    pub fn namespace_name(&self) -> String {
        format!("{}/{}", self.tenant, self.namespace)
    }

    /// The package to upload or reference, whichever runtime it belongs to.
    pub fn package(&self) -> Option<&str> {
        self.jar
            .as_deref()
            .or(self.py.as_deref())
            .or(self.go.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicType {
    #[serde(rename = "partitioned")]
    Partitioned,
    #[serde(rename = "non-partitioned")]
    NonPartitioned,
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicType::Partitioned => f.write_str("partitioned"),
            TopicType::NonPartitioned => f.write_str("non-partitioned"),
        }
    }
}

impl FromStr for TopicType {
    type Err = CtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partitioned" => Ok(TopicType::Partitioned),
            "non-partitioned" => Ok(TopicType::NonPartitioned),
            other => Err(CtlError::invalid_argument(format!(
                "invalid topic type '{other}', the valid options are: partitioned, non-partitioned"
            ))),
        }
    }
}

/// Topic auto-creation override of a namespace.
///
/// The admin service answers with an empty object when no override is set, which
/// deserializes to a config without a topic type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAutoCreationConfig {
    #[serde(rename = "allowAutoTopicCreation", default)]
    pub allow: bool,
    #[serde(rename = "topicType", default, skip_serializing_if = "Option::is_none")]
    pub topic_type: Option<TopicType>,
    #[serde(rename = "defaultNumPartitions", default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<u32>,
}

impl TopicAutoCreationConfig {
    pub fn is_configured(&self) -> bool {
        self.topic_type.is_some()
    }
}
