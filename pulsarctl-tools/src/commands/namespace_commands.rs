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

mod get_topic_auto_creation_sub_command;
mod list_sub_command;
mod remove_topic_auto_creation_sub_command;
mod set_topic_auto_creation_sub_command;

pub use get_topic_auto_creation_sub_command::get_topic_auto_creation_cmd;
pub use list_sub_command::list_namespaces_cmd;
pub use remove_topic_auto_creation_sub_command::remove_topic_auto_creation_cmd;
pub use set_topic_auto_creation_sub_command::set_topic_auto_creation_cmd;

use crate::cmdutils::ResourceGroup;

pub(crate) const NAMESPACE_PERMISSION: &str = "This command requires tenant admin permissions.";

pub(crate) const MISSING_NAMESPACE_NAME: &str =
    "the namespace name is not specified or the namespace name is specified more than one";

pub(crate) const TENANT_NOT_EXIST: (&str, &str) =
    ("the tenant does not exist", "[✖]  code: 404 reason: Tenant does not exist");

pub(crate) const NAMESPACE_NOT_EXIST: (&str, &str) = (
    "the namespace does not exist",
    "[✖]  code: 404 reason: Namespace (tenant/namespace) does not exist",
);

pub fn namespaces_group() -> ResourceGroup {
    ResourceGroup::new("namespaces", "Operations about namespaces")
        .verb(list_namespaces_cmd())
        .verb(get_topic_auto_creation_cmd())
        .verb(set_topic_auto_creation_cmd())
        .verb(remove_topic_auto_creation_cmd())
}
