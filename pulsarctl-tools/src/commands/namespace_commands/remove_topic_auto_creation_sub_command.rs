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

use crate::cmdutils::CommandDescriptor;
use crate::cmdutils::NameBinding;
use crate::cmdutils::VerbCmd;
use crate::cmdutils::VerbContext;
use crate::commands::namespace_commands::MISSING_NAMESPACE_NAME;
use crate::commands::namespace_commands::NAMESPACE_NOT_EXIST;
use crate::commands::namespace_commands::NAMESPACE_PERMISSION;

pub fn remove_topic_auto_creation_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("Remove override of topic auto-creation for a namespace")
        .permission(NAMESPACE_PERMISSION)
        .example(
            "Remove override of topic auto-creation for a namespace",
            "pulsarctl namespaces remove-topic-auto-creation tenant/namespace",
        )
        .output(
            "normal output",
            "Removed topic auto-creation config successfully for [tenant/namespace]",
        )
        .output(
            "you must specify a tenant/namespace name, please check if the tenant/namespace name is provided",
            format!("[✖]  {MISSING_NAMESPACE_NAME}"),
        )
        .output(NAMESPACE_NOT_EXIST.0, NAMESPACE_NOT_EXIST.1);

    VerbCmd::new(
        "remove-topic-auto-creation",
        "Remove override of topic auto-creation for a namespace",
        desc,
        NameBinding::RequiresNamespace {
            missing: MISSING_NAMESPACE_NAME,
        },
        do_remove_topic_auto_creation,
    )
}

fn do_remove_topic_auto_creation(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let namespace = ctx.namespace_name()?.clone();
    ctx.admin().namespaces().remove_topic_auto_creation(&namespace)?;
    writeln!(
        ctx.out(),
        "Removed topic auto-creation config successfully for [{namespace}]"
    )?;
    Ok(())
}
