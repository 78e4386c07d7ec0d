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
use crate::commands::namespace_commands::NAMESPACE_PERMISSION;
use crate::commands::namespace_commands::TENANT_NOT_EXIST;

const MISSING_TENANT_NAME: &str = "the tenant name is not specified or the tenant name is specified more than one";

pub fn list_namespaces_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("Get the list of namespaces of a tenant")
        .permission(NAMESPACE_PERMISSION)
        .example("Get the list of namespaces of a tenant", "pulsarctl namespaces list (tenant name)")
        .output("normal output", "public/default\npublic/functions")
        .output(
            "you must specify a tenant name, please check if the tenant name is provided",
            format!("[✖]  {MISSING_TENANT_NAME}"),
        )
        .output(TENANT_NOT_EXIST.0, TENANT_NOT_EXIST.1);

    VerbCmd::new(
        "list",
        "Get the list of namespaces of a tenant",
        desc,
        NameBinding::RequiresName {
            missing: MISSING_TENANT_NAME,
        },
        do_list_namespaces,
    )
}

fn do_list_namespaces(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let tenant = ctx.name_arg()?.to_string();
    let namespaces = ctx.admin().namespaces().get_namespaces(&tenant)?;
    let out = ctx.out();
    for namespace in namespaces {
        writeln!(out, "{namespace}")?;
    }
    Ok(())
}
