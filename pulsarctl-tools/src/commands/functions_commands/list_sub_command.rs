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

use clap::Args;
use pulsarctl_error::CtlResult;

use crate::cmdutils::resource::DEFAULT_NAMESPACE;
use crate::cmdutils::resource::PUBLIC_TENANT;
use crate::cmdutils::CommandDescriptor;
use crate::cmdutils::NameBinding;
use crate::cmdutils::NamespaceName;
use crate::cmdutils::VerbCmd;
use crate::cmdutils::VerbContext;
use crate::commands::functions_commands::FUNCTIONS_PERMISSION;

#[derive(Debug, Clone, Args)]
pub struct ListFunctionsFlags {
    #[arg(long = "tenant", default_value = PUBLIC_TENANT, help = "The tenant of a Pulsar Function")]
    tenant: String,

    #[arg(long = "namespace", default_value = DEFAULT_NAMESPACE, help = "The namespace of a Pulsar Function")]
    namespace: String,
}

pub fn list_functions_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("List all Pulsar Functions running under a specific tenant and namespace.")
        .permission(FUNCTIONS_PERMISSION)
        .example(
            "List all Pulsar Functions",
            "pulsarctl functions list \
             \n\t--tenant public \
             \n\t--namespace default",
        )
        .output("normal output", "test_function_name\nother_function_name")
        .output(
            "The namespace does not exist",
            "[✖]  code: 404 reason: Namespace (tenant/namespace) does not exist",
        );

    VerbCmd::new(
        "list",
        "List all Pulsar Functions running under a specific tenant and namespace",
        desc,
        NameBinding::None,
        do_list_functions,
    )
    .with_flags(ListFunctionsFlags::augment_args)
}

fn do_list_functions(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let flags: ListFunctionsFlags = ctx.flags()?;
    let namespace = NamespaceName::new(&flags.tenant, &flags.namespace)?;
    let functions = ctx.admin().functions().list_functions(&namespace)?;
    let out = ctx.out();
    for function in functions {
        writeln!(out, "{function}")?;
    }
    Ok(())
}
