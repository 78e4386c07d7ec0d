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
use crate::commands::functions_commands::not_found;
use crate::commands::functions_commands::FUNCTIONS_PERMISSION;

pub fn delete_function_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("This command is used for deleting a Pulsar Function that is running on a Pulsar cluster.")
        .permission(FUNCTIONS_PERMISSION)
        .example(
            "Delete a Pulsar Function that is running on a Pulsar cluster",
            "pulsarctl functions delete \
             \n\t--tenant public \
             \n\t--namespace default \
             \n\t--name (the name of Pulsar Function)",
        )
        .example(
            "Delete a Pulsar Function that is running on a Pulsar cluster with FQFN",
            "pulsarctl functions delete --fqfn tenant/namespace/name [eg: public/default/ExampleFunctions]",
        )
        .output("normal output", "Deleted <the name of a Pulsar Function> successfully")
        .output(
            "The name of Pulsar Functions doesn't exist, please check the --name args",
            "[✖]  code: 404 reason: Function <your function name> doesn't exist",
        );

    VerbCmd::new(
        "delete",
        "Delete a Pulsar Function that is running on a Pulsar cluster",
        desc,
        NameBinding::RequiresNameOrFqfn,
        do_delete_function,
    )
}

fn do_delete_function(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let name = ctx.function_name()?.clone();
    ctx.admin().functions().delete_function(&name).map_err(not_found(&name))?;
    writeln!(ctx.out(), "Deleted {name} successfully")?;
    Ok(())
}
