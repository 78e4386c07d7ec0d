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

use crate::cmdutils::CommandDescriptor;
use crate::cmdutils::NameBinding;
use crate::cmdutils::VerbCmd;
use crate::commands::functions_commands::Lifecycle;
use crate::commands::functions_commands::FUNCTIONS_PERMISSION;

pub fn stop_function_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("This command is used for stopping function instance(s).")
        .permission(FUNCTIONS_PERMISSION)
        .example(
            "Stops function instance",
            "pulsarctl functions stop \
             \n\t--tenant public \
             \n\t--namespace default \
             \n\t--name (the name of Pulsar Function)",
        )
        .example(
            "Stops function instance with FQFN",
            "pulsarctl functions stop --fqfn tenant/namespace/name [eg: public/default/ExampleFunctions]",
        )
        .example(
            "Stops a single function instance",
            "pulsarctl functions stop \
             \n\t--tenant public \
             \n\t--namespace default \
             \n\t--name (the name of Pulsar Function) \
             \n\t--instance-id 1",
        )
        .output("normal output", "Stopped <the name of a Pulsar Function> successfully")
        .output(
            "You must specify a name for the Pulsar Functions or a FQFN, please check if the name is provided",
            "[✖]  you must specify a name for the function or a Fully Qualified Function Name (FQFN)",
        )
        .output(
            "The name of Pulsar Functions doesn't exist, please check the --name args",
            "[✖]  code: 404 reason: Function <your function name> doesn't exist",
        );

    VerbCmd::new(
        "stop",
        "Stops function instance",
        desc,
        NameBinding::RequiresNameOrFqfnWithInstance,
        |ctx| Lifecycle::Stop.run(ctx),
    )
}
