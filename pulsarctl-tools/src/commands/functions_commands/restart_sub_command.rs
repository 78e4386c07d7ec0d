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

pub fn restart_function_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("This command is used for restarting function instance(s).")
        .permission(FUNCTIONS_PERMISSION)
        .example(
            "Restart function instance",
            "pulsarctl functions restart \
             \n\t--tenant public \
             \n\t--namespace default \
             \n\t--name (the name of Pulsar Function)",
        )
        .example(
            "Restart a single function instance with FQFN",
            "pulsarctl functions restart \
             \n\t--fqfn tenant/namespace/name [eg: public/default/ExampleFunctions] \
             \n\t--instance-id 1",
        )
        .output("normal output", "Restarted <the name of a Pulsar Function> successfully")
        .output(
            "The name of Pulsar Functions doesn't exist, please check the --name args",
            "[✖]  code: 404 reason: Function <your function name> doesn't exist",
        );

    VerbCmd::new(
        "restart",
        "Restart function instance",
        desc,
        NameBinding::RequiresNameOrFqfnWithInstance,
        |ctx| Lifecycle::Restart.run(ctx),
    )
}
