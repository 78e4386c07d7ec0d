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

use crate::cmdutils::render::print_structured;
use crate::cmdutils::CommandDescriptor;
use crate::cmdutils::NameBinding;
use crate::cmdutils::VerbCmd;
use crate::cmdutils::VerbContext;
use crate::commands::functions_commands::not_found;
use crate::commands::functions_commands::FUNCTIONS_PERMISSION;

pub fn get_function_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("Fetch information about a Pulsar Function")
        .permission(FUNCTIONS_PERMISSION)
        .example(
            "Get information about a Pulsar Function",
            "pulsarctl functions get \
             \n\t--tenant public \
             \n\t--namespace default \
             \n\t--name (the name of Pulsar Function)",
        )
        .example(
            "Get information about a Pulsar Function with FQFN",
            "pulsarctl functions get --fqfn tenant/namespace/name [eg: public/default/ExampleFunctions]",
        )
        .output(
            "normal output",
            r#"{
  "tenant": "public",
  "namespace": "default",
  "name": "ExampleFunctions",
  "className": "org.apache.pulsar.functions.api.examples.ExclamationFunction",
  "inputs": ["test-input-topic"],
  "output": "persistent://public/default/test-output-topic",
  "parallelism": 1,
  "runtime": "JAVA"
}"#,
        )
        .output(
            "The name of Pulsar Functions doesn't exist, please check the --name args",
            "[✖]  code: 404 reason: Function <your function name> doesn't exist",
        );

    VerbCmd::new(
        "get",
        "Get the information about a Pulsar Function",
        desc,
        NameBinding::RequiresNameOrFqfn,
        do_get_function,
    )
}

fn do_get_function(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let name = ctx.function_name()?.clone();
    let config = ctx.admin().functions().get_function(&name).map_err(not_found(&name))?;
    let format = ctx.format();
    print_structured(ctx.out(), format, &config)
}
