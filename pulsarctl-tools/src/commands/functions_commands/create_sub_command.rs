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
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use tracing::debug;

use crate::admin::api::FunctionConfig;
use crate::admin::api::FunctionRuntime;
use crate::cli::validators::validate_parallelism;
use crate::cmdutils::CommandDescriptor;
use crate::cmdutils::NameBinding;
use crate::cmdutils::VerbCmd;
use crate::cmdutils::VerbContext;
use crate::commands::functions_commands::FUNCTIONS_PERMISSION;

#[derive(Debug, Clone, Args)]
pub struct CreateFunctionFlags {
    #[arg(
        long = "inputs",
        value_delimiter = ',',
        help = "The input topic or topics (multiple topics can be specified as a comma-separated list) of a Pulsar Function"
    )]
    inputs: Vec<String>,

    #[arg(long = "output-topic", help = "The output topic of a Pulsar Function")]
    output_topic: Option<String>,

    #[arg(long = "classname", help = "The class name of a Pulsar Function")]
    class_name: Option<String>,

    #[arg(
        long = "jar",
        conflicts_with_all = ["py", "go"],
        help = "Path to the JAR file for the function (if the function is written in Java)"
    )]
    jar: Option<String>,

    #[arg(
        long = "py",
        conflicts_with = "go",
        help = "Path to the main Python file/Python Wheel file for the function (if the function is written in Python)"
    )]
    py: Option<String>,

    #[arg(long = "go", help = "Path to the main Go executable binary for the function (if the function is written in Go)")]
    go: Option<String>,

    #[arg(
        long = "parallelism",
        default_value_t = 1,
        help = "The parallelism factor of a Pulsar Function (i.e. the number of function instances to run)"
    )]
    parallelism: u32,
}

impl CreateFunctionFlags {
    fn runtime(&self) -> Option<FunctionRuntime> {
        if self.jar.is_some() {
            Some(FunctionRuntime::Java)
        } else if self.py.is_some() {
            Some(FunctionRuntime::Python)
        } else if self.go.is_some() {
            Some(FunctionRuntime::Go)
        } else {
            None
        }
    }
}

pub fn create_function_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("This command is used for creating a new Pulsar Function in cluster mode.")
        .permission(FUNCTIONS_PERMISSION)
        .example(
            "Create a Pulsar Function in cluster mode with jar file",
            "pulsarctl functions create \
             \n\t--tenant public \
             \n\t--namespace default \
             \n\t--name (the name of Pulsar Function) \
             \n\t--inputs test-input-topic \
             \n\t--output-topic persistent://public/default/test-output-topic \
             \n\t--classname org.apache.pulsar.functions.api.examples.ExclamationFunction \
             \n\t--jar /examples/api-examples.jar",
        )
        .example(
            "Create a Pulsar Function with a package url",
            "pulsarctl functions create \
             \n\t--fqfn public/default/(the name of Pulsar Function) \
             \n\t--inputs test-input-topic \
             \n\t--classname org.apache.pulsar.functions.api.examples.ExclamationFunction \
             \n\t--jar function://public/default/example@v1",
        )
        .output("normal output", "Created <the name of a Pulsar Function> successfully")
        .output(
            "You must specify a name for the Pulsar Functions or a FQFN, please check if the name is provided",
            "[✖]  you must specify a name for the function or a Fully Qualified Function Name (FQFN)",
        );

    VerbCmd::new(
        "create",
        "Create a Pulsar Function in cluster mode",
        desc,
        NameBinding::RequiresNameOrFqfn,
        do_create_function,
    )
    .with_flags(CreateFunctionFlags::augment_args)
}

fn do_create_function(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let flags: CreateFunctionFlags = ctx.flags()?;
    let name = ctx.function_name()?.clone();
    validate_parallelism(flags.parallelism)?;
    let runtime = flags.runtime().ok_or_else(|| {
        CtlError::invalid_argument("you must specify a function package with one of --jar, --py or --go")
    })?;

    let mut config = FunctionConfig::new(&name);
    config.class_name = flags.class_name;
    config.inputs = flags.inputs;
    config.output = flags.output_topic;
    config.parallelism = flags.parallelism;
    config.runtime = Some(runtime);
    config.jar = flags.jar;
    config.py = flags.py;
    config.go = flags.go;

    debug!(function = %name, ?runtime, "creating function");
    ctx.admin().functions().create_function(&config)?;
    writeln!(ctx.out(), "Created {} successfully", name.name())?;
    Ok(())
}
