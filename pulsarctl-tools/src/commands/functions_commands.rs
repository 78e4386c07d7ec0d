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

mod create_sub_command;
mod delete_sub_command;
mod get_sub_command;
mod list_sub_command;
mod restart_sub_command;
mod start_sub_command;
mod stop_sub_command;

pub use create_sub_command::create_function_cmd;
pub use delete_sub_command::delete_function_cmd;
pub use get_sub_command::get_function_cmd;
pub use list_sub_command::list_functions_cmd;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use pulsarctl_error::ErrorKind;
pub use restart_sub_command::restart_function_cmd;
pub use start_sub_command::start_function_cmd;
pub use stop_sub_command::stop_function_cmd;

use crate::cmdutils::FunctionName;
use crate::cmdutils::ResourceGroup;
use crate::cmdutils::VerbContext;

pub(crate) const FUNCTIONS_PERMISSION: &str =
    "This command requires super-user permissions or the function's tenant admin permissions.";

pub fn functions_group() -> ResourceGroup {
    ResourceGroup::new("functions", "Interface for managing Pulsar Functions")
        .verb(create_function_cmd())
        .verb(get_function_cmd())
        .verb(list_functions_cmd())
        .verb(delete_function_cmd())
        .verb(start_function_cmd())
        .verb(stop_function_cmd())
        .verb(restart_function_cmd())
}

/// Name the function in a not-found error unless the admin service already did.
pub(crate) fn not_found(name: &FunctionName) -> impl FnOnce(CtlError) -> CtlError + '_ {
    move |err| {
        let prefix = format!("Function {} doesn't exist", name.name());
        if err.kind() == ErrorKind::RemoteNotFound && !err.to_string().contains(&prefix) {
            err.with_prefix(prefix)
        } else {
            err
        }
    }
}

/// The lifecycle verbs only differ in the admin call and the past tense they print.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Lifecycle {
    Start,
    Stop,
    Restart,
}

impl Lifecycle {
    fn done(self) -> &'static str {
        match self {
            Lifecycle::Start => "Started",
            Lifecycle::Stop => "Stopped",
            Lifecycle::Restart => "Restarted",
        }
    }

    pub(crate) fn run(self, ctx: &mut VerbContext<'_>) -> CtlResult<()> {
        let name = ctx.function_name()?.clone();
        let instance_id = ctx.instance_id();
        let functions = ctx.admin().functions();
        match self {
            Lifecycle::Start => functions.start_function(&name, instance_id),
            Lifecycle::Stop => functions.stop_function(&name, instance_id),
            Lifecycle::Restart => functions.restart_function(&name, instance_id),
        }
        .map_err(not_found(&name))?;

        match instance_id {
            Some(id) => writeln!(
                ctx.out(),
                "{} instance {id} of function {name} successfully",
                self.done()
            )?,
            None => writeln!(ctx.out(), "{} {name} successfully", self.done())?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_prefix_is_added_once() {
        let name = FunctionName::parse_fqfn("public/default/f1").unwrap();

        let err = not_found(&name)(CtlError::gateway(404, "Function f1 doesn't exist"));
        assert_eq!(err.to_string(), "code: 404 reason: Function f1 doesn't exist");

        let err = not_found(&name)(CtlError::gateway(404, "Not Found"));
        assert_eq!(err.to_string(), "Function f1 doesn't exist: code: 404 reason: Not Found");
        assert_eq!(err.kind(), ErrorKind::RemoteNotFound);

        let err = not_found(&name)(CtlError::gateway(400, "Operation not permitted"));
        assert_eq!(err.to_string(), "code: 400 reason: Operation not permitted");
    }
}
