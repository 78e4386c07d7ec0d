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

//! Verb commands
//!
//! A verb is one CLI subcommand bound to one admin call. Every verb follows the same
//! sequence: parse the raw tokens, bind the identifier the verb operates on, then run.
//! A binding failure returns before the run function is reached, so no admin call is
//! ever made for an invocation with a bad identifier.

use std::fmt;
use std::io::Write;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Args;
use clap::Command;
use clap::FromArgMatches;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use tracing::debug;

use crate::admin::PulsarAdmin;
use crate::cli::formatters::OutputFormat;
use crate::cli::validators::validate_instance_id;
use crate::cmdutils::descriptor::CommandDescriptor;
use crate::cmdutils::resource::FunctionName;
use crate::cmdutils::resource::FunctionNameArgs;
use crate::cmdutils::resource::NamespaceName;

const NAME_ARG: &str = "name-arg";
const INSTANCE_ID: &str = "instance-id";

/// Output and error streams a verb writes to.
///
/// Production passes the process streams, the harness passes in-memory buffers.
pub struct IoStreams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> IoStreams<'a> {
    #[inline]
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    /// Borrow the same streams for a shorter call.
    pub fn reborrow(&mut self) -> IoStreams<'_> {
        IoStreams {
            out: &mut *self.out,
            err: &mut *self.err,
        }
    }
}

/// How a verb obtains the identifier it operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameBinding {
    /// No identifier, the verb reads everything from its own flags.
    None,
    /// Exactly one positional name. `missing` is reported when it is absent or repeated.
    RequiresName { missing: &'static str },
    /// Exactly one positional `tenant/namespace`.
    RequiresNamespace { missing: &'static str },
    /// A positional or `--fqfn` FQFN, or the `--tenant/--namespace/--name` flags.
    RequiresNameOrFqfn,
    /// Same as [`NameBinding::RequiresNameOrFqfn`] plus an optional `--instance-id`.
    RequiresNameOrFqfnWithInstance,
}

impl NameBinding {
    fn augment(self, cmd: Command) -> Command {
        match self {
            NameBinding::None => cmd,
            NameBinding::RequiresName { .. } | NameBinding::RequiresNamespace { .. } => cmd.arg(
                Arg::new(NAME_ARG)
                    .value_name("NAME")
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .required(false),
            ),
            NameBinding::RequiresNameOrFqfn => FunctionNameArgs::augment_args(cmd),
            NameBinding::RequiresNameOrFqfnWithInstance => FunctionNameArgs::augment_args(cmd).arg(
                Arg::new(INSTANCE_ID)
                    .long(INSTANCE_ID)
                    .value_name("ID")
                    .help("The instance id of the function, all instances when omitted"),
            ),
        }
    }

    fn bind(self, matches: &ArgMatches) -> CtlResult<Target> {
        match self {
            NameBinding::None => Ok(Target::None),
            NameBinding::RequiresName { missing } => single_name_arg(matches, missing).map(Target::Name),
            NameBinding::RequiresNamespace { missing } => {
                let value = single_name_arg(matches, missing)?;
                NamespaceName::parse(&value).map(Target::Namespace)
            }
            NameBinding::RequiresNameOrFqfn => Ok(Target::Function {
                name: function_name_args(matches)?.resolve()?,
                instance_id: None,
            }),
            NameBinding::RequiresNameOrFqfnWithInstance => {
                let name = function_name_args(matches)?.resolve()?;
                let instance_id = match matches.get_one::<String>(INSTANCE_ID) {
                    Some(id) => {
                        validate_instance_id(id)?;
                        id.trim().parse::<u32>().ok()
                    }
                    None => None,
                };
                Ok(Target::Function { name, instance_id })
            }
        }
    }
}

fn single_name_arg(matches: &ArgMatches, missing: &'static str) -> CtlResult<String> {
    let values: Vec<&String> = matches.get_many::<String>(NAME_ARG).into_iter().flatten().collect();
    match values.as_slice() {
        [] => Err(CtlError::missing_identifier(missing)),
        [value] if value.trim().is_empty() => Err(CtlError::missing_identifier(missing)),
        [value] => Ok(value.to_string()),
        _ => Err(CtlError::invalid_argument(missing)),
    }
}

fn function_name_args(matches: &ArgMatches) -> CtlResult<FunctionNameArgs> {
    FunctionNameArgs::from_arg_matches(matches).map_err(|e| CtlError::invalid_argument(e.to_string()))
}

/// The identifier a verb was bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    None,
    Name(String),
    Namespace(NamespaceName),
    Function {
        name: FunctionName,
        instance_id: Option<u32>,
    },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::None => write!(f, "<none>"),
            Target::Name(name) => write!(f, "{name}"),
            Target::Namespace(ns) => write!(f, "{ns}"),
            Target::Function {
                name,
                instance_id: Some(id),
            } => write!(f, "{name}#{id}"),
            Target::Function { name, instance_id: None } => write!(f, "{name}"),
        }
    }
}

/// Everything a run function may touch.
pub struct VerbContext<'a> {
    target: Target,
    matches: &'a ArgMatches,
    admin: &'a dyn PulsarAdmin,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    format: OutputFormat,
}

impl<'a> VerbContext<'a> {
    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn function_name(&self) -> CtlResult<&FunctionName> {
        match &self.target {
            Target::Function { name, .. } => Ok(name),
            other => Err(CtlError::internal(format!("verb is not bound to a function: {other}"))),
        }
    }

    pub fn instance_id(&self) -> Option<u32> {
        match &self.target {
            Target::Function { instance_id, .. } => *instance_id,
            _ => None,
        }
    }

    pub fn namespace_name(&self) -> CtlResult<&NamespaceName> {
        match &self.target {
            Target::Namespace(ns) => Ok(ns),
            other => Err(CtlError::internal(format!("verb is not bound to a namespace: {other}"))),
        }
    }

    pub fn name_arg(&self) -> CtlResult<&str> {
        match &self.target {
            Target::Name(name) => Ok(name),
            other => Err(CtlError::internal(format!("verb is not bound to a name: {other}"))),
        }
    }

    /// Extract the verb's own flags.
    pub fn flags<T: FromArgMatches>(&self) -> CtlResult<T> {
        T::from_arg_matches(self.matches).map_err(|e| CtlError::invalid_argument(e.to_string()))
    }

    pub fn admin(&self) -> &'a dyn PulsarAdmin {
        self.admin
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }
}

pub type RunFn = fn(&mut VerbContext<'_>) -> CtlResult<()>;

/// A single CLI verb.
pub struct VerbCmd {
    name: &'static str,
    about: &'static str,
    descriptor: CommandDescriptor,
    binding: NameBinding,
    flags: fn(Command) -> Command,
    run: RunFn,
}

impl VerbCmd {
    pub fn new(
        name: &'static str,
        about: &'static str,
        descriptor: CommandDescriptor,
        binding: NameBinding,
        run: RunFn,
    ) -> Self {
        Self {
            name,
            about,
            descriptor,
            binding,
            flags: |cmd| cmd,
            run,
        }
    }

    /// Attach the verb's own flags, usually `<T as clap::Args>::augment_args`.
    pub fn with_flags(mut self, flags: fn(Command) -> Command) -> Self {
        self.flags = flags;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn about(&self) -> &'static str {
        self.about
    }

    pub fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    pub fn binding(&self) -> NameBinding {
        self.binding
    }

    pub fn command(&self) -> Command {
        // Derived `Args` overwrite about/long_about with their own doc comments.
        (self.flags)(self.binding.augment(Command::new(self.name)))
            .about(self.about)
            .long_about(self.descriptor.render())
    }

    /// Run the verb from raw tokens. The first token is the verb name.
    pub fn execute<I, T>(
        &self,
        args: I,
        admin: &dyn PulsarAdmin,
        streams: IoStreams<'_>,
        format: OutputFormat,
    ) -> CtlResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = match self.command().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
                write!(streams.out, "{}", e.render())?;
                return Ok(());
            }
            Err(e) => return Err(CtlError::invalid_argument(e.render().to_string().trim_end())),
        };
        self.execute_matches(&matches, admin, streams, format)
    }

    /// Bind then run against already parsed matches.
    pub fn execute_matches(
        &self,
        matches: &ArgMatches,
        admin: &dyn PulsarAdmin,
        streams: IoStreams<'_>,
        format: OutputFormat,
    ) -> CtlResult<()> {
        debug!(verb = self.name, binding = ?self.binding, "binding arguments");
        let target = self.binding.bind(matches)?;
        debug!(verb = self.name, target = %target, "arguments bound");
        let mut ctx = VerbContext {
            target,
            matches,
            admin,
            out: &mut *streams.out,
            err: &mut *streams.err,
            format,
        };
        (self.run)(&mut ctx)
    }
}

impl fmt::Debug for VerbCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerbCmd")
            .field("name", &self.name)
            .field("binding", &self.binding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::ErrorKind;

    use super::*;
    use crate::admin::pulsar_admin::MockFunctionsAdmin;
    use crate::admin::pulsar_admin::MockNamespacesAdmin;
    use crate::admin::FunctionsAdmin;
    use crate::admin::NamespacesAdmin;
    use crate::cmdutils::resource::MISSING_FUNCTION_NAME;

    struct MockAdmin {
        functions: MockFunctionsAdmin,
        namespaces: MockNamespacesAdmin,
    }

    impl PulsarAdmin for MockAdmin {
        fn functions(&self) -> &dyn FunctionsAdmin {
            &self.functions
        }

        fn namespaces(&self) -> &dyn NamespacesAdmin {
            &self.namespaces
        }
    }

    fn do_start(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
        let name = ctx.function_name()?.clone();
        let instance_id = ctx.instance_id();
        ctx.admin().functions().start_function(&name, instance_id)?;
        writeln!(ctx.out(), "Started {name} successfully")?;
        Ok(())
    }

    fn start_verb() -> VerbCmd {
        VerbCmd::new(
            "start",
            "Start function instances",
            CommandDescriptor::new("Start a function"),
            NameBinding::RequiresNameOrFqfnWithInstance,
            do_start,
        )
    }

    fn run(verb: &VerbCmd, admin: &MockAdmin, args: &[&str]) -> (String, CtlResult<()>) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = verb.execute(
            args.iter().copied(),
            admin,
            IoStreams::new(&mut out, &mut err),
            OutputFormat::Json,
        );
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn test_binding_failure_never_calls_gateway() {
        let mut functions = MockFunctionsAdmin::new();
        functions.expect_start_function().never();
        let admin = MockAdmin {
            functions,
            namespaces: MockNamespacesAdmin::new(),
        };

        let (_, result) = run(&start_verb(), &admin, &["start"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingIdentifier);
        assert!(err.to_string().contains(MISSING_FUNCTION_NAME));

        let (_, result) = run(&start_verb(), &admin, &["start", "--instance-id", "abc", "--name", "f1"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_bound_identifier_reaches_gateway() {
        let mut functions = MockFunctionsAdmin::new();
        functions
            .expect_start_function()
            .withf(|name, instance| name.to_string() == "public/default/f1" && *instance == Some(2))
            .times(1)
            .returning(|_, _| Ok(()));
        let admin = MockAdmin {
            functions,
            namespaces: MockNamespacesAdmin::new(),
        };

        let (out, result) = run(&start_verb(), &admin, &["start", "--name", "f1", "--instance-id", "2"]);
        result.unwrap();
        assert_eq!(out, "Started public/default/f1 successfully\n");
    }

    #[test]
    fn test_unknown_flag_is_invalid_argument() {
        let admin = MockAdmin {
            functions: MockFunctionsAdmin::new(),
            namespaces: MockNamespacesAdmin::new(),
        };
        let (_, result) = run(&start_verb(), &admin, &["start", "--bogus"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_help_is_written_to_output() {
        let admin = MockAdmin {
            functions: MockFunctionsAdmin::new(),
            namespaces: MockNamespacesAdmin::new(),
        };
        let (out, result) = run(&start_verb(), &admin, &["start", "--help"]);
        result.unwrap();
        assert!(out.contains("USED FOR:"));
        assert!(out.contains("--instance-id"));
    }

    #[test]
    fn test_single_name_binding() {
        const MISSING: &str = "the tenant name is not specified or the tenant name is specified more than one";
        fn do_nothing(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
            let name = ctx.name_arg()?.to_string();
            writeln!(ctx.out(), "{name}")?;
            Ok(())
        }
        let verb = VerbCmd::new(
            "list",
            "List",
            CommandDescriptor::new("List"),
            NameBinding::RequiresName { missing: MISSING },
            do_nothing,
        );
        let admin = MockAdmin {
            functions: MockFunctionsAdmin::new(),
            namespaces: MockNamespacesAdmin::new(),
        };

        let (out, result) = run(&verb, &admin, &["list", "public"]);
        result.unwrap();
        assert_eq!(out, "public\n");

        let (_, result) = run(&verb, &admin, &["list"]);
        assert_eq!(result.unwrap_err().to_string(), MISSING);

        let (_, result) = run(&verb, &admin, &["list", "a", "b"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    }
}
