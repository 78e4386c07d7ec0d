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

//! The command tree
//!
//! Verbs are grouped by the resource they act on. The registry is built once at start
//! up, never mutated afterwards, and handed by reference to whatever dispatches.

use std::io::Write;

use clap::ArgMatches;
use clap::Command;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::admin::PulsarAdmin;
use crate::cli::formatters::OutputFormat;
use crate::cmdutils::verb::IoStreams;
use crate::cmdutils::verb::VerbCmd;

/// Verbs acting on one resource family, e.g. `functions`.
#[derive(Debug)]
pub struct ResourceGroup {
    name: &'static str,
    about: &'static str,
    verbs: Vec<VerbCmd>,
}

impl ResourceGroup {
    #[inline]
    pub fn new(name: &'static str, about: &'static str) -> Self {
        Self {
            name,
            about,
            verbs: Vec::new(),
        }
    }

    #[inline]
    pub fn verb(mut self, verb: VerbCmd) -> Self {
        self.verbs.push(verb);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn about(&self) -> &'static str {
        self.about
    }

    pub fn verbs(&self) -> &[VerbCmd] {
        &self.verbs
    }

    pub fn find(&self, verb: &str) -> Option<&VerbCmd> {
        self.verbs.iter().find(|v| v.name() == verb)
    }

    fn command(&self) -> Command {
        self.verbs.iter().fold(
            Command::new(self.name)
                .about(self.about)
                .subcommand_required(true)
                .arg_required_else_help(true),
            |cmd, verb| cmd.subcommand(verb.command()),
        )
    }
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    groups: Vec<ResourceGroup>,
}

impl CommandRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn group(mut self, group: ResourceGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(&self) -> &[ResourceGroup] {
        &self.groups
    }

    pub fn find(&self, group: &str, verb: &str) -> Option<&VerbCmd> {
        self.groups.iter().find(|g| g.name == group).and_then(|g| g.find(verb))
    }

    /// Attach every group and verb under `root`.
    pub fn command(&self, root: Command) -> Command {
        self.groups.iter().fold(root, |cmd, group| cmd.subcommand(group.command()))
    }

    /// Route matches produced by [`CommandRegistry::command`] to their verb.
    pub fn dispatch(
        &self,
        matches: &ArgMatches,
        admin: &dyn PulsarAdmin,
        streams: IoStreams<'_>,
        format: OutputFormat,
    ) -> CtlResult<()> {
        let (group_name, group_matches) = matches
            .subcommand()
            .ok_or_else(|| CtlError::invalid_argument("no command specified, use --help for usage information"))?;
        let (verb_name, verb_matches) = group_matches
            .subcommand()
            .ok_or_else(|| CtlError::invalid_argument(format!("no verb specified for '{group_name}'")))?;
        let verb = self
            .find(group_name, verb_name)
            .ok_or_else(|| CtlError::invalid_argument(format!("unknown command '{group_name} {verb_name}'")))?;
        verb.execute_matches(verb_matches, admin, streams, format)
    }

    /// Print every registered verb as a table.
    pub fn print_catalog(&self, out: &mut dyn Write) -> CtlResult<()> {
        let rows: Vec<CatalogRow> = self
            .groups
            .iter()
            .flat_map(|group| {
                group.verbs.iter().map(|verb| CatalogRow {
                    category: group.name,
                    command: verb.name(),
                    remark: verb.about(),
                })
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::extended());
        writeln!(out, "{table}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::MemoryPulsarAdmin;
    use crate::cmdutils::descriptor::CommandDescriptor;
    use crate::cmdutils::verb::NameBinding;
    use crate::cmdutils::verb::VerbContext;

    fn do_echo(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
        let name = ctx.name_arg()?.to_string();
        writeln!(ctx.out(), "echo {name}")?;
        Ok(())
    }

    fn registry() -> CommandRegistry {
        CommandRegistry::new().group(
            ResourceGroup::new("things", "Operations about things").verb(VerbCmd::new(
                "echo",
                "Echo a name",
                CommandDescriptor::new("Echo a name"),
                NameBinding::RequiresName { missing: "name is required" },
                do_echo,
            )),
        )
    }

    #[test]
    fn test_dispatch_routes_to_verb() {
        let registry = registry();
        let matches = registry
            .command(Command::new("ctl"))
            .try_get_matches_from(["ctl", "things", "echo", "abc"])
            .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        registry
            .dispatch(
                &matches,
                &MemoryPulsarAdmin::new(),
                IoStreams::new(&mut out, &mut err),
                OutputFormat::Json,
            )
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "echo abc\n");
    }

    #[test]
    fn test_find() {
        let registry = registry();
        assert!(registry.find("things", "echo").is_some());
        assert!(registry.find("things", "nope").is_none());
        assert!(registry.find("nope", "echo").is_none());
    }

    #[test]
    fn test_catalog_lists_every_verb() {
        let mut out = Vec::new();
        registry().print_catalog(&mut out).unwrap();
        let table = String::from_utf8(out).unwrap();
        assert!(table.contains("Category"));
        assert!(table.contains("things"));
        assert!(table.contains("Echo a name"));
    }
}
