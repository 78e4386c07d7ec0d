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

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind as ClapErrorKind;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use pulsarctl_common::log::init_logger;
use pulsarctl_common::log::init_logger_with_level;
use pulsarctl_common::log::Level;
use pulsarctl_common::ClusterConfig;
use pulsarctl_common::ConfigOverrides;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;

use crate::cli::formatters::OutputFormat;
use crate::cmdutils::CommandRegistry;
use crate::cmdutils::IoStreams;
use crate::commands::build_registry;
use crate::core::admin::AdminBuilder;
use crate::ui::output::print_error;
use crate::ui::output::print_warning;

pub const BIN_NAME: &str = "pulsarctl-rust";

const SHOW: &str = "show";

#[derive(Debug, Parser)]
#[command(name = BIN_NAME)]
#[command(about = "A command line tool for managing Apache Pulsar clusters", long_about = None, version)]
pub struct PulsarCtlCli {
    #[arg(
        long = "admin-service-url",
        global = true,
        value_name = "URL",
        help = "The admin web service url that pulsarctl connects to, eg: http://localhost:8080"
    )]
    admin_service_url: Option<String>,

    #[arg(long = "token", global = true, help = "Using the token to authentication")]
    token: Option<String>,

    #[arg(
        long = "tls-allow-insecure",
        global = true,
        help = "Allow TLS insecure connection"
    )]
    tls_allow_insecure: bool,

    #[arg(long = "config", global = true, value_name = "FILE", help = "Path of the configuration file")]
    config: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format of structured results"
    )]
    output: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,

    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,
}

impl PulsarCtlCli {
    /// The full command tree: global flags, every registered verb and `show`.
    pub fn command_tree(registry: &CommandRegistry) -> Command {
        registry
            .command(Self::command())
            .subcommand(Command::new(SHOW).about("Print every available command as a table"))
    }

    /// Parse `args`, run the selected verb and return the process exit code.
    pub fn run<I, T>(args: I, mut streams: IoStreams<'_>) -> u8
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let registry = build_registry();
        let matches = match Self::command_tree(&registry).try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => return Self::report_parse_error(e, streams),
        };
        let cli = match Self::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(e) => return Self::report_parse_error(e, streams),
        };
        match cli.handle(&registry, &matches, streams.reborrow()) {
            Ok(()) => 0,
            Err(e) => {
                print_error(streams.err, &e.to_string());
                1
            }
        }
    }

    fn report_parse_error(e: clap::Error, streams: IoStreams<'_>) -> u8 {
        let target = match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => streams.out,
            _ => streams.err,
        };
        let _ = write!(target, "{}", e.render());
        u8::try_from(e.exit_code()).unwrap_or(1)
    }

    pub fn handle(&self, registry: &CommandRegistry, matches: &ArgMatches, streams: IoStreams<'_>) -> CtlResult<()> {
        if self.verbose == 0 {
            init_logger();
        } else {
            init_logger_with_level(Level::from_verbosity(self.verbose));
        }

        // Handle completion generation
        if let Some(shell) = &self.completion {
            return Self::generate_completion(shell, registry, streams);
        }

        match matches.subcommand_name() {
            Some(SHOW) => registry.print_catalog(streams.out),
            Some(_) => {
                let config = ClusterConfig::load(&self.overrides())?;
                if config.tls_allow_insecure {
                    print_warning(streams.err, "TLS certificate verification is disabled");
                }
                let admin = AdminBuilder::from_config(&config).build()?;
                registry.dispatch(matches, &admin, streams, self.output)
            }
            None => Err(CtlError::invalid_argument(
                "No command specified. Use --help for usage information.",
            )),
        }
    }

    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            web_service_url: self.admin_service_url.clone(),
            auth_token: self.token.clone(),
            tls_allow_insecure: self.tls_allow_insecure.then_some(true),
        }
    }

    fn generate_completion(shell: &str, registry: &CommandRegistry, streams: IoStreams<'_>) -> CtlResult<()> {
        let mut cmd = Self::command_tree(registry);
        match shell.to_lowercase().as_str() {
            "bash" => generate(Bash, &mut cmd, BIN_NAME, streams.out),
            "zsh" => generate(Zsh, &mut cmd, BIN_NAME, streams.out),
            "fish" => generate(Fish, &mut cmd, BIN_NAME, streams.out),
            _ => {
                return Err(CtlError::invalid_argument(format!(
                    "Unsupported shell: {shell}, supported shells: bash, zsh, fish"
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = PulsarCtlCli::run(args.iter().copied(), IoStreams::new(&mut out, &mut err));
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_command_tree_is_consistent() {
        PulsarCtlCli::command_tree(&build_registry()).debug_assert();
    }

    #[test]
    fn test_verb_help_shows_descriptor() {
        for verb in [
            ["functions", "start"],
            ["functions", "create"],
            ["namespaces", "set-topic-auto-creation"],
        ] {
            let (code, out, _) = run(&[BIN_NAME, verb[0], verb[1], "--help"]);
            assert_eq!(code, 0);
            assert!(out.contains("USED FOR:"), "{}: {out}", verb[1]);
            assert!(out.contains("REQUIRED PERMISSION:"), "{}: {out}", verb[1]);
        }

        let (_, out, _) = run(&[BIN_NAME, "functions", "--help"]);
        assert!(!out.contains("Identifier flags"));
        assert!(out.contains("start"));
    }

    #[test]
    fn test_output_format_after_verb() {
        let registry = build_registry();
        let matches = PulsarCtlCli::command_tree(&registry)
            .try_get_matches_from([BIN_NAME, "namespaces", "get-topic-auto-creation", "public/default", "-o", "yaml"])
            .unwrap();
        let cli = PulsarCtlCli::from_arg_matches(&matches).unwrap();
        assert_eq!(cli.output, OutputFormat::Yaml);

        let matches = PulsarCtlCli::command_tree(&registry)
            .try_get_matches_from([BIN_NAME, "namespaces", "list", "public"])
            .unwrap();
        let cli = PulsarCtlCli::from_arg_matches(&matches).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_create_output_topic_does_not_clash_with_output_format() {
        let registry = build_registry();
        let matches = PulsarCtlCli::command_tree(&registry)
            .try_get_matches_from([
                BIN_NAME,
                "functions",
                "create",
                "--name",
                "f1",
                "--output-topic",
                "persistent://public/default/out",
                "-o",
                "yaml",
            ])
            .unwrap();
        let cli = PulsarCtlCli::from_arg_matches(&matches).unwrap();
        assert_eq!(cli.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_show_prints_catalog() {
        let (code, out, _) = run(&[BIN_NAME, "show"]);
        assert_eq!(code, 0);
        assert!(out.contains("functions"));
        assert!(out.contains("get-topic-auto-creation"));
    }

    #[test]
    fn test_completion() {
        let (code, out, _) = run(&[BIN_NAME, "--generate-completion", "bash"]);
        assert_eq!(code, 0);
        assert!(out.contains(BIN_NAME));

        let (code, _, err) = run(&[BIN_NAME, "--generate-completion", "powershell"]);
        assert_eq!(code, 1);
        assert!(err.contains("Unsupported shell"));
    }

    #[test]
    fn test_binding_error_exits_non_zero() {
        let (code, out, err) = run(&[BIN_NAME, "functions", "start", "--tenant", "public"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.contains("you must specify a name for the function or a Fully Qualified Function Name (FQFN)"));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let (code, _, err) = run(&[BIN_NAME, "--admin-service-url", "ftp://nowhere", "namespaces", "list", "public"]);
        assert_eq!(code, 1);
        assert!(err.contains("ftp://nowhere"));
    }

    #[test]
    fn test_unknown_command() {
        let (code, _, err) = run(&[BIN_NAME, "topics", "list"]);
        assert_ne!(code, 0);
        assert!(!err.is_empty());
    }
}
