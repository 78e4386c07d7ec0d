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

//! Execution harness
//!
//! Runs a single verb exactly as production would, but against a caller supplied admin
//! gateway and with fresh in-memory output buffers per call. Each [`ExecutionResult`]
//! therefore only ever holds what that one invocation wrote.
//!
//! A harness may be shared by many verbs. It holds no state besides the admin gateway,
//! so the only thing carried from one call to the next is what the gateway remembers.

use std::ffi::OsString;

use pulsarctl_error::CtlResult;
use thiserror::Error;

use crate::admin::PulsarAdmin;
use crate::cli::formatters::OutputFormat;
use crate::cmdutils::IoStreams;
use crate::cmdutils::VerbCmd;

/// Failures of the harness itself, as opposed to failures of the verb under test.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("no arguments given, the first argument must be the verb name")]
    EmptyArguments,

    #[error("arguments start with '{found}' but the verb under test is '{expected}'")]
    VerbMismatch { expected: String, found: String },

    #[error("captured {stream} is not valid UTF-8")]
    InvalidUtf8 { stream: &'static str },
}

/// What one verb invocation produced.
#[derive(Debug)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    /// The verb's own outcome.
    pub result: CtlResult<()>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Message of the verb's error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.result.as_ref().err().map(ToString::to_string)
    }
}

pub struct Harness<A> {
    admin: A,
    format: OutputFormat,
}

impl<A: PulsarAdmin> Harness<A> {
    pub fn new(admin: A) -> Self {
        Self {
            admin,
            format: OutputFormat::Json,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn admin(&self) -> &A {
        &self.admin
    }

    /// Invoke `verb` with `args`, whose first element must be the verb name.
    ///
    /// `Err` means the call could not be set up and says nothing about the verb.
    pub fn invoke<S: AsRef<str>>(&self, verb: &VerbCmd, args: &[S]) -> Result<ExecutionResult, HarnessError> {
        let first = args.first().ok_or(HarnessError::EmptyArguments)?.as_ref();
        if first != verb.name() {
            return Err(HarnessError::VerbMismatch {
                expected: verb.name().to_string(),
                found: first.to_string(),
            });
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = verb.execute(
            args.iter().map(|a| OsString::from(a.as_ref())),
            &self.admin,
            IoStreams::new(&mut out, &mut err),
            self.format,
        );

        Ok(ExecutionResult {
            stdout: String::from_utf8(out).map_err(|_| HarnessError::InvalidUtf8 { stream: "stdout" })?,
            stderr: String::from_utf8(err).map_err(|_| HarnessError::InvalidUtf8 { stream: "stderr" })?,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::MemoryPulsarAdmin;
    use crate::commands::list_namespaces_cmd;

    #[test]
    fn test_setup_errors() {
        let harness = Harness::new(MemoryPulsarAdmin::new());
        let verb = list_namespaces_cmd();

        let empty: [&str; 0] = [];
        assert_eq!(harness.invoke(&verb, &empty).unwrap_err(), HarnessError::EmptyArguments);
        assert_eq!(
            harness.invoke(&verb, &["get", "public"]).unwrap_err(),
            HarnessError::VerbMismatch {
                expected: "list".to_string(),
                found: "get".to_string(),
            }
        );
        assert_eq!(harness.admin().remote_calls(), 0);
    }

    #[test]
    fn test_invoke_captures_output() {
        let harness = Harness::new(MemoryPulsarAdmin::new());
        let result = harness.invoke(&list_namespaces_cmd(), &["list", "public"]).unwrap();
        assert!(result.is_success());
        assert_eq!(result.stdout, "public/default\n");
        assert!(result.stderr.is_empty());
        assert_eq!(result.error_message(), None);
    }
}
