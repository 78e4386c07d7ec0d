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

//! Static documentation of a verb
//!
//! A [`CommandDescriptor`] only feeds help text. Nothing in dispatch or validation
//! reads it.

use std::fmt::Write;

/// One documented invocation of a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub desc: String,
    pub command: String,
}

/// One documented outcome of a verb, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub desc: String,
    pub out: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDescriptor {
    used_for: String,
    permission: String,
    examples: Vec<Example>,
    outputs: Vec<Output>,
}

impl CommandDescriptor {
    #[inline]
    pub fn new(used_for: impl Into<String>) -> Self {
        Self {
            used_for: used_for.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = permission.into();
        self
    }

    #[inline]
    pub fn example(mut self, desc: impl Into<String>, command: impl Into<String>) -> Self {
        self.examples.push(Example {
            desc: desc.into(),
            command: command.into(),
        });
        self
    }

    #[inline]
    pub fn output(mut self, desc: impl Into<String>, out: impl Into<String>) -> Self {
        self.outputs.push(Output {
            desc: desc.into(),
            out: out.into(),
        });
        self
    }

    pub fn used_for(&self) -> &str {
        &self.used_for
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Full help text: purpose, permission, examples and documented outputs.
    pub fn render(&self) -> String {
        let mut text = String::new();
        push_section(&mut text, "USED FOR:", &self.used_for);
        if !self.permission.is_empty() {
            push_section(&mut text, "REQUIRED PERMISSION:", &self.permission);
        }
        if !self.examples.is_empty() {
            text.push_str("EXAMPLES:\n");
            text.push_str(&self.render_examples());
            text.push('\n');
        }
        if !self.outputs.is_empty() {
            text.push_str("OUTPUT:\n");
            for output in &self.outputs {
                push_entry(&mut text, &output.desc, &output.out);
            }
            text.push('\n');
        }
        text.trim_end().to_string()
    }

    /// Example invocations only.
    pub fn render_examples(&self) -> String {
        let mut text = String::new();
        for example in &self.examples {
            push_entry(&mut text, &example.desc, &example.command);
        }
        text
    }
}

fn push_section(text: &mut String, header: &str, body: &str) {
    let _ = writeln!(text, "{header}");
    for line in body.lines() {
        let _ = writeln!(text, "    {line}");
    }
    text.push('\n');
}

fn push_entry(text: &mut String, desc: &str, body: &str) {
    let _ = writeln!(text, "    #{desc}");
    for line in body.lines() {
        let _ = writeln!(text, "    {line}");
    }
    text.push('\n');
}
