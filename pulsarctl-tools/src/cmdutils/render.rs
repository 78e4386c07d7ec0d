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

//! Rendering shared by read-style verbs

use std::io::Write;

use pulsarctl_error::CtlResult;
use serde::Serialize;

use crate::cli::formatters::get_formatter;
use crate::cli::formatters::OutputFormat;

/// Print `value` in the selected format.
pub fn print_structured<T: Serialize>(out: &mut dyn Write, format: OutputFormat, value: &T) -> CtlResult<()> {
    let text = get_formatter(format).format(value)?;
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}

/// Print `note` when the remote object carries nothing, the value itself otherwise.
///
/// Gateway errors are expected to be propagated by the caller before this is reached.
pub fn print_or_note<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    value: &T,
    is_set: bool,
    note: &str,
) -> CtlResult<()> {
    if is_set {
        print_structured(out, format, value)
    } else {
        writeln!(out, "{note}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_when_unset() {
        let mut out = Vec::new();
        print_or_note(&mut out, OutputFormat::Json, &serde_json::json!({}), false, "nothing here").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "nothing here\n");
    }

    #[test]
    fn test_value_when_set() {
        let mut out = Vec::new();
        let value = serde_json::json!({"allowAutoTopicCreation": true});
        print_or_note(&mut out, OutputFormat::Json, &value, true, "nothing here").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"allowAutoTopicCreation\": true\n}\n"
        );

        let mut out = Vec::new();
        print_or_note(&mut out, OutputFormat::Yaml, &value, true, "nothing here").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "allowAutoTopicCreation: true\n");
    }
}
