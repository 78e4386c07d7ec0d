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

//! Structured output formatters
//!
//! `get`-style verbs emit their value as JSON (the default) or YAML.

mod json_formatter;
mod yaml_formatter;

pub use json_formatter::JsonFormatter;
use pulsarctl_error::CtlResult;
use serde::Serialize;
pub use yaml_formatter::YamlFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Formatter trait for output formatting
pub trait Formatter {
    /// Format data to string
    fn format<T: Serialize>(&self, data: &T) -> CtlResult<String>;
}

/// Formatter enum that holds concrete implementations
pub enum FormatterType {
    Json(JsonFormatter),
    Yaml(YamlFormatter),
}

impl FormatterType {
    pub fn format<T: Serialize>(&self, data: &T) -> CtlResult<String> {
        match self {
            Self::Json(f) => f.format(data),
            Self::Yaml(f) => f.format(data),
        }
    }
}

impl From<OutputFormat> for FormatterType {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json(JsonFormatter),
            OutputFormat::Yaml => Self::Yaml(YamlFormatter),
        }
    }
}

/// Get formatter by format type
pub fn get_formatter(format: OutputFormat) -> FormatterType {
    FormatterType::from(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from("YAML"), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("whatever"), OutputFormat::Json);
    }
}
