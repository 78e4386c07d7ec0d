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

//! Terminal output helpers

use std::io::Write;

use colored::Colorize;

/// Prefix of every error line printed on failure.
pub const ERROR_MARK: &str = "[✖]";

/// Error line as shown to the user: `[✖]  <message>`.
pub fn format_error(message: &str) -> String {
    format!("{}  {}", ERROR_MARK.red().bold(), message)
}

/// Print error message with red cross
pub fn print_error(err: &mut dyn Write, message: &str) {
    let _ = writeln!(err, "{}", format_error(message));
}

/// Print warning message with yellow exclamation
pub fn print_warning(err: &mut dyn Write, message: &str) {
    let _ = writeln!(err, "{} {}", "⚠".yellow().bold(), message);
}
