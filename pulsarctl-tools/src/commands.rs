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

mod functions_commands;
mod namespace_commands;

pub use functions_commands::create_function_cmd;
pub use functions_commands::delete_function_cmd;
pub use functions_commands::functions_group;
pub use functions_commands::get_function_cmd;
pub use functions_commands::list_functions_cmd;
pub use functions_commands::restart_function_cmd;
pub use functions_commands::start_function_cmd;
pub use functions_commands::stop_function_cmd;
pub use namespace_commands::get_topic_auto_creation_cmd;
pub use namespace_commands::list_namespaces_cmd;
pub use namespace_commands::namespaces_group;
pub use namespace_commands::remove_topic_auto_creation_cmd;
pub use namespace_commands::set_topic_auto_creation_cmd;

use crate::cmdutils::CommandRegistry;

/// Build the command tree served by the CLI.
pub fn build_registry() -> CommandRegistry {
    CommandRegistry::new()
        .group(functions_group())
        .group(namespaces_group())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_verb_is_registered_once() {
        let registry = build_registry();
        let mut names: Vec<String> = registry
            .groups()
            .iter()
            .flat_map(|g| g.verbs().iter().map(move |v| format!("{} {}", g.name(), v.name())))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 11);
    }

    #[test]
    fn test_command_tree_is_consistent() {
        build_registry().command(clap::Command::new("pulsarctl")).debug_assert();
    }
}
