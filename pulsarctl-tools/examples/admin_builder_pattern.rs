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

//! Example: building an admin client and running verbs without the CLI
//!
//! Expects an admin service at `http://localhost:8080`, override with the first argument.

use std::io;

use pulsarctl_error::CtlResult;
use pulsarctl_tools::admin::PulsarAdmin;
use pulsarctl_tools::cli::formatters::OutputFormat;
use pulsarctl_tools::cmdutils::IoStreams;
use pulsarctl_tools::cmdutils::NamespaceName;
use pulsarctl_tools::commands::get_topic_auto_creation_cmd;
use pulsarctl_tools::core::admin::AdminBuilder;

fn main() -> CtlResult<()> {
    let url = std::env::args().nth(1).unwrap_or_else(|| "http://localhost:8080".to_string());

    let admin = AdminBuilder::new().web_service_url(url).timeout_millis(5000).build()?;

    // Call the gateway directly
    let namespaces = admin.namespaces().get_namespaces("public")?;
    println!("namespaces of public: {namespaces:?}");

    let namespace = NamespaceName::parse("public/default")?;
    let config = admin.namespaces().get_topic_auto_creation(&namespace)?;
    println!("configured: {}", config.is_configured());

    // Or run a verb the way the CLI does
    let verb = get_topic_auto_creation_cmd();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    verb.execute(
        ["get-topic-auto-creation", "public/default"],
        &admin,
        IoStreams::new(&mut stdout, &mut stderr),
        OutputFormat::Json,
    )
}
