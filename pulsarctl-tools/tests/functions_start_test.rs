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

use pulsarctl_error::ErrorKind;
use pulsarctl_tools::admin::MemoryPulsarAdmin;
use pulsarctl_tools::cmdutils::resource::MISSING_FUNCTION_NAME;
use pulsarctl_tools::cmdutils::FunctionName;
use pulsarctl_tools::commands::create_function_cmd;
use pulsarctl_tools::commands::start_function_cmd;
use pulsarctl_tools::commands::stop_function_cmd;
use pulsarctl_tools::testing::ExecutionResult;
use pulsarctl_tools::testing::Harness;

const JAR: &str = "/pulsar/examples/api-examples.jar";

fn create(harness: &Harness<MemoryPulsarAdmin>, name: &str) {
    let args = [
        "create",
        "--tenant",
        "public",
        "--namespace",
        "default",
        "--name",
        name,
        "--inputs",
        "test-input-topic",
        "--output-topic",
        "persistent://public/default/test-output-topic",
        "--classname",
        "org.apache.pulsar.functions.api.examples.ExclamationFunction",
        "--jar",
        JAR,
    ];
    let result = harness.invoke(&create_function_cmd(), &args).unwrap();
    result.result.unwrap();
    assert_eq!(result.stdout, format!("Created {name} successfully\n"));
}

fn must_succeed(result: ExecutionResult) -> String {
    if let Err(e) = result.result {
        panic!("verb failed: {e}");
    }
    result.stdout
}

#[test]
fn start_function() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    create(&harness, "start-f");
    let name = FunctionName::parse_fqfn("public/default/start-f").unwrap();

    let stop_args = ["stop", "--tenant", "public", "--namespace", "default", "--name", "start-f"];
    let out = must_succeed(harness.invoke(&stop_function_cmd(), &stop_args).unwrap());
    assert_eq!(out, "Stopped public/default/start-f successfully\n");
    assert_eq!(harness.admin().running_instances(&name), Some(vec![false]));

    let start_args = ["start", "--tenant", "public", "--namespace", "default", "--name", "start-f"];
    let out = must_succeed(harness.invoke(&start_function_cmd(), &start_args).unwrap());
    assert_eq!(out, "Started public/default/start-f successfully\n");
    assert_eq!(harness.admin().running_instances(&name), Some(vec![true]));
}

#[test]
fn start_function_with_fqfn() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    create(&harness, "start-fqfn");
    let name = FunctionName::parse_fqfn("public/default/start-fqfn").unwrap();

    must_succeed(
        harness
            .invoke(&stop_function_cmd(), &["stop", "--fqfn", "public/default/start-fqfn"])
            .unwrap(),
    );
    assert_eq!(harness.admin().running_instances(&name), Some(vec![false]));

    must_succeed(
        harness
            .invoke(&start_function_cmd(), &["start", "--fqfn", "public/default/start-fqfn"])
            .unwrap(),
    );
    assert_eq!(harness.admin().running_instances(&name), Some(vec![true]));

    // positional form
    must_succeed(
        harness
            .invoke(&stop_function_cmd(), &["stop", "public/default/start-fqfn"])
            .unwrap(),
    );
    assert_eq!(harness.admin().running_instances(&name), Some(vec![false]));
}

#[test]
fn start_single_instance() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    let create_args = [
        "create",
        "--fqfn",
        "public/default/multi",
        "--jar",
        JAR,
        "--parallelism",
        "3",
    ];
    must_succeed(harness.invoke(&create_function_cmd(), &create_args).unwrap());
    let name = FunctionName::parse_fqfn("public/default/multi").unwrap();

    must_succeed(harness.invoke(&stop_function_cmd(), &["stop", "--name", "multi"]).unwrap());
    let out = must_succeed(
        harness
            .invoke(&start_function_cmd(), &["start", "--name", "multi", "--instance-id", "1"])
            .unwrap(),
    );
    assert_eq!(out, "Started instance 1 of function public/default/multi successfully\n");
    assert_eq!(harness.admin().running_instances(&name), Some(vec![false, true, false]));
}

#[test]
fn failed_to_start_function() {
    let harness = Harness::new(MemoryPulsarAdmin::new());

    let result = harness.invoke(&start_function_cmd(), &["start", "--name", "not-exist"]).unwrap();
    let err = result.result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteNotFound);
    assert!(err.to_string().contains("Function not-exist doesn't exist"));

    // neither --name nor an FQFN
    let calls = harness.admin().remote_calls();
    let result = harness
        .invoke(&start_function_cmd(), &["start", "--tenant", "public", "--namespace", "default"])
        .unwrap();
    let err = result.result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingIdentifier);
    assert!(err.to_string().contains(MISSING_FUNCTION_NAME));
    assert_eq!(harness.admin().remote_calls(), calls);

    // an instance id the function does not have
    create(&harness, "test-functions-start-fqfn");
    let args = [
        "start",
        "--tenant",
        "public",
        "--namespace",
        "default",
        "--name",
        "test-functions-start-fqfn",
        "--instance-id",
        "12345678",
    ];
    let result = harness.invoke(&start_function_cmd(), &args).unwrap();
    let err = result.result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteRejected);
    assert!(err.to_string().contains("Operation not permitted"));
}

#[test]
fn stop_missing_function() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    let result = harness
        .invoke(&stop_function_cmd(), &["stop", "--fqfn", "public/default/not-exist"])
        .unwrap();
    assert!(result
        .error_message()
        .unwrap()
        .contains("Function not-exist doesn't exist"));
    assert!(result.stdout.is_empty());
}

#[test]
fn ambiguous_identifier_is_rejected_before_any_call() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    create(&harness, "f1");
    let calls = harness.admin().remote_calls();

    for args in [
        vec!["start", "--fqfn", "public/default/f1", "--name", "f1"],
        vec!["start", "public/default/f1", "--tenant", "public"],
        vec!["start", "public/default/f1", "--fqfn", "public/default/f1"],
        vec!["start", "--fqfn", "public/default"],
        vec!["start", "--name", "f1", "--instance-id", "-1"],
    ] {
        let result = harness.invoke(&start_function_cmd(), &args).unwrap();
        let err = result.result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{args:?}");
    }
    assert_eq!(harness.admin().remote_calls(), calls);
}
