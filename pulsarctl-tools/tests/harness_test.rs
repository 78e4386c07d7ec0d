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

use pulsarctl_tools::admin::MemoryPulsarAdmin;
use pulsarctl_tools::commands::create_function_cmd;
use pulsarctl_tools::commands::delete_function_cmd;
use pulsarctl_tools::commands::get_function_cmd;
use pulsarctl_tools::commands::list_functions_cmd;
use pulsarctl_tools::commands::restart_function_cmd;
use pulsarctl_tools::testing::Harness;

#[test]
fn output_does_not_leak_between_invocations() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    let create = create_function_cmd();

    let first = harness
        .invoke(&create, &["create", "--name", "first", "--jar", "a.jar"])
        .unwrap();
    let second = harness
        .invoke(&create, &["create", "--name", "second", "--py", "b.py"])
        .unwrap();

    assert_eq!(first.stdout, "Created first successfully\n");
    assert_eq!(second.stdout, "Created second successfully\n");
    assert!(!second.stdout.contains("first"));

    let failed = harness
        .invoke(&create, &["create", "--name", "first", "--jar", "a.jar"])
        .unwrap();
    assert!(failed.stdout.is_empty());
    assert!(failed.error_message().unwrap().contains("already exists"));
}

#[test]
fn function_lifecycle() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    harness
        .invoke(
            &create_function_cmd(),
            &[
                "create",
                "--fqfn",
                "public/default/f1",
                "--inputs",
                "in-1,in-2",
                "--classname",
                "org.example.Exclamation",
                "--go",
                "exclamation",
            ],
        )
        .unwrap()
        .result
        .unwrap();

    let result = harness.invoke(&get_function_cmd(), &["get", "--name", "f1"]).unwrap();
    result.result.unwrap();
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["inputs"], serde_json::json!(["in-1", "in-2"]));
    assert_eq!(value["runtime"], "GO");
    assert_eq!(value["className"], "org.example.Exclamation");

    let result = harness.invoke(&list_functions_cmd(), &["list"]).unwrap();
    assert_eq!(result.stdout, "f1\n");

    let result = harness
        .invoke(&restart_function_cmd(), &["restart", "public/default/f1"])
        .unwrap();
    assert_eq!(result.stdout, "Restarted public/default/f1 successfully\n");

    let result = harness
        .invoke(&delete_function_cmd(), &["delete", "public/default/f1"])
        .unwrap();
    assert_eq!(result.stdout, "Deleted public/default/f1 successfully\n");

    let result = harness.invoke(&get_function_cmd(), &["get", "--name", "f1"]).unwrap();
    assert!(result
        .error_message()
        .unwrap()
        .contains("Function f1 doesn't exist"));
}

#[test]
fn create_requires_a_package() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    let result = harness
        .invoke(&create_function_cmd(), &["create", "--name", "f1"])
        .unwrap();
    assert!(result.error_message().unwrap().contains("--jar, --py or --go"));

    let result = harness
        .invoke(
            &create_function_cmd(),
            &["create", "--name", "f1", "--jar", "a.jar", "--py", "b.py"],
        )
        .unwrap();
    assert!(result.result.is_err());
    assert_eq!(harness.admin().remote_calls(), 0);
}

#[test]
fn list_functions_in_missing_namespace() {
    let harness = Harness::new(MemoryPulsarAdmin::new());
    let result = harness
        .invoke(&list_functions_cmd(), &["list", "--tenant", "public", "--namespace", "nope"])
        .unwrap();
    assert_eq!(
        result.error_message().unwrap(),
        "code: 404 reason: Namespace (public/nope) does not exist"
    );
}
