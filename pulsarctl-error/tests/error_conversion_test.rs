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

//! Integration tests for error conversions into CtlError

use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;
use pulsarctl_error::ErrorKind;
use pulsarctl_error::GatewayError;
use pulsarctl_error::NetworkError;

fn remote_call(code: u16) -> CtlResult<()> {
    let response: Result<(), GatewayError> = Err(GatewayError::new(code, "Function f1 doesn't exist"));
    response?;
    Ok(())
}

fn unreachable_call() -> CtlResult<()> {
    let response: Result<(), NetworkError> =
        Err(NetworkError::connection_failed("http://localhost:8080", "connection refused"));
    response?;
    Ok(())
}

#[test]
fn test_gateway_error_question_mark_conversion() {
    let err = remote_call(404).unwrap_err();
    assert!(matches!(err, CtlError::Gateway(_)));
    assert_eq!(err.kind(), ErrorKind::RemoteNotFound);
    assert!(err.to_string().contains("Function f1 doesn't exist"));
}

#[test]
fn test_network_error_question_mark_conversion() {
    let err = unreachable_call().unwrap_err();
    assert!(matches!(err, CtlError::Network(_)));
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
}

#[test]
fn test_nested_prefix_reports_innermost_kind() {
    let err = remote_call(400)
        .unwrap_err()
        .with_prefix("start")
        .with_prefix("functions");
    assert_eq!(err.kind(), ErrorKind::RemoteRejected);
    assert_eq!(err.status_code(), Some(400));
    assert!(err.to_string().starts_with("functions: start: code: 400"));
}
