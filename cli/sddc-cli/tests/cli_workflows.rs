// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! End-to-end CLI runs against a mock SDDC Manager
//!
//! The binary blocks the test thread while it runs, so these tests use the
//! multi-threaded runtime to keep the mock server serving.

mod common;

use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{sddc_against, write_spec};

const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/license-keys"))
        .and(header("authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"id": "lic-1", "key": "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE", "productType": "VCENTER",
                 "licenseKeyValidity": {"licenseKeyStatus": "ACTIVE", "expiryDate": "2027-06-30"}}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_list_table() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let dir = tempfile::tempdir().unwrap();

    sddc_against(dir.path(), &server.uri())
        .args(["license", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AAAAA-BBBBB-CCCCC-DDDDD-EEEEE"))
        .stdout(predicate::str::contains("ACTIVE"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_list_json() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let assert = sddc_against(dir.path(), &server.uri())
        .args(["--json", "license", "list"])
        .assert()
        .success();

    let listed: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(listed[0]["id"], "lic-1");
    assert_eq!(listed[0]["productType"], "VCENTER");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_delete_not_found() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    sddc_against(dir.path(), &server.uri())
        .args(["license", "delete", "ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_delete() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/licensing/licensekeys/lic-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    sddc_against(dir.path(), &server.uri())
        .args(["license", "delete", "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lic-1"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_list_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/license-keys"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errorCode": "UNAUTHORIZED",
            "message": "Authentication failed"
        })))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    sddc_against(dir.path(), &server.uri())
        .args(["license", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 401"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_delete_json() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/licensing/licensekeys/lic-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let assert = sddc_against(dir.path(), &server.uri())
        .args(["--json", "license", "delete", "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE"])
        .assert()
        .success();

    let outcome: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(outcome, json!({"outcome": "deleted", "id": "lic-1"}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_license_add_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/license-keys"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(
        dir.path(),
        "license.json",
        r#"{"key":"AAAAA-BBBBB-CCCCC-DDDDD-EEEEE"}"#,
    );

    let assert = sddc_against(dir.path(), &server.uri())
        .args(["--json", "license", "add", &spec])
        .assert()
        .success();

    let outcome: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(outcome, json!({"outcome": "added"}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_verify_tls_accepts_truthy_env_values() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let dir = tempfile::tempdir().unwrap();

    for value in ["1", "yes", "true", "on"] {
        sddc_against(dir.path(), &server.uri())
            .env("SDDC_VERIFY_TLS", value)
            .args(["--verbose", "license", "list"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Verify"))
            .stderr(predicate::str::contains("verification are disabled").not());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_host_commission_from_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/hosts"))
        .and(header("authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"id": "T7"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/tasks/T7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Successful"})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let profiles = dir.path().join("profiles.d");
    std::fs::create_dir_all(&profiles).unwrap();
    std::fs::write(
        profiles.join("lab.json"),
        json!({
            "sddcManagerIP": server.uri(),
            "restApiUsername": "admin",
            "restApiPassword": "secret",
            "pollIntervalSecs": 1
        })
        .to_string(),
    )
    .unwrap();
    let spec = write_spec(dir.path(), "hosts.json", r#"[{"fqdn":"esxi-5"}]"#);

    common::sddc_cmd(dir.path())
        .args(["--profile", "lab", "host", "commission", &spec])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task T7: Successful"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_domain_create_skipped_when_validation_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/domains/validations/creations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "val-9",
            "executionStatus": "COMPLETED",
            "validationChecks": [{"description": "vCenter name", "resultStatus": "FAILED"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "domain.json", r#"{"domainName":"wld01"}"#);

    sddc_against(dir.path(), &server.uri())
        .args(["domain", "create", &spec])
        .assert()
        .failure()
        .stdout(predicate::str::contains("vCenter name"))
        .stderr(predicate::str::contains("domain not created"));
}
