// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, configuration errors

mod common;

use predicates::prelude::*;
use test_case::test_case;

use common::{sddc_cmd, write_spec};

#[test]
fn test_sddc_version() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sddc"));
}

#[test]
fn test_sddc_help() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("domain"))
        .stdout(predicate::str::contains("host"))
        .stdout(predicate::str::contains("license"));
}

#[test_case(&["domain", "--help"], "create" ; "domain")]
#[test_case(&["host", "--help"], "commission" ; "host")]
#[test_case(&["license", "--help"], "delete" ; "license")]
fn test_subcommand_help(args: &[&str], expected: &str) {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_missing_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path()).assert().failure();
}

#[test]
fn test_missing_url() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .args(["license", "list", "--username", "admin", "--password", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No SDDC Manager address configured"));
}

#[test]
fn test_zero_poll_interval_flag() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .args(["--url", "http://127.0.0.1:9", "--username", "u", "--password", "p"])
        .args(["--poll-interval", "0"])
        .args(["license", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--poll-interval"));
}

#[test]
fn test_zero_poll_interval_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .env("SDDC_POLL_INTERVAL", "0")
        .args(["--url", "http://127.0.0.1:9", "--username", "u", "--password", "p"])
        .args(["license", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--poll-interval"));
}

#[test]
fn test_unknown_profile() {
    let dir = tempfile::tempdir().unwrap();
    sddc_cmd(dir.path())
        .args(["--profile", "nope", "license", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load profile 'nope'"));
}

#[test]
fn test_invalid_spec_is_rejected_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let spec = write_spec(dir.path(), "domain.json", "domainName: wld01");

    // Port 9 is discard; the spec check fails before a connection is tried.
    sddc_cmd(dir.path())
        .args(["--url", "http://127.0.0.1:9", "--username", "u", "--password", "p"])
        .args(["domain", "validate", &spec])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"));
}
