// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for the sddc CLI tests

// cargo_bin is the standard way to locate the binary under test
#![allow(deprecated, dead_code)]

use std::path::Path;

use assert_cmd::Command;

const SDDC_VARS: &[&str] = &[
    "SDDC_PROFILE",
    "SDDC_CONFIG",
    "SDDC_URL",
    "SDDC_USERNAME",
    "SDDC_PASSWORD",
    "SDDC_VERIFY_TLS",
    "SDDC_POLL_INTERVAL",
    "RUST_LOG",
];

/// `sddc` with the ambient SDDC_* environment removed
pub fn sddc_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sddc").expect("Failed to find sddc binary");
    for var in SDDC_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SDDC_CONFIG_DIR", config_dir);
    cmd
}

/// `sddc` pointed at a mock server with test credentials
pub fn sddc_against(config_dir: &Path, url: &str) -> Command {
    let mut cmd = sddc_cmd(config_dir);
    cmd.env("SDDC_URL", url)
        .env("SDDC_USERNAME", "admin")
        .env("SDDC_PASSWORD", "secret")
        .env("SDDC_POLL_INTERVAL", "1");
    cmd
}

/// Write a spec file into `dir` and return its path as a string
pub fn write_spec(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("Failed to write spec");
    path.to_string_lossy().into_owned()
}
