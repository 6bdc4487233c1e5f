// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Connection profiles
//!
//! A profile is a JSON document naming one SDDC Manager and the account used
//! to reach it. Every field is optional so that secrets can be left out of
//! the file and supplied through the environment instead.
//!
//! ```json
//! {
//!   "url": "https://sddc-manager.vrack.vsphere.local",
//!   "username": "administrator@vsphere.local",
//!   "password": "...",
//!   "insecure": true,
//!   "pollIntervalSecs": 30
//! }
//! ```
//!
//! The older property-file names `sddcManagerIP`, `restApiUsername` and
//! `restApiPassword` are accepted as aliases.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A connection profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// SDDC Manager URL, host name or IP address
    #[serde(alias = "sddcManagerIP", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(alias = "restApiUsername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(alias = "restApiPassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Skip TLS certificate verification (defaults to true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Profile {
    /// Load a named profile from the profiles directory
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let path = super::paths::profile_path(name);
        Self::from_file(&path).with_context(|| format!("Failed to load profile '{name}'"))
    }

    /// Load a profile from an explicit path
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
