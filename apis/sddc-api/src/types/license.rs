// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! License key types

use serde::{Deserialize, Serialize};

use super::common::{Extra, Page};

/// A license key registered with SDDC Manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseKey {
    /// Internal ID; the handle used by the delete endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The license key itself (AAAAA-BBBBB-CCCCC-DDDDD-EEEEE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// VCENTER, VSAN, ESXI, NSXT, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key_validity: Option<LicenseKeyValidity>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Validity window of a license key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseKeyValidity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Collection response of `GET /v1/license-keys`
pub type LicenseKeyPage = Page<LicenseKey>;

impl Page<LicenseKey> {
    /// Find the license key entry whose `key` matches exactly
    ///
    /// The API offers no lookup by key on the delete path, so callers scan
    /// the listing. Entries without a `key` field never match; if the key
    /// appears more than once the last entry wins.
    pub fn find_key(&self, key: &str) -> Option<&LicenseKey> {
        self.elements
            .iter()
            .rev()
            .find(|license| license.key.as_deref() == Some(key))
    }
}
