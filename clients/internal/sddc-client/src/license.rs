// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! License key operations
//!
//! License keys are addressed by the key string everywhere except on delete,
//! which takes the internal ID. Deleting therefore lists the keys first and
//! looks the ID up.

use reqwest::StatusCode;
use sddc_api::{LicenseKey, LicenseKeyPage};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, SddcError};
use crate::transport::{ApiRequest, Transport};
use crate::SddcClient;

pub const LICENSE_KEYS_PATH: &str = "/v1/license-keys";

/// Delete endpoint for a license key ID
pub fn license_delete_path(id: &str) -> String {
    format!("/licensing/licensekeys/{}", urlencoding::encode(id))
}

/// Lookup endpoint for a license key
pub fn license_key_path(key: &str) -> String {
    format!("{LICENSE_KEYS_PATH}/{}", urlencoding::encode(key))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LicenseAddition {
    Added,
    Rejected { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LicenseListing {
    Listed(LicenseKeyPage),
    Rejected { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LicenseLookup {
    Found(LicenseKey),
    NotFound { status: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LicenseDeletion {
    Deleted { id: String },
    /// No listed license key matched; nothing was sent
    NotFound,
    /// The key listing itself failed; nothing was sent
    ListingRejected { status: u16 },
    Rejected { status: u16 },
}

impl<T: Transport> SddcClient<T> {
    /// Register a license key (expects 201)
    pub async fn add_license(&self, spec: &str) -> Result<LicenseAddition> {
        let response = self
            .transport()
            .execute(ApiRequest::post(LICENSE_KEYS_PATH).json_body(spec))
            .await?;

        if response.status == StatusCode::CREATED {
            info!("license key added");
            Ok(LicenseAddition::Added)
        } else {
            warn!(status = response.status.as_u16(), "license key was not added");
            Ok(LicenseAddition::Rejected {
                status: response.status.as_u16(),
            })
        }
    }

    /// List all license keys
    pub async fn list_license_keys(&self) -> Result<LicenseListing> {
        let response = self
            .transport()
            .execute(ApiRequest::get(LICENSE_KEYS_PATH))
            .await?;

        if !response.status.is_success() {
            warn!(status = response.status.as_u16(), "listing license keys failed");
            return Ok(LicenseListing::Rejected {
                status: response.status.as_u16(),
            });
        }
        Ok(LicenseListing::Listed(response.decode()?))
    }

    /// Fetch one license key by its key string
    pub async fn get_license_key(&self, key: &str) -> Result<LicenseLookup> {
        let response = self
            .transport()
            .execute(ApiRequest::get(license_key_path(key)))
            .await?;

        if response.status.is_success() {
            Ok(LicenseLookup::Found(response.decode()?))
        } else {
            warn!(status = response.status.as_u16(), "license key lookup failed");
            Ok(LicenseLookup::NotFound {
                status: response.status.as_u16(),
            })
        }
    }

    /// Delete a license key by its key string (expects 200)
    ///
    /// When no listed entry carries `key`, no DELETE is issued.
    pub async fn delete_license_key(&self, key: &str) -> Result<LicenseDeletion> {
        let page = match self.list_license_keys().await? {
            LicenseListing::Listed(page) => page,
            LicenseListing::Rejected { status } => {
                warn!(status, "cannot look up license key, nothing deleted");
                return Ok(LicenseDeletion::ListingRejected { status });
            }
        };

        let Some(license) = page.find_key(key) else {
            warn!(
                listed = page.elements.len(),
                "license key not found, nothing deleted"
            );
            return Ok(LicenseDeletion::NotFound);
        };

        let id = license.id.clone().ok_or_else(|| SddcError::MissingField {
            path: LICENSE_KEYS_PATH.to_string(),
            field: "id".to_string(),
        })?;

        let response = self
            .transport()
            .execute(ApiRequest::delete(license_delete_path(&id)))
            .await?;

        if response.status == StatusCode::OK {
            info!(license_id = %id, "license key deleted");
            Ok(LicenseDeletion::Deleted { id })
        } else {
            warn!(
                license_id = %id,
                status = response.status.as_u16(),
                "license key was not deleted"
            );
            Ok(LicenseDeletion::Rejected {
                status: response.status.as_u16(),
            })
        }
    }
}
