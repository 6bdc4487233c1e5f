// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the SDDC Manager API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unrecognised fields, preserved for round-tripping
pub type Extra = Map<String, Value>;

/// SDDC Manager error response
///
/// Returned in the body of most 4xx/5xx responses, and embedded in failed
/// validation checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g. "VALIDATION_FAILED")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Error type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Localized error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Suggested remediation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_message: Option<String>,

    /// Reference token for support
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_token: Option<String>,

    /// Errors that caused this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested_errors: Vec<ErrorResponse>,
}

/// Pagination metadata attached to collection responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u32,
    pub total_pages: u32,
}

/// A page of a collection (`{"elements": [...], "pageMetadata": {...}}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub elements: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_metadata: Option<PageMetadata>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            page_metadata: None,
        }
    }
}
