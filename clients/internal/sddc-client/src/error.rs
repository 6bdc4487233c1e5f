// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for sddc-client
//!
//! Only transport-level and malformed-response failures are errors.
//! Application-level failures (an unexpected status code, a failed
//! validation, a missing license key) are reported through the outcome
//! types of each operation instead.

use thiserror::Error;

/// Errors that can occur while talking to SDDC Manager
#[derive(Error, Debug)]
pub enum SddcError {
    /// Connection, TLS or protocol failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON document expected
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Response JSON lacked a field the operation depends on
    #[error("Response from {path} is missing string field '{field}'")]
    MissingField { path: String, field: String },

    /// Credentials could not be encoded into a header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Base URL could not be parsed or uses an unsupported scheme
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SddcError>;
