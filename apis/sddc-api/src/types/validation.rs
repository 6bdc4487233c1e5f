// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Validation types
//!
//! Domain creation and host commission specs can be validated before they
//! are submitted. A validation runs asynchronously: `executionStatus` stays
//! `IN_PROGRESS` until every check has finished, after which each entry of
//! `validationChecks` carries its own `resultStatus`.

use serde::{Deserialize, Serialize};

use super::common::{ErrorResponse, Extra};

/// `executionStatus` value while a validation is running
pub const EXECUTION_IN_PROGRESS: &str = "IN_PROGRESS";

/// `resultStatus` value of a passing check
pub const RESULT_SUCCEEDED: &str = "SUCCEEDED";

/// A validation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Validation ID, used to poll the matching validations endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// IN_PROGRESS, COMPLETED, FAILED, ...
    #[serde(default)]
    pub execution_status: String,

    /// Aggregate result; SUCCEEDED, FAILED, WARNING, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_status: Option<String>,

    #[serde(default)]
    pub validation_checks: Vec<ValidationCheck>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Validation {
    /// Whether the validation is still executing
    pub fn is_in_progress(&self) -> bool {
        self.execution_status == EXECUTION_IN_PROGRESS
    }

    /// Whether every check passed
    pub fn succeeded(&self) -> bool {
        checks_succeeded(&self.validation_checks)
    }
}

/// A single named check within a validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationCheck {
    /// What was checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Absent while the check has not produced a result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_response: Option<ErrorResponse>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl ValidationCheck {
    /// A check passes unless it reports a result other than SUCCEEDED
    pub fn passed(&self) -> bool {
        self.result_status
            .as_deref()
            .is_none_or(|status| status == RESULT_SUCCEEDED)
    }

    /// Display name of the check
    pub fn name(&self) -> &str {
        self.description.as_deref().unwrap_or("(unnamed check)")
    }
}

/// Overall validation outcome: true iff every check passed
pub fn checks_succeeded(checks: &[ValidationCheck]) -> bool {
    checks.iter().all(ValidationCheck::passed)
}
