// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task types
//!
//! Long-running operations (domain creation, host commissioning) return a
//! task document with HTTP 202. Its `id` is then polled at `/v1/tasks/{id}`
//! until `status` leaves the pending set.

use serde::{Deserialize, Serialize};

use super::common::{ErrorResponse, Extra};

/// Task status values that mean "still running"
///
/// An empty status is reported before the task has been scheduled.
pub const TASK_PENDING_STATUSES: [&str; 3] = ["", "Pending", "In Progress"];

/// An asynchronous task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task ID, used to poll `/v1/tasks/{id}`
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current status ("Pending", "In Progress", "Successful", "Failed", ...)
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorResponse>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Task {
    /// Whether the task is still pending
    pub fn is_pending(&self) -> bool {
        is_task_pending(&self.status)
    }
}

/// Whether a task status is non-terminal
pub fn is_task_pending(status: &str) -> bool {
    TASK_PENDING_STATUSES.contains(&status)
}
