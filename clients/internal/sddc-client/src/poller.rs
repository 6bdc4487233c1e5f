// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Status polling for asynchronous operations
//!
//! SDDC Manager answers long-running requests with an ID and expects the
//! caller to poll a status endpoint. [`Poller`] does that for any endpoint:
//! GET the path, read one string field, stop once a predicate says the value
//! is no longer pending. Two flavours are used:
//!
//! - execution status (`executionStatus == "IN_PROGRESS"`) for validations
//! - task status (`status` in `""`, `"Pending"`, `"In Progress"`) for
//!   `/v1/tasks/{id}`
//!
//! The loop is bounded by a wall-clock deadline rather than a retry count.
//! Hitting the deadline is not an error: the last observed status is
//! returned with [`PollOutcome::timed_out`] set.

use std::time::{Duration, Instant};

use sddc_api::{EXECUTION_IN_PROGRESS, Validation, ValidationCheck, is_task_pending};
use serde::Serialize;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::{Result, SddcError};
use crate::transport::{ApiRequest, Transport};

/// Status field reported by validation endpoints
pub const EXECUTION_STATUS_FIELD: &str = "executionStatus";

/// Status field reported by `/v1/tasks/{id}`
pub const TASK_STATUS_FIELD: &str = "status";

/// Task status endpoint for a task ID
pub fn task_path(task_id: &str) -> String {
    format!("/v1/tasks/{task_id}")
}

/// Pending predicate for validation executions
pub fn is_execution_pending(status: &str) -> bool {
    status == EXECUTION_IN_PROGRESS
}

/// Last state observed by a [`Poller`]
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
    /// Value of the status field in the last response
    pub status: String,
    /// Full body of the last response
    pub body: Value,
    /// Number of GET requests issued
    pub polls: u32,
    /// The deadline elapsed while the status was still pending
    pub timed_out: bool,
}

/// Fixed-interval, deadline-bounded poll loop
#[derive(Debug, Clone, Copy)]
pub struct Poller {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Poller {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Poll `path` until `field` leaves the pending set or the deadline elapses
    ///
    /// The first GET goes out immediately; the task then sleeps one interval
    /// between consecutive polls.
    pub async fn poll_until<T, F>(
        &self,
        transport: &T,
        path: &str,
        field: &str,
        is_pending: F,
    ) -> Result<PollOutcome>
    where
        T: Transport + ?Sized,
        F: Fn(&str) -> bool,
    {
        let deadline = Instant::now() + self.timeout;
        let mut polls = 0u32;

        loop {
            let response = transport
                .execute(ApiRequest::get(path).json_content_type())
                .await?;
            polls += 1;

            let body = response.json()?;
            let status = string_field(&body, path, field)?;
            debug!(path, poll = polls, status = %status, "polled status");

            if !is_pending(&status) {
                info!(path, polls, status = %status, "operation reached a terminal state");
                return Ok(PollOutcome {
                    status,
                    body,
                    polls,
                    timed_out: false,
                });
            }

            if Instant::now() >= deadline {
                warn!(
                    path,
                    polls,
                    status = %status,
                    timeout_secs = self.timeout.as_secs(),
                    "deadline elapsed while operation still pending"
                );
                return Ok(PollOutcome {
                    status,
                    body,
                    polls,
                    timed_out: true,
                });
            }

            sleep(self.interval).await;
        }
    }

    /// Poll a validation endpoint while `executionStatus` is IN_PROGRESS
    pub async fn poll_execution<T>(&self, transport: &T, path: &str) -> Result<ValidationReport>
    where
        T: Transport + ?Sized,
    {
        let outcome = self
            .poll_until(transport, path, EXECUTION_STATUS_FIELD, is_execution_pending)
            .await?;
        let validation: Validation = serde_json::from_value(outcome.body)?;
        let report = ValidationReport::new(validation, outcome.polls, outcome.timed_out);
        report.log_checks();
        Ok(report)
    }

    /// Poll `/v1/tasks/{task_id}` until the task leaves the pending set
    pub async fn poll_task<T>(&self, transport: &T, task_id: &str) -> Result<TaskReport>
    where
        T: Transport + ?Sized,
    {
        let outcome = self
            .poll_until(transport, &task_path(task_id), TASK_STATUS_FIELD, is_task_pending)
            .await?;

        let report = TaskReport {
            task_id: task_id.to_string(),
            status: outcome.status,
            polls: outcome.polls,
            timed_out: outcome.timed_out,
        };
        info!(task_id, status = %report.status, "task finished polling");
        Ok(report)
    }
}

/// Read a string field from a JSON object
pub(crate) fn string_field(body: &Value, path: &str, field: &str) -> Result<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SddcError::MissingField {
            path: path.to_string(),
            field: field.to_string(),
        })
}

/// Final state of a validation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub execution_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_status: Option<String>,
    /// Every check lacks a result or reports SUCCEEDED
    pub succeeded: bool,
    pub checks: Vec<ValidationCheck>,
    pub polls: u32,
    pub timed_out: bool,
}

impl ValidationReport {
    pub fn new(validation: Validation, polls: u32, timed_out: bool) -> Self {
        Self {
            succeeded: validation.succeeded(),
            id: validation.id,
            execution_status: validation.execution_status,
            result_status: validation.result_status,
            checks: validation.validation_checks,
            polls,
            timed_out,
        }
    }

    /// Succeeded and finished before the deadline
    ///
    /// A validation cut off by the deadline may have checks without a result,
    /// which would otherwise count as passing.
    pub fn passed(&self) -> bool {
        self.succeeded && !self.timed_out
    }

    /// Checks that reported a result other than SUCCEEDED
    pub fn failed_checks(&self) -> impl Iterator<Item = &ValidationCheck> {
        self.checks.iter().filter(|check| !check.passed())
    }

    pub(crate) fn log_checks(&self) {
        for check in &self.checks {
            let result = check.result_status.as_deref().unwrap_or("-");
            if check.passed() {
                debug!(check = check.name(), result, "validation check");
            } else {
                warn!(check = check.name(), result, "validation check failed");
            }
        }
        info!(
            id = self.id.as_deref().unwrap_or(""),
            execution_status = %self.execution_status,
            succeeded = self.succeeded,
            "validation finished"
        );
    }
}

/// Final state of an asynchronous task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    pub task_id: String,
    pub status: String,
    pub polls: u32,
    pub timed_out: bool,
}

impl TaskReport {
    /// The task reported failure or never left the pending set
    pub fn is_failure(&self) -> bool {
        self.timed_out || self.status.eq_ignore_ascii_case("failed")
    }
}
