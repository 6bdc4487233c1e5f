// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SDDC Manager REST client
//!
//! Thin wrapper around the SDDC Manager REST API covering workload domain
//! creation, host commissioning and license key management. Every call
//! authenticates with HTTP Basic auth; TLS policy comes from
//! [`SddcConfig::tls`].
//!
//! Operations follow one shape: submit an opaque JSON payload, compare the
//! status code with the one the endpoint documents, then (for long-running
//! work) poll a status endpoint until it reaches a terminal state.
//! Application-level outcomes are returned as values; only transport and
//! parsing failures are [`SddcError`]s.
//!
//! # Example
//!
//! ```no_run
//! use sddc_client::{Credentials, SddcClient, SddcConfig, Submission};
//!
//! # async fn example() -> sddc_client::Result<()> {
//! let config = SddcConfig::new("10.0.0.4", Credentials::new("admin@local", "secret"))?;
//! let client = SddcClient::new(&config)?;
//!
//! let spec = std::fs::read_to_string("host-commission.json").unwrap_or_default();
//! if let Submission::Finished(task) = client.commission_hosts(&spec).await? {
//!     println!("task {} finished: {}", task.task_id, task.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod license;
pub mod poller;
pub mod transport;

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use tracing::{info, warn};

pub use config::{Credentials, PollingConfig, SddcConfig};
pub use domain::DomainCreation;
pub use error::{Result, SddcError};
pub use license::{LicenseAddition, LicenseDeletion, LicenseListing, LicenseLookup};
pub use poller::{PollOutcome, Poller, TaskReport, ValidationReport};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

pub use sddc_api::{LicenseKey, LicenseKeyPage, Task, Validation, ValidationCheck};
pub use sddc_tls::TlsPolicy;

/// Result of submitting a long-running operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission<R> {
    /// The endpoint answered with an unexpected status code
    Rejected { status: u16 },
    /// The operation was accepted and polled to completion (or deadline)
    Finished(R),
}

impl<R> Submission<R> {
    pub fn finished(&self) -> Option<&R> {
        match self {
            Self::Finished(report) => Some(report),
            Self::Rejected { .. } => None,
        }
    }
}

/// Client for one SDDC Manager instance
pub struct SddcClient<T = HttpTransport> {
    transport: T,
    polling: PollingConfig,
}

impl SddcClient<HttpTransport> {
    /// Build a client with a reqwest transport
    pub fn new(config: &SddcConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            polling: config.polling,
        })
    }
}

impl<T: Transport> SddcClient<T> {
    /// Build a client on top of an existing transport
    pub fn with_transport(transport: T, polling: PollingConfig) -> Self {
        Self { transport, polling }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn polling(&self) -> &PollingConfig {
        &self.polling
    }

    pub(crate) fn poller(&self, timeout: Duration) -> Poller {
        Poller::new(self.polling.interval, timeout)
    }

    /// POST `spec` to `path`, expect 202 with a task ID, then poll the task
    pub(crate) async fn submit_task(
        &self,
        path: &str,
        spec: &str,
        timeout: Duration,
    ) -> Result<Submission<TaskReport>> {
        let response = self
            .transport
            .execute(ApiRequest::post(path).json_body(spec))
            .await?;

        if response.status != StatusCode::ACCEPTED {
            warn!(path, status = response.status.as_u16(), "request was not accepted");
            return Ok(Submission::Rejected {
                status: response.status.as_u16(),
            });
        }

        let task_id = poller::string_field(&response.json()?, path, "id")?;
        info!(path, task_id = %task_id, "task submitted");

        let report = self.poller(timeout).poll_task(&self.transport, &task_id).await?;
        Ok(Submission::Finished(report))
    }
}
