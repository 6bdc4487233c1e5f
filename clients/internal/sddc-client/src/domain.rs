// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workload domain operations

use reqwest::StatusCode;
use sddc_api::Validation;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, SddcError};
use crate::poller::{TaskReport, ValidationReport};
use crate::transport::{ApiRequest, Transport};
use crate::{SddcClient, Submission};

pub const DOMAINS_PATH: &str = "/v1/domains";
pub const DOMAIN_CREATION_VALIDATIONS_PATH: &str = "/v1/domains/validations/creations";

/// Result of [`SddcClient::create_domain`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DomainCreation {
    /// The validation request itself was refused
    ValidationRejected { status: u16 },
    /// Validation ran but did not pass; nothing was created
    ValidationFailed(ValidationReport),
    /// Validation passed but the creation request was refused
    Rejected { status: u16 },
    /// Creation task was polled to a terminal state (or deadline)
    Finished(TaskReport),
}

impl<T: Transport> SddcClient<T> {
    /// Validate a domain creation spec
    ///
    /// The validation endpoint answers 200 with the validation document.
    /// If it is still executing, its status endpoint is polled until done.
    pub async fn validate_domain_creation(&self, spec: &str) -> Result<Submission<ValidationReport>> {
        let response = self
            .transport()
            .execute(ApiRequest::post(DOMAIN_CREATION_VALIDATIONS_PATH).json_body(spec))
            .await?;

        if response.status != StatusCode::OK {
            warn!(
                status = response.status.as_u16(),
                "domain creation validation did not start"
            );
            return Ok(Submission::Rejected {
                status: response.status.as_u16(),
            });
        }

        let validation: Validation = response.decode()?;
        if !validation.is_in_progress() {
            let report = ValidationReport::new(validation, 0, false);
            report.log_checks();
            return Ok(Submission::Finished(report));
        }

        let id = validation.id.ok_or_else(|| SddcError::MissingField {
            path: DOMAIN_CREATION_VALIDATIONS_PATH.to_string(),
            field: "id".to_string(),
        })?;
        info!(validation_id = %id, "domain creation validation in progress");

        let report = self
            .poller(self.polling().domain_validation_timeout)
            .poll_execution(
                self.transport(),
                &format!("{DOMAIN_CREATION_VALIDATIONS_PATH}/{id}"),
            )
            .await?;
        Ok(Submission::Finished(report))
    }

    /// Validate a domain spec and, if it passes, create the domain
    pub async fn create_domain(&self, spec: &str) -> Result<DomainCreation> {
        let report = match self.validate_domain_creation(spec).await? {
            Submission::Rejected { status } => {
                warn!(status, "skipping domain creation: validation did not start");
                return Ok(DomainCreation::ValidationRejected { status });
            }
            Submission::Finished(report) => report,
        };

        if !report.passed() {
            warn!(
                timed_out = report.timed_out,
                "skipping domain creation: validation did not succeed"
            );
            return Ok(DomainCreation::ValidationFailed(report));
        }

        info!("domain spec validated, creating domain");
        let outcome = self
            .submit_task(DOMAINS_PATH, spec, self.polling().domain_creation_timeout)
            .await?;

        Ok(match outcome {
            Submission::Rejected { status } => DomainCreation::Rejected { status },
            Submission::Finished(task) => DomainCreation::Finished(task),
        })
    }
}
