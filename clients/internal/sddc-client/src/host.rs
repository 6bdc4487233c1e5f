// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Host commissioning operations

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::error::Result;
use crate::poller::{self, TaskReport, ValidationReport};
use crate::transport::{ApiRequest, Transport};
use crate::{SddcClient, Submission};

pub const HOSTS_PATH: &str = "/v1/hosts";
pub const HOST_COMMISSION_VALIDATIONS_PATH: &str = "/v1/hosts/validations/commissions";

/// Status endpoint of a host validation
pub fn host_validation_path(id: &str) -> String {
    format!("/v1/hosts/validations/{id}")
}

impl<T: Transport> SddcClient<T> {
    /// Validate a host commission spec (expects 202, then polls the validation)
    pub async fn validate_hosts(&self, spec: &str) -> Result<Submission<ValidationReport>> {
        let response = self
            .transport()
            .execute(ApiRequest::post(HOST_COMMISSION_VALIDATIONS_PATH).json_body(spec))
            .await?;

        if response.status != StatusCode::ACCEPTED {
            warn!(
                status = response.status.as_u16(),
                "host commission validation was not accepted"
            );
            return Ok(Submission::Rejected {
                status: response.status.as_u16(),
            });
        }

        let id = poller::string_field(&response.json()?, HOST_COMMISSION_VALIDATIONS_PATH, "id")?;
        info!(validation_id = %id, "host validation started");

        let report = self
            .poller(self.polling().host_validation_timeout)
            .poll_execution(self.transport(), &host_validation_path(&id))
            .await?;
        Ok(Submission::Finished(report))
    }

    /// Commission hosts (expects 202, then polls the task)
    pub async fn commission_hosts(&self, spec: &str) -> Result<Submission<TaskReport>> {
        self.submit_task(HOSTS_PATH, spec, self.polling().host_commission_timeout)
            .await
    }
}
