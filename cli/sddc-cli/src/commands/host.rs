// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Host commissioning commands

use anyhow::{Result, bail};
use clap::Subcommand;
use sddc_client::{SddcClient, Submission};

use super::SpecArgs;
use crate::output;

#[derive(Subcommand, Clone)]
pub enum HostCommand {
    /// Validate a host commission spec
    Validate(SpecArgs),
    /// Commission hosts and wait for the task
    Commission(SpecArgs),
}

impl HostCommand {
    pub async fn run(self, client: &SddcClient, use_json: bool) -> Result<()> {
        match self {
            Self::Validate(args) => {
                let outcome = client.validate_hosts(&args.read()?).await?;
                if use_json {
                    output::print_json(&outcome)?;
                }
                let report = match outcome {
                    Submission::Rejected { status } => {
                        bail!("Host validation was not accepted (HTTP {status})")
                    }
                    Submission::Finished(report) => report,
                };
                if !use_json {
                    output::print_validation(&report);
                }
                if !report.passed() {
                    bail!("Host validation did not succeed");
                }
                Ok(())
            }
            Self::Commission(args) => {
                let outcome = client.commission_hosts(&args.read()?).await?;
                if use_json {
                    output::print_json(&outcome)?;
                }
                let task = match outcome {
                    Submission::Rejected { status } => {
                        bail!("Host commission was not accepted (HTTP {status})")
                    }
                    Submission::Finished(task) => task,
                };
                if !use_json {
                    output::print_task(&task);
                }
                if task.is_failure() {
                    bail!("Host commission task {} ended as '{}'", task.task_id, task.status);
                }
                Ok(())
            }
        }
    }
}
