// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Workload domain commands

use anyhow::{Result, bail};
use clap::Subcommand;
use sddc_client::{DomainCreation, SddcClient, Submission};

use super::SpecArgs;
use crate::output;

#[derive(Subcommand, Clone)]
pub enum DomainCommand {
    /// Validate a domain creation spec
    Validate(SpecArgs),
    /// Validate a domain spec, then create the domain and wait for the task
    Create(SpecArgs),
}

impl DomainCommand {
    pub async fn run(self, client: &SddcClient, use_json: bool) -> Result<()> {
        match self {
            Self::Validate(args) => validate(args, client, use_json).await,
            Self::Create(args) => create(args, client, use_json).await,
        }
    }
}

async fn validate(args: SpecArgs, client: &SddcClient, use_json: bool) -> Result<()> {
    let outcome = client.validate_domain_creation(&args.read()?).await?;

    if use_json {
        output::print_json(&outcome)?;
    }
    match outcome {
        Submission::Rejected { status } => {
            bail!("Domain validation was not started (HTTP {status})")
        }
        Submission::Finished(report) => {
            if !use_json {
                output::print_validation(&report);
            }
            if !report.passed() {
                bail!("Domain validation did not succeed");
            }
            Ok(())
        }
    }
}

async fn create(args: SpecArgs, client: &SddcClient, use_json: bool) -> Result<()> {
    let outcome = client.create_domain(&args.read()?).await?;

    if use_json {
        output::print_json(&outcome)?;
    }
    match outcome {
        DomainCreation::ValidationRejected { status } => {
            bail!("Domain validation was not started (HTTP {status}); domain not created")
        }
        DomainCreation::ValidationFailed(report) => {
            if !use_json {
                output::print_validation(&report);
            }
            bail!("Domain validation did not succeed; domain not created")
        }
        DomainCreation::Rejected { status } => {
            bail!("Domain creation was not accepted (HTTP {status})")
        }
        DomainCreation::Finished(task) => {
            if !use_json {
                output::print_task(&task);
            }
            if task.is_failure() {
                bail!("Domain creation task {} ended as '{}'", task.task_id, task.status);
            }
            Ok(())
        }
    }
}
