// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! License key commands

use anyhow::{Result, bail};
use clap::Subcommand;
use sddc_client::{LicenseAddition, LicenseDeletion, LicenseListing, LicenseLookup, SddcClient};

use super::SpecArgs;
use crate::output;

#[derive(Subcommand, Clone)]
pub enum LicenseCommand {
    /// Register a license key from a JSON spec
    Add(SpecArgs),
    /// List license keys
    #[command(alias = "ls")]
    List,
    /// Show one license key
    Get {
        /// License key (AAAAA-BBBBB-CCCCC-DDDDD-EEEEE)
        key: String,
    },
    /// Delete a license key
    #[command(alias = "rm")]
    Delete {
        /// License key (AAAAA-BBBBB-CCCCC-DDDDD-EEEEE)
        key: String,
    },
}

impl LicenseCommand {
    pub async fn run(self, client: &SddcClient, use_json: bool) -> Result<()> {
        match self {
            Self::Add(args) => {
                let outcome = client.add_license(&args.read()?).await?;
                if use_json {
                    output::print_json(&outcome)?;
                }
                match outcome {
                    LicenseAddition::Added => {
                        if !use_json {
                            println!("License key added");
                        }
                        Ok(())
                    }
                    LicenseAddition::Rejected { status } => {
                        bail!("License key was not added (HTTP {status})")
                    }
                }
            }
            Self::List => match client.list_license_keys().await? {
                LicenseListing::Listed(page) => {
                    if use_json {
                        output::print_json(&page.elements)?;
                    } else {
                        output::print_license_keys(&page.elements);
                    }
                    Ok(())
                }
                LicenseListing::Rejected { status } => {
                    bail!("Listing license keys failed (HTTP {status})")
                }
            },
            Self::Get { key } => match client.get_license_key(&key).await? {
                LicenseLookup::Found(license) => {
                    if use_json {
                        output::print_json(&license)?;
                    } else {
                        output::print_license_keys([&license]);
                    }
                    Ok(())
                }
                LicenseLookup::NotFound { status } => {
                    bail!("License key {key} not found (HTTP {status})")
                }
            },
            Self::Delete { key } => {
                let outcome = client.delete_license_key(&key).await?;
                if use_json {
                    output::print_json(&outcome)?;
                }
                match outcome {
                    LicenseDeletion::Deleted { id } => {
                        if !use_json {
                            println!("Deleted license key {key} ({id})");
                        }
                        Ok(())
                    }
                    LicenseDeletion::NotFound => bail!("License key {key} not found"),
                    LicenseDeletion::ListingRejected { status } => {
                        bail!("Listing license keys failed (HTTP {status}), {key} was not deleted")
                    }
                    LicenseDeletion::Rejected { status } => {
                        bail!("License key {key} was not deleted (HTTP {status})")
                    }
                }
            }
        }
    }
}
