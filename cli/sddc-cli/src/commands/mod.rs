// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Command implementations

pub mod domain;
pub mod host;
pub mod license;

pub use domain::DomainCommand;
pub use host::HostCommand;
pub use license::LicenseCommand;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Clone)]
pub struct SpecArgs {
    /// JSON spec file, sent to SDDC Manager unmodified
    pub spec: PathBuf,
}

impl SpecArgs {
    pub fn read(&self) -> Result<String> {
        read_spec(&self.spec)
    }
}

/// Read a spec file and make sure it is well-formed JSON
pub fn read_spec(path: &Path) -> Result<String> {
    let spec = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec {}", path.display()))?;
    serde_json::from_str::<serde_json::Value>(&spec)
        .with_context(|| format!("Spec {} is not valid JSON", path.display()))?;
    Ok(spec)
}
