// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the sddc configuration directory
///
/// Priority:
/// 1. SDDC_CONFIG_DIR environment variable
/// 2. XDG config dir (~/.config/sddc/ on Linux)
/// 3. ~/.sddc/
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SDDC_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("sddc"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".sddc")
        })
}

/// Get the profiles directory
pub fn profiles_dir() -> PathBuf {
    config_dir().join("profiles.d")
}

/// Get the path to a named profile
pub fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{name}.json"))
}
