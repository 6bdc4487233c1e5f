// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::Profile;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use sddc_client::{Credentials, PollingConfig, SddcConfig, TlsPolicy};

/// Connection settings given on the command line or through `SDDC_*` variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_tls: bool,
    pub poll_interval_secs: Option<u64>,
}

/// Load the profile selected by `--config` or `--profile`, if any
pub fn load_profile(name: Option<&str>, path: Option<&Path>) -> Result<Option<Profile>> {
    if let Some(path) = path {
        return Profile::from_file(path).map(Some);
    }
    name.map(Profile::load).transpose()
}

/// Merge overrides over a profile into a client configuration
///
/// Overrides win field by field; the profile fills whatever is left.
pub fn resolve(overrides: &Overrides, profile: Option<Profile>) -> Result<SddcConfig> {
    let profile = profile.unwrap_or_default();

    let url = overrides
        .url
        .clone()
        .or(profile.url)
        .context("No SDDC Manager address configured. Use --url, SDDC_URL or a profile")?;
    let username = overrides
        .username
        .clone()
        .or(profile.username)
        .context("No username configured. Use --username, SDDC_USERNAME or a profile")?;
    let password = overrides
        .password
        .clone()
        .or(profile.password)
        .context("No password configured. Use --password, SDDC_PASSWORD or a profile")?;

    let tls = if overrides.verify_tls {
        TlsPolicy::Verify
    } else {
        TlsPolicy::from_insecure(profile.insecure.unwrap_or(true))
    };

    let mut polling = PollingConfig::default();
    if let Some(secs) = overrides.poll_interval_secs.or(profile.poll_interval_secs) {
        ensure!(secs >= 1, "Poll interval must be at least 1 second");
        polling = polling.with_interval(Duration::from_secs(secs));
    }

    let mut config = SddcConfig::new(&url, Credentials::new(username, password))?
        .with_tls(tls)
        .with_polling(polling);
    if let Some(secs) = profile.request_timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lab_profile() -> Profile {
        Profile {
            url: Some("10.0.0.4".into()),
            username: Some("admin@local".into()),
            password: Some("from-profile".into()),
            insecure: Some(false),
            poll_interval_secs: Some(5),
            request_timeout_secs: Some(10),
        }
    }

    #[test]
    fn test_profile_only() {
        let config = resolve(&Overrides::default(), Some(lab_profile())).unwrap();
        assert_eq!(config.base_url, "https://10.0.0.4");
        assert_eq!(config.credentials.username, "admin@local");
        assert_eq!(config.tls, TlsPolicy::Verify);
        assert_eq!(config.polling.interval, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            url: Some("https://sddc.lab".into()),
            password: Some("from-flag".into()),
            poll_interval_secs: Some(1),
            ..Default::default()
        };
        let config = resolve(&overrides, Some(lab_profile())).unwrap();
        assert_eq!(config.base_url, "https://sddc.lab");
        assert_eq!(config.credentials.username, "admin@local");
        assert_eq!(config.credentials.password, "from-flag");
        assert_eq!(config.polling.interval, Duration::from_secs(1));
    }

    #[test]
    fn test_defaults_without_profile() {
        let overrides = Overrides {
            url: Some("10.0.0.9".into()),
            username: Some("u".into()),
            password: Some("p".into()),
            ..Default::default()
        };
        let config = resolve(&overrides, None).unwrap();
        assert_eq!(config.tls, TlsPolicy::AcceptAny);
        assert_eq!(config.polling, PollingConfig::default());
    }

    #[test]
    fn test_verify_tls_flag() {
        let overrides = Overrides {
            verify_tls: true,
            ..Default::default()
        };
        let mut profile = lab_profile();
        profile.insecure = Some(true);
        let config = resolve(&overrides, Some(profile)).unwrap();
        assert_eq!(config.tls, TlsPolicy::Verify);
    }

    #[test]
    fn test_zero_poll_interval_in_profile() {
        let mut profile = lab_profile();
        profile.poll_interval_secs = Some(0);
        let err = resolve(&Overrides::default(), Some(profile)).unwrap_err();
        assert!(err.to_string().contains("at least 1 second"));
    }

    #[test]
    fn test_missing_url() {
        let overrides = Overrides {
            username: Some("u".into()),
            password: Some("p".into()),
            ..Default::default()
        };
        let err = resolve(&overrides, None).unwrap_err();
        assert!(err.to_string().contains("SDDC_URL"));
    }

    #[test]
    fn test_load_profile_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sddc.json");
        std::fs::write(&path, r#"{"sddcManagerIP":"10.0.0.4"}"#).unwrap();

        let profile = load_profile(Some("ignored"), Some(&path)).unwrap().unwrap();
        assert_eq!(profile.url.as_deref(), Some("10.0.0.4"));
        assert!(load_profile(None, None).unwrap().is_none());
    }
}
