// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration
//!
//! Everything an [`SddcClient`](crate::SddcClient) needs is carried in an
//! explicit [`SddcConfig`] value; nothing is read from global state.

use std::fmt;
use std::time::Duration;

use sddc_tls::TlsPolicy;
use url::Url;

use crate::error::{Result, SddcError};

/// Interval between two polls of a status endpoint
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Per-request HTTP timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const MINUTE: u64 = 60;

/// Username/password pair for HTTP Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Poll interval and deadlines for the long-running operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    pub interval: Duration,
    pub domain_validation_timeout: Duration,
    pub domain_creation_timeout: Duration,
    pub host_validation_timeout: Duration,
    pub host_commission_timeout: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            domain_validation_timeout: Duration::from_secs(20 * MINUTE),
            domain_creation_timeout: Duration::from_secs(180 * MINUTE),
            host_validation_timeout: Duration::from_secs(30 * MINUTE),
            host_commission_timeout: Duration::from_secs(60 * MINUTE),
        }
    }
}

impl PollingConfig {
    /// Same deadlines, different interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Use one deadline for every operation
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.domain_validation_timeout = timeout;
        self.domain_creation_timeout = timeout;
        self.host_validation_timeout = timeout;
        self.host_commission_timeout = timeout;
        self
    }
}

/// Connection settings for one SDDC Manager
#[derive(Debug, Clone)]
pub struct SddcConfig {
    /// Normalized base URL without a trailing slash
    pub base_url: String,
    pub credentials: Credentials,
    pub tls: TlsPolicy,
    pub request_timeout: Duration,
    pub polling: PollingConfig,
}

impl SddcConfig {
    /// Build a configuration with default TLS policy and timeouts
    ///
    /// `url_or_host` may be a full URL or a bare host/IP, in which case
    /// `https://` is assumed.
    pub fn new(url_or_host: &str, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(url_or_host)?,
            credentials,
            tls: TlsPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            polling: PollingConfig::default(),
        })
    }

    pub fn with_tls(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_polling(mut self, polling: PollingConfig) -> Self {
        self.polling = polling;
        self
    }

    /// Host part of the base URL, for log messages
    pub fn host(&self) -> String {
        Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.base_url.clone())
    }
}

/// Turn a host, IP or URL into a base URL usable for path concatenation
pub fn normalize_base_url(url_or_host: &str) -> Result<String> {
    let trimmed = url_or_host.trim();
    if trimmed.is_empty() {
        return Err(SddcError::Config("SDDC Manager address is empty".into()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| SddcError::InvalidUrl {
        url: candidate.clone(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SddcError::InvalidUrl {
            url: candidate,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(SddcError::InvalidUrl {
            url: candidate,
            reason: "missing host".into(),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
