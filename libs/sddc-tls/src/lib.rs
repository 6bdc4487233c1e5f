// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! TLS setup for SDDC Manager clients
//!
//! SDDC Manager appliances ship with self-signed certificates, and lab
//! deployments are usually addressed by IP, so certificate *and* hostname
//! verification routinely fail. [`TlsPolicy::AcceptAny`] turns both off.
//! It is the default because that is how these appliances are reached in
//! practice, but every client built with it logs a warning.
//!
//! The workspace builds reqwest with `rustls-no-provider`, so the ring
//! crypto provider has to be installed before the first client is built.
//! [`client_builder`] takes care of that.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server certificate policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TlsPolicy {
    /// Accept any server certificate and skip hostname verification.
    /// Only suitable for lab and demo deployments.
    #[default]
    AcceptAny,
    /// Verify the certificate chain and hostname against the trust roots.
    Verify,
}

impl TlsPolicy {
    /// Map an `insecure` profile flag onto a policy
    pub fn from_insecure(insecure: bool) -> Self {
        if insecure { Self::AcceptAny } else { Self::Verify }
    }

    pub fn is_insecure(self) -> bool {
        self == Self::AcceptAny
    }
}

/// Install the process-wide rustls crypto provider
///
/// Safe to call repeatedly; only the first call has an effect.
pub fn install_crypto_provider() {
    // Err means a provider is already installed.
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Start a reqwest client builder with the given TLS policy applied
///
/// `host` is only used for the warning emitted under
/// [`TlsPolicy::AcceptAny`].
pub fn client_builder(policy: TlsPolicy, host: &str) -> reqwest::ClientBuilder {
    install_crypto_provider();

    let builder = reqwest::Client::builder();
    match policy {
        TlsPolicy::Verify => builder,
        TlsPolicy::AcceptAny => {
            warn!(
                host,
                "TLS certificate and hostname verification are disabled; \
                 use this only against lab deployments"
            );
            // With rustls this verifier also ignores the server name.
            builder.danger_accept_invalid_certs(true)
        }
    }
}
