// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for the mock-server tests

#![allow(dead_code)]

use std::time::Duration;

use sddc_client::{Credentials, PollingConfig, SddcClient, SddcConfig};
use wiremock::MockServer;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";

/// `Basic base64("admin:secret")`
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Client pointed at the mock server with a short poll interval
pub fn client_for(server: &MockServer) -> SddcClient {
    client_with_polling(server, PollingConfig::default().with_interval(POLL_INTERVAL))
}

pub fn client_with_polling(server: &MockServer, polling: PollingConfig) -> SddcClient {
    let config = SddcConfig::new(&server.uri(), Credentials::new(USERNAME, PASSWORD))
        .unwrap()
        .with_polling(polling);
    SddcClient::new(&config).unwrap()
}
