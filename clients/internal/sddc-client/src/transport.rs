// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP transport
//!
//! [`HttpTransport`] issues exactly one request per call: no retries and no
//! interpretation of the status code beyond logging it. Every request carries
//! the Basic `Authorization` header built from the configured credentials.
//!
//! When a response body mentions `errorCode`, the SDDC Manager error fields
//! are pulled out and logged so the operator sees the remediation hint even
//! when the caller only looks at the status code.

use std::fmt;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{Credentials, SddcConfig};
use crate::error::Result;

const USER_AGENT: &str = concat!("sddc-client/", env!("CARGO_PKG_VERSION"));
fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// A request relative to the SDDC Manager base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path starting with `/`, e.g. `/v1/tasks/{id}`
    pub path: String,
    /// Raw JSON body, sent as-is
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON document; also sets `Content-Type: application/json`
    pub fn json_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.headers.insert(CONTENT_TYPE, application_json());
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Mark a body-less request as JSON, as the status endpoints expect
    pub fn json_content_type(self) -> Self {
        self.header(CONTENT_TYPE, application_json())
    }
}

/// Status and raw body of a response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the body as an untyped JSON value
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body into a typed document
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Something that can execute an [`ApiRequest`]
///
/// [`HttpTransport`] is the real implementation; the seam exists so the
/// poller and the resource operations can be driven by scripted responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the underlying HTTP client from the configuration
    pub fn new(config: &SddcConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&basic_auth_value(&config.credentials))?,
        );
        headers.insert(ACCEPT, application_json());

        let client = sddc_tls::client_builder(config.tls, &config.host())
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        info!(method = %request.method, %url, status = status.as_u16(), "SDDC Manager request");

        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "response body received");

        if let Some(diagnostic) = error_diagnostic(&body) {
            warn!(
                error_code = diagnostic.error_code.as_deref().unwrap_or(""),
                remediation_message = diagnostic.remediation_message.as_deref().unwrap_or(""),
                "{diagnostic}"
            );
        }

        Ok(ApiResponse { status, body })
    }
}

/// `Basic base64(username:password)`
pub fn basic_auth_value(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(pair.as_bytes()))
}

/// SDDC Manager error fields found in a response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDiagnostic {
    pub error_code: Option<String>,
    pub remediation_message: Option<String>,
}

impl fmt::Display for ErrorDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if let Some(code) = &self.error_code {
            parts.push(format!("Error Code : {code}"));
        }
        if let Some(remediation) = &self.remediation_message {
            parts.push(format!("Remediation Message : {remediation}"));
        }
        f.write_str(&parts.join(" , "))
    }
}

/// Extract `errorCode`/`remediationMessage` from a body that mentions `errorCode`
///
/// Returns `None` when the body does not contain the substring, is not a JSON
/// object, or carries neither field at the top level.
pub fn error_diagnostic(body: &str) -> Option<ErrorDiagnostic> {
    if !body.contains("errorCode") {
        return None;
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "body mentions errorCode but is not JSON");
            return None;
        }
    };
    let object = value.as_object()?;

    let diagnostic = ErrorDiagnostic {
        error_code: object.get("errorCode").map(field_text),
        remediation_message: object.get("remediationMessage").map(field_text),
    };

    if diagnostic.error_code.is_none() && diagnostic.remediation_message.is_none() {
        return None;
    }
    Some(diagnostic)
}

fn field_text(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
