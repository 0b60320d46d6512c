//! JSON request wrapper over a [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure (non-2xx status, transport failure, undecodable body) is
//! reported to the diagnostic channel and then returned to the caller. This
//! layer never absorbs errors; callers decide whether to degrade.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde_json::Value;

use super::transport::{HttpRequest, Method, Transport, TransportError};
use crate::config::ApiConfig;
use crate::util::diagnostics::{ConsoleDiagnostics, Diagnostics};

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Per-call overrides for [`ApiClient::request`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Merged over the default `Content-Type: application/json`.
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    /// POST with a JSON body.
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Failure from a single API request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// Numeric status for [`RequestError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Merge caller headers over the JSON default. Names compare
/// case-insensitively; a matching caller header replaces the existing value
/// in place, new names are appended in caller order.
pub fn merge_headers(overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = vec![(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())];
    for (name, value) in overrides {
        match merged.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(slot) => slot.1.clone_from(value),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// REST client for the check backend.
pub struct ApiClient<T, D = ConsoleDiagnostics> {
    config: ApiConfig,
    transport: T,
    diagnostics: D,
}

impl<T: Transport> ApiClient<T, ConsoleDiagnostics> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            diagnostics: ConsoleDiagnostics,
        }
    }
}

impl<T: Transport, D: Diagnostics> ApiClient<T, D> {
    /// Swap the diagnostic sink.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> ApiClient<T, E> {
        ApiClient {
            config: self.config,
            transport: self.transport,
            diagnostics,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config
    }

    pub(crate) fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Issue one request to `{base_url}{endpoint}` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Status`] for non-2xx responses,
    /// [`RequestError::Transport`] when the exchange fails, and
    /// [`RequestError::Decode`] when the body is not valid JSON. The error is
    /// reported to the diagnostic channel before it is returned.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let result = self.exchange(endpoint, options).await;
        if let Err(error) = &result {
            self.diagnostics.warn("request", &format!("API request failed: {endpoint}: {error}"));
        }
        result
    }

    async fn exchange(&self, endpoint: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let body = options.body.as_ref().map(serde_json::to_string).transpose()?;
        let request = HttpRequest {
            method: options.method,
            url: self.config.endpoint_url(endpoint),
            headers: merge_headers(&options.headers),
            body,
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(RequestError::Status {
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
