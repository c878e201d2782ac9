// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A thin asynchronous HTTP transport over `reqwest`.
//!
//! [`HttpClient`] owns a pooled `reqwest::Client`, applies default headers and a default timeout
//! to every request, and returns the raw [`HttpResponse`] for any completed exchange regardless
//! of status. Interpreting status codes and bodies is left to the caller.

use std::{collections::HashMap, time::Duration};

use bytes::Bytes;
pub use reqwest::{Method, StatusCode};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// The default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised by the HTTP transport before a response is received.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpClientError {
    /// The connection failed or the exchange was interrupted.
    #[error("HTTP error: {0}")]
    Error(String),
    /// The request could not be built (invalid header, URL or client settings).
    #[error("HTTP request build error: {0}")]
    BuildError(String),
    /// The request did not complete within its timeout.
    #[error("HTTP request timed out: {0}")]
    TimeoutError(String),
}

impl HttpClientError {
    /// Returns true if this error is a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::TimeoutError(_))
    }

    /// Returns true if the request was rejected locally before anything was sent.
    #[must_use]
    pub const fn is_build_error(&self) -> bool {
        matches!(self, Self::BuildError(_))
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::TimeoutError(error.to_string())
        } else if error.is_builder() {
            Self::BuildError(error.to_string())
        } else {
            Self::Error(error.to_string())
        }
    }
}

/// The status, headers and body of a completed HTTP exchange.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers (lower-cased names).
    pub headers: HashMap<String, String>,
    /// The raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Returns true if the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A pooled HTTP client with default headers and timeout.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Creates a new [`HttpClient`].
    ///
    /// `header_map` is sent with every request; `timeout_secs` is the default timeout applied to
    /// requests that do not override it.
    ///
    /// # Errors
    ///
    /// Returns an error if a header is invalid or the underlying client cannot be built.
    pub fn new(
        header_map: HashMap<String, String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, HttpClientError> {
        let headers = to_header_map(&header_map)?;
        let default_timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(default_timeout)
            .build()
            .map_err(|e| {
                HttpClientError::BuildError(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            default_timeout,
        })
    }

    /// Returns the default timeout applied to requests.
    #[must_use]
    pub const fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Sends one HTTP request and returns the response for any completed exchange.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::TimeoutError`] if the request times out,
    /// [`HttpClientError::BuildError`] if the URL or headers are invalid, or
    /// [`HttpClientError::Error`] if the connection fails.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        headers: Option<HashMap<String, String>>,
        body: Option<Vec<u8>>,
        timeout_secs: Option<u64>,
    ) -> Result<HttpResponse, HttpClientError> {
        let timeout = timeout_secs.map_or(self.default_timeout, Duration::from_secs);
        let mut request = self.client.request(method, url).timeout(timeout);

        if let Some(headers) = headers {
            request = request.headers(to_header_map(&headers)?);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, HttpClientError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            HttpClientError::BuildError(format!("Invalid header name '{key}': {e}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            HttpClientError::BuildError(format!("Invalid header value for '{key}': {e}"))
        })?;
        header_map.insert(name, value);
    }
    Ok(header_map)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_to_header_map_valid() {
        let headers = HashMap::from([
            ("X-BAPI-API-KEY".to_string(), "key".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]);
        let map = to_header_map(&headers).unwrap();
        assert_eq!(map.get("x-bapi-api-key").unwrap(), "key");
        assert_eq!(map.get("content-type").unwrap(), "application/json");
    }

    #[rstest]
    fn test_to_header_map_rejects_invalid_name() {
        let headers = HashMap::from([("bad header".to_string(), "v".to_string())]);
        assert!(matches!(
            to_header_map(&headers),
            Err(HttpClientError::BuildError(_))
        ));
    }

    #[rstest]
    fn test_to_header_map_rejects_control_characters_in_value() {
        let headers = HashMap::from([("X-KEY".to_string(), "bad\nkey".to_string())]);
        let error = to_header_map(&headers).unwrap_err();
        assert!(error.is_build_error());
        assert!(!error.is_timeout());
    }

    #[rstest]
    #[tokio::test]
    async fn test_malformed_url_is_build_error() {
        let client = HttpClient::new(HashMap::new(), Some(1)).unwrap();
        let error = client
            .request(Method::GET, "not a url", None, None, None)
            .await
            .unwrap_err();
        assert!(error.is_build_error());
    }

    #[rstest]
    fn test_default_timeout() {
        let client = HttpClient::new(HashMap::new(), None).unwrap();
        assert_eq!(
            client.default_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[rstest]
    fn test_timeout_error_classification() {
        assert!(HttpClientError::TimeoutError("t".to_string()).is_timeout());
        assert!(!HttpClientError::Error("e".to_string()).is_timeout());
    }
}
