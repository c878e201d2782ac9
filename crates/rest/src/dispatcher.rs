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

//! Sends one signed HTTP request and classifies the outcome.
//!
//! [`HttpDispatcher`] never retries. [`HttpDispatcher::execute`] returns the response of any
//! completed exchange; [`HttpDispatcher::dispatch`] additionally escalates non-2xx statuses to
//! [`RestError::HttpStatus`] and failures embedded in a 2xx body to
//! [`RestError::ExchangeBusiness`].

use std::{collections::HashMap, sync::Arc};

use kestrel_core::time::AtomicNonce;
use kestrel_network::http::{HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    credential::Credential,
    error::RestError,
    request::{RequestSpec, SignedRequest},
    response::{ApiBody, ApiResponse, ResponseValidator},
    signer::RequestSigner,
};

/// Dispatches requests against one base URL with one credential.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    base_url: String,
    client: HttpClient,
    credential: Option<Credential>,
    signer: Arc<dyn RequestSigner>,
    validator: Arc<dyn ResponseValidator>,
    nonce: Arc<AtomicNonce>,
}

impl HttpDispatcher {
    /// Creates a new [`HttpDispatcher`] with its own nonce clock.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        client: HttpClient,
        credential: Option<Credential>,
        signer: Arc<dyn RequestSigner>,
        validator: Arc<dyn ResponseValidator>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            credential,
            signer,
            validator,
            nonce: Arc::new(AtomicNonce::new()),
        }
    }

    /// Returns this dispatcher sharing the given nonce clock.
    #[must_use]
    pub fn with_nonce(mut self, nonce: Arc<AtomicNonce>) -> Self {
        self.nonce = nonce;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the credential, if any.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Returns true if a credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Returns the nonce clock shared by signed requests.
    #[must_use]
    pub fn nonce(&self) -> Arc<AtomicNonce> {
        Arc::clone(&self.nonce)
    }

    /// Encodes `spec` and signs it when it requires authentication.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Configuration`] if authentication is required but no credential is
    /// configured, or any error raised while encoding or signing.
    pub fn sign(&self, spec: &RequestSpec) -> Result<SignedRequest, RestError> {
        let prepared = spec.prepare()?;

        if !spec.requires_auth {
            return Ok(SignedRequest::unsigned(prepared));
        }

        let credential = self.credential.as_ref().ok_or_else(|| {
            RestError::Configuration(format!(
                "missing credentials for authenticated request {} {}",
                spec.method, spec.path
            ))
        })?;

        self.signer.sign(credential, prepared, self.nonce.next())
    }

    /// Sends `spec` once and returns the response of any completed exchange, including non-2xx.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Transport`] if the request does not complete,
    /// [`RestError::Configuration`] if the URL or headers cannot be built, or any error raised
    /// while encoding or signing.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<ApiResponse, RestError> {
        let signed = self.sign(spec)?;
        let request = &signed.request;
        let url = format!("{}{}", self.base_url, request.path_with_query());

        let mut headers: HashMap<String, String> = signed.headers.clone();
        if request.body.is_some() {
            headers
                .entry("Content-Type".to_string())
                .or_insert_with(|| "application/json".to_string());
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            signed = signed.is_signed(),
            "Sending request"
        );

        let response = self
            .client
            .request(
                request.method.clone(),
                &url,
                Some(headers),
                request.body.clone().map(String::into_bytes),
                request.timeout_secs,
            )
            .await?;

        let status = response.status.as_u16();
        tracing::debug!(status, path = %request.path, "Received response");

        Ok(ApiResponse {
            status,
            reason: reason_phrase(response.status),
            headers: response.headers,
            body: ApiBody::parse(&response.body),
        })
    }

    /// Sends `spec` once and returns the JSON body of a successful response.
    ///
    /// An empty 2xx body is returned as `null`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`RestError::HttpStatus`] for a non-2xx status.
    /// - [`RestError::ExchangeBusiness`] when the validator detects a failure in a 2xx body.
    /// - [`RestError::Serialization`] when a 2xx body is not JSON.
    /// - Any error from [`Self::execute`].
    pub async fn dispatch(&self, spec: &RequestSpec) -> Result<Value, RestError> {
        let response = self.execute(spec).await?;

        if !response.is_success() {
            return Err(RestError::HttpStatus {
                status: response.status,
                reason: response.reason,
                body: response.body,
            });
        }

        let value = match response.body {
            ApiBody::Json(value) => value,
            ApiBody::Text(text) if text.trim().is_empty() => Value::Null,
            ApiBody::Text(text) => {
                return Err(RestError::Serialization(format!(
                    "expected JSON response body, received: {text}"
                )));
            }
        };

        if let Some(error) = self.validator.check(&value) {
            tracing::debug!(code = ?error.code, path = %spec.path, "Exchange rejected request");
            return Err(error.into());
        }

        Ok(value)
    }

    /// Sends `spec` once and deserializes the JSON body of a successful response into `T`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::dispatch`], or [`RestError::Serialization`] if the body does
    /// not match `T`.
    pub async fn dispatch_json<T: DeserializeOwned>(
        &self,
        spec: &RequestSpec,
    ) -> Result<T, RestError> {
        let value = self.dispatch(spec).await?;
        Ok(serde_json::from_value(value)?)
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}
