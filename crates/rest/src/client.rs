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

//! A dispatcher wrapped with an idempotency-aware retry policy.

use std::{collections::HashMap, sync::Arc};

use kestrel_network::{
    http::HttpClient,
    retry::{RetryConfig, RetryManager},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::RestClientConfig,
    credential::Credential,
    dispatcher::HttpDispatcher,
    error::RestError,
    request::RequestSpec,
    response::ResponseValidator,
    signer::RequestSigner,
};

/// Sends requests through an [`HttpDispatcher`], retrying only failures that are safe to replay.
///
/// Each attempt is re-signed with a fresh nonce. Failures are retried according to
/// [`RestError::is_retryable`], so POST requests are never replayed.
#[derive(Debug)]
pub struct RestClient {
    dispatcher: HttpDispatcher,
    retry_manager: RetryManager<RestError>,
}

impl RestClient {
    /// Creates a new [`RestClient`].
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Configuration`] if the retry configuration is invalid.
    pub fn new(dispatcher: HttpDispatcher, retry_config: RetryConfig) -> Result<Self, RestError> {
        let retry_manager = RetryManager::new(retry_config).map_err(|e| {
            RestError::Configuration(format!("Failed to create retry manager: {e}"))
        })?;

        Ok(Self {
            dispatcher,
            retry_manager,
        })
    }

    /// Creates a new [`RestClient`] from `config`, using `default_base_url` unless overridden.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Configuration`] if the HTTP client or retry manager cannot be built.
    pub fn from_config(
        config: &RestClientConfig,
        default_base_url: &str,
        credential: Option<Credential>,
        signer: Arc<dyn RequestSigner>,
        validator: Arc<dyn ResponseValidator>,
    ) -> Result<Self, RestError> {
        let headers = HashMap::from([("user-agent".to_string(), config.user_agent.clone())]);
        let client = HttpClient::new(headers, Some(config.timeout_secs))
            .map_err(|e| RestError::Configuration(e.to_string()))?;

        let dispatcher = HttpDispatcher::new(
            config.base_url_or(default_base_url),
            client,
            credential,
            signer,
            validator,
        );

        Self::new(dispatcher, config.retry_config())
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &HttpDispatcher {
        &self.dispatcher
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    /// Returns true if a credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.dispatcher.has_credential()
    }

    /// Sends `spec` and returns the validated JSON body.
    ///
    /// # Errors
    ///
    /// Returns the final error once it is not retryable or retries are exhausted.
    pub async fn send(&self, spec: RequestSpec) -> Result<Value, RestError> {
        let method = spec.method.clone();
        let operation_name = format!("{} {}", spec.method, spec.path);
        let dispatcher = &self.dispatcher;
        let spec = &spec;

        self.retry_manager
            .execute_with_retry(
                &operation_name,
                || async move { dispatcher.dispatch(spec).await },
                |error: &RestError| error.is_retryable(&method),
                RestError::timeout,
            )
            .await
    }

    /// Sends `spec` and deserializes the validated JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::send`], or [`RestError::Serialization`] if the body does not
    /// match `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, RestError> {
        let value = self.send(spec).await?;
        Ok(serde_json::from_value(value)?)
    }
}
